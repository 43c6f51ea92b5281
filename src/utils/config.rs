/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Reads `env_var` and parses it
///
/// Unset variables give `Ok(None)`; values that fail to parse give the raw
/// value back so callers can report it.
fn parse_env<T: FromStr>(env_var: &str) -> Result<Option<T>, String> {
    match env::var(env_var) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| raw),
        Err(_) => Ok(None),
    }
}

/// Value of an environment variable, or `default` when unset or unparsable
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match parse_env(env_var) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(raw) => {
            error!("Invalid value for {}: {}, using default", env_var, raw);
            default
        }
    }
}

/// Value of an environment variable, `None` when unset or unparsable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    parse_env(env_var).unwrap_or_else(|raw| {
        debug!("Ignoring invalid value for {}: {}", env_var, raw);
        None
    })
}

/// True when the environment variable is set to exactly `expected`
pub fn env_equals(env_var: &str, expected: &str) -> bool {
    env::var(env_var).is_ok_and(|val| val == expected)
}
