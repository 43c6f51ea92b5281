use crate::constants::REQUEST_ID_LENGTH;

/// Generates a short identifier used to correlate a request with its log lines.
///
/// The id is composed of uppercase letters (`A-Z`) and digits (`0-9`) and is
/// produced by the `nanoid` crate.
///
/// # Examples
/// ```
/// use api_base::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 8);
/// ```
#[must_use]
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
