/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ResponseFormat;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// No body
    Empty,
    /// JSON document
    Json(Value),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Bytes),
}

/// Successful response returned by the transport
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded body
    pub data: ResponseData,
}

impl ApiResponse {
    /// Decodes a raw body according to the requested format
    ///
    /// With [`ResponseFormat::Json`] an empty body becomes [`ResponseData::Empty`]
    /// and a body that is not valid JSON is kept as text.
    #[must_use]
    pub fn decode(
        status: StatusCode,
        headers: HeaderMap,
        raw: Bytes,
        format: ResponseFormat,
    ) -> Self {
        let data = match format {
            ResponseFormat::Bytes => ResponseData::Bytes(raw),
            ResponseFormat::Text => ResponseData::Text(String::from_utf8_lossy(&raw).into_owned()),
            ResponseFormat::Json => {
                if raw.iter().all(u8::is_ascii_whitespace) {
                    ResponseData::Empty
                } else {
                    match serde_json::from_slice::<Value>(&raw) {
                        Ok(value) => ResponseData::Json(value),
                        Err(_) => ResponseData::Text(String::from_utf8_lossy(&raw).into_owned()),
                    }
                }
            }
        };
        Self {
            status,
            headers,
            data,
        }
    }

    /// Deserializes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let value = match &self.data {
            ResponseData::Empty => serde_json::from_value(Value::Null)?,
            ResponseData::Json(value) => serde_json::from_value(value.clone())?,
            ResponseData::Text(text) => serde_json::from_str(text)?,
            ResponseData::Bytes(bytes) => serde_json::from_slice(bytes)?,
        };
        Ok(value)
    }

    /// Body as text, when it was decoded as text
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            ResponseData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Body as raw bytes, when it was kept as bytes
    #[must_use]
    pub fn bytes(&self) -> Option<&Bytes> {
        match &self.data {
            ResponseData::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Consumes the response and returns the decoded body
    #[must_use]
    pub fn into_data(self) -> ResponseData {
        self.data
    }
}
