//! Response envelope for the File-Engine remote service.
//!
//! Every JSON endpoint wraps its payload as `{code, message, data}`.
//! A missing `code` or the success sentinel means logical success; any
//! other value is a failure even when the HTTP status is 200.

use crate::{ClientError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Envelope code denoting logical success.
pub const SUCCESS_CODE: i64 = 20000;

/// The `{code, message, data}` wrapper around every JSON payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Status code; absent on some success responses.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable status, e.g. `"success"` or `"error: <msg>"`.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload; shape depends on the endpoint.
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Whether the envelope denotes logical success.
    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(SUCCESS_CODE))
    }

    /// Normalize into the inner payload.
    ///
    /// On success the envelope is stripped and only `data` is returned.
    /// On failure the full envelope is preserved in the error.
    pub fn into_result(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::Api {
                code: self.code.unwrap_or_default(),
                message: self.message,
                data: self.data,
            })
        }
    }
}
