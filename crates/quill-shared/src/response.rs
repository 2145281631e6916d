//! The API response envelope. Every response, success or failure, uses this
//! shape so clients parse exactly one structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope status discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform response wrapper:
/// `{status, message, data, timestamp, statusCode}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseWrapper<T> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
    pub status_code: u16,
}

impl<T> ResponseWrapper<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            timestamp: Utc::now(),
            status_code: 200,
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 201,
            ..Self::success(message, data)
        }
    }

    pub fn error(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
            status_code,
        }
    }
}
