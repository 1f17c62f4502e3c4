use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KvKey(String);

impl KvKey {
    pub fn theme() -> Self {
        Self(THEME_KEY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum KvError {
    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("value for '{key}' is not valid UTF-8")]
    InvalidUtf8 { key: String },
}

pub type KvResult<T> = Result<T, KvError>;

/// Decodes a `crux_kv` read of a string value. A missing key is `Ok(None)`.
pub fn read_string<E: Display>(
    key: &KvKey,
    result: Result<Option<Vec<u8>>, E>,
) -> KvResult<Option<String>> {
    match result {
        Ok(Some(bytes)) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| KvError::InvalidUtf8 {
                key: key.as_str().to_string(),
            }),
        Ok(None) => Ok(None),
        Err(e) => Err(KvError::Storage {
            message: e.to_string(),
        }),
    }
}

/// Reduces a `crux_kv` write acknowledgement to success or a storage error.
pub fn write_ack<T, E: Display>(result: Result<T, E>) -> KvResult<()> {
    result.map(|_| ()).map_err(|e| KvError::Storage {
        message: e.to_string(),
    })
}
