// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record encodings.

use crate::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How records are serialized inside a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Json,
    /// Compact binary encoding (bincode).
    #[default]
    Binary,
}

impl Encoding {
    /// `key` is only used to label errors.
    pub fn encode<T: Serialize>(self, key: &str, value: &T) -> Result<Vec<u8>, StoreError> {
        let res = match self {
            Encoding::Json => serde_json::to_vec(value).map_err(|e| e.to_string()),
            Encoding::Binary => bincode::serialize(value).map_err(|e| e.to_string()),
        };
        res.map_err(|reason| StoreError::Encode {
            key: key.to_string(),
            reason,
        })
    }

    pub fn decode<T: DeserializeOwned>(self, key: &str, bytes: &[u8]) -> Result<T, StoreError> {
        let res = match self {
            Encoding::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
            Encoding::Binary => bincode::deserialize(bytes).map_err(|e| e.to_string()),
        };
        res.map_err(|reason| StoreError::Decode {
            key: key.to_string(),
            reason,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Binary => "binary",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" | "*json" => Ok(Encoding::Json),
            "binary" | "*binary" => Ok(Encoding::Binary),
            other => Err(format!("unsupported encoding <{other}>")),
        }
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
