// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the migrator

use ocs_core::{FilterError, RsrError, UnsupportedMetric};
use ocs_storage::StoreError;
use thiserror::Error;

/// Errors that can occur while migrating
#[derive(Debug, Error)]
pub enum MigratorError {
    /// End of a legacy cursor. Not a failure.
    #[error("no more data")]
    NoMoreData,
    #[error("not implemented")]
    NotImplemented,
    #[error("undefined versions")]
    UndefinedVersion,
    #[error("unsupported version {version} for <{key}>")]
    UnsupportedVersion { key: String, version: i64 },
    #[error("unsupported migration task <{0}>")]
    UnsupportedTask(String),
    #[error("unsupported database <{0}>")]
    UnsupportedDb(String),
    #[error("invalid key <{0}>")]
    InvalidKey(String),
    #[error("invalid record <{key}>: {reason}")]
    InvalidRecord { key: String, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Rsr(#[from] RsrError),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Metric(#[from] UnsupportedMetric),
}

impl MigratorError {
    pub fn is_no_more_data(&self) -> bool {
        matches!(self, MigratorError::NoMoreData)
    }
}

/// Turn the end-of-data sentinel into `None`.
pub trait OrNoMoreData<T> {
    fn or_no_more_data(self) -> Result<Option<T>, MigratorError>;
}

impl<T> OrNoMoreData<T> for Result<T, MigratorError> {
    fn or_no_more_data(self) -> Result<Option<T>, MigratorError> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(MigratorError::NoMoreData) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
