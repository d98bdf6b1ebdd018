// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::DbKind;
use thiserror::Error;

/// Errors raised by storage drivers and the data manager.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode <{key}>: {reason}")]
    Encode { key: String, reason: String },
    #[error("cannot decode <{key}>: {reason}")]
    Decode { key: String, reason: String },
    #[error("corrupt store file {path}: {reason}")]
    Corrupt { path: String, reason: String },
    #[error("invalid key <{0}>")]
    InvalidKey(String),
    #[error("broken reference to filter <{filter}> for item <{item}>")]
    BrokenReference { filter: String, item: String },
    #[error("store is closed")]
    Closed,
    #[error("{0} store requires a path")]
    MissingPath(DbKind),
}
