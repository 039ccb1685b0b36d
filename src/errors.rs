//! Unified application error type.
//! Every module (store, codec, export, cli) returns AppError so failures are
//! reported the same way and control always returns to the caller.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("No records found: {0}")]
    NotFound(String),

    #[error("Record {position} not found ({available} records available)")]
    PositionNotFound { position: usize, available: usize },

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Unrecognised record line: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Accounts
    // ---------------------------
    #[error("Authentication failed: {0}")]
    Auth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
