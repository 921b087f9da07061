use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize)]
pub enum SleuthError {
    #[error("{0}")]
    Usage(String),
    #[error("Failed to read AD password: {0}")]
    Password(String),
    #[error("Failed to connect to Active Directory: {0}")]
    Connection(String),
    #[error("Failed to read Excel file: {0}")]
    FileRead(String),
    #[error("Search for {first_name} {last_name} failed: {reason}")]
    Query {
        first_name: String,
        last_name: String,
        reason: String,
    },
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl SleuthError {
    /// The process exit status for this failure. Search failures are kept
    /// apart from the failures that are reported and handled up front.
    pub fn exit_code(&self) -> i32 {
        match self {
            SleuthError::Query { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for SleuthError {
    fn from(e: std::io::Error) -> Self {
        SleuthError::Output(e.to_string())
    }
}
