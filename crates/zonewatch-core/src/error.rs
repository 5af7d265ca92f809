use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateZone,
    InvalidInput,
    NotFound,
    Internal,
}

#[derive(Debug, Clone)]
pub struct ZonewatchError {
    pub code: ErrorCode,
    pub message: String,
}

impl ZonewatchError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ZonewatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ZonewatchError {}

pub type ZonewatchResult<T> = Result<T, ZonewatchError>;
