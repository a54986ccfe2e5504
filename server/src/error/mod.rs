use config::ConfigError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    ConfigError(config::ConfigError),
    CsvError(csv::Error),
    IoError(std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        Self::ConfigError(e)
    }
}

impl From<csv::Error> for ApiError {
    fn from(e: csv::Error) -> Self {
        Self::CsvError(e)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ConfigError(e) => write!(f, "Config error: {}", e),
            ApiError::CsvError(e) => write!(f, "CSV error: {}", e),
            ApiError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl Error for ApiError {}

impl warp::reject::Reject for ApiError {}
