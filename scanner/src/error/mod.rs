use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum RelayError {
    NetworkFailure(reqwest::Error),
    MalformedResponse(reqwest::Error),
}

impl RelayError {
    // Shown on the display surface in place of a server message.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            RelayError::NetworkFailure(_) => "Could not reach the attendance server",
            RelayError::MalformedResponse(_) => "Attendance server sent an unreadable reply",
        }
    }
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::NetworkFailure(e) => write!(f, "Network failure: {}", e),
            RelayError::MalformedResponse(e) => write!(f, "Malformed response: {}", e),
        }
    }
}

impl Error for RelayError {}
