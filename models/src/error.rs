use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum QrPayloadParseError {
    MissingSeparator,
    EmptyRollNumber,
}

impl Error for QrPayloadParseError {}

impl Display for QrPayloadParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QrPayloadParseError::MissingSeparator => {
                write!(f, "Badge payload has no '|' separator")
            }
            QrPayloadParseError::EmptyRollNumber => {
                write!(f, "Badge payload has an empty roll number")
            }
        }
    }
}
