use crate::error::QrPayloadParseError;
use std::str::FromStr;

/// Text encoded into a student badge: `<roll>|<name>`. The name part may
/// itself contain `|`, so only the first separator is structural.
#[derive(Debug, Clone, PartialEq)]
pub struct QrPayload {
    pub roll_number: String,
    pub name: String,
}

impl QrPayload {
    pub fn new(roll_number: String, name: String) -> Self {
        Self { roll_number, name }
    }

    pub fn encode(&self) -> String {
        format!("{}|{}", self.roll_number, self.name)
    }
}

impl FromStr for QrPayload {
    type Err = QrPayloadParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let separator = match text.find('|') {
            Some(ndx) => ndx,
            None => return Err(QrPayloadParseError::MissingSeparator),
        };

        let roll_number = &text[..separator];
        let name = &text[separator + 1..];

        if roll_number.is_empty() {
            return Err(QrPayloadParseError::EmptyRollNumber);
        }

        Ok(Self::new(roll_number.to_string(), name.to_string()))
    }
}
