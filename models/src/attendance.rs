use crate::DatabaseModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub roll_number: String,
    pub date: String,
    pub status: String,
}

impl AttendanceRecord {
    pub fn present(roll_number: String, date: String) -> Self {
        Self {
            roll_number,
            date,
            status: "Present".to_string(),
        }
    }

    // One record per student per day, so the key carries both.
    pub fn key_for(roll_number: &str, date: &str) -> String {
        format!("{}/{}", roll_number, date)
    }
}

impl DatabaseModel for AttendanceRecord {
    type ID = String;

    fn id(&self) -> Self::ID {
        Self::key_for(&self.roll_number, &self.date)
    }

    fn id_type_to_bytes(id: Self::ID) -> Vec<u8> {
        id.into_bytes()
    }

    fn tree() -> String {
        "attendance".to_string()
    }
}
