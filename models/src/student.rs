use crate::qr::QrPayload;
use crate::DatabaseModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub roll_number: String,
    pub name: String,
}

impl Student {
    pub fn new(roll_number: String, name: String) -> Self {
        Self { roll_number, name }
    }

    /// The payload printed on this student's badge.
    pub fn qr_payload(&self) -> QrPayload {
        QrPayload::new(self.roll_number.clone(), self.name.clone())
    }
}

impl DatabaseModel for Student {
    type ID = String;

    fn id(&self) -> Self::ID {
        self.roll_number.clone()
    }

    fn id_type_to_bytes(id: Self::ID) -> Vec<u8> {
        id.into_bytes()
    }

    fn tree() -> String {
        "students".to_string()
    }
}
