use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanAttendanceRequest {
    pub qr_data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanAttendanceResponse {
    pub message: String,
}
