use crate::error::RelayError;
use crate::widget::DecodedScan;
use log::warn;
use models::requests::scan_attendance::{ScanAttendanceRequest, ScanAttendanceResponse};
use reqwest::Url;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The single mutable text region showing the latest relay outcome.
pub trait DisplaySurface: Send + Sync {
    fn set_text(&self, text: &str);
}

#[derive(Debug)]
pub enum RelayOutcome {
    Delivered { message: String },
    Failed { error: RelayError },
}

pub struct ScanRelay {
    client: reqwest::Client,
    endpoint: Url,
    display: Arc<dyn DisplaySurface>,
    last_issued: AtomicU64,
}

impl ScanRelay {
    pub fn new(server_addr: Url, display: Arc<dyn DisplaySurface>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: server_addr.join("scan_attendance").unwrap(),
            display,
            last_issued: AtomicU64::new(0),
        }
    }

    // Decoded text is forwarded as-is, empty or not; the server decides
    // validity. Repeated decodes of a code held in frame each get their
    // own request.
    pub async fn handle_decoded_scan(&self, scan: DecodedScan) -> RelayOutcome {
        let seq = self.last_issued.fetch_add(1, Ordering::SeqCst) + 1;
        let req = ScanAttendanceRequest { qr_data: scan.text };

        let outcome = match self.send(&req).await {
            Ok(res) => RelayOutcome::Delivered {
                message: res.message,
            },
            Err(error) => {
                warn!("scan relay failed: {}", error);
                RelayOutcome::Failed { error }
            }
        };

        // A completion may only touch the display while it is still the
        // newest scan issued; stale responses are dropped here rather
        // than aborted in flight.
        if seq == self.last_issued.load(Ordering::SeqCst) {
            match &outcome {
                RelayOutcome::Delivered { message } => self.display.set_text(message),
                RelayOutcome::Failed { error } => self.display.set_text(error.fallback_text()),
            }
        }

        outcome
    }

    async fn send(&self, req: &ScanAttendanceRequest) -> Result<ScanAttendanceResponse, RelayError> {
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(req)
            .send()
            .await
            .map_err(RelayError::NetworkFailure)?;

        res.json::<ScanAttendanceResponse>()
            .await
            .map_err(RelayError::MalformedResponse)
    }
}
