use crate::relay::ScanRelay;
use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Auxiliary decode result from the scanning widget. The relay never looks
/// inside it.
#[derive(Debug, Clone)]
pub struct DecodeDescriptor {
    pub format: String,
}

impl Default for DecodeDescriptor {
    fn default() -> Self {
        Self {
            format: "QR_CODE".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecodedScan {
    pub text: String,
    pub descriptor: DecodeDescriptor,
}

impl DecodedScan {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            descriptor: DecodeDescriptor::default(),
        }
    }
}

// Frame sampling rate and scan box size handed to the camera widget.
// Fixed for the life of the scanner, not runtime configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScannerConfig {
    pub fps: u32,
    pub qrbox: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { fps: 10, qrbox: 250 }
    }
}

/// Handle over the long-lived scanning session. The camera and decode
/// pipeline live on the other side of the decode channel.
pub struct Scanner {
    config: ScannerConfig,
    relay: Arc<ScanRelay>,
    pump: Option<JoinHandle<()>>,
}

impl Scanner {
    pub fn new(config: ScannerConfig, relay: Arc<ScanRelay>) -> Self {
        Self {
            config,
            relay,
            pump: None,
        }
    }

    // Drives the relay once per decode event until the sending side
    // closes. Relay failures surface on the display and do not stop the
    // pump. A scanner is started at most once per session.
    pub fn start(&mut self, mut decodes: mpsc::Receiver<DecodedScan>) {
        if self.pump.is_some() {
            return;
        }

        debug!(
            "scan pump running at {} fps over a {}px box",
            self.config.fps, self.config.qrbox
        );

        let relay = self.relay.clone();
        self.pump = Some(tokio::spawn(async move {
            while let Some(scan) = decodes.recv().await {
                debug!(
                    "decode event ({}, {} bytes)",
                    scan.descriptor.format,
                    scan.text.len()
                );
                let _ = relay.handle_decoded_scan(scan).await;
            }
        }));
    }

    /// Waits for the pump to drain after the decode channel closes.
    pub async fn join(&mut self) {
        if let Some(pump) = self.pump.take() {
            let _ = pump.await;
        }
    }

    /// Tears the session down immediately; in-flight work is dropped.
    pub fn stop(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::DisplaySurface;
    use models::requests::scan_attendance::{ScanAttendanceRequest, ScanAttendanceResponse};
    use reqwest::Url;
    use std::sync::Mutex;
    use std::time::Duration;
    use warp::Filter;

    struct RecordingDisplay {
        texts: Mutex<Vec<String>>,
    }

    impl RecordingDisplay {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                texts: Mutex::new(Vec::new()),
            })
        }

        fn len(&self) -> usize {
            self.texts.lock().unwrap().len()
        }
    }

    impl DisplaySurface for RecordingDisplay {
        fn set_text(&self, text: &str) {
            self.texts.lock().unwrap().push(text.to_string());
        }
    }

    fn echo_server() -> Url {
        let filter = warp::post()
            .and(warp::path("scan_attendance"))
            .and(warp::body::json())
            .map(|req: ScanAttendanceRequest| {
                warp::reply::json(&ScanAttendanceResponse {
                    message: format!("Attendance marked for {}", req.qr_data),
                })
            });

        let (addr, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    async fn wait_for_texts(display: &RecordingDisplay, count: usize) {
        for _ in 0..100 {
            if display.len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("display never reached {} update(s)", count);
    }

    #[tokio::test]
    async fn test_scanner_pumps_decode_events() {
        let display = RecordingDisplay::new();
        let relay = Arc::new(ScanRelay::new(echo_server(), display.clone()));

        let (decodes, decode_events) = mpsc::channel(16);
        let mut scanner = Scanner::new(ScannerConfig::default(), relay);
        scanner.start(decode_events);

        decodes.send(DecodedScan::new("41|Alice")).await.unwrap();
        decodes.send(DecodedScan::new("42|Bob")).await.unwrap();
        wait_for_texts(&display, 2).await;

        drop(decodes);
        scanner.join().await;

        assert_eq!(display.len(), 2);
    }

    #[tokio::test]
    async fn test_stop_tears_the_pump_down() {
        let display = RecordingDisplay::new();
        let relay = Arc::new(ScanRelay::new(echo_server(), display.clone()));

        let (decodes, decode_events) = mpsc::channel(16);
        let mut scanner = Scanner::new(ScannerConfig::default(), relay);
        scanner.start(decode_events);

        decodes.send(DecodedScan::new("41|Alice")).await.unwrap();
        wait_for_texts(&display, 1).await;

        scanner.stop();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let _ = decodes.send(DecodedScan::new("42|Bob")).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(display.len(), 1);
    }

    #[test]
    fn test_widget_configuration_defaults() {
        let config = ScannerConfig::default();

        assert_eq!(config.fps, 10);
        assert_eq!(config.qrbox, 250);
    }
}
