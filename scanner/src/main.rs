mod args;
mod error;
mod relay;
mod widget;

use crate::args::Args;
use crate::relay::{DisplaySurface, ScanRelay};
use crate::widget::{DecodedScan, Scanner, ScannerConfig};
use env_logger::Env;
use log::info;
use reqwest::Url;
use std::str::FromStr;
use std::sync::Arc;
use structopt::StructOpt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

// Stand-in for the message element the scanner page overwrites per scan.
struct ConsoleDisplay;

impl DisplaySurface for ConsoleDisplay {
    fn set_text(&self, text: &str) {
        println!("{}", text);
    }
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Args = Args::from_args();

    let relay = Arc::new(ScanRelay::new(
        Url::from_str(args.server_addr.as_str()).unwrap(),
        Arc::new(ConsoleDisplay),
    ));

    let (decodes, decode_events) = mpsc::channel(16);
    let mut scanner = Scanner::new(ScannerConfig::default(), relay);
    scanner.start(decode_events);

    info!("Starting scanner, feed decoded badge text on stdin...");

    // Each stdin line stands in for one successful decode from the camera
    // widget.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.unwrap() {
        decodes.send(DecodedScan::new(&line)).await.unwrap();
    }

    drop(decodes);
    scanner.join().await;
}
