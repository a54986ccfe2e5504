mod args;
mod attendance_server;
mod config;
mod database;
mod error;
mod report;

use crate::args::{Args, Mode};
use env_logger::Env;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Args = Args::from_args();

    match &args.mode {
        Mode::Serve(serve_args) => attendance_server::attendance_server(&args, serve_args)
            .await
            .unwrap(),
        Mode::Report(report_args) => report::export_report(report_args).unwrap(),
    }
}
