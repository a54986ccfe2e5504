use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "QR Attendance",
    about = "Attendance recording service fed by QR badge scans"
)]
pub struct Args {
    #[structopt(subcommand)]
    pub mode: Mode,
    pub address: String,
    pub port: u16,
}

#[derive(Debug, StructOpt)]
pub enum Mode {
    Serve(ServeArgs),
    Report(ReportArgs),
}

#[derive(Debug, StructOpt)]
pub struct ServeArgs {
    #[structopt(
        short = "d",
        long = "database",
        default_value = "db",
        parse(from_os_str)
    )]
    pub database_path: PathBuf,
    #[structopt(short = "r", long = "roster", parse(from_os_str))]
    pub roster_path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct ReportArgs {
    #[structopt(
        short = "d",
        long = "database",
        default_value = "db",
        parse(from_os_str)
    )]
    pub database_path: PathBuf,
    #[structopt(
        short = "o",
        long = "output",
        default_value = "attendance_report.csv",
        parse(from_os_str)
    )]
    pub output_path: PathBuf,
}
