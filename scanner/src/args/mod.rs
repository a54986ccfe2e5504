use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "QR Scanner",
    about = "Relays QR badge decode events to the attendance server"
)]
pub struct Args {
    pub server_addr: String,
}
