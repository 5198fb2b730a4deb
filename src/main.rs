mod commands;
mod error;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;

#[derive(Parser)]
#[command(name = "opsdev")]
#[command(about = "Interactively install a DevOps toolbox", long_about = None)]
#[command(version)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, env = "OPSDEV_DEBUG")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    if let Err(err) = commands::setup::run() {
        println!("Error during setup: {err:#}");
        std::process::exit(1);
    }
}
