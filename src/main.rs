use std::env;
use std::error::Error;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::Args;
use crate::input::session::Session;
use crate::input::source::spacenav::SpacenavSource;
use crate::input::target::uinput::{CapabilityDeclaration, UinputDevice};

mod cli;
mod config;
mod input;

#[tokio::main]
async fn main() -> ExitCode {
    let log_level = match env::var("LOG_LEVEL") {
        Ok(value) => value,
        Err(_) => "info".to_string(),
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version are success paths; anything else is usage.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    const VERSION: &str = env!("CARGO_PKG_VERSION");
    log::info!("Starting spacehid v{}", VERSION);

    match run(args).await {
        Ok(()) => {
            log::info!("spacehid stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let profile = args.profile.profile();
    log::info!("Using the \"{}\" device profile", args.profile);
    let declaration = CapabilityDeclaration::from_profile(profile);

    let socket_path = SpacenavSource::socket_path();
    let source = SpacenavSource::connect(&socket_path).await?;
    log::info!(
        "Connected to the space navigator daemon at {}",
        socket_path.display()
    );

    let target = UinputDevice::create(&declaration)?;

    Session::new(profile, source, target).run().await?;
    Ok(())
}
