//! Swap test launcher - interactive toolchain bootstrap and test menu

use std::path::PathBuf;

use clap::Parser;
use swaptest::cli::menu;
use swaptest::cli::prompt::Console;
use swaptest::common::config::Config;
use swaptest::common::logging;
use swaptest::setup::detector::Platform;
use swaptest::setup::installer::SystemInstaller;
use swaptest::setup::probe::PathProbe;
use swaptest::testing::CommandRunner;
use swaptest::{Launcher, Result};

#[derive(Parser)]
#[command(name = "swaptest", about = "Install the toolchain if needed and run swap tests")]
#[command(version, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the scenario table and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    if cli.list {
        for row in menu::scenario_table() {
            println!("{}", row);
        }
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(?config, "Loaded configuration");

    let platform = Platform::detect();
    let runner = CommandRunner::new(config.runner.clone());
    let launcher = Launcher {
        config: &config,
        probe: &PathProbe,
        installer: &SystemInstaller,
        runner: &runner,
    };

    let mut console = Console::new(
        tokio::io::BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    let outcome = launcher.run(&mut console, &platform).await?;
    tracing::debug!(?outcome, "Session finished");
    Ok(outcome.exit_code())
}
