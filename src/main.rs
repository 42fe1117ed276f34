use anyhow::Result;
use jobsite_filtergen::config::{cli, Config};
use jobsite_filtergen::logging::configure_logging;
use jobsite_filtergen::processor::Console;
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = Config::from_matches(&matches)?;
    configure_logging(config.log_level);
    debug!(?config, "starting");

    let stdin = io::stdin();
    let mut console = Console::new(config, stdin.lock(), io::stdout());
    console.run()
}
