use std::io;
use std::process::ExitCode;

use clap::Parser;
use conway::cli::{self, Cli};
use conway::engine::LifeConfig;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = LifeConfig {
        generations: cli.generations(),
        ..LifeConfig::default()
    };

    let stdout = io::stdout();
    let result = cli::run(&config, &mut stdout.lock());
    if let Err(e) = &result {
        log::error!("run aborted: {e}");
        eprintln!("conway: {e}");
    }
    ExitCode::from(cli::exit_status(&result))
}
