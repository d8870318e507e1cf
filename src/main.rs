use std::env;
use std::io;
use std::process::ExitCode;

use log::LevelFilter;

use checkers_engine::console::{Console, ConsoleOptions, LOG_ENV};

fn main() -> ExitCode {
    let options = match ConsoleOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: checkers [--transpose] [--quiet] [--log <level>]");
            return ExitCode::from(2);
        }
    };

    // `--log` replaces the default level from CHECKERS_LOG; per-module
    // directives from the environment still apply.
    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_env(LOG_ENV);
    if let Some(level) = options.log_level {
        logger.filter_level(level);
    }
    logger.format_timestamp(None);
    if let Err(e) = logger.try_init() {
        eprintln!("logger unavailable: {e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(options);
    match console.run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("i/o error: {e}");
            ExitCode::FAILURE
        }
    }
}
