//! `gtdinbox` entry point.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and run one session on the
//!   standard streams.
//! - Exit with status 0 on quit or end of input.

mod terminal;

use gtdinbox_core::{core_version, init_logging, AppConfig, Session};
use log::info;
use terminal::StdTerminal;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        // The app works without logs; say so once and carry on.
        eprintln!("gtdinbox: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={} store_path={}",
        core_version(),
        config.store_path.display()
    );

    let mut session = Session::open(config.store_path, StdTerminal::new());
    session.run();
}
