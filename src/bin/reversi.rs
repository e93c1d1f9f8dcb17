//! Plays Reversi over stdin/stdout using the line protocol in
//! [`reversi_engine::protocol`]. Logging goes to stderr; set `RUST_LOG=debug`
//! to see every move and flip.

use std::io;
use std::process::ExitCode;

use reversi_engine::protocol::Session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Session::new(stdin.lock(), stdout.lock()).run() {
        Ok(game) => {
            log::debug!("final position:\n{}", game);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
