use std::io;

use anyhow::Result;
use gambit_shell::Session;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the shell's replies.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
