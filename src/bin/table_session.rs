use std::io;

use rs_blackjack::table::{ConsoleError, ConsoleSession};

fn main() -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    ConsoleSession::new(stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
