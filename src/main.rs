mod config;

use atm::ids::{Pin, UserId};
use atm::{Account, Money, Result, Session, SessionOutcome};

use std::io;

const USER_ID: &str = "user123";
const PIN: u16 = 1234;
const OPENING_BALANCE: Money = Money::from_whole(1000);

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Opening account...");

    let mut account = Account::new(UserId::from(USER_ID), Pin::new(PIN)?, OPENING_BALANCE);

    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = Session::new(&mut account, stdin.lock(), stdout.lock()).run()?;

    match outcome {
        SessionOutcome::Quit => log::debug!("Application finished successfully!"),
        SessionOutcome::EndOfInput => log::debug!("Input closed, shutting down"),
    }

    Ok(())
}
