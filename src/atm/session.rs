use crate::clock::Clock;
use crate::input::{self, MenuChoice};
use crate::report;
use crate::{Account, AccountError, Money, Result};

use std::io::{BufRead, Write};

const INVALID_CREDENTIALS: &str = "Invalid user ID or PIN. Please try again.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 6.";
const INVALID_AMOUNT: &str = "Invalid amount. Please enter a non-negative number.";
const INSUFFICIENT_FUNDS: &str = "Insufficient funds.";
const GOODBYE: &str = "Thank you for using the ATM. Goodbye!";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user picked "Quit" from the menu
    Quit,
    /// Input ran out before the user quit
    EndOfInput,
}

enum Step {
    Continue,
    Finish(SessionOutcome),
}

/// Interactive ATM terminal: login prompt, then the menu loop, over any line reader/writer pair
pub struct Session<'a, R, W, C: Clock> {
    account: &'a mut Account<C>,
    input: R,
    output: W,
}

impl<'a, R, W, C> Session<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub fn new(account: &'a mut Account<C>, input: R, output: W) -> Self {
        return Self {
            account,
            input,
            output,
        };
    }

    pub fn run(mut self) -> Result<SessionOutcome> {
        log::info!("Session started");

        if !self.login()? {
            log::info!("Input closed before login");
            return Ok(SessionOutcome::EndOfInput);
        }

        let outcome = self.menu_loop()?;

        log::info!("Session finished: {outcome:?}");
        return Ok(outcome);
    }

    /// Re-prompts until the credentials match. `false` when input runs out first
    fn login(&mut self) -> Result<bool> {
        loop {
            let Some(user_id) = self.read_line("Enter user ID: ")? else {
                return Ok(false);
            };
            let Some(pin) = self.read_line("Enter PIN: ")? else {
                return Ok(false);
            };

            let credentials = input::parse_user_id(&user_id)
                .and_then(|user_id| Ok((user_id, input::parse_pin(&pin)?)));

            let authenticated = match credentials {
                Ok((user_id, pin)) => self.account.authenticate(&user_id, &pin).is_ok(),
                Err(e) => {
                    log::warn!("{e}");
                    false
                }
            };

            if authenticated {
                return Ok(true);
            }

            writeln!(self.output, "{INVALID_CREDENTIALS}")?;
        }
    }

    fn menu_loop(&mut self) -> Result<SessionOutcome> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line("Enter your choice: ")? else {
                return Ok(SessionOutcome::EndOfInput);
            };

            let choice = match input::parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    log::warn!("{e}");
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    continue;
                }
            };

            log::debug!("Menu choice: {choice:?}");

            let step = match choice {
                MenuChoice::History => self.show_history()?,
                MenuChoice::Withdraw => self.withdraw()?,
                MenuChoice::Deposit => self.deposit()?,
                MenuChoice::Transfer => self.transfer()?,
                MenuChoice::Balance => self.show_balance()?,
                MenuChoice::Quit => {
                    writeln!(self.output, "{GOODBYE}")?;
                    Step::Finish(SessionOutcome::Quit)
                }
            };

            if let Step::Finish(outcome) = step {
                return Ok(outcome);
            }
        }
    }

    fn print_menu(&mut self) -> Result {
        writeln!(self.output, "\nATM Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.title())?;
        }

        return Ok(());
    }

    fn show_history(&mut self) -> Result<Step> {
        let history = report::render_history(self.account.transactions())?;
        write!(self.output, "\n{history}")?;

        return Ok(Step::Continue);
    }

    fn show_balance(&mut self) -> Result<Step> {
        writeln!(self.output, "{}", report::render_balance(self.account.balance()))?;

        return Ok(Step::Continue);
    }

    fn withdraw(&mut self) -> Result<Step> {
        let Some(line) = self.read_line("Enter amount to withdraw: ")? else {
            return Ok(Step::Finish(SessionOutcome::EndOfInput));
        };
        let Some(amount) = self.amount_or_warn(&line)? else {
            return Ok(Step::Continue);
        };

        let result = self.account.withdraw(amount);
        self.report_debit(result, "Withdrawal successful.")?;

        return Ok(Step::Continue);
    }

    fn deposit(&mut self) -> Result<Step> {
        let Some(line) = self.read_line("Enter amount to deposit: ")? else {
            return Ok(Step::Finish(SessionOutcome::EndOfInput));
        };
        let Some(amount) = self.amount_or_warn(&line)? else {
            return Ok(Step::Continue);
        };

        self.account.deposit(amount);
        writeln!(self.output, "Deposit successful.")?;

        return Ok(Step::Continue);
    }

    fn transfer(&mut self) -> Result<Step> {
        let Some(recipient) = self.read_line("Enter recipient ID: ")? else {
            return Ok(Step::Finish(SessionOutcome::EndOfInput));
        };
        let recipient = match input::parse_user_id(&recipient) {
            Ok(recipient) => recipient,
            Err(e) => {
                log::warn!("{e}");
                writeln!(self.output, "Invalid recipient ID.")?;
                return Ok(Step::Continue);
            }
        };

        let Some(line) = self.read_line("Enter amount to transfer: ")? else {
            return Ok(Step::Finish(SessionOutcome::EndOfInput));
        };
        let Some(amount) = self.amount_or_warn(&line)? else {
            return Ok(Step::Continue);
        };

        let result = self.account.transfer(recipient, amount);
        self.report_debit(result, "Transfer successful.")?;

        return Ok(Step::Continue);
    }

    fn report_debit(&mut self, result: std::result::Result<(), AccountError>, success: &str) -> Result {
        match result {
            Ok(()) => writeln!(self.output, "{success}")?,
            Err(AccountError::InsufficientFunds { .. }) => {
                writeln!(self.output, "{INSUFFICIENT_FUNDS}")?
            }
            Err(e) => Err(e)?,
        }

        return Ok(());
    }

    /// `None` after telling the user the amount was not accepted
    fn amount_or_warn(&mut self, line: &str) -> Result<Option<Money>> {
        match input::parse_amount(line) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                log::warn!("{e}");
                writeln!(self.output, "{INVALID_AMOUNT}")?;
                Ok(None)
            }
        }
    }

    /// Prints the prompt and reads one line, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        return Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()));
    }
}
