use crate::ids::{Pin, UserId};
use crate::Money;
use crate::Result;

use thiserror::Error;

/// One entry of the ATM menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    History,
    Withdraw,
    Deposit,
    Transfer,
    Balance,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        Self::History,
        Self::Withdraw,
        Self::Deposit,
        Self::Transfer,
        Self::Balance,
        Self::Quit,
    ];

    pub fn number(&self) -> u8 {
        return match self {
            Self::History => 1,
            Self::Withdraw => 2,
            Self::Deposit => 3,
            Self::Transfer => 4,
            Self::Balance => 5,
            Self::Quit => 6,
        };
    }

    pub fn title(&self) -> &'static str {
        return match self {
            Self::History => "View Transaction History",
            Self::Withdraw => "Withdraw",
            Self::Deposit => "Deposit",
            Self::Transfer => "Transfer",
            Self::Balance => "Account Balance",
            Self::Quit => "Quit",
        };
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputParseError {
    #[error("Error parsing input: empty user ID")]
    EmptyUserId,

    #[error("Error parsing input: negative amount values not supported: {0:?}")]
    NegativeAmount(String),

    #[error("Error parsing input: unknown menu choice: {0:?}")]
    UnknownChoice(String),
}

/// Amounts typed at the terminal must be well-formed and non-negative
pub fn parse_amount(line: &str) -> Result<Money> {
    let amount = Money::parse(line)?;

    if amount.is_negative() {
        Err(InputParseError::NegativeAmount(line.trim().to_string()))?;
    }

    Ok(amount)
}

pub fn parse_pin(line: &str) -> Result<Pin> {
    Ok(Pin::parse(line.trim())?)
}

pub fn parse_user_id(line: &str) -> Result<UserId> {
    let id = line.trim();

    if id.is_empty() {
        Err(InputParseError::EmptyUserId)?;
    }

    Ok(UserId::new(id))
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice> {
    let choice = line.trim();

    let choice = MenuChoice::ALL
        .into_iter()
        .find(|c| choice.parse::<u8>().ok() == Some(c.number()))
        .ok_or_else(|| InputParseError::UnknownChoice(choice.to_string()))?;

    Ok(choice)
}

#[cfg(test)]
mod tests {
    use crate::ids::PinError;
    use crate::money::MoneyError;

    use super::*;

    #[test]
    fn amount() {
        assert_eq!(parse_amount("500\n").unwrap(), Money::from_whole(500));
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Money(125_000));
        assert_eq!(parse_amount("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn amount_errors() {
        let err = parse_amount("-5").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputParseError>(),
            Some(&InputParseError::NegativeAmount("-5".to_string()))
        );

        let err = parse_amount("ten").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Parse(_, _))
        ));
    }

    #[test]
    fn pin() {
        assert_eq!(parse_pin("1234\n").unwrap(), Pin::new(1234).unwrap());

        let err = parse_pin("12").unwrap_err();
        assert_eq!(err.downcast_ref::<PinError>(), Some(&PinError::Width));
    }

    #[test]
    fn user_id() {
        assert_eq!(parse_user_id(" user123\n").unwrap(), UserId::from("user123"));

        let err = parse_user_id("  \n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputParseError>(),
            Some(&InputParseError::EmptyUserId)
        );
    }

    #[test]
    fn menu_choice() {
        let parsed: Vec<MenuChoice> = ["1", "2", "3", "4", "5", "6\n"]
            .into_iter()
            .map(|line| parse_menu_choice(line).unwrap())
            .collect();

        assert_eq!(parsed, MenuChoice::ALL.to_vec());

        for line in ["0", "7", "", "one", "-1", "1.0"] {
            let err = parse_menu_choice(line).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<InputParseError>(),
                Some(InputParseError::UnknownChoice(_))
            ));
        }
    }
}
