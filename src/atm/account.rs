use crate::clock::{Clock, SystemClock};
use crate::ids::{Pin, UserId};
use crate::{Ledger, Money, Transaction};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid user ID or PIN")]
    AuthenticationMismatch,

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
}

/// The single account an ATM session operates on. Owns the balance and the transaction log.
///
/// Authentication is advisory: the mutating operations do not check whether the caller
/// has ever called [`Account::validate_user`].
#[derive(Debug)]
pub struct Account<C: Clock = SystemClock> {
    owner_id: UserId,
    pin: Pin,
    balance: Money,
    ledger: Ledger,
    clock: C,
}

impl Account {
    pub fn new(owner_id: UserId, pin: Pin, opening_balance: Money) -> Self {
        return Self::with_clock(owner_id, pin, opening_balance, SystemClock);
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(owner_id: UserId, pin: Pin, opening_balance: Money, clock: C) -> Self {
        return Self {
            owner_id,
            pin,
            balance: opening_balance,
            ledger: Ledger::new(),
            clock,
        };
    }

    pub fn owner_id(&self) -> &UserId {
        return &self.owner_id;
    }

    pub fn validate_user(&self, user_id: &UserId, pin: &Pin) -> bool {
        return self.owner_id == *user_id && self.pin == *pin;
    }

    pub fn authenticate(&self, user_id: &UserId, pin: &Pin) -> Result<(), AccountError> {
        if !self.validate_user(user_id, pin) {
            log::warn!("Authentication failed for user: {user_id}");
            return Err(AccountError::AuthenticationMismatch);
        }

        log::debug!("Authenticated user: {user_id}");
        return Ok(());
    }

    /// Deposits never fail. The amount is not checked for sign.
    pub fn deposit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_add(amount);

        let idx = self.ledger.append(Transaction::deposit(amount, self.clock.now()));

        log::debug!("Deposited {amount}, balance {}, ledger index {idx}", self.balance);
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        self.check_funds(amount)?;

        self.balance = self.balance.saturating_sub(amount);

        let idx = self.ledger.append(Transaction::withdrawal(amount, self.clock.now()));

        log::debug!("Withdrew {amount}, balance {}, ledger index {idx}", self.balance);
        return Ok(());
    }

    /// Debits this account only. The recipient is recorded, never looked up or credited.
    pub fn transfer(&mut self, recipient: UserId, amount: Money) -> Result<(), AccountError> {
        self.check_funds(amount)?;

        self.balance = self.balance.saturating_sub(amount);

        log::debug!("Transferred {amount} to {recipient}, balance {}", self.balance);

        self.ledger
            .append(Transaction::transfer(recipient, amount, self.clock.now()));

        return Ok(());
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    /// Full log in creation order
    pub fn transactions(&self) -> &[Transaction] {
        return self.ledger.as_slice();
    }

    pub fn ledger(&self) -> &Ledger {
        return &self.ledger;
    }

    fn check_funds(&self, amount: Money) -> Result<(), AccountError> {
        if self.balance >= amount {
            return Ok(());
        }

        log::warn!("Insufficient funds: requested {amount}, available {}", self.balance);

        return Err(AccountError::InsufficientFunds {
            requested: amount,
            available: self.balance,
        });
    }
}
