use crate::clock::format_timestamp;
use crate::ids::UserId;
use crate::Money;

use chrono::NaiveDateTime;

/// Transaction is an immutable record of one change to the account balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer { recipient: UserId },
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        return match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Transfer { .. } => "Transfer",
        };
    }
}

impl Transaction {
    /// The amount is recorded as given; callers decide whether it was allowed
    pub fn new(kind: TransactionKind, amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self {
            kind,
            amount,
            timestamp,
        };
    }

    pub fn deposit(amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self::new(TransactionKind::Deposit, amount, timestamp);
    }

    pub fn withdrawal(amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self::new(TransactionKind::Withdrawal, amount, timestamp);
    }

    pub fn transfer(recipient: UserId, amount: Money, timestamp: NaiveDateTime) -> Self {
        return Self::new(TransactionKind::Transfer { recipient }, amount, timestamp);
    }

    pub fn kind(&self) -> &TransactionKind {
        return &self.kind;
    }

    pub fn label(&self) -> &'static str {
        return self.kind.label();
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        return self.timestamp;
    }

    pub fn formatted_timestamp(&self) -> String {
        return format_timestamp(&self.timestamp);
    }

    /// Only transfers have a recipient
    pub fn recipient(&self) -> Option<&UserId> {
        return match &self.kind {
            TransactionKind::Transfer { recipient } => Some(recipient),
            TransactionKind::Deposit | TransactionKind::Withdrawal => None,
        };
    }
}
