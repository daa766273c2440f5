use crate::{Money, Result, Transaction};

use csv::{Writer, WriterBuilder};
use serde::Serialize;

pub const HISTORY_TITLE: &str = "Transaction History:";
pub const SEPARATOR: &str = "-------------------------------";

const HISTORY_HEADER: [&str; 4] = ["Type", "Amount", "Timestamp", "Recipient"];

/// One line of the transaction history table
#[derive(Serialize, Debug, PartialEq)]
pub struct HistoryRow {
    pub kind: &'static str,
    pub amount: String,
    pub timestamp: String,
    pub recipient: String,
}

impl From<&Transaction> for HistoryRow {
    fn from(tx: &Transaction) -> Self {
        return Self {
            kind: tx.label(),
            amount: tx.amount().to_string(),
            timestamp: tx.formatted_timestamp(),
            recipient: tx
                .recipient()
                .map(ToString::to_string)
                .unwrap_or_default(),
        };
    }
}

pub fn build_history_writer() -> Writer<Vec<u8>> {
    return WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Tab separated table of the given transactions, oldest first
pub fn render_history(transactions: &[Transaction]) -> Result<String> {
    let mut wtr = build_history_writer();

    wtr.write_record(HISTORY_HEADER)?;
    for tx in transactions {
        wtr.serialize(HistoryRow::from(tx))?;
    }

    let table = write_to_string(wtr)?;

    return Ok(format!("{HISTORY_TITLE}\n{SEPARATOR}\n{table}{SEPARATOR}\n"));
}

pub fn render_balance(balance: Money) -> String {
    return format!("Account Balance: {balance}");
}

#[cfg(test)]
mod tests {
    use crate::ids::UserId;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn build_timestamp(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(14, minute, 30)
            .unwrap()
    }

    #[test]
    fn history_row() {
        let tx = Transaction::transfer(UserId::from("user456"), Money(105_000), build_timestamp(1));

        assert_eq!(
            HistoryRow::from(&tx),
            HistoryRow {
                kind: "Transfer",
                amount: "10.50".to_string(),
                timestamp: "17/05/2024 14:01:30".to_string(),
                recipient: "user456".to_string(),
            }
        );
    }

    #[test]
    fn empty_history() {
        assert_eq!(
            render_history(&[]).unwrap(),
            "Transaction History:\n\
             -------------------------------\n\
             Type\tAmount\tTimestamp\tRecipient\n\
             -------------------------------\n"
        );
    }

    #[test]
    fn history() {
        let transactions = vec![
            Transaction::deposit(Money::from_whole(500), build_timestamp(0)),
            Transaction::withdrawal(Money(2_500), build_timestamp(1)),
            Transaction::transfer(UserId::from("user456"), Money::from_whole(10), build_timestamp(2)),
        ];

        assert_eq!(
            render_history(&transactions).unwrap(),
            "Transaction History:\n\
             -------------------------------\n\
             Type\tAmount\tTimestamp\tRecipient\n\
             Deposit\t500.00\t17/05/2024 14:00:30\t\n\
             Withdrawal\t0.25\t17/05/2024 14:01:30\t\n\
             Transfer\t10.00\t17/05/2024 14:02:30\tuser456\n\
             -------------------------------\n"
        );
    }

    #[test]
    fn balance() {
        assert_eq!(render_balance(Money::from_whole(1500)), "Account Balance: 1500.00");
    }
}
