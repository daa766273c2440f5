use crate::Transaction;

use std::slice;

/// Represents a WORM (Write Once, Read Many) data structure for keeping track of transactions,
/// in the order they happened
#[derive(Debug, Default)]
pub struct Ledger {
    history: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, tx: Transaction) -> usize {
        let index = self.history.len();

        self.history.push(tx);

        index
    }

    pub fn get_by_index(&self, index: &usize) -> Option<&Transaction> {
        self.history.get(*index)
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.history.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Transaction> {
        self.history.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
