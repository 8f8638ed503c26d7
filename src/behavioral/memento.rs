//! Memento
//!
//! A bank account that snapshots its balance after every change, giving
//! undo and redo by moving a cursor through the list of snapshots.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memento {
    balance: i32,
}

impl Memento {
    pub fn balance(&self) -> i32 {
        self.balance
    }
}

#[derive(Debug, Clone)]
pub struct BankAccount {
    balance: i32,
    changes: Vec<Memento>,
    current: usize,
}

impl BankAccount {
    /// The opening balance is the first snapshot, so undo never goes past it.
    pub fn new(balance: i32) -> Self {
        Self {
            balance,
            changes: vec![Memento { balance }],
            current: 0,
        }
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    /// Depositing after an undo discards the redo branch.
    pub fn deposit(&mut self, amount: i32) -> Memento {
        self.balance += amount;
        self.record(Memento {
            balance: self.balance,
        })
    }

    /// Restoring is itself a change and lands on the history.
    pub fn restore(&mut self, memento: Option<Memento>) {
        if let Some(m) = memento {
            self.balance = m.balance;
            self.record(m);
        }
    }

    pub fn undo(&mut self) -> Option<Memento> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        let m = self.changes[self.current];
        self.balance = m.balance;
        tracing::debug!("Undo to snapshot {} (balance {})", self.current, m.balance);
        Some(m)
    }

    pub fn redo(&mut self) -> Option<Memento> {
        if self.current + 1 >= self.changes.len() {
            return None;
        }
        self.current += 1;
        let m = self.changes[self.current];
        self.balance = m.balance;
        tracing::debug!("Redo to snapshot {} (balance {})", self.current, m.balance);
        Some(m)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.changes.len()
    }

    fn record(&mut self, memento: Memento) -> Memento {
        self.changes.truncate(self.current + 1);
        self.changes.push(memento);
        self.current = self.changes.len() - 1;
        memento
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance: {}", self.balance)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut ba = BankAccount::new(100);
    let m1 = ba.deposit(50);
    ba.deposit(25);
    writeln!(out, "{ba}")?;

    ba.undo();
    writeln!(out, "Undo 1: {ba}")?;
    ba.undo();
    writeln!(out, "Undo 2: {ba}")?;
    ba.redo();
    writeln!(out, "Redo 2: {ba}")?;

    ba.deposit(1000);
    ba.restore(Some(m1));
    writeln!(out, "Restored first deposit: {ba}")?;
    ba.undo();
    writeln!(out, "Undo restore: {ba}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_after_two_deposits() {
        let mut ba = BankAccount::new(100);
        ba.deposit(50);
        ba.deposit(25);
        assert_eq!(ba.balance(), 175);

        assert_eq!(ba.undo().map(|m| m.balance()), Some(150));
        assert_eq!(ba.balance(), 150);
        assert_eq!(ba.undo().map(|m| m.balance()), Some(100));
        assert_eq!(ba.undo(), None);
        assert_eq!(ba.balance(), 100);
    }

    #[test]
    fn test_redo_walks_forward_and_stops() {
        let mut ba = BankAccount::new(100);
        ba.deposit(50);
        ba.deposit(25);
        ba.undo();
        ba.undo();

        assert_eq!(ba.redo().map(|m| m.balance()), Some(150));
        assert_eq!(ba.redo().map(|m| m.balance()), Some(175));
        assert_eq!(ba.redo(), None);
        assert_eq!(ba.balance(), 175);
    }

    #[test]
    fn test_deposit_after_undo_drops_redo_branch() {
        let mut ba = BankAccount::new(0);
        ba.deposit(10);
        ba.deposit(20);
        ba.undo();
        assert!(ba.can_redo());

        ba.deposit(5);
        assert_eq!(ba.balance(), 15);
        assert!(!ba.can_redo());
        assert_eq!(ba.undo().map(|m| m.balance()), Some(10));
        assert_eq!(ba.undo().map(|m| m.balance()), Some(0));
    }

    #[test]
    fn test_restore_is_undoable() {
        let mut ba = BankAccount::new(100);
        let m = ba.deposit(50);
        ba.deposit(25);
        ba.restore(Some(m));
        assert_eq!(ba.balance(), 150);
        ba.undo();
        assert_eq!(ba.balance(), 175);
    }

    #[test]
    fn test_restore_none_is_ignored() {
        let mut ba = BankAccount::new(7);
        ba.restore(None);
        assert_eq!(ba.balance(), 7);
        assert!(!ba.can_undo());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("balance: 175\nUndo 1: balance: 150\nUndo 2: balance: 100\nRedo 2: balance: 150\n"));
    }
}
