//! Command
//!
//! Bank account operations captured as objects so they can be replayed and
//! undone. Undo only reverses a command whose call actually succeeded.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

const OVERDRAFT_LIMIT: i32 = -500;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BankAccount {
    balance: i32,
}

impl BankAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i32) {
        self.balance += amount;
        tracing::debug!("Deposited ${amount}, balance is now {}", self.balance);
    }

    pub fn withdraw(&mut self, amount: i32) -> bool {
        if self.balance - amount >= OVERDRAFT_LIMIT {
            self.balance -= amount;
            tracing::debug!("Withdrew ${amount}, balance is now {}", self.balance);
            return true;
        }
        tracing::debug!("Refused withdrawal of ${amount}, balance stays {}", self.balance);
        false
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance: {}", self.balance)
    }
}

pub trait Command {
    fn call(&mut self, account: &mut BankAccount);
    fn undo(&mut self, account: &mut BankAccount);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccountCommand {
    action: Action,
    amount: i32,
    succeeded: bool,
}

impl BankAccountCommand {
    pub fn new(action: Action, amount: i32) -> Self {
        Self {
            action,
            amount,
            succeeded: false,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }
}

impl Command for BankAccountCommand {
    fn call(&mut self, account: &mut BankAccount) {
        self.succeeded = match self.action {
            Action::Deposit => {
                account.deposit(self.amount);
                true
            }
            Action::Withdraw => account.withdraw(self.amount),
        };
    }

    fn undo(&mut self, account: &mut BankAccount) {
        if !self.succeeded {
            return;
        }
        let reversed = match self.action {
            Action::Deposit => account.withdraw(self.amount),
            Action::Withdraw => {
                account.deposit(self.amount);
                true
            }
        };
        // A refused reversal leaves the command undoable later.
        if reversed {
            self.succeeded = false;
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut account = BankAccount::new();
    let mut commands = vec![
        BankAccountCommand::new(Action::Deposit, 100),
        BankAccountCommand::new(Action::Withdraw, 1000),
    ];
    writeln!(out, "{account}")?;

    for command in commands.iter_mut() {
        command.call(&mut account);
        let verdict = if command.succeeded() { "ok" } else { "refused" };
        writeln!(out, "{:?} {} -> {verdict}", command.action, command.amount)?;
    }
    writeln!(out, "{account}")?;

    for command in commands.iter_mut().rev() {
        command.undo(&mut account);
    }
    writeln!(out, "After undo: {account}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdraft_limit() {
        let mut account = BankAccount::new();
        assert!(account.withdraw(500));
        assert_eq!(account.balance(), -500);
        assert!(!account.withdraw(1));
        assert_eq!(account.balance(), -500);
    }

    #[test]
    fn test_failed_command_is_not_undone() {
        let mut account = BankAccount::new();
        let mut deposit = BankAccountCommand::new(Action::Deposit, 100);
        let mut withdraw = BankAccountCommand::new(Action::Withdraw, 1000);

        deposit.call(&mut account);
        withdraw.call(&mut account);
        assert!(deposit.succeeded());
        assert!(!withdraw.succeeded());
        assert_eq!(account.balance(), 100);

        withdraw.undo(&mut account);
        assert_eq!(account.balance(), 100);
        deposit.undo(&mut account);
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_refused_undo_can_be_retried() {
        let mut account = BankAccount::new();
        let mut deposit = BankAccountCommand::new(Action::Deposit, 100);
        deposit.call(&mut account);
        assert!(account.withdraw(600));
        assert_eq!(account.balance(), -500);

        deposit.undo(&mut account);
        assert_eq!(account.balance(), -500);
        assert!(deposit.succeeded());

        account.deposit(1000);
        deposit.undo(&mut account);
        assert_eq!(account.balance(), 400);
        assert!(!deposit.succeeded());
    }

    #[test]
    fn test_undo_withdraw_restores_balance() {
        let mut account = BankAccount::new();
        account.deposit(50);
        let mut cmd = BankAccountCommand::new(Action::Withdraw, 20);
        cmd.call(&mut account);
        assert_eq!(account.balance(), 30);
        cmd.undo(&mut account);
        assert_eq!(account.balance(), 50);
        // a second undo is a no-op
        cmd.undo(&mut account);
        assert_eq!(account.balance(), 50);
    }

    #[test]
    fn test_commands_as_trait_objects() {
        let mut account = BankAccount::new();
        let mut commands: Vec<Box<dyn Command>> = vec![
            Box::new(BankAccountCommand::new(Action::Deposit, 10)),
            Box::new(BankAccountCommand::new(Action::Deposit, 20)),
        ];
        for c in commands.iter_mut() {
            c.call(&mut account);
        }
        assert_eq!(account.balance(), 30);
        for c in commands.iter_mut().rev() {
            c.undo(&mut account);
        }
        assert_eq!(account.balance(), 0);
    }
}
