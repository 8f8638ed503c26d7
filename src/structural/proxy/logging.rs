//! Logging proxy
//!
//! Records every call made to an account, then forwards it.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

const OVERDRAFT_LIMIT: i32 = -500;

pub trait Account: fmt::Display {
    fn deposit(&mut self, amount: i32);
    fn withdraw(&mut self, amount: i32) -> bool;
}

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
}

impl Account for BankAccount {
    fn deposit(&mut self, amount: i32) {
        self.balance += amount;
        tracing::debug!("Deposited ${amount}, balance is now {}", self.balance);
    }

    fn withdraw(&mut self, amount: i32) -> bool {
        if self.balance - amount < OVERDRAFT_LIMIT {
            return false;
        }
        self.balance -= amount;
        tracing::debug!("Withdrew ${amount}, balance is now {}", self.balance);
        true
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance: {}", self.balance)
    }
}

/// Wraps any account, recording each call before forwarding it.
pub struct Log<T> {
    subject: T,
    name: &'static str,
    calls: BTreeMap<&'static str, usize>,
    invocations: Vec<String>,
}

impl<T: Account> Log<T> {
    pub fn new(name: &'static str, subject: T) -> Self {
        Self {
            subject,
            name,
            calls: BTreeMap::new(),
            invocations: Vec::new(),
        }
    }

    fn record(&mut self, method: &'static str, args: &[String]) {
        let line = format!("Invoking {}.{} with arguments [{}]", self.name, method, args.join(", "));
        tracing::info!("{line}");
        self.invocations.push(line);
        *self.calls.entry(method).or_default() += 1;
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.get(method).copied().unwrap_or(0)
    }

    pub fn invocations(&self) -> &[String] {
        &self.invocations
    }

    /// One "`method` called `n` time(s)" line per method, sorted by name.
    pub fn info(&self) -> String {
        self.calls
            .iter()
            .map(|(method, n)| format!("{method} called {n} time(s)\n"))
            .collect()
    }

    pub fn into_inner(self) -> T {
        self.subject
    }
}

impl<T: Account> Account for Log<T> {
    fn deposit(&mut self, amount: i32) {
        self.record("deposit", &[amount.to_string()]);
        self.subject.deposit(amount);
    }

    fn withdraw(&mut self, amount: i32) -> bool {
        self.record("withdraw", &[amount.to_string()]);
        self.subject.withdraw(amount)
    }
}

impl<T: Account> fmt::Display for Log<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.info(), self.subject)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut account = Log::new("BankAccount", BankAccount::new());
    account.deposit(100);
    account.withdraw(50);

    for line in account.invocations() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{account}")?;
    Ok(())
}
