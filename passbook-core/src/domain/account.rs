//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::format_usd;
use super::result::{Error, Result};

/// A single bank account holding a non-negative balance
///
/// The balance field is private: every mutation goes through `deposit` or
/// `withdraw`, and both validate before touching the balance, so a
/// constructed account never observes a negative balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Open an account with a starting balance
    pub fn open(initial_balance: Decimal) -> Result<Self> {
        if initial_balance < Decimal::ZERO {
            return Err(Error::invalid_amount(format!(
                "initial balance cannot be negative (got {})",
                format_usd(initial_balance)
            )));
        }
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add a positive amount to the balance
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        require_positive(amount, "deposit")?;
        self.balance += amount;
        Ok(())
    }

    /// Remove a positive amount from the balance
    ///
    /// Withdrawing the exact balance succeeds and leaves zero; only
    /// `amount > balance` is an overdraw.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        require_positive(amount, "withdrawal")?;
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                attempted: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

fn require_positive(amount: Decimal, action: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_amount(format!(
            "{action} amount must be positive (got {})",
            format_usd(amount)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_open_returns_initial_balance() {
        let account = Account::open(usd(100_000)).unwrap();
        assert_eq!(account.balance(), usd(100_000));

        let empty = Account::open(Decimal::ZERO).unwrap();
        assert_eq!(empty.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_open_rejects_negative_initial_balance() {
        let err = Account::open(usd(-500)).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
    }

    #[test]
    fn test_deposit_adds_amount() {
        let mut account = Account::open(usd(100_000)).unwrap();
        account.deposit(usd(50_000)).unwrap();
        assert_eq!(account.balance(), usd(150_000));
    }

    #[test]
    fn test_deposit_rejects_zero_and_negative() {
        let mut account = Account::open(usd(100_000)).unwrap();

        let err = account.deposit(Decimal::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
        assert_eq!(account.balance(), usd(100_000));

        let err = account.deposit(usd(-10_000)).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
        assert_eq!(account.balance(), usd(100_000));
    }

    #[test]
    fn test_withdraw_subtracts_amount() {
        let mut account = Account::open(usd(150_000)).unwrap();
        account.withdraw(usd(30_000)).unwrap();
        assert_eq!(account.balance(), usd(120_000));
    }

    #[test]
    fn test_withdraw_full_balance_leaves_zero() {
        let mut account = Account::open(usd(120_000)).unwrap();
        account.withdraw(usd(120_000)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_overdraw_fails_and_keeps_balance() {
        let mut account = Account::open(usd(120_000)).unwrap();

        let err = account.withdraw(usd(150_000)).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientFunds {
                attempted: usd(150_000),
                balance: usd(120_000),
            }
        );
        assert_eq!(account.balance(), usd(120_000));
    }

    #[test]
    fn test_withdraw_rejects_zero_and_negative() {
        let mut account = Account::open(usd(100_000)).unwrap();

        let err = account.withdraw(Decimal::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
        assert_eq!(account.balance(), usd(100_000));

        let err = account.withdraw(usd(-5_000)).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
        assert_eq!(account.balance(), usd(100_000));
    }

    #[test]
    fn test_balance_is_idempotent() {
        let account = Account::open(usd(42_00)).unwrap();
        assert_eq!(account.balance(), account.balance());
    }
}
