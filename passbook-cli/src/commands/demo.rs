//! Demo command - scripted walkthrough of a single account
//!
//! Drives one account through every interesting transition: deposits,
//! withdrawals, an overdraw attempt, and two invalid amounts. Failed
//! operations are reported and the walkthrough continues.

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;

use passbook_core::money::format_usd;
use passbook_core::{Account, Error};

use crate::output;

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn show_balance(account: &Account) {
    println!("Current balance: {}", format_usd(account.balance()));
}

pub fn run() -> Result<()> {
    println!("{}", "=== BANK ACCOUNT DEMO ===".bold());
    println!();

    println!("1. Opening an account with an initial balance...");
    let mut account = Account::open(usd(100_000))?;
    show_balance(&account);
    println!("---");

    println!("2. Making a deposit...");
    match account.deposit(usd(50_000)) {
        Ok(()) => output::success(&format!("Deposited {}", format_usd(usd(50_000)))),
        Err(e) => output::error(&format!("ERROR: {e}")),
    }
    show_balance(&account);
    println!("---");

    println!("3. Withdrawing funds...");
    match account.withdraw(usd(30_000)) {
        Ok(()) => output::success(&format!("Withdrew {}", format_usd(usd(30_000)))),
        Err(e) => output::error(&format!("ERROR: {e}")),
    }
    show_balance(&account);
    println!("---");

    println!("4. Attempting to withdraw more than the account holds...");
    match account.withdraw(usd(150_000)) {
        Ok(()) => output::success(&format!("Withdrew {}", format_usd(usd(150_000)))),
        Err(e @ Error::InsufficientFunds { .. }) => {
            output::error(&format!("ERROR: {e}"));
            println!("Balance remains: {}", format_usd(account.balance()));
        }
        Err(e) => output::error(&format!("ERROR: {e}")),
    }
    println!("---");

    println!("5. Attempting to deposit a negative amount...");
    if let Err(e) = account.deposit(usd(-10_000)) {
        output::error(&format!("ERROR: {e}"));
    }
    println!("---");

    println!("6. Attempting to withdraw zero...");
    if let Err(e) = account.withdraw(Decimal::ZERO) {
        output::error(&format!("ERROR: {e}"));
    }
    println!("---");

    println!("7. Final account status:");
    show_balance(&account);
    println!();
    println!("{}", "=== END OF DEMO ===".bold());

    Ok(())
}
