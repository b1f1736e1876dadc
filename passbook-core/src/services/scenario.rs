//! Scenario service - drive one account through a sequence of operations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::format_usd;
use crate::domain::result::Result;
use crate::domain::Account;

/// A single instruction for the scenario runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit(Decimal),
    Withdraw(Decimal),
}

impl Operation {
    /// Name of the operation as shown to the user
    pub fn action(&self) -> &'static str {
        match self {
            Operation::Deposit(_) => "deposit",
            Operation::Withdraw(_) => "withdraw",
        }
    }

    /// Amount the operation carries
    pub fn amount(&self) -> Decimal {
        match self {
            Operation::Deposit(amount) | Operation::Withdraw(amount) => *amount,
        }
    }

    /// Apply the operation to an account
    pub fn apply(&self, account: &mut Account) -> Result<()> {
        match self {
            Operation::Deposit(amount) => account.deposit(*amount),
            Operation::Withdraw(amount) => account.withdraw(*amount),
        }
    }

    fn confirmation(&self) -> String {
        match self {
            Operation::Deposit(amount) => format!("Deposited {}", format_usd(*amount)),
            Operation::Withdraw(amount) => format!("Withdrew {}", format_usd(*amount)),
        }
    }
}

/// Outcome of one operation in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub step: usize,
    pub action: String,
    pub amount: Decimal,
    pub ok: bool,
    /// Confirmation message on success, error message on failure
    pub detail: String,
    /// Balance after the step; unchanged from the previous step on failure
    pub balance: Decimal,
}

/// Result of running a whole scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub steps: Vec<StepRecord>,
    pub final_balance: Decimal,
}

/// Scenario service - applies operations in order against a fresh account
pub struct ScenarioService;

impl ScenarioService {
    /// Open an account and apply each operation in order
    ///
    /// A failing operation is captured in its step record and the run
    /// continues; only a rejected initial balance aborts the scenario,
    /// since there is no account to continue with.
    pub fn run(initial_balance: Decimal, operations: &[Operation]) -> Result<ScenarioReport> {
        let mut account = Account::open(initial_balance)?;

        let mut steps = Vec::with_capacity(operations.len());
        for (index, operation) in operations.iter().enumerate() {
            let record = match operation.apply(&mut account) {
                Ok(()) => StepRecord {
                    step: index + 1,
                    action: operation.action().to_string(),
                    amount: operation.amount(),
                    ok: true,
                    detail: operation.confirmation(),
                    balance: account.balance(),
                },
                Err(e) => StepRecord {
                    step: index + 1,
                    action: operation.action().to_string(),
                    amount: operation.amount(),
                    ok: false,
                    detail: e.to_string(),
                    balance: account.balance(),
                },
            };
            steps.push(record);
        }

        Ok(ScenarioReport {
            final_balance: account.balance(),
            steps,
        })
    }
}
