//! Run command - apply a user-supplied sequence of operations

use anyhow::{bail, Result};
use colored::Colorize;

use passbook_core::money::{format_usd, parse_amount};
use passbook_core::{Operation, ScenarioService};

use crate::output;

pub fn run(initial: &str, operations: &[String], json: bool) -> Result<()> {
    let initial_balance = parse_amount(initial)?;
    let operations = operations
        .iter()
        .map(|raw| parse_operation(raw))
        .collect::<Result<Vec<_>>>()?;

    let report = ScenarioService::run(initial_balance, &operations)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Operation", "Amount", "Result", "Balance"]);
    for step in &report.steps {
        table.add_row(vec![
            step.step.to_string(),
            step.action.clone(),
            format_usd(step.amount),
            step.detail.clone(),
            format_usd(step.balance),
        ]);
    }
    println!("{table}");
    println!();

    let failed = report.steps.iter().filter(|s| !s.ok).count();
    if failed > 0 {
        output::warning(&format!(
            "{failed} of {} operations failed",
            report.steps.len()
        ));
    }
    println!(
        "Final balance: {}",
        format_usd(report.final_balance).bold()
    );

    Ok(())
}

/// Parse an operation argument of the form `deposit:<amount>` or `withdraw:<amount>`
fn parse_operation(raw: &str) -> Result<Operation> {
    let Some((action, amount)) = raw.split_once(':') else {
        bail!("malformed operation {raw:?}, expected deposit:<amount> or withdraw:<amount>");
    };
    let amount = parse_amount(amount)?;
    match action {
        "deposit" => Ok(Operation::Deposit(amount)),
        "withdraw" => Ok(Operation::Withdraw(amount)),
        _ => bail!("unknown operation {action:?}, expected deposit or withdraw"),
    }
}
