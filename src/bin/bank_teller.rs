use colored::Colorize;
use oop_foundations::bank::BankAccount;
use oop_foundations::config::Settings;
use oop_foundations::{logging, DomainError, Result};
use rust_decimal_macros::dec;
use std::process::ExitCode;

fn explain(err: &DomainError) {
    println!("{} {}", "✗ Error:".red(), err);
    match err {
        DomainError::InsufficientFunds { balance, requested } => {
            println!("  Short by ${}. Balance unchanged.", requested - balance)
        }
        DomainError::AccountLocked { .. } => {
            println!("  Cannot perform operations on locked accounts.")
        }
        _ => {}
    }
}

fn run() -> Result<()> {
    println!("{}", "== Bank Account System ==".bold());
    let mut account = BankAccount::new("12345", "Alice", dec!(1000))?;
    println!("{} Account created for {}", "✓".green(), account.owner());

    account.deposit(dec!(500))?;
    println!("{} Deposit ok. Balance: ${}", "✓".green(), account.balance());

    println!("\nWithdrawing $2000...");
    if let Err(err) = account.withdraw(dec!(2000)) {
        explain(&err);
    }

    println!("\nWithdrawing $-50...");
    if let Err(err) = account.withdraw(dec!(-50)) {
        explain(&err);
    }

    println!("\nLocking account (fraud detected)...");
    account.lock("fraud detected");
    if let Err(err) = account.withdraw(dec!(500)) {
        explain(&err);
    }

    println!("\nUnlocking account...");
    account.unlock();
    account.withdraw(dec!(500))?;
    println!("{} Withdrawal ok. Balance: ${}", "✓".green(), account.balance());

    println!("\n{}", "== Final Account Status ==".bold());
    println!("Owner:   {}", account.owner());
    println!("Balance: ${}", account.balance());
    println!(
        "Status:  {}",
        if account.is_locked() { "Locked" } else { "Active" }
    );
    Ok(())
}

fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} {}", "Setup error:".red(), err);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.logging);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Unexpected error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
