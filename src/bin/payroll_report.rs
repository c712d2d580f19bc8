use colored::Colorize;
use oop_foundations::config::Settings;
use oop_foundations::payroll::{
    CommissionEmployee, EmployeeInfo, HourlyEmployee, Pay, Payroll, SalariedEmployee,
};
use oop_foundations::{logging, Result};
use rust_decimal_macros::dec;
use std::process::ExitCode;

fn run() -> Result<()> {
    let mut payroll = Payroll::new();
    payroll.hire(Box::new(HourlyEmployee::new(
        EmployeeInfo::new("Alice Johnson", 101)?,
        dec!(160),
        dec!(20),
    )?));
    payroll.hire(Box::new(SalariedEmployee::new(
        EmployeeInfo::new("Bob Smith", 102)?,
        dec!(50000),
    )?));
    payroll.hire(Box::new(CommissionEmployee::new(
        EmployeeInfo::new("Carol White", 103)?,
        dec!(2000),
        dec!(10000),
        dec!(0.15),
    )?));

    println!("{}", "Employee Payroll Report".bold());
    println!("=======================");
    for employee in payroll.employees() {
        println!("\n{}", employee.display_info()?);
    }
    println!("\n=======================");
    println!("Total Payroll: ${:.2}", payroll.total()?);
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
            eprintln!("{} {}", "Payroll error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
