use colored::Colorize;
use oop_foundations::config::Settings;
use oop_foundations::ticket::Ticket;
use oop_foundations::{logging, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::process::ExitCode;

fn report<T>(label: &str, result: Result<T>) {
    match result {
        Ok(_) => println!("{} {}", "✓".green(), label),
        Err(err) => println!("{} {}: {}", "✗".red(), label, err),
    }
}

fn status(ticket: &Ticket) {
    println!("  Event: {}", ticket.event_name());
    println!("  Price: ${:.2}", ticket.price());
    println!("  Available seats: {}", ticket.available_seats());
}

fn run() -> Result<()> {
    println!("{}", "== Tech Conference 2024 ==".bold());
    let mut ticket = Ticket::new("Tech Conference 2024", dec!(50), 100)?;
    status(&ticket);

    println!("\n{}", "== Valid operations ==".bold());
    ticket.book_seats(25)?;
    ticket.apply_discount(dec!(10))?;
    status(&ticket);

    println!("\n{}", "== Guard clauses ==".bold());
    report("book 0 seats", ticket.book_seats(0));
    report("book 100 seats", ticket.book_seats(100));
    report("150% discount", ticket.apply_discount(dec!(150)));
    report("-10% discount", ticket.apply_discount(dec!(-10)));
    report("price -20", ticket.change_price(dec!(-20)));
    report("price 0", ticket.change_price(Decimal::ZERO));
    report("empty event name", Ticket::new("", dec!(50), 100));
    report("two-letter event name", Ticket::new("AB", dec!(50), 100));

    println!("\n{}", "== Final state (unchanged by failures) ==".bold());
    status(&ticket);
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
