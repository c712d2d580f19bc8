use colored::Colorize;
use oop_foundations::config::Settings;
use oop_foundations::order::{Order, OrderStatus};
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

fn print_summary(order: &Order) {
    let summary = order.summary();
    println!("\nOrder #{} for {}", summary.order_id, summary.customer);
    println!("  Status:      {}", summary.status);
    println!("  Items:       {}", summary.item_count);
    println!("  Item total:  ${:.2}", summary.item_total);
    if summary.shipping_cost == Decimal::ZERO {
        println!("  Shipping:    FREE");
    } else {
        println!("  Shipping:    ${:.2}", summary.shipping_cost);
    }
    println!("  Discount:    ${:.2}", summary.discount_amount);
    println!("  Final total: ${:.2}", summary.final_total);
}

fn run(settings: &Settings) -> Result<()> {
    println!("{}", "== Creating order #1001 for Alice ==".bold());
    let mut order = Order::with_policy(1001, "Alice", settings.order.clone())?;
    order.add_item("Laptop", dec!(999.99))?;
    order.add_item("Mouse", dec!(29.99))?;
    order.add_item("Keyboard", dec!(79.99))?;
    print_summary(&order);

    println!("\n{}", "== Applying 10% discount ==".bold());
    order.apply_discount(dec!(10))?;
    println!("Final total: ${:.2}", order.final_total());

    println!("\n{}", "== Processing ==".bold());
    for next in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
        order.update_status(next)?;
        println!("{} Status: {}", "✓".green(), order.status());
    }

    println!("\n{}", "== Invariants on a delivered order ==".bold());
    report("add another item", order.add_item("Extra Item", dec!(50)));
    report("apply 75% discount", order.apply_discount(dec!(75)));
    report("move back to Pending", order.update_status(OrderStatus::Pending));
    report("cancel", order.cancel());

    println!("\n{}", "== Price validation ==".bold());
    let mut second = Order::with_policy(1002, "Bob", settings.order.clone())?;
    second.add_item("Test", dec!(10))?;
    report("add item at -10", second.add_item("Bad", dec!(-10)));
    report("add item at 0", second.add_item("Bad", Decimal::ZERO));
    report("remove the only item", second.remove_item("Test"));

    println!(
        "\nOrder #{} remains valid: {}, {} items, ${:.2}",
        order.order_id(),
        order.status(),
        order.item_count(),
        order.final_total()
    );
    println!("\nSnapshot:");
    match serde_json::to_string_pretty(&order.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("{} could not serialize summary: {err}", "✗".red()),
    }
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

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Unexpected error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
