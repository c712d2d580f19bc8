use colored::Colorize;
use oop_foundations::cart::ShoppingCart;
use oop_foundations::config::Settings;
use oop_foundations::discount::{
    BulkDiscount, BuyOneGetOneDiscount, DiscountCalculator, DiscountStrategy,
    FixedAmountDiscount, PercentageDiscount, SeasonalDiscount,
};
use oop_foundations::{logging, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::process::ExitCode;

fn report<T>(label: &str, result: Result<T>) {
    match result {
        Ok(_) => println!("{} {}", "✓".green(), label),
        Err(err) => println!("{} {}: {}", "✗".red(), label, err),
    }
}

fn show_cart(cart: &ShoppingCart) {
    println!("\nCart for {}:", cart.customer());
    println!("  Items: {}/{}", cart.item_count(), cart.max_items());
    println!("  Total: ${:.2}", cart.total_price());
    if cart.is_full() {
        println!("  Status: {}", "Full".yellow());
    }
}

fn run(settings: &Settings) -> Result<()> {
    println!("{}", "== Filling Alice's cart ==".bold());
    let mut cart = ShoppingCart::with_default_capacity("Alice", &settings.cart)?;
    let stock = [
        ("Laptop", dec!(999.99)),
        ("Mouse", dec!(29.99)),
        ("Keyboard", dec!(79.99)),
        ("Monitor", dec!(299.99)),
        ("Webcam", dec!(89.99)),
        ("Headset", dec!(149.99)),
        ("USB Cable", dec!(9.99)),
        ("HDMI Cable", dec!(12.99)),
        ("Mousepad", dec!(19.99)),
        ("Desk Lamp", dec!(39.99)),
    ];
    for (name, price) in stock {
        report(&format!("add {name} (${price})"), cart.add_item(name, price));
    }
    show_cart(&cart);

    println!("\n{}", "== Cart limits ==".bold());
    report("add Extra Item", cart.add_item("Extra Item", dec!(50)));
    report("add unnamed item", cart.add_item("", dec!(50)));
    report("add item at -10", cart.add_item("Item", dec!(-10)));
    println!(
        "Cart remains valid with {} items totaling ${:.2}",
        cart.item_count(),
        cart.total_price()
    );

    println!("\n{}", "== Discount strategies ==".bold());
    let price = cart.total_price().to_f64().unwrap_or_default();
    println!("Original price: ${price:.2}");

    let calculator = DiscountCalculator::new();
    let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
        Box::new(PercentageDiscount::new(20.0)?),
        Box::new(FixedAmountDiscount::new(15.0)?),
        Box::new(BuyOneGetOneDiscount),
        Box::new(SeasonalDiscount::new("Summer", 30.0)?),
        Box::new(BulkDiscount::new(5, 3.0)?),
    ];
    for strategy in &strategies {
        let outcome = calculator.apply(price, &**strategy);
        println!(
            "  {:<45} -${:>8.2}  => ${:.2}",
            outcome.description, outcome.discount, outcome.final_price
        );
    }

    match calculator.best(price, &strategies) {
        Some((strategy, amount)) => println!(
            "\nBest deal: {} saves ${:.2}",
            strategy.description().green(),
            amount
        ),
        None => println!("\nNo strategy gives a discount"),
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
