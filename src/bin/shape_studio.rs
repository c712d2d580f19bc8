use colored::Colorize;
use oop_foundations::config::Settings;
use oop_foundations::logging;
use oop_foundations::shapes::{Circle, Rectangle, Shape, ShapeManager, Triangle};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Line-oriented prompt over any reader, so the menu can run against stdin.
struct Prompt<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    /// `None` on end of input.
    fn line(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Re-asks until the answer parses as a number.
    fn number(&mut self, label: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(answer) = self.line(label)? else {
                return Ok(None);
            };
            match answer.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("{} '{}' is not a number", "✗".red(), answer),
            }
        }
    }
}

fn build_shape<R: BufRead>(
    prompt: &mut Prompt<R>,
    choice: &str,
) -> io::Result<Option<oop_foundations::Result<Box<dyn Shape>>>> {
    let Some(color) = prompt.line("Color: ")? else {
        return Ok(None);
    };

    let shape: oop_foundations::Result<Box<dyn Shape>> = match choice {
        "1" => {
            let Some(radius) = prompt.number("Radius: ")? else {
                return Ok(None);
            };
            Circle::new(color, radius).map(|s| Box::new(s) as Box<dyn Shape>)
        }
        "2" => {
            let Some(width) = prompt.number("Width: ")? else {
                return Ok(None);
            };
            let Some(height) = prompt.number("Height: ")? else {
                return Ok(None);
            };
            Rectangle::new(color, width, height).map(|s| Box::new(s) as Box<dyn Shape>)
        }
        _ => {
            let mut dims = [0.0; 4];
            for (slot, label) in dims
                .iter_mut()
                .zip(["Base: ", "Height: ", "Side A: ", "Side B: "])
            {
                let Some(value) = prompt.number(label)? else {
                    return Ok(None);
                };
                *slot = value;
            }
            Triangle::new(color, dims[0], dims[1], dims[2], dims[3])
                .map(|s| Box::new(s) as Box<dyn Shape>)
        }
    };
    Ok(Some(shape))
}

fn show(manager: &ShapeManager) {
    if manager.is_empty() {
        println!("No shapes yet.");
        return;
    }
    println!("\nAll shapes:");
    for line in manager.descriptions() {
        println!("  {line}");
    }
    println!("Total area:   {:.2}", manager.total_area());
    println!("Average area: {:.2}", manager.average_area());
    if let Some(largest) = manager.largest() {
        println!("Largest:      {}", largest.describe());
    }
}

fn run<R: BufRead>(mut prompt: Prompt<R>) -> io::Result<()> {
    let mut manager = ShapeManager::new();
    loop {
        println!("\n{}", "== Shape Studio ==".bold());
        println!("1. Add circle");
        println!("2. Add rectangle");
        println!("3. Add triangle");
        println!("4. Show shapes");
        println!("5. Quit");

        let Some(choice) = prompt.line("Choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" | "2" | "3" => match build_shape(&mut prompt, &choice)? {
                Some(Ok(shape)) => {
                    println!("{} {} added", "✓".green(), shape.name());
                    manager.add(shape);
                }
                Some(Err(err)) => println!("{} {}", "✗".red(), err),
                None => break,
            },
            "4" => show(&manager),
            "5" => break,
            other => println!("{} unknown choice '{}'", "✗".red(), other),
        }
    }
    show(&manager);
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

    let stdin = io::stdin();
    match run(Prompt { input: stdin.lock() }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "I/O error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
