use colored::Colorize;
use oop_foundations::config::Settings;
use oop_foundations::grades::{GradeCalculator, Student, StudentRepository};
use oop_foundations::journal::LogFile;
use oop_foundations::logging;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn run(workdir: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut journal = LogFile::create(workdir.join("grade_book.log"))?;
    journal.write_line("Grade book started")?;

    let mut student = Student::new("Alice")?;
    for grade in [85, 92, 78, 95] {
        student.add_grade(grade)?;
    }
    if let Err(err) = student.add_grade(120) {
        println!("{} {}", "✗".red(), err);
        journal.write_line(&format!("Rejected grade: {err}"))?;
    }

    let repo = StudentRepository;
    let file = workdir.join("alice.txt");
    repo.save(&student, &file)?;
    println!("{} Saved to {}", "✓".green(), file.display());
    journal.write_line("Student saved")?;

    let loaded = repo.load(&file)?;
    let calc = GradeCalculator;
    let average = calc.average(loaded.grades());

    println!("\n{}", "== Grade Report ==".bold());
    println!("Student: {}", loaded.name());
    println!(
        "Grades:  {}",
        loaded
            .grades()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Average: {average:.2}");
    println!("Letter:  {}", calc.letter(average));
    println!("GPA:     {:.1}", calc.gpa(average));

    journal.write_line("Report printed")?;
    journal.close()?;
    println!("\nJournal written to {}", journal.path().display());
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

    let workdir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    match run(workdir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
