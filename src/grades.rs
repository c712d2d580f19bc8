use crate::error::{require_text, DomainError, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    name: String,
    grades: Vec<u8>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require_text("name", &name, "Student name")?;
        Ok(Self {
            name,
            grades: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn add_grade(&mut self, grade: u8) -> Result<()> {
        if grade > 100 {
            return Err(DomainError::out_of_range(
                "grade",
                format!("Grade must be between 0 and 100 (got: {grade})"),
            ));
        }
        self.grades.push(grade);
        Ok(())
    }
}

// ============================================================================
// Calculations
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct GradeCalculator;

impl GradeCalculator {
    pub fn average(&self, grades: &[u8]) -> f64 {
        if grades.is_empty() {
            return 0.0;
        }
        let sum: u32 = grades.iter().map(|&g| u32::from(g)).sum();
        f64::from(sum) / grades.len() as f64
    }

    pub fn letter(&self, average: f64) -> char {
        match average {
            a if a >= 90.0 => 'A',
            a if a >= 80.0 => 'B',
            a if a >= 70.0 => 'C',
            a if a >= 60.0 => 'D',
            _ => 'F',
        }
    }

    /// Simplified 4.0 scale using the letter cut-offs.
    pub fn gpa(&self, average: f64) -> f64 {
        match self.letter(average) {
            'A' => 4.0,
            'B' => 3.0,
            'C' => 2.0,
            'D' => 1.0,
            _ => 0.0,
        }
    }
}

// ============================================================================
// Persistence: line 1 = name, line 2 = comma-joined grades
// ============================================================================

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("student file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("student file '{0}' has no name line")]
    MissingName(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StudentRepository;

impl StudentRepository {
    pub fn save(&self, student: &Student, path: &Path) -> std::result::Result<(), RepositoryError> {
        let grades = student
            .grades
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        fs::write(path, format!("{}\n{}\n", student.name, grades))?;
        tracing::debug!(student = %student.name, path = %path.display(), "student saved");
        Ok(())
    }

    /// Grades that do not parse or fall outside 0..=100 are skipped.
    pub fn load(&self, path: &Path) -> std::result::Result<Student, RepositoryError> {
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();

        let name = lines.next().map(str::trim).unwrap_or_default();
        let mut student = Student::new(name)
            .map_err(|_| RepositoryError::MissingName(path.display().to_string()))?;

        if let Some(line) = lines.next() {
            for raw in line.split(',') {
                match raw.trim().parse::<u8>() {
                    Ok(grade) if student.add_grade(grade).is_ok() => {}
                    _ => tracing::warn!(value = raw, "skipping unreadable grade"),
                }
            }
        }
        Ok(student)
    }
}
