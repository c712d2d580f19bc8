use crate::error::{require_text, DomainError, Result};
use serde::Serialize;
use std::f64::consts::PI;

pub trait Shape {
    fn name(&self) -> &'static str;
    fn color(&self) -> &str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    fn describe(&self) -> String {
        format!(
            "{} {} - Area: {:.2}, Perimeter: {:.2}",
            self.color(),
            self.name(),
            self.area(),
            self.perimeter()
        )
    }
}

fn dimension(param: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::out_of_range(
            param,
            format!("{param} must be a positive number (got: {value})"),
        ));
    }
    Ok(value)
}

fn color(value: impl Into<String>) -> Result<String> {
    let value = value.into();
    require_text("color", &value, "Color")?;
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    color: String,
    radius: f64,
}

impl Circle {
    pub fn new(color_name: impl Into<String>, radius: f64) -> Result<Self> {
        Ok(Self {
            color: color(color_name)?,
            radius: dimension("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    color: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(color_name: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            color: color(color_name)?,
            width: dimension("width", width)?,
            height: dimension("height", height)?,
        })
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Area comes from base and height; perimeter from the three sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    color: String,
    base: f64,
    height: f64,
    side_a: f64,
    side_b: f64,
}

impl Triangle {
    pub fn new(
        color_name: impl Into<String>,
        base: f64,
        height: f64,
        side_a: f64,
        side_b: f64,
    ) -> Result<Self> {
        Ok(Self {
            color: color(color_name)?,
            base: dimension("base", base)?,
            height: dimension("height", height)?,
            side_a: dimension("side_a", side_a)?,
            side_b: dimension("side_b", side_b)?,
        })
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn perimeter(&self) -> f64 {
        self.base + self.side_a + self.side_b
    }
}

// ============================================================================
// Heterogeneous collection
// ============================================================================

#[derive(Default)]
pub struct ShapeManager {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        tracing::debug!(shape = shape.name(), "shape added");
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }

    pub fn average_area(&self) -> f64 {
        if self.shapes.is_empty() {
            return 0.0;
        }
        self.total_area() / self.shapes.len() as f64
    }

    pub fn largest(&self) -> Option<&dyn Shape> {
        self.shapes
            .iter()
            .max_by(|a, b| a.area().total_cmp(&b.area()))
            .map(|shape| &**shape)
    }

    pub fn by_name(&self, name: &str) -> Vec<&dyn Shape> {
        let mut matches: Vec<&dyn Shape> = Vec::new();
        for shape in &self.shapes {
            if shape.name() == name {
                matches.push(shape.as_ref());
            }
        }
        matches
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| format!("{}. {}", i + 1, shape.describe()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn populated() -> ShapeManager {
        let mut manager = ShapeManager::new();
        manager.add(Box::new(Circle::new("Red", 5.0).unwrap()));
        manager.add(Box::new(Rectangle::new("Blue", 4.0, 6.0).unwrap()));
        manager.add(Box::new(Triangle::new("Green", 3.0, 4.0, 4.0, 5.0).unwrap()));
        manager
    }

    #[test]
    fn test_areas_and_perimeters() {
        let circle = Circle::new("Red", 5.0).unwrap();
        assert!(approx(circle.area(), 78.539816));
        assert!(approx(circle.perimeter(), 31.415926));

        let rect = Rectangle::new("Blue", 4.0, 6.0).unwrap();
        assert_eq!(rect.area(), 24.0);
        assert_eq!(rect.perimeter(), 20.0);

        let tri = Triangle::new("Green", 3.0, 4.0, 4.0, 5.0).unwrap();
        assert_eq!(tri.area(), 6.0);
        assert_eq!(tri.perimeter(), 12.0);
    }

    #[test]
    fn test_dimension_validation() {
        assert!(Circle::new("Red", 0.0).unwrap_err().is_argument_error());
        assert!(Rectangle::new("Red", 1.0, -2.0).is_err());
        assert!(Triangle::new("Red", 1.0, 1.0, f64::NAN, 1.0).is_err());
        assert!(matches!(
            Circle::new(" ", 1.0),
            Err(DomainError::InvalidArgument { param: "color", .. })
        ));
    }

    #[test]
    fn test_manager_aggregates() {
        let manager = populated();
        assert_eq!(manager.len(), 3);
        let total = 25.0 * PI + 24.0 + 6.0;
        assert!(approx(manager.total_area(), total));
        assert!(approx(manager.average_area(), total / 3.0));
        assert_eq!(manager.largest().unwrap().name(), "Circle");
        assert_eq!(manager.by_name("Rectangle").len(), 1);
        assert_eq!(manager.by_name("Hexagon").len(), 0);
    }

    #[test]
    fn test_empty_manager() {
        let manager = ShapeManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.average_area(), 0.0);
        assert!(manager.largest().is_none());
    }

    #[test]
    fn test_descriptions() {
        let lines = populated().descriptions();
        assert_eq!(lines[1], "2. Blue Rectangle - Area: 24.00, Perimeter: 20.00");
        assert!(lines[0].starts_with("1. Red Circle - Area: 78.54"));
    }
}
