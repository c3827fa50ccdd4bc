// Copyright 2025 Cowboy AI, LLC.

//! Shapes built from capability traits
//!
//! Each shape is an independent value type. Shared behavior lives in small
//! traits ([`Describable`], [`Named`], [`HasArea`]) instead of a base type.
//!
//! Lengths are printed with `{:?}` so whole numbers keep their fractional
//! digit (`5.0`, not `5`).

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Anything that can describe itself in one line
pub trait Describable {
    /// One-line description
    fn simple_description(&self) -> String;
}

/// Shapes with a name and a side count
pub trait Named {
    /// Display name
    fn name(&self) -> &str;

    /// Number of sides (0 for curves)
    fn number_of_sides(&self) -> u32;
}

/// Shapes with a computable area
pub trait HasArea {
    /// Enclosed area
    fn area(&self) -> f64;
}

/// A shape with only a side count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Number of sides
    pub number_of_sides: u32,
}

impl Shape {
    /// Constant shared by every shape
    pub const CLASS_CONSTANT: &'static str = "test";

    /// Shape with no sides
    pub fn new() -> Self {
        Self::default()
    }
}

impl Describable for Shape {
    fn simple_description(&self) -> String {
        format!("A shape with {} sides.", self.number_of_sides)
    }
}

/// A shape with a name set at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShape {
    /// Number of sides
    pub number_of_sides: u32,
    /// Display name
    pub name: String,
}

impl NamedShape {
    /// Named shape with no sides
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            number_of_sides: 0,
            name: name.into(),
        }
    }
}

impl Describable for NamedShape {
    fn simple_description(&self) -> String {
        format!("A shape with {} sides.", self.number_of_sides)
    }
}

impl Named for NamedShape {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_sides(&self) -> u32 {
        self.number_of_sides
    }
}

/// A square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// Length of each side
    pub side_length: f64,
    /// Display name
    pub name: String,
}

impl Square {
    /// Create a square
    pub fn new(side_length: f64, name: impl Into<String>) -> Self {
        Self {
            side_length,
            name: name.into(),
        }
    }
}

impl Describable for Square {
    fn simple_description(&self) -> String {
        format!("A square with sides of length {:?}.", self.side_length)
    }
}

impl Named for Square {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_sides(&self) -> u32 {
        4
    }
}

impl HasArea for Square {
    fn area(&self) -> f64 {
        self.side_length * self.side_length
    }
}

/// A circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Display name
    pub name: String,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a circle
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }
}

impl Describable for Circle {
    fn simple_description(&self) -> String {
        format!("The {} with a radius of {:?}", self.name, self.radius)
    }
}

impl Named for Circle {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_sides(&self) -> u32 {
        0
    }
}

impl HasArea for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// An equilateral triangle whose perimeter can be read and written
///
/// # Examples
///
/// ```rust
/// use guided_tour::shapes::EquilateralTriangle;
///
/// let mut triangle = EquilateralTriangle::new(3.1, "a triangle");
/// assert!((triangle.perimeter() - 9.3).abs() < 1e-9);
///
/// triangle.set_perimeter(18.0);
/// assert_eq!(triangle.side_length, 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilateralTriangle {
    /// Length of each side
    pub side_length: f64,
    /// Display name
    pub name: String,
}

impl EquilateralTriangle {
    /// Create a triangle
    pub fn new(side_length: f64, name: impl Into<String>) -> Self {
        Self {
            side_length,
            name: name.into(),
        }
    }

    /// Sum of the three sides
    pub fn perimeter(&self) -> f64 {
        3.0 * self.side_length
    }

    /// Resize so the perimeter equals `perimeter`
    pub fn set_perimeter(&mut self, perimeter: f64) {
        self.side_length = perimeter / 3.0;
    }
}

impl Describable for EquilateralTriangle {
    fn simple_description(&self) -> String {
        format!(
            "An equilateral triangle with sides of length {:?}.",
            self.side_length
        )
    }
}

impl Named for EquilateralTriangle {
    fn name(&self) -> &str {
        &self.name
    }

    fn number_of_sides(&self) -> u32 {
        3
    }
}

/// A triangle and a square that always share a side length
///
/// Fields are private so every replacement goes through the setters, which
/// copy the new side length onto the other shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleAndSquare {
    triangle: EquilateralTriangle,
    square: Square,
}

impl TriangleAndSquare {
    /// Both shapes with side `size`
    pub fn new(size: f64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            square: Square::new(size, name.clone()),
            triangle: EquilateralTriangle::new(size, name),
        }
    }

    /// The triangle
    pub fn triangle(&self) -> &EquilateralTriangle {
        &self.triangle
    }

    /// The square
    pub fn square(&self) -> &Square {
        &self.square
    }

    /// Replace the triangle, resizing the square to match
    pub fn set_triangle(&mut self, triangle: EquilateralTriangle) {
        self.square.side_length = triangle.side_length;
        self.triangle = triangle;
    }

    /// Replace the square, resizing the triangle to match
    pub fn set_square(&mut self, square: Square) {
        self.triangle.side_length = square.side_length;
        self.square = square;
    }
}
