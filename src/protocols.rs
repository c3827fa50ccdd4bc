// Copyright 2025 Cowboy AI, LLC.

//! Traits and extensions
//!
//! [`ExampleProtocol`] is adopted by a reference-style type, a plain struct,
//! and the built-in `i64`. [`AbsoluteValue`] extends `f64` with a new method.

use serde::{Deserialize, Serialize};

/// Requirements shared by every adopter
pub trait ExampleProtocol {
    /// Current description
    fn simple_description(&self) -> String;

    /// Change the value in place
    fn adjust(&mut self);

    /// Identifier
    fn id(&self) -> i64;
}

/// Adopter with a writable id and an extra property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleClass {
    /// Identifier, writable
    pub id: i64,
    /// Description text
    pub simple_description: String,
    /// Not part of the protocol
    pub another_property: i64,
}

impl Default for SimpleClass {
    fn default() -> Self {
        Self {
            id: 43,
            simple_description: " A very simple class.".to_string(),
            another_property: 69105,
        }
    }
}

impl ExampleProtocol for SimpleClass {
    fn simple_description(&self) -> String {
        self.simple_description.clone()
    }

    fn adjust(&mut self) {
        self.simple_description.push_str("  Now 100% adjusted.");
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// Adopter with a fixed id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleStructure {
    /// Description text
    pub simple_description: String,
}

impl SimpleStructure {
    /// Fixed identifier
    pub const ID: i64 = 32;
}

impl Default for SimpleStructure {
    fn default() -> Self {
        Self {
            simple_description: "A simple structure".to_string(),
        }
    }
}

impl ExampleProtocol for SimpleStructure {
    fn simple_description(&self) -> String {
        self.simple_description.clone()
    }

    fn adjust(&mut self) {
        self.simple_description.push_str(" (adjusted)");
    }

    fn id(&self) -> i64 {
        Self::ID
    }
}

impl ExampleProtocol for i64 {
    fn simple_description(&self) -> String {
        format!("The number {self}")
    }

    fn adjust(&mut self) {
        *self += 42;
    }

    fn id(&self) -> i64 {
        1
    }
}

/// Extension adding `absolute_value` to `f64`
pub trait AbsoluteValue {
    /// Magnitude without sign
    fn absolute_value(self) -> f64;
}

impl AbsoluteValue for f64 {
    fn absolute_value(self) -> f64 {
        self.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_class_adjust() {
        let mut a = SimpleClass::default();
        a.adjust();
        a.id = 23;
        assert_eq!(a.id(), 23);
        assert_eq!(
            a.simple_description(),
            " A very simple class.  Now 100% adjusted."
        );
    }

    #[test]
    fn test_simple_structure_adjust() {
        let mut b = SimpleStructure::default();
        b.adjust();
        assert_eq!(b.simple_description(), "A simple structure (adjusted)");
        assert_eq!(b.id(), 32);
    }

    #[test]
    fn test_integer_adoption() {
        let mut number: i64 = 7;
        assert_eq!(number.simple_description(), "The number 7");
        number.adjust();
        assert_eq!(number, 49);
        assert_eq!(number.id(), 1);
    }

    #[test]
    fn test_protocol_value_hides_extra_members() {
        let a = SimpleClass::default();
        let protocol_value: &dyn ExampleProtocol = &a;
        assert_eq!(protocol_value.simple_description(), " A very simple class.");
        assert_eq!(protocol_value.id(), 43);
    }

    #[test]
    fn test_absolute_value() {
        assert_eq!((-7.5_f64).absolute_value(), 7.5);
    }

    proptest! {
        #[test]
        fn absolute_value_is_never_negative(x in -1.0e12_f64..1.0e12) {
            prop_assert!(x.absolute_value() >= 0.0);
            prop_assert_eq!(x.absolute_value(), (-x).absolute_value());
        }
    }
}
