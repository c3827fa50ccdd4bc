//! Person and Employee
//!
//! An employee is composed of a person rather than derived from one; the
//! employee greeting wraps the person greeting.

use serde::{Deserialize, Serialize};

/// Share of the salary taken as tax
pub const TAX_RATE: f64 = 0.6;

/// Things that can introduce themselves
pub trait Greet {
    /// Greeting line
    fn greet(&self) -> String;
}

/// A person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// Create a person
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Greet for Person {
    fn greet(&self) -> String {
        format!("Hello I'm {}!", self.name)
    }
}

/// A person with an employee id and a salary
///
/// # Examples
///
/// ```rust
/// use guided_tour::people::{Employee, Greet};
///
/// let mut employee = Employee::new("Jonas", 33, "21312323");
/// assert_eq!(employee.greet(), "Hello I'm Jonas! My id is 21312323");
///
/// employee.set_salary(350.0);
/// assert!((employee.tax() - 210.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    person: Person,
    id: String,
    salary: f64,
}

impl Employee {
    /// Create an employee with zero salary
    pub fn new(name: impl Into<String>, age: u32, id: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, age),
            id: id.into(),
            salary: 0.0,
        }
    }

    /// The person behind the employee
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Employee identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current salary
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Change the salary
    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    /// Tax owed on the current salary
    pub fn tax(&self) -> f64 {
        self.salary * TAX_RATE
    }
}

impl Greet for Employee {
    fn greet(&self) -> String {
        format!("{} My id is {}", self.person.greet(), self.id)
    }
}
