//! Domain records built on `corral-core`: each type declares its constraint
//! table, validates every field at construction, and only exposes setters for
//! fields declared mutable.
//!
//! `tank` and `game` both export a `Tank` — two divergent contracts from the
//! source material that share a name; `game::Tank` is the one whose price can
//! change after purchase.
//!
//! Records here derive `Serialize` only. `Deserialize` is left out on
//! purpose: deserialization would construct instances without passing the
//! validating constructors.

pub mod cow;
pub mod employee;
pub mod game;
pub mod student;
pub mod tank;

pub use cow::Cow;
pub use employee::Employee;
pub use student::Student;
pub use tank::Tank;

#[cfg(test)]
mod property;
