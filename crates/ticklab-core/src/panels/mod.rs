//! Demo panels: stateless read-input/compute/render-output operations.

pub mod age;
pub mod pricing;
pub mod table;
pub mod text;

pub use age::{AgeGroup, AgeReport};
pub use pricing::Receipt;
pub use table::MultiplicationTable;
