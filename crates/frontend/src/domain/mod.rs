pub mod actuals;
pub mod distributors;
pub mod targets;
