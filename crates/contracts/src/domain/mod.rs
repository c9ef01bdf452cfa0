pub mod actual;
pub mod distributor;
pub mod target;
