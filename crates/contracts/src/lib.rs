//! Shared contracts between the frontend and the sales backend.
//!
//! Pure data and computation only: the financial-period calculator,
//! the date-context triple, and the wire types for the REST API.
//! No DOM, no HTTP, no persistence.

pub mod domain;
pub mod periods;
pub mod shared;
