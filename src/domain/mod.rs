//! Domain layer
//!
//! Listing concepts (addresses, line records) and the pure logic that
//! turns a document into an annotated listing. No I/O lives here beyond
//! writing into a caller-supplied `Write`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
