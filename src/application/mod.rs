//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AnnotateUseCase` - Read a document and write its address listing

pub mod annotate;

pub use annotate::{AnnotateOptions, AnnotateSummary, AnnotateUseCase, DEFAULT_INPUT};
