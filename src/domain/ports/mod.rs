//! Ports: traits the application layer depends on

pub mod file_system;

pub use file_system::{FileSystem, FsResult};
