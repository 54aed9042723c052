//! Application layer for wcs-delegates
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::delegate_registry::{DelegateRegistry, RegistryError};
pub use use_cases::find_delegate::{DelegateFinder, FindDelegateError};
