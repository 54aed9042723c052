//! Application use cases
//!
//! - [`find_delegate`] — resolve the delegate for an output format and list
//!   every producible format

pub mod find_delegate;
