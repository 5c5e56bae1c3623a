//! # Protocol Layer
//!
//! Tag dispatch and attribute collections built on the core codec.
//!
//! ## Components
//! - **Types**: The assigned standard attribute codes
//! - **Registry**: Frozen tag-to-decoder dispatch with raw pass-through
//! - **List**: Order-preserving attribute collections

pub mod list;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;
