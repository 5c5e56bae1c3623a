//! # Core Codec Components
//!
//! Low-level TLV framing and the attribute kinds built on it.
//!
//! This module provides the foundation for the codec: validated header
//! splitting, frame assembly, and the concrete attribute types.
//!
//! ## Components
//! - **Wire**: Header constants, strict/lenient framing validation
//! - **Attribute**: The codec contract and the concrete kinds
//!
//! ## Wire Format
//! ```text
//! [Tag(1)] [Length(1)] [Value(Length - 2)]
//! ```
//!
//! ## Security
//! - Maximum attribute size: 255 bytes (the length field is one byte)
//! - Declared length validated against the buffer before any value access
//! - Value slices never read past the buffer end, in any mode

pub mod attribute;
pub mod wire;
