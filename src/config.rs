//! # Configuration Management
//!
//! Centralized configuration for the attribute codec.
//!
//! This module provides the knobs that control framing validation. Decode
//! behavior is the only configurable surface: encoding always recomputes the
//! length byte and always enforces the 255-byte cap.
//!
//! ## Security Considerations
//! - Strict length validation is on by default: the declared length byte must
//!   equal the buffer size, or decode fails. Only disable it when the outer
//!   attribute-list framer has already validated record boundaries.
//! - Even in lenient mode the value slice never reads past the buffer end.

use crate::core::wire::MAX_VALUE_LEN;
use crate::error::{AttributeError, Result};
use serde::{Deserialize, Serialize};

/// Decode-side configuration for the attribute codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Require the declared length byte to equal the buffer size exactly.
    ///
    /// When false, the declared length may be smaller than the buffer (the
    /// trailing bytes are ignored) but may never exceed it.
    #[serde(default = "default_strict_length")]
    pub strict_length: bool,

    /// Upper bound on accepted value sizes, in bytes.
    ///
    /// Must not exceed [`MAX_VALUE_LEN`] (253); the wire format cannot carry
    /// more. Lowering it lets deployments reject attributes their backend
    /// would truncate anyway.
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

fn default_strict_length() -> bool {
    true
}

fn default_max_value_len() -> usize {
    MAX_VALUE_LEN
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_length: true,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

impl CodecConfig {
    /// Validate the configuration, rejecting values the wire format cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_value_len > MAX_VALUE_LEN {
            return Err(AttributeError::ConfigError(format!(
                "max_value_len {} exceeds wire limit {MAX_VALUE_LEN}",
                self.max_value_len
            )));
        }
        Ok(())
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }
}
