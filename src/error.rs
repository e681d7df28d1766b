//! # Error Types
//!
//! This module defines all error types for the tab generator.
//!
//! Unresolvable notes are never errors: a malformed name, an `Unknown`
//! marker or a pitch outside the fretboard all become rests. Errors are
//! reserved for bad configuration and unreadable input documents, and they
//! are always raised before any rendering starts.
//!
//! ## Error Types
//! - `ConfigError` - Invalid tuning, fret range or measure sizing
//! - `InputError` - Pitch-estimate JSON that cannot be read
//!
//! ## Usage
//! ```rust
//! use tabgen::{generate_tab_from_json, TabConfig, TabError};
//!
//! match generate_tab_from_json(r#"[{"note": "E4"}]"#, &TabConfig::default()) {
//!     Ok(tab) => println!("{}", tab),
//!     Err(TabError::InputError(message)) => eprintln!("Bad input: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabError {
    /// Invalid configuration.
    ///
    /// Occurs when a tuning does not have exactly six valid strings, when the
    /// fret bound is negative, or when measure sizing is not positive.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::ConfigError("notes-per-measure must be positive, got 0".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: notes-per-measure must be positive, got 0");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Pitch-estimate input that could not be decoded.
    ///
    /// # Example
    /// ```
    /// # use tabgen::TabError;
    /// let err = TabError::InputError("expected value at line 1 column 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch input: expected value at line 1 column 1");
    /// ```
    #[error("Invalid pitch input: {0}")]
    InputError(String),
}
