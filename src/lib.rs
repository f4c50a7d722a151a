//! # Error Factory
//!
//! Configuration-driven error values built from numeric-code message
//! templates.
//!
//! Register a mapping from integer codes to message templates once, then
//! create errors by code with positional substitution values. Every call
//! returns a [`CustomError`] carrying the resolved code and message; nothing
//! in this crate fails, panics, or logs.
//!
//! ## Quick Start
//!
//! ```rust
//! use error_factory::{Arg, ErrorFactory, Result};
//!
//! let errors = ErrorFactory::new([
//!     (1, "Invalid key {0}"),
//!     (2, "Invalid password"),
//!     (3, "Object requires the {0} property"),
//! ]);
//!
//! fn check(errors: &ErrorFactory, key: &str) -> Result<()> {
//!     if key.is_empty() {
//!         return Err(errors.create(1, &[Arg::from("<empty>")]));
//!     }
//!     Ok(())
//! }
//!
//! let err = check(&errors, "").unwrap_err();
//! assert_eq!(err.code(), 1);
//! assert_eq!(err.to_string(), "Invalid key <empty>");
//! ```
//!
//! ## Templates
//!
//! Placeholders are `{0}` through `{9}`. Positions without a value render as
//! the empty string, and runs of whitespace left behind are collapsed to a
//! single space. See [`template`] for the exact rules.
//!
//! ## Defaults
//!
//! Unknown codes and raw messages produce [`DEFAULT_CODE`]. When no usable
//! message was supplied the message is [`DEFAULT_MESSAGE`]. See [`factory`]
//! for the full resolution order.
//!
//! ## Bound Form
//!
//! ```rust
//! use error_factory::{ErrorFactory, create_error};
//!
//! let make_error = ErrorFactory::using([(100, "goodbye {0}")]);
//! let err = create_error!(make_error, 100, "simon");
//! assert_eq!(err.message(), "goodbye simon");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod config;
pub mod convenience;
pub mod error;
pub mod factory;
pub mod logging;
pub mod template;

pub use config::*;
pub use error::*;
pub use factory::*;
pub use logging::*;
pub use template::Arg;

/// Code carried by errors that did not resolve to a configured template.
pub const DEFAULT_CODE: u32 = 0;

/// Message used when neither a template nor a caller-supplied message applies.
pub const DEFAULT_MESSAGE: &str = "Unknown Error";

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, CustomError>;
