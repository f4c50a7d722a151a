//! Convenience macros for building configurations and creating errors.
//!
//! # Usage
//!
//! ```rust
//! use error_factory::{Arg, ErrorFactory, create_error, templates};
//!
//! let factory = ErrorFactory::new(templates! {
//!     1 => "Invalid key {0}",
//!     2 => "Invalid password",
//!     100 => "hi {0}, here is your {1} message: {2}",
//! });
//!
//! let err = create_error!(factory, 100, "simon", Arg::MISSING, "you rock!");
//! assert_eq!(err.message(), "hi simon, here is your message: you rock!");
//! ```
//!
//! Values go through [`Arg::from`](crate::Arg), so strings, integers and
//! `Option`s of them are accepted directly. A bare `None` has no type to
//! infer from; write [`Arg::MISSING`](crate::Arg::MISSING) instead.

/// Build a [`TemplateConfig`](crate::TemplateConfig) from `code => template`
/// pairs.
///
/// Keys go through the same coercion as every other ingestion path, so string
/// keys work and uncoercible keys are dropped.
///
/// ```rust
/// # use error_factory::templates;
/// let config = templates! {
///     "404" => "no such user {0}",
///     500 => "internal error",
/// };
/// assert_eq!(config.get(404), Some("no such user {0}"));
/// assert_eq!(config.len(), 2);
/// ```
#[macro_export]
macro_rules! templates {
    () => {
        $crate::TemplateConfig::new()
    };
    ($($code:expr => $template:expr),+ $(,)?) => {
        $crate::TemplateConfig::new()$(.with($code, $template))+
    };
}

/// Create an error from a factory or a bound creation closure with variadic
/// values.
///
/// # Arguments
/// - `$source`: an [`ErrorFactory`](crate::ErrorFactory) or the closure from
///   [`ErrorFactory::using`](crate::ErrorFactory::using)
/// - `$key`: anything convertible into [`ErrorKey`](crate::ErrorKey)
/// - `$value`: zero or more substitution values
///
/// ```rust
/// # use error_factory::{ErrorFactory, create_error};
/// let make_error = ErrorFactory::using([(100, "goodbye {0}")]);
///
/// let err = create_error!(make_error, 100, "simon");
/// assert_eq!(err.message(), "goodbye simon");
///
/// let err = create_error!(make_error, "a custom error message");
/// assert_eq!(err.code(), 0);
/// ```
#[macro_export]
macro_rules! create_error {
    ($source:expr, $key:expr $(, $value:expr)* $(,)?) => {{
        use $crate::ErrorSource as _;
        ($source).create_error(
            ::core::convert::Into::<$crate::ErrorKey>::into($key),
            &[$($crate::Arg::from($value)),*],
        )
    }};
}
