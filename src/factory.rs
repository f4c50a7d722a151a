//! The error factory: code lookup, substitution, and default fallback.
//!
//! # Resolution Order
//!
//! [`ErrorFactory::create`] takes an [`ErrorKey`] and a slice of substitution
//! values and resolves them like this:
//!
//! 1. **Known code** - the key is a code registered in the configuration.
//!    The template is rendered with the values and the error carries that code.
//! 2. **Anything else** - unknown code, raw message, or an empty factory.
//!    The error carries [`DEFAULT_CODE`] and its message is:
//!    - the key itself when no values were given (a code is rendered as its
//!      decimal text), or
//!    - the first value when at least one value was given.
//!
//!    In both cases an empty message becomes [`DEFAULT_MESSAGE`].
//!
//! The second bullet of step 2 means the key is ignored as a message source
//! as soon as a value is present: `create(100, ["blah"])` on a factory that
//! does not know `100` yields `"blah"`, not `"100"` or `"100 blah"`. This is
//! the fallback contract existing callers rely on.
//!
//! Nothing here fails. Every input resolves to a [`CustomError`].

use crate::config::TemplateConfig;
use crate::error::CustomError;
use crate::template::{self, Arg};
use crate::{DEFAULT_CODE, DEFAULT_MESSAGE};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Error Key
// ============================================================================

/// First argument of [`ErrorFactory::create`]: a code to look up, or a raw
/// message to use verbatim.
///
/// Integers convert to [`ErrorKey::Code`]; strings convert to
/// [`ErrorKey::Message`]. A numeric string such as `"100"` is a message, not
/// a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// Code to look up in the configuration.
    Code(u32),
    /// Raw message, never looked up.
    Message(Cow<'static, str>),
}

impl ErrorKey {
    /// The code, when this key is one.
    #[inline]
    pub const fn as_code(&self) -> Option<u32> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Message(_) => None,
        }
    }

    /// Message used when this key falls through to the default path with no
    /// values.
    fn into_fallback_message(self) -> Cow<'static, str> {
        match self {
            Self::Message(text) if !text.is_empty() => text,
            Self::Code(code) if code != DEFAULT_CODE => Cow::Owned(code.to_string()),
            _ => Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Message(text) => f.write_str(text),
        }
    }
}

macro_rules! key_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ErrorKey {
                #[inline]
                fn from(code: $ty) -> Self {
                    Self::Code(u32::from(code))
                }
            }
        )*
    };
}

key_from_unsigned!(u8, u16, u32);

// Wider and signed integers that do not fit a code cannot match one; they
// keep their text so the no-value fallback still shows what was passed.
macro_rules! key_from_wide {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ErrorKey {
                #[inline]
                fn from(value: $ty) -> Self {
                    match u32::try_from(value) {
                        Ok(code) => Self::Code(code),
                        Err(_) => Self::Message(Cow::Owned(value.to_string())),
                    }
                }
            }
        )*
    };
}

key_from_wide!(u64, usize, i8, i16, i32, i64, isize);

impl From<&'static str> for ErrorKey {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::Message(Cow::Borrowed(text))
    }
}

impl From<String> for ErrorKey {
    #[inline]
    fn from(text: String) -> Self {
        Self::Message(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for ErrorKey {
    #[inline]
    fn from(text: Cow<'static, str>) -> Self {
        Self::Message(text)
    }
}

// ============================================================================
// Error Factory
// ============================================================================

/// Builds [`CustomError`] values from a [`TemplateConfig`].
///
/// The configuration is fixed at construction and only readable afterwards;
/// building a factory from different templates means building a new factory.
/// Factories share nothing with each other and are `Send + Sync`.
///
/// ```rust
/// use error_factory::{Arg, ErrorFactory};
///
/// let factory = ErrorFactory::new([
///     (1, "Invalid key {0}"),
///     (3, "Object requires the {0} property"),
/// ]);
///
/// let err = factory.create(3, &[Arg::from("name")]);
/// assert_eq!(err.code(), 3);
/// assert_eq!(err.message(), "Object requires the name property");
///
/// let err = factory.create_message("disk on fire");
/// assert_eq!(err.code(), 0);
/// assert_eq!(err.message(), "disk on fire");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorFactory {
    templates: TemplateConfig,
}

impl ErrorFactory {
    /// Code used for unknown codes and raw messages.
    pub const DEFAULT_CODE: u32 = DEFAULT_CODE;

    /// Message used when no usable message was supplied.
    pub const DEFAULT_MESSAGE: &'static str = DEFAULT_MESSAGE;

    /// Build a factory from a template configuration.
    #[inline]
    pub fn new(templates: impl Into<TemplateConfig>) -> Self {
        Self {
            templates: templates.into(),
        }
    }

    /// Build a factory and return only its creation operation.
    ///
    /// The returned closure owns its factory; it is unaffected by any other
    /// factory or closure built from a different configuration.
    ///
    /// ```rust
    /// use error_factory::{Arg, ErrorFactory};
    ///
    /// let make_error = ErrorFactory::using([(100, "goodbye {0}")]);
    /// let err = make_error(100.into(), &[Arg::from("simon")]);
    /// assert_eq!(err.message(), "goodbye simon");
    /// ```
    pub fn using(
        templates: impl Into<TemplateConfig>,
    ) -> impl Fn(ErrorKey, &[Arg<'_>]) -> CustomError + Send + Sync + 'static {
        let factory = Self::new(templates);
        move |key: ErrorKey, values: &[Arg<'_>]| factory.create(key, values)
    }

    /// Read-only view of the templates this factory resolves against.
    #[inline]
    pub const fn templates(&self) -> &TemplateConfig {
        &self.templates
    }

    /// Whether `code` resolves to a template.
    #[inline]
    pub fn knows(&self, code: u32) -> bool {
        self.templates.contains(code)
    }

    /// Create an error from a code or raw message plus substitution values.
    ///
    /// See the [module docs](crate::factory) for the resolution order.
    pub fn create(&self, key: impl Into<ErrorKey>, values: &[Arg<'_>]) -> CustomError {
        let key = key.into();

        let resolved = key
            .as_code()
            .and_then(|code| self.templates.get(code).map(|template| (code, template)));

        match resolved {
            Some((code, template)) => CustomError::new(code, template::render(template, values)),
            None => Self::fallback(key, values),
        }
    }

    /// Create an error from a code.
    ///
    /// Equivalent to [`ErrorFactory::create`] with [`ErrorKey::Code`].
    #[inline]
    pub fn create_from_code(&self, code: u32, values: &[Arg<'_>]) -> CustomError {
        self.create(ErrorKey::Code(code), values)
    }

    /// Create a default-coded error carrying `text`, or [`DEFAULT_MESSAGE`]
    /// when `text` is empty.
    #[inline]
    pub fn create_message(&self, text: impl Into<Cow<'static, str>>) -> CustomError {
        self.create(ErrorKey::Message(text.into()), &[])
    }

    fn fallback(key: ErrorKey, values: &[Arg<'_>]) -> CustomError {
        let message = match values.first() {
            Some(first) => match first.as_str() {
                Some(text) if !text.is_empty() => Cow::Owned(text.to_owned()),
                _ => Cow::Borrowed(DEFAULT_MESSAGE),
            },
            None => key.into_fallback_message(),
        };

        CustomError::new(DEFAULT_CODE, message)
    }
}

impl From<TemplateConfig> for ErrorFactory {
    #[inline]
    fn from(templates: TemplateConfig) -> Self {
        Self { templates }
    }
}

// ============================================================================
// Creation Seam
// ============================================================================

/// Anything that can create errors: a factory, or the closure returned by
/// [`ErrorFactory::using`].
///
/// Exists so [`create_error!`](crate::create_error) works with both.
pub trait ErrorSource {
    /// Same resolution as [`ErrorFactory::create`].
    fn create_error(&self, key: ErrorKey, values: &[Arg<'_>]) -> CustomError;
}

impl ErrorSource for ErrorFactory {
    #[inline]
    fn create_error(&self, key: ErrorKey, values: &[Arg<'_>]) -> CustomError {
        self.create(key, values)
    }
}

impl<F> ErrorSource for F
where
    F: Fn(ErrorKey, &[Arg<'_>]) -> CustomError,
{
    #[inline]
    fn create_error(&self, key: ErrorKey, values: &[Arg<'_>]) -> CustomError {
        self(key, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> ErrorFactory {
        ErrorFactory::new([(100, "hi {0}")])
    }

    #[test]
    fn known_code_substitutes() {
        let err = greeting().create(100, &[Arg::from("simon")]);
        assert_eq!(err.code(), 100);
        assert_eq!(err.message(), "hi simon");
    }

    #[test]
    fn known_code_without_values() {
        let err = greeting().create(100, &[]);
        assert_eq!(err.code(), 100);
        assert_eq!(err.message(), "hi ");
    }

    #[test]
    fn empty_factory_uses_first_value_as_message() {
        let err = ErrorFactory::default().create(100, &[Arg::from("blah")]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "blah");
    }

    #[test]
    fn unknown_code_alone_becomes_message() {
        let err = greeting().create(404, &[]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "404");
    }

    #[test]
    fn zero_code_alone_is_default_message() {
        let err = ErrorFactory::default().create(0, &[]);
        assert_eq!(err.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn raw_message_alone() {
        let err = greeting().create("a custom error message", &[]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "a custom error message");
    }

    #[test]
    fn empty_raw_message_is_default() {
        let err = greeting().create_message("");
        assert_eq!(err.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn second_argument_wins_over_raw_message() {
        let err = greeting().create("ignored", &[Arg::from("used")]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "used");
    }

    #[test]
    fn missing_second_argument_is_default_not_key() {
        let err = greeting().create(404, &[Arg::MISSING, Arg::from("later")]);
        assert_eq!(err.message(), DEFAULT_MESSAGE);

        let err = greeting().create("ignored", &[Arg::from("")]);
        assert_eq!(err.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn numeric_string_is_not_a_code() {
        let err = greeting().create("100", &[]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "100");
    }

    #[test]
    fn negative_integer_key_is_unknown() {
        let err = greeting().create(-1, &[]);
        assert_eq!(err.code(), DEFAULT_CODE);
        assert_eq!(err.message(), "-1");
    }

    #[test]
    fn identical_inputs_produce_equal_errors() {
        let factory = ErrorFactory::new([(7, "{0} and {1}")]);
        let values = [Arg::from("a"), Arg::from("b")];
        assert_eq!(factory.create(7, &values), factory.create(7, &values));
    }

    #[test]
    fn entry_points_agree_with_create() {
        let factory = greeting();
        let values = [Arg::from("simon")];
        assert_eq!(factory.create_from_code(100, &values), factory.create(100, &values));
        assert_eq!(factory.create_message("m"), factory.create("m", &[]));
    }

    #[test]
    fn templates_are_readable() {
        let factory = greeting();
        assert_eq!(factory.templates().get(100), Some("hi {0}"));
        assert!(factory.knows(100));
        assert!(!factory.knows(101));
    }

    #[test]
    fn constants() {
        assert_eq!(ErrorFactory::DEFAULT_CODE, 0);
        assert_eq!(ErrorFactory::DEFAULT_MESSAGE, "Unknown Error");
    }

    #[test]
    fn bound_closures_are_independent() {
        let goodbye = ErrorFactory::using([(100, "goodbye {0}")]);
        let hello = ErrorFactory::using([(100, "hi {0}")]);

        let a = goodbye(100.into(), &[Arg::from("simon")]);
        let b = hello(100.into(), &[Arg::from("simon")]);
        assert_eq!(a.message(), "goodbye simon");
        assert_eq!(b.message(), "hi simon");
    }

    #[test]
    fn factory_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorFactory>();
        assert_send_sync::<CustomError>();
    }

    #[test]
    fn error_source_for_factory_and_closure() {
        let factory = greeting();
        let bound = ErrorFactory::using([(100, "hi {0}")]);
        let values = [Arg::from("x")];

        assert_eq!(
            factory.create_error(ErrorKey::Code(100), &values),
            bound.create_error(ErrorKey::Code(100), &values)
        );
    }

    #[test]
    fn key_display() {
        assert_eq!(ErrorKey::from(5u8).to_string(), "5");
        assert_eq!(ErrorKey::from("text").to_string(), "text");
    }
}
