//! Structured log record for created errors.
//!
//! The factory never logs. Callers that do can turn a [`CustomError`] into an
//! [`ErrorRecord`], which borrows from the error and therefore cannot outlive
//! it, and hand its fields to whatever logging framework they use.
//!
//! Messages are built from caller data and can be arbitrarily long, so the
//! formatted output bounds the message field at [`MAX_FIELD_OUTPUT_LEN`] bytes.
//! The structured accessors return the full, untruncated text.
//!
//! [`CustomError`]: crate::CustomError

use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated fields.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Log view of a created error.
///
/// ```rust
/// # use error_factory::ErrorFactory;
/// let factory = ErrorFactory::new([(100, "hi {0}")]);
/// let err = factory.create_from_code(100, &["simon".into()]);
///
/// let record = err.log_record();
/// assert_eq!(record.code(), 100);
/// assert_eq!(record.message(), "hi simon");
/// assert!(!record.is_default());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorRecord<'a> {
    code: u32,
    message: &'a str,
}

impl<'a> ErrorRecord<'a> {
    #[inline]
    pub(crate) const fn new(code: u32, message: &'a str) -> Self {
        Self { code, message }
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    #[inline]
    pub const fn is_default(&self) -> bool {
        self.code == crate::DEFAULT_CODE
    }

    /// Write `[E<code>] message='<text>'` without intermediate allocation
    /// (unless the message has to be truncated).
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[E{}] message='{}'",
            self.code,
            truncate_with_indicator(self.message)
        )
    }
}

impl fmt::Display for ErrorRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Bound a field for formatted output.
///
/// Borrowed when no truncation is needed. Cuts on a UTF-8 boundary otherwise.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
