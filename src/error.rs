//! The error value produced by a factory.
//!
//! `CustomError` is an ordinary Rust error: it implements
//! [`std::error::Error`], displays as its message, and is meant to be returned
//! through `Err(..)` and `?` by the caller. The factory's contract ends at
//! constructing it.
//!
//! Messages are built from caller-supplied substitution values, which can hold
//! anything from user names to request data. Owned message text is zeroized
//! when the error is dropped.

use crate::DEFAULT_CODE;
use crate::logging::ErrorRecord;
use std::borrow::Cow;
use std::fmt;
use std::mem;
use zeroize::Zeroize;

/// Error value carrying a resolved code and message.
///
/// Two errors are equal when both code and message are equal.
#[must_use = "errors should be returned or handled"]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CustomError {
    code: u32,
    message: Cow<'static, str>,
}

impl CustomError {
    /// Create an error directly, bypassing any factory.
    #[inline]
    pub fn new(code: u32, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Resolved code; [`DEFAULT_CODE`] for unknown codes and raw messages.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Fully substituted message text.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// True when this error did not come from a configured template.
    #[inline]
    pub const fn is_default(&self) -> bool {
        self.code == DEFAULT_CODE
    }

    /// Take the code and message out of the error.
    ///
    /// The returned message is no longer zeroized on drop.
    pub fn into_parts(mut self) -> (u32, String) {
        let message = mem::take(&mut self.message).into_owned();
        (self.code, message)
    }

    /// Structured view for log emission. Borrows from `self`, so the record
    /// cannot outlive the error.
    #[inline]
    pub fn log_record(&self) -> ErrorRecord<'_> {
        ErrorRecord::new(self.code, self.message.as_ref())
    }

    /// Callback form of [`CustomError::log_record`].
    ///
    /// ```rust
    /// # use error_factory::CustomError;
    /// let err = CustomError::new(404, "no such user simon");
    /// let line = err.with_log_record(|rec| {
    ///     let mut out = String::new();
    ///     rec.write_to(&mut out).map(|_| out)
    /// });
    /// assert_eq!(line.unwrap(), "[E404] message='no such user simon'");
    /// ```
    #[inline]
    pub fn with_log_record<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorRecord<'_>) -> R,
    {
        let record = self.log_record();
        f(&record)
    }
}

impl Zeroize for CustomError {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.message {
            s.zeroize();
        }
        self.code = DEFAULT_CODE;
    }
}

impl Drop for CustomError {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomError")
            .field("code", &self.code)
            .field("message", &self.message.as_ref())
            .finish()
    }
}

impl fmt::Display for CustomError {
    /// Writes the message only; the code is available via [`CustomError::code`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CustomError {}
