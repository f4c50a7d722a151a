//! Positional placeholder substitution for message templates.
//!
//! A template is plain text containing zero or more placeholders of the form
//! `{n}`, where `n` is a single ASCII digit. Rendering replaces each
//! placeholder with the value at position `n`, then collapses every run of two
//! or more whitespace characters into a single space.
//!
//! # Placeholder Grammar
//!
//! - `{0}` through `{9}` are placeholders
//! - `{10}`, `{a}`, `{}` and lone braces are literal text
//! - There is no escaping; a literal `{3}` cannot be written
//!
//! # Missing Values
//!
//! A placeholder whose position has no value, or whose value is
//! [`Arg::MISSING`], renders as the empty string. The whitespace pass then
//! closes the gap that an empty substitution leaves between two words.
//!
//! ```rust
//! use error_factory::{Arg, template};
//!
//! let message = template::render(
//!     "hi {0}, here is your {1} message: {2}",
//!     &[Arg::from("simon"), Arg::MISSING, Arg::from("you rock!")],
//! );
//! assert_eq!(message, "hi simon, here is your message: you rock!");
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Highest placeholder position a template can address.
pub const MAX_PLACEHOLDER: usize = 9;

// ============================================================================
// Substitution Values
// ============================================================================

/// A single substitution value.
///
/// Either present text or absent. Absent values (and empty text) render as
/// the empty string.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Arg<'a>(Option<Cow<'a, str>>);

impl<'a> Arg<'a> {
    /// An absent value.
    pub const MISSING: Self = Arg(None);

    /// Wrap present text.
    #[inline]
    pub fn new(value: impl Into<Cow<'a, str>>) -> Self {
        Arg(Some(value.into()))
    }

    /// Text of this value, `None` when absent.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// True when the value is absent or empty.
    ///
    /// Both cases are treated alike everywhere a value is consumed.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.0.as_deref().is_none_or(str::is_empty)
    }

    /// Byte length of the text, zero when absent.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.as_deref().map_or(0, str::len)
    }

    /// Same as [`Arg::is_missing`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_missing()
    }

    /// Detach from any borrowed input.
    pub fn into_owned(self) -> Arg<'static> {
        Arg(self.0.map(|v| Cow::Owned(v.into_owned())))
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Arg({:?})", value),
            None => f.write_str("Arg(MISSING)"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg(Some(Cow::Borrowed(value)))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg(Some(Cow::Borrowed(value.as_str())))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg(Some(Cow::Owned(value)))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Arg(Some(value))
    }
}

impl<'a, T> From<Option<T>> for Arg<'a>
where
    T: Into<Arg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::MISSING, Into::into)
    }
}

macro_rules! arg_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg(Some(Cow::Owned(value.to_string())))
                }
            }
        )*
    };
}

arg_from_display!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, char, bool);

// ============================================================================
// Rendering
// ============================================================================

/// Substitute placeholders and collapse whitespace.
///
/// Never fails: unknown positions render empty and malformed braces are kept
/// as literal text.
pub fn render(template: &str, values: &[Arg<'_>]) -> String {
    let capacity = template.len() + values.iter().map(Arg::len).sum::<usize>();
    let mut substituted = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (head, tail) = rest.split_at(open);
        substituted.push_str(head);

        match placeholder_at(tail) {
            Some(index) => {
                if let Some(value) = values.get(index).and_then(Arg::as_str) {
                    substituted.push_str(value);
                }
                // `{d}` is always three ASCII bytes
                rest = &tail[3..];
            }
            None => {
                substituted.push('{');
                rest = &tail[1..];
            }
        }
    }
    substituted.push_str(rest);

    if has_whitespace_run(&substituted) {
        collapse_whitespace(&substituted)
    } else {
        substituted
    }
}

/// Replace every run of two or more whitespace characters with one space.
///
/// Single whitespace characters (including a lone tab or newline) are kept
/// as they are.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // (start byte, char count) of the pending whitespace run
    let mut run: Option<(usize, usize)> = None;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            match run.as_mut() {
                Some((_, count)) => *count += 1,
                None => run = Some((idx, 1)),
            }
            continue;
        }
        if let Some((start, count)) = run.take() {
            flush_run(&mut out, &text[start..idx], count);
        }
        out.push(c);
    }
    if let Some((start, count)) = run {
        flush_run(&mut out, &text[start..], count);
    }

    out
}

#[inline]
fn flush_run(out: &mut String, run: &str, count: usize) {
    if count >= 2 {
        out.push(' ');
    } else {
        out.push_str(run);
    }
}

fn has_whitespace_run(text: &str) -> bool {
    let mut previous_ws = false;
    for c in text.chars() {
        let ws = c.is_whitespace();
        if ws && previous_ws {
            return true;
        }
        previous_ws = ws;
    }
    false
}

/// Position addressed by a placeholder at the very start of `s`.
#[inline]
fn placeholder_at(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'{', digit @ b'0'..=b'9', b'}', ..] => Some(usize::from(digit - b'0')),
        _ => None,
    }
}

// ============================================================================
// Inspection
// ============================================================================

/// Placeholder positions in order of appearance, duplicates included.
///
/// ```rust
/// use error_factory::template;
///
/// let found = template::placeholders("{1} then {0} then {1}");
/// assert_eq!(found.as_slice(), &[1, 0, 1]);
/// ```
pub fn placeholders(template: &str) -> SmallVec<[usize; 8]> {
    let mut found = SmallVec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let tail = &rest[open..];
        match placeholder_at(tail) {
            Some(index) => {
                found.push(index);
                rest = &tail[3..];
            }
            None => rest = &tail[1..],
        }
    }

    found
}

/// Number of values a template consumes (highest position + 1).
pub fn arity(template: &str) -> usize {
    placeholders(template).iter().max().map_or(0, |max| max + 1)
}

/// First brace group that looks like a placeholder but addresses a position
/// beyond [`MAX_PLACEHOLDER`], such as `{10}`.
///
/// Such groups are rendered literally, which is rarely what a template author
/// meant.
pub fn oversized_placeholder(template: &str) -> Option<&str> {
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let tail = &rest[open..];
        if let Some(close) = tail.find('}') {
            let inner = &tail[1..close];
            if inner.len() > 1 && inner.bytes().all(|b| b.is_ascii_digit()) {
                return Some(&tail[..=close]);
            }
        }
        rest = &tail[1..];
    }

    None
}
