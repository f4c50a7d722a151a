//! Template configuration: the code → message template mapping a factory
//! is built from.
//!
//! # Key Coercion
//!
//! Configuration often arrives with string keys (`"100"`), for example from a
//! JSON object. Every key is coerced to a `u32` code on ingestion:
//!
//! - Unsigned and signed integers are taken as-is when they fit in `u32`
//! - Strings are trimmed and parsed as base-10 integers
//! - Anything else (negative numbers, `"abc"`, `""`) cannot name a code
//!
//! The lenient path ([`FromIterator`], [`From`] arrays, [`TemplateConfig::with`])
//! drops uncoercible keys, since no lookup could ever reach them. The strict
//! path ([`TemplateConfig::try_from_entries`]) reports them instead, which is
//! useful as a start-up check.
//!
//! When two keys coerce to the same code the later one wins.
//!
//! # Example
//!
//! ```rust
//! use error_factory::TemplateConfig;
//!
//! let config: TemplateConfig = [
//!     ("1", "Invalid key {0}"),
//!     ("2", "Invalid password"),
//!     ("3", "Object requires the {0} property"),
//! ]
//! .into();
//!
//! assert_eq!(config.len(), 3);
//! assert_eq!(config.get(3), Some("Object requires the {0} property"));
//! ```

use crate::template;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Key Coercion
// ============================================================================

/// A configuration key that can be coerced to a numeric code.
pub trait TemplateKey {
    /// Coerce to a code, or return a printable form of the rejected key.
    fn coerce(self) -> Result<u32, String>;
}

macro_rules! integer_keys {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TemplateKey for $ty {
                #[inline]
                fn coerce(self) -> Result<u32, String> {
                    u32::try_from(self).map_err(|_| self.to_string())
                }
            }
        )*
    };
}

integer_keys!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TemplateKey for &str {
    fn coerce(self) -> Result<u32, String> {
        self.trim().parse::<u32>().map_err(|_| self.to_owned())
    }
}

impl TemplateKey for String {
    fn coerce(self) -> Result<u32, String> {
        match self.trim().parse::<u32>() {
            Ok(code) => Ok(code),
            Err(_) => Err(self),
        }
    }
}

impl TemplateKey for &String {
    fn coerce(self) -> Result<u32, String> {
        self.as_str().coerce()
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Rejection reported by [`TemplateConfig::try_from_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Key cannot be coerced to a non-negative `u32` code.
    InvalidKey { key: String },
    /// Template contains a brace group such as `{10}` that looks like a
    /// placeholder but addresses a position past the single-digit range.
    UnsupportedPlaceholder { code: u32, placeholder: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key } => {
                write!(f, "template key {:?} is not a non-negative integer code", key)
            }
            Self::UnsupportedPlaceholder { code, placeholder } => write!(
                f,
                "template for code {} uses {} but only {{0}}..{{{}}} are substituted",
                code,
                placeholder,
                template::MAX_PLACEHOLDER
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Template Configuration
// ============================================================================

/// Immutable-once-shared mapping from code to message template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    templates: BTreeMap<u32, Cow<'static, str>>,
}

impl TemplateConfig {
    /// An empty configuration; a factory built from it knows no codes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry, skipping it if the key cannot be coerced.
    pub fn with(mut self, key: impl TemplateKey, template: impl Into<Cow<'static, str>>) -> Self {
        if let Ok(code) = key.coerce() {
            self.templates.insert(code, template.into());
        }
        self
    }

    /// Build a configuration, rejecting the first bad key or template.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidKey`] for a key that cannot be coerced
    /// - [`ConfigError::UnsupportedPlaceholder`] for a `{nn}` group
    pub fn try_from_entries<K, V, I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: TemplateKey,
        V: Into<Cow<'static, str>>,
    {
        let mut templates = BTreeMap::new();

        for (key, value) in entries {
            let code = key.coerce().map_err(|key| ConfigError::InvalidKey { key })?;
            let text: Cow<'static, str> = value.into();

            if let Some(group) = template::oversized_placeholder(&text) {
                return Err(ConfigError::UnsupportedPlaceholder {
                    code,
                    placeholder: group.to_owned(),
                });
            }
            templates.insert(code, text);
        }

        Ok(Self { templates })
    }

    /// Template registered for `code`.
    #[inline]
    pub fn get(&self, code: u32) -> Option<&str> {
        self.templates.get(&code).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        self.templates.contains_key(&code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.templates.keys().copied()
    }

    /// `(code, template)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.templates.iter().map(|(code, t)| (*code, t.as_ref()))
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateConfig
where
    K: TemplateKey,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let templates = iter
            .into_iter()
            .filter_map(|(key, value)| key.coerce().ok().map(|code| (code, value.into())))
            .collect();
        Self { templates }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for TemplateConfig
where
    K: TemplateKey,
    V: Into<Cow<'static, str>>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for TemplateConfig
where
    K: TemplateKey,
    V: Into<Cow<'static, str>>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}
