use std::borrow::Cow;
use std::fmt;

/// A string that knows whether it is trusted markup.
///
/// Everything that enters a [`Builder`](crate::Builder) is a `SafeString`.
/// The `Raw` variant is untrusted text and gets escaped at the point of
/// insertion; the `Safe` variant is markup that is already escaped for its
/// context and is concatenated verbatim. This makes it possible to embed the
/// output of one builder into another without double escaping.
///
/// Plain strings and scalars convert into the `Raw` variant; use
/// [`SafeString::safe`] only for text you know is properly escaped already.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafeString {
    /// Untrusted text, escaped on insertion.
    Raw(String),
    /// Markup already escaped for its context, inserted verbatim.
    Safe(String),
}

impl SafeString {
    /// Mark text as trusted markup, exempt from escaping.
    pub fn safe(text: impl Into<String>) -> Self {
        SafeString::Safe(text.into())
    }

    /// Untrusted text, escaped when it is inserted into a buffer.
    pub fn raw(text: impl Into<String>) -> Self {
        SafeString::Raw(text.into())
    }

    /// Whether this string is trusted markup.
    #[inline]
    pub fn is_safe(&self) -> bool {
        matches!(self, SafeString::Safe(_))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            SafeString::Raw(text) => text,
            SafeString::Safe(text) => text,
        }
    }

    #[inline]
    pub fn into_string(self) -> String {
        match self {
            SafeString::Raw(text) => text,
            SafeString::Safe(text) => text,
        }
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SafeString {
    fn from(text: &str) -> Self {
        SafeString::Raw(text.to_string())
    }
}

impl From<String> for SafeString {
    fn from(text: String) -> Self {
        SafeString::Raw(text)
    }
}

impl From<Cow<'_, str>> for SafeString {
    fn from(text: Cow<'_, str>) -> Self {
        SafeString::Raw(text.into_owned())
    }
}

impl From<char> for SafeString {
    fn from(c: char) -> Self {
        SafeString::Raw(c.to_string())
    }
}

macro_rules! safe_string_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SafeString {
                fn from(value: $t) -> Self {
                    SafeString::Raw(value.to_string())
                }
            }
        )*
    };
}

safe_string_from_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
