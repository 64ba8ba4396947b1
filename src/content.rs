use crate::safe::SafeString;

/// The body content of a tag call, decided by the caller at the call site.
///
/// This replaces runtime argument sniffing with an explicit variant: absent
/// content, a single scalar, or a collection. Strings always convert to
/// `Scalar` even though they are iterable; only explicit collection types
/// produce `Many`. Without a body callback a tag is rendered once per
/// element of `Many`; with one the tag renders once and the callback fires
/// once per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Absent,
    Scalar(SafeString),
    Many(Vec<SafeString>),
}

impl Content {
    /// How many times a body callback fires for this content:
    /// once for absent or scalar content, once per element for `Many`.
    pub(crate) fn cardinality(&self) -> usize {
        match self {
            Content::Absent | Content::Scalar(_) => 1,
            Content::Many(values) => values.len(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Absent
    }
}

impl From<SafeString> for Content {
    fn from(value: SafeString) -> Self {
        Content::Scalar(value)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Scalar(text.into())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Scalar(text.into())
    }
}

macro_rules! content_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Content {
                fn from(value: $t) -> Self {
                    Content::Scalar(value.into())
                }
            }
        )*
    };
}

content_from_scalar!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<SafeString>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Content::Scalar(value.into()),
            None => Content::Absent,
        }
    }
}

impl<T: Into<SafeString>> From<Vec<T>> for Content {
    fn from(values: Vec<T>) -> Self {
        Content::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SafeString> + Clone> From<&[T]> for Content {
    fn from(values: &[T]) -> Self {
        Content::Many(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<SafeString>, const N: usize> From<[T; N]> for Content {
    fn from(values: [T; N]) -> Self {
        Content::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SafeString>> FromIterator<T> for Content {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Content::Many(iter.into_iter().map(Into::into).collect())
    }
}
