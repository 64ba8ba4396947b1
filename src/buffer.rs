use std::borrow::Cow;

use crate::entity::{escape_attribute, escape_text, validate_content};
use crate::error::Error;
use crate::safe::SafeString;

/// Append-only accumulator of markup segments.
///
/// Everything in the buffer is already escaped or was explicitly marked safe
/// at the moment of insertion; no unescaped user content ever enters it.
#[derive(Debug, Default)]
pub(crate) struct MarkupBuffer {
    buffer: String,
}

impl MarkupBuffer {
    pub(crate) fn new() -> Self {
        MarkupBuffer {
            buffer: String::new(),
        }
    }

    /// Append structural syntax known not to require escaping,
    /// such as `<`, `>` and tag names.
    #[inline]
    pub(crate) fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append a value as text content.
    ///
    /// Safe values are concatenated verbatim; raw values are validated and
    /// escaped for the text context.
    pub(crate) fn append_text(&mut self, value: &SafeString) -> Result<(), Error> {
        match value {
            SafeString::Safe(text) => self.buffer.push_str(text),
            SafeString::Raw(text) => {
                validate_content(text)?;
                self.buffer.push_str(&escape_text(Cow::Borrowed(text)));
            }
        }
        Ok(())
    }

    /// Append a value as an attribute value.
    pub(crate) fn append_attribute_value(&mut self, value: &SafeString) -> Result<(), Error> {
        match value {
            SafeString::Safe(text) => self.buffer.push_str(text),
            SafeString::Raw(text) => {
                validate_content(text)?;
                self.buffer.push_str(&escape_attribute(Cow::Borrowed(text)));
            }
        }
        Ok(())
    }

    /// Current size, used to detect that a tag produced no body.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Rewrite the trailing `>` of an open tag into the self-closing `/>`.
    ///
    /// Only called when nothing was appended since the `>` was emitted.
    pub(crate) fn make_self_closing(&mut self) {
        debug_assert!(self.buffer.ends_with('>'));
        self.buffer.pop();
        self.buffer.push_str("/>");
    }

    #[inline]
    pub(crate) fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The accumulated output, marked safe.
    pub(crate) fn output(&self) -> SafeString {
        SafeString::Safe(self.buffer.clone())
    }

    /// Consume the buffer, yielding the accumulated output marked safe.
    pub(crate) fn into_output(self) -> SafeString {
        SafeString::Safe(self.buffer)
    }
}
