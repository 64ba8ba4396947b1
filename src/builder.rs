use std::fmt;

use crate::attributes::Attributes;
use crate::buffer::MarkupBuffer;
use crate::content::Content;
use crate::error::Error;
use crate::options::{resolve, validate_name, BuilderOptions, ResolvedOptions, TagOptions};
use crate::safe::SafeString;

/// A nested-building callback.
///
/// It receives the builder itself, so anything it emits lands in the same
/// buffer as the surrounding tag. Returning `Some(text)` appends `text` as
/// escaped text content, which lets a callback's return value double as
/// inline text without an explicit append call.
pub type BodyFn<'a> = Box<dyn FnMut(&mut Builder) -> Result<Option<SafeString>, Error> + 'a>;

/// One tag invocation: content, attributes, option overrides and an
/// optional nested-building callback.
///
/// Constructed with combinators and consumed by [`Builder::tag`]:
///
/// ```rust
/// use safebuild::{Builder, TagCall};
///
/// let mut html = Builder::new();
/// html.tag("a", TagCall::new().content("home").attr("href", "/"))?;
/// assert_eq!(html.output().as_str(), "<a href=\"/\">home</a>\n");
/// # Ok::<(), safebuild::Error>(())
/// ```
#[derive(Default)]
pub struct TagCall<'a> {
    content: Content,
    attributes: Attributes,
    options: TagOptions,
    body: Option<BodyFn<'a>>,
}

impl<'a> TagCall<'a> {
    pub fn new() -> Self {
        TagCall::default()
    }

    /// The tag's body content. Collections render the tag once per element
    /// unless a body callback is supplied.
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    /// Replace the whole attribute set.
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set a single attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<SafeString>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Set a valueless attribute such as `disabled`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.flag(name);
        self
    }

    /// Replace all per-call option overrides at once.
    pub fn options(mut self, options: TagOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the namespace prefix for this call.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = Some(namespace.into());
        self
    }

    /// Override self-closing for this call.
    pub fn selfclose(mut self, selfclose: bool) -> Self {
        self.options.selfclose = Some(selfclose);
        self
    }

    /// Override indentation for this call.
    pub fn indent(mut self, indent: bool) -> Self {
        self.options.indent = Some(indent);
        self
    }

    /// Supply a nested-building callback.
    ///
    /// With a callback the tag is rendered exactly once; the callback fires
    /// once per content element (or once, if content is absent) inside that
    /// single tag. This is deliberately asymmetric with the no-callback
    /// case, where collection content renders one tag per element.
    pub fn body<F>(mut self, body: F) -> Self
    where
        F: FnMut(&mut Builder) -> Result<Option<SafeString>, Error> + 'a,
    {
        self.body = Some(Box::new(body));
        self
    }
}

impl fmt::Debug for TagCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TagCall")
            .field("content", &self.content)
            .field("attributes", &self.attributes)
            .field("options", &self.options)
            .field("body", &self.body.as_ref().map(|_| "..."))
            .finish()
    }
}

/// A markup builder.
///
/// Owns one append-only buffer; every tag call appends escaped fragments to
/// it and nested calls share it, so the accumulated document is available at
/// any point via [`Builder::output`]. A builder is a single-threaded,
/// linear (possibly recursive) call sequence; it is not meant to be shared
/// across threads.
#[derive(Debug, Default)]
pub struct Builder {
    buffer: MarkupBuffer,
    options: BuilderOptions,
}

impl Builder {
    /// A builder with the system defaults: no namespace, self-closing tags,
    /// newline after each closed tag.
    pub fn new() -> Self {
        Builder::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Builder {
            buffer: MarkupBuffer::new(),
            options,
        }
    }

    /// The builder-wide options, fixed at construction.
    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Render one tag.
    ///
    /// This is the canonical entry point; the element methods generated in
    /// the vocabulary layer are thin wrappers over it. Returns the builder
    /// for chaining with `?`.
    pub fn tag(&mut self, name: &str, call: TagCall<'_>) -> Result<&mut Self, Error> {
        let TagCall {
            content,
            attributes,
            options,
            mut body,
        } = call;
        let resolved = resolve(name, &options, &self.options)?;
        match body {
            Some(ref mut body) => {
                self.render_with_body(&resolved, &attributes, content.cardinality(), body)?;
            }
            None => match content {
                Content::Absent => self.render_item(&resolved, &attributes, None)?,
                Content::Scalar(value) => self.render_item(&resolved, &attributes, Some(&value))?,
                Content::Many(values) => {
                    for value in &values {
                        self.render_item(&resolved, &attributes, Some(value))?;
                    }
                }
            },
        }
        Ok(self)
    }

    /// Append text content outside any tag. Escaped unless already safe.
    pub fn append(&mut self, value: impl Into<SafeString>) -> Result<&mut Self, Error> {
        let value = value.into();
        self.buffer.append_text(&value)?;
        Ok(self)
    }

    /// Append pre-trusted text verbatim, without escaping.
    pub fn append_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.append(text);
        self
    }

    /// The accumulated output so far, marked safe: embedding it as content
    /// of another builder will not re-escape it.
    pub fn output(&self) -> SafeString {
        self.buffer.output()
    }

    /// Consume the builder, yielding the accumulated output marked safe.
    pub fn into_output(self) -> SafeString {
        self.buffer.into_output()
    }

    /// One tag for one content element (or for absent content).
    fn render_item(
        &mut self,
        resolved: &ResolvedOptions,
        attributes: &Attributes,
        item: Option<&SafeString>,
    ) -> Result<(), Error> {
        self.open_tag(resolved, attributes)?;
        let mark = self.buffer.len();
        // Present-but-empty content counts as an attempted body, so
        // `tag("div", "")` closes as <div></div>, never <div/>.
        let body_attempted = match item {
            Some(value) => {
                self.buffer.append_text(value)?;
                true
            }
            None => false,
        };
        self.close_tag(resolved, mark, body_attempted);
        Ok(())
    }

    /// One tag, with the callback fired once per content element.
    fn render_with_body(
        &mut self,
        resolved: &ResolvedOptions,
        attributes: &Attributes,
        fires: usize,
        body: &mut BodyFn<'_>,
    ) -> Result<(), Error> {
        self.open_tag(resolved, attributes)?;
        let mark = self.buffer.len();
        let mut body_attempted = false;
        for _ in 0..fires {
            if let Some(text) = body(&mut *self)? {
                self.buffer.append_text(&text)?;
                body_attempted = true;
            }
        }
        self.close_tag(resolved, mark, body_attempted);
        Ok(())
    }

    fn open_tag(
        &mut self,
        resolved: &ResolvedOptions,
        attributes: &Attributes,
    ) -> Result<(), Error> {
        self.buffer.append("<");
        self.buffer.append(&resolved.fullname);
        for (name, value) in attributes.iter() {
            validate_name("attribute", name)?;
            self.buffer.append(" ");
            self.buffer.append(name);
            if let Some(value) = value {
                self.buffer.append("=\"");
                self.buffer.append_attribute_value(value)?;
                self.buffer.append("\"");
            }
        }
        self.buffer.append(">");
        Ok(())
    }

    /// Self-closing is decided per rendered tag: the `>` emitted by
    /// `open_tag` is rewritten to `/>` only when no body was attempted and
    /// nothing was appended since the mark.
    fn close_tag(&mut self, resolved: &ResolvedOptions, mark: usize, body_attempted: bool) {
        if resolved.selfclose && !body_attempted && self.buffer.len() == mark {
            self.buffer.make_self_closing();
        } else {
            self.buffer.append("</");
            self.buffer.append(&resolved.fullname);
            self.buffer.append(">");
        }
        if resolved.indent {
            self.buffer.append("\n");
        }
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.buffer.as_str())
    }
}
