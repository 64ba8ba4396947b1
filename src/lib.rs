#![forbid(unsafe_code)]

//! safebuild is a safety-aware HTML/XML markup builder.
//!
//! Tag trees are built by invoking tag operations instead of writing literal
//! markup strings. Every piece of content is escaped on insertion unless it
//! was explicitly marked as trusted markup ([`SafeString::safe`]); trusted
//! fragments, including the output of another builder, are concatenated
//! verbatim, so composing builders never double-escapes.
//!
//! ```rust
//! use safebuild::{Builder, TagCall};
//!
//! let mut html = Builder::new();
//! html.tag("h1", TagCall::new().content("Cats & Dogs"))?;
//! html.tag("ul", TagCall::new().content(vec!["cat", "dog"]).body(|b| {
//!     b.tag("li", TagCall::new().content("pet"))?;
//!     Ok(None)
//! }))?;
//! assert_eq!(
//!     html.output().as_str(),
//!     "<h1>Cats &amp; Dogs</h1>\n<ul><li>pet</li>\n<li>pet</li>\n</ul>\n"
//! );
//! # Ok::<(), safebuild::Error>(())
//! ```
//!
//! Collection content renders a tag once per element; adding a body callback
//! flips this around: the tag renders once and the callback fires once per
//! element inside it. Builder-wide options (namespace prefix, self-closing,
//! indentation) are set at construction through [`BuilderOptions`] and can
//! be overridden per call.

mod attributes;
mod buffer;
mod builder;
mod content;
mod elements;
mod entity;
mod error;
mod options;
#[cfg(feature = "proptest")]
pub mod proptest;
mod safe;

pub use attributes::Attributes;
pub use builder::{BodyFn, Builder, TagCall};
pub use content::Content;
pub use elements::is_html_element;
pub use error::Error;
pub use options::{BuilderOptions, TagOptions};
pub use safe::SafeString;
