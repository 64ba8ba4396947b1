//! Proptest support for safebuild
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary text, safe
//! strings and content for feeding into a builder.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! safebuild = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::content::Content;
use crate::safe::SafeString;

const TEXT: &str = "[\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";
const NAME: &str = "[a-z][a-z0-9-]*";

/// Arbitrary text that is valid in markup output.
pub fn arb_text() -> impl Strategy<Value = String> {
    TEXT
}

/// Arbitrary raw (untrusted) [`SafeString`] values.
pub fn arb_raw() -> impl Strategy<Value = SafeString> {
    arb_text().prop_map(SafeString::Raw)
}

/// Arbitrary tag or attribute names that pass name validation.
pub fn arb_name() -> impl Strategy<Value = String> {
    NAME
}

/// Arbitrary [`Content`]: absent, scalar, or a collection.
pub fn arb_content() -> impl Strategy<Value = Content> {
    prop_oneof![
        Just(Content::Absent),
        arb_raw().prop_map(Content::Scalar),
        prop::collection::vec(arb_raw(), 0..5).prop_map(Content::Many),
    ]
}
