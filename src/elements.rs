use std::sync::OnceLock;

use ahash::HashSet;

use crate::builder::{Builder, TagCall};
use crate::error::Error;

/// Typed wrappers for the common HTML element names.
///
/// Each method is a thin layer over [`Builder::tag`]; the open-ended
/// vocabulary stays available through `tag` itself for anything not
/// listed here.
macro_rules! elements {
    ($($name:ident,)*) => {
        impl Builder {
            $(
                #[doc = concat!("Render a `", stringify!($name), "` tag.")]
                pub fn $name(&mut self, call: TagCall<'_>) -> Result<&mut Self, Error> {
                    self.tag(stringify!($name), call)
                }
            )*
        }

        const HTML_ELEMENT_NAMES: &[&str] = &[$(stringify!($name)),*];
    };
}

elements!(
    a, abbr, article, aside, b, blockquote, body, br, button, caption, code, col, dd, div, dl,
    dt, em, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head, header,
    hr, html, i, iframe, img, input, label, legend, li, link, main, meta, nav, ol, optgroup,
    option, p, pre, script, section, select, small, span, strong, style, table, tbody, td,
    textarea, tfoot, th, thead, title, tr, u, ul,
);

static HTML_ELEMENTS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Whether a name is one of the known HTML element names, matched
/// case-insensitively.
pub fn is_html_element(name: &str) -> bool {
    let names = HTML_ELEMENTS.get_or_init(|| HTML_ELEMENT_NAMES.iter().copied().collect());
    if names.contains(name) {
        return true;
    }
    // lowercase the name and look it up
    let name = name.to_ascii_lowercase();
    names.contains(name.as_str())
}
