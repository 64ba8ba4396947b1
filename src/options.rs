use crate::error::Error;

/// Builder-wide formatting options, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuilderOptions {
    /// Prefix prepended to every emitted tag name, as `prefix:tag`.
    pub namespace: Option<String>,
    /// Render empty tags in the self-closing form `<tag/>`.
    pub selfclose: bool,
    /// Append a newline after each closed tag.
    pub indent: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            namespace: None,
            selfclose: true,
            indent: true,
        }
    }
}

/// Per-call overrides of the builder-wide options.
///
/// A field that is present wins over the builder-wide value; an absent field
/// falls back to it. There is deliberately no way to *unset* a builder-wide
/// namespace per call, only to replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    pub namespace: Option<String>,
    pub selfclose: Option<bool>,
    pub indent: Option<bool>,
}

/// Options after merging per-call values with the builder-wide defaults,
/// with the tag name already namespace-prefixed.
#[derive(Debug)]
pub(crate) struct ResolvedOptions {
    pub(crate) fullname: String,
    pub(crate) selfclose: bool,
    pub(crate) indent: bool,
}

pub(crate) fn resolve(
    tag: &str,
    call: &TagOptions,
    builder: &BuilderOptions,
) -> Result<ResolvedOptions, Error> {
    validate_name("tag", tag)?;
    let namespace = call.namespace.as_deref().or(builder.namespace.as_deref());
    let fullname = match namespace {
        Some(namespace) => {
            validate_name("namespace", namespace)?;
            format!("{}:{}", namespace, tag)
        }
        None => tag.to_string(),
    };
    Ok(ResolvedOptions {
        fullname,
        selfclose: call.selfclose.unwrap_or(builder.selfclose),
        indent: call.indent.unwrap_or(builder.indent),
    })
}

/// Minimal name check; full grammar validation is out of scope.
pub(crate) fn validate_name(kind: &str, name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidArguments(format!("empty {} name", kind)));
    }
    let invalid = name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '=' | '"' | '\'' | '/' | '&'));
    if invalid {
        return Err(Error::InvalidArguments(format!(
            "invalid character in {} name {:?}",
            kind, name
        )));
    }
    Ok(())
}
