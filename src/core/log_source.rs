//! Log source tags

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// Origin tag attached to a log call.
///
/// `LogSource::None` marks a message with no particular origin. Tagged
/// sources carry a `kind` that identifies the source and an optional
/// per-instance `detail` annotation.
///
/// Equality is by kind only. Two tags of the same kind with different
/// details compare equal and filter as one; the detail shows up in
/// rendered output but never influences filtering. This is a documented
/// surprise of the source model, kept on purpose: a filter entry for
/// `LogSource::named("net")` suppresses every `net` tag regardless of
/// which connection produced it.
///
/// `None` is an ordinary filter citizen: it equals only itself, must be
/// explicitly added to a filter to be matched, and is never implicitly
/// excluded.
#[derive(Debug, Clone)]
pub enum LogSource {
    None,
    Tag {
        kind: Cow<'static, str>,
        detail: Option<String>,
    },
}

impl LogSource {
    #[must_use]
    pub fn named(kind: impl Into<Cow<'static, str>>) -> Self {
        LogSource::Tag {
            kind: kind.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn detailed(kind: impl Into<Cow<'static, str>>, detail: impl Into<String>) -> Self {
        LogSource::Tag {
            kind: kind.into(),
            detail: Some(detail.into()),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, LogSource::None)
    }

    /// The identity of this source, if it has one.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            LogSource::None => None,
            LogSource::Tag { kind, .. } => Some(kind),
        }
    }

    /// Renderable name for formatter output: the kind alone, or
    /// `kind(detail)` when a detail is attached. `None` has no name.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self {
            LogSource::None => None,
            LogSource::Tag { kind, detail: None } => Some(kind.to_string()),
            LogSource::Tag {
                kind,
                detail: Some(detail),
            } => Some(format!("{}({})", kind, detail)),
        }
    }
}

impl Default for LogSource {
    fn default() -> Self {
        LogSource::None
    }
}

impl PartialEq for LogSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogSource::None, LogSource::None) => true,
            (LogSource::Tag { kind: a, .. }, LogSource::Tag { kind: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for LogSource {}

impl Hash for LogSource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            LogSource::None => state.write_u8(0),
            LogSource::Tag { kind, .. } => {
                state.write_u8(1);
                kind.hash(state);
            }
        }
    }
}
