//! Compiled message representation.
//!
//! A [`CompiledFormatter`] is the parsed form of a pattern: an immutable,
//! ordered list of fragments. These types are public so tooling can inspect
//! what a catalog entry will render.

use std::collections::BTreeMap;
use std::fmt::{Display, Error as FmtError, Formatter, Result as FmtResult};

/// Formatting options attached to an argument fragment, forwarded to the
/// formatter factory at render time (e.g. `{"type": "or"}`).
pub type FormatOptions = BTreeMap<String, serde_json::Value>;

/// One literal or argument-referencing piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Literal text, appended unconditionally.
    Text(String),
    /// A reference to one of the request's arguments.
    Argument {
        reference: ArgumentRef,
        options: FormatOptions,
    },
}

/// How an argument fragment finds its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentRef {
    /// Position in the request's positional arguments.
    ByIndex(usize),
    /// Name in the request's named arguments.
    ByName(String),
}

/// An immutable sequence of fragments, produced once at registration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledFormatter {
    fragments: Vec<Fragment>,
}

impl CompiledFormatter {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// A formatter that always renders `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Fragment::Text(text.into())])
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl Display for ArgumentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ArgumentRef::ByIndex(index) => write!(f, "[{index}]"),
            ArgumentRef::ByName(name) => write!(f, "[{name:?}]"),
        }
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Fragment::Text(text) => write!(f, "text({text:?})"),
            Fragment::Argument { reference, options } if options.is_empty() => {
                write!(f, "arg({reference})")
            }
            Fragment::Argument { reference, options } => {
                let options = serde_json::to_string(options).map_err(|_| FmtError)?;
                write!(f, "arg({reference}, {options})")
            }
        }
    }
}

impl Display for CompiledFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("CompiledFormatter(")?;
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{fragment}")?;
        }
        f.write_str(")")
    }
}
