//! Errors raised by the layout engine.

use crate::language::Language;

/// The requested layout pair or language cannot be served.
///
/// Both variants point at an inconsistency between the supported languages
/// and the registered tables. Any character input is valid, so there is no
/// data error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no layout table registered for {from} -> {to}")]
    MissingTable { from: Language, to: Language },

    #[error("unknown language tag: {0:?}")]
    UnknownLanguage(String),
}
