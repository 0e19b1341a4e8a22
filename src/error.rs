//! Failure kinds for object-literal fragment parsing.

use thiserror::Error;

/// Why a JavaScript fragment yielded no dependency names.
///
/// Both kinds are recoverable by design: the node collector converts them
/// into a warning carrying the raw offending fragment and keeps scanning the
/// rest of the document.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The fragment is not syntactically valid JavaScript.
    #[error("invalid javascript fragment: {0}")]
    Syntax(String),

    /// The fragment parsed, but does not have the expected object structure.
    #[error("unexpected fragment shape: {0}")]
    Shape(&'static str),
}
