//! phtml-deps - RequireJS dependency extraction for Magento PHTML templates
//!
//! Magento templates declare which client-side modules must be initialized on
//! a DOM node in three places: `data-mage-init` attributes, `mageInit`
//! entries inside Knockout `data-bind` attributes, and
//! `<script type="text/x-magento-init">` bodies. None of these fragments is
//! valid standalone JavaScript or JSON, and the surrounding document is not
//! valid HTML either (PHP spans can sit inside attribute values). This crate
//! sanitizes the PHP spans, tokenizes the markup, parses each declaration
//! fragment as a JavaScript object literal, and collects the declared module
//! names, turning per-fragment failures into warnings instead of errors.
//!
//! ## Module Structure
//!
//! - `sanitize`: PHP delimiter replacement, run before tokenization
//! - `parsers`: object-literal fragment parsing on top of SWC
//! - `extract`: the three dependency-name extractors
//! - `collector`: HTML tokenizer sink driving the extractors per node
//! - `error`: fragment failure kinds

pub mod error;
pub mod extract;
pub mod parsers;
pub mod sanitize;

mod collector;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use serde::Serialize;

use crate::collector::DepCollector;

pub use crate::error::FragmentError;

/// Everything extracted from one template.
///
/// `dependencies` holds module names in document order; `warnings` holds the
/// raw source of every declaration fragment that failed to parse or had an
/// unexpected shape, verbatim, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub dependencies: Vec<String>,
    pub warnings: Vec<String>,
}

/// Extracts declared module dependencies from a PHTML template.
///
/// The whole document is processed in one synchronous pass over a collector
/// owned by this call, so repeated calls on the same input return identical
/// results. Malformed declarations surface in `warnings` and never abort the
/// parse.
///
/// # Examples
///
/// ```
/// use phtml_deps::parse;
///
/// let result = parse(r#"<div data-mage-init='{"Magento_Ui/js/core/app": {}}'></div>"#);
/// assert_eq!(result.dependencies, vec!["Magento_Ui/js/core/app"]);
/// assert!(result.warnings.is_empty());
/// ```
pub fn parse(document: &str) -> ParseResult {
    let sanitized = sanitize::replace_php_delimiters(document);

    let tokenizer = Tokenizer::new(DepCollector::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(sanitized.as_ref()));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.into_result()
}
