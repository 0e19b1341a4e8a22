//! PHP delimiter sanitizing.
//!
//! PHTML templates interleave PHP spans with markup, including inside HTML
//! attribute values. A quote character inside `<?php ... ?>` would otherwise
//! close the surrounding attribute early and desynchronize every attribute
//! after it, so each span is replaced with an inert token before the text
//! reaches the HTML tokenizer.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Token substituted for every PHP span. Deliberately unquoted: a quoted
/// placeholder inside a single-quoted attribute would corrupt the attribute
/// it was meant to protect.
pub const PHP_PLACEHOLDER: &str = "PHP_DELIMITER";

static PHP_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?(?:php|=)?[\s\S]*?\?>").unwrap());

/// Replaces every `<?php ... ?>` / `<?= ... ?>` span with [`PHP_PLACEHOLDER`].
///
/// Matching is non-greedy: a span ends at the first `?>`. An opening
/// delimiter with no close is left untouched.
pub fn replace_php_delimiters(input: &str) -> Cow<'_, str> {
    PHP_SPAN_REGEX.replace_all(input, PHP_PLACEHOLDER)
}
