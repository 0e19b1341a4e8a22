//! Tokenizer sink that drives the extractors over HTML nodes.

use std::cell::{Cell, RefCell};
use std::mem;

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult};

use crate::ParseResult;
use crate::error::FragmentError;
use crate::extract::{
    MAGE_INIT_BINDING, extract_data_binding_deps, extract_init_script_deps,
    extract_inline_attribute_deps,
};

const MAGE_INIT_ATTR: &str = "data-mage-init";
const DATA_BIND_ATTR: &str = "data-bind";
const INIT_SCRIPT_TYPE: &str = "text/x-magento-init";

/// Accumulates dependency names and warnings over one tokenizer pass.
///
/// Two states: outside a target script (the default) and inside one, where
/// character tokens are buffered until the closing tag. A failed extraction
/// records the raw offending fragment as a warning and never aborts the pass.
///
/// Fields are interior-mutable because html5ever's `TokenSink` hands out
/// `&self`; the tokenizer delivers tokens synchronously on one thread, so no
/// borrow is ever held across a callback.
#[derive(Default)]
pub(crate) struct DepCollector {
    dependencies: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    in_init_script: Cell<bool>,
    script_buf: RefCell<String>,
}

impl DepCollector {
    pub(crate) fn into_result(self) -> ParseResult {
        ParseResult {
            dependencies: self.dependencies.into_inner(),
            warnings: self.warnings.into_inner(),
        }
    }

    fn record(&self, outcome: Result<Vec<String>, FragmentError>, raw: &str) {
        match outcome {
            Ok(deps) => self.dependencies.borrow_mut().extend(deps),
            Err(_) => self.warnings.borrow_mut().push(raw.to_string()),
        }
    }

    fn open_node(&self, tag: &Tag) -> TokenSinkResult<()> {
        if let Some(value) = attr_value(tag, MAGE_INIT_ATTR) {
            self.record(extract_inline_attribute_deps(value), value);
        }
        // Independent of data-mage-init: both can fire on the same node.
        if let Some(value) = attr_value(tag, DATA_BIND_ATTR)
            && value.contains(MAGE_INIT_BINDING)
        {
            self.record(extract_data_binding_deps(value), value);
        }

        if &*tag.name == "script" {
            if attr_value(tag, "type") == Some(INIT_SCRIPT_TYPE) {
                self.in_init_script.set(true);
                self.script_buf.borrow_mut().clear();
            }
            if !tag.self_closing {
                // Script bodies are raw text, not markup to re-tokenize.
                return TokenSinkResult::RawData(RawKind::ScriptData);
            }
        }
        TokenSinkResult::Continue
    }

    /// Closing-tag identity is not checked: target scripts hold inline
    /// object-literal text, so the first close observed while buffering can
    /// only be the script's own.
    fn close_node(&self) {
        if !self.in_init_script.get() {
            return;
        }
        self.in_init_script.set(false);
        let body = mem::take(&mut *self.script_buf.borrow_mut());
        self.record(extract_init_script_deps(&body), &body);
    }
}

impl TokenSink for DepCollector {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.open_node(&tag),
                TagKind::EndTag => self.close_node(),
            },
            Token::CharacterTokens(text) => {
                if self.in_init_script.get() {
                    self.script_buf.borrow_mut().push_str(&text);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn attr_value<'a>(tag: &'a Tag, name: &str) -> Option<&'a str> {
    tag.attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}
