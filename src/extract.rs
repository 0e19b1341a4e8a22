//! Dependency-name extractors.
//!
//! Module names appear as the *keys* of object literals in three syntactic
//! positions, each with its own nesting depth:
//!
//! - `data-mage-init` attributes: the keys of the attribute's own object,
//! - `data-bind` attributes: the keys one level inside the `mageInit`
//!   binding's object value,
//! - `text/x-magento-init` script bodies: the keys one level inside each
//!   selector scope (the selector itself is not a dependency).
//!
//! Key extraction works on key *values*, so `'Module/A'`, `"Module/A"`, and
//! an identifier key all collect the same name. Anything that cannot carry a
//! static name (computed keys, spreads, accessors) is a shape failure — the
//! caller turns it into a warning for the whole fragment.

use swc_ecma_ast::{Expr, Prop, PropName, PropOrSpread};

use crate::error::FragmentError;
use crate::parsers::fragment::{parse_binding_fragment, parse_object_fragment, strip_parens};

/// Name of the Knockout binding that declares module dependencies.
pub(crate) const MAGE_INIT_BINDING: &str = "mageInit";

/// Extracts module names from a `data-mage-init` attribute value: every
/// top-level key of the attribute's object literal is a dependency.
pub fn extract_inline_attribute_deps(attr_value: &str) -> Result<Vec<String>, FragmentError> {
    let obj = parse_object_fragment(attr_value)?;
    obj.props.iter().map(prop_key).collect()
}

/// Extracts module names from a `data-bind` attribute value: finds the
/// `mageInit` entry in the binding list and returns the keys of its object
/// value, ignoring unrelated bindings.
pub fn extract_data_binding_deps(attr_value: &str) -> Result<Vec<String>, FragmentError> {
    let bindings = parse_binding_fragment(attr_value)?;
    for entry in &bindings.props {
        if let PropOrSpread::Prop(prop) = entry
            && let Prop::KeyValue(kv) = &**prop
            && prop_name(&kv.key).is_ok_and(|name| name == MAGE_INIT_BINDING)
        {
            let Expr::Object(modules) = strip_parens(&kv.value) else {
                return Err(FragmentError::Shape(
                    "mageInit binding value is not an object literal",
                ));
            };
            return modules.props.iter().map(prop_key).collect();
        }
    }
    Err(FragmentError::Shape("no mageInit entry in the binding list"))
}

/// Extracts module names from a `text/x-magento-init` script body: each
/// top-level key is a DOM-selector scope whose object value maps module
/// names to their configuration.
pub fn extract_init_script_deps(script_body: &str) -> Result<Vec<String>, FragmentError> {
    let scopes = parse_object_fragment(script_body)?;
    let mut deps = Vec::new();
    for scope in &scopes.props {
        let PropOrSpread::Prop(prop) = scope else {
            return Err(FragmentError::Shape("spread entry in selector scope map"));
        };
        let Prop::KeyValue(kv) = &**prop else {
            return Err(FragmentError::Shape("selector scope without an object value"));
        };
        let Expr::Object(modules) = strip_parens(&kv.value) else {
            return Err(FragmentError::Shape(
                "selector scope value is not an object literal",
            ));
        };
        for module in &modules.props {
            deps.push(prop_key(module)?);
        }
    }
    Ok(deps)
}

/// Extracts the key of an object-literal entry as a string value.
fn prop_key(entry: &PropOrSpread) -> Result<String, FragmentError> {
    let PropOrSpread::Prop(prop) = entry else {
        return Err(FragmentError::Shape("spread entry carries no module name"));
    };
    match &**prop {
        Prop::KeyValue(kv) => prop_name(&kv.key),
        Prop::Shorthand(ident) => Ok(ident.sym.to_string()),
        _ => Err(FragmentError::Shape("property without a static key")),
    }
}

/// Extracts the string value of a property key.
fn prop_name(key: &PropName) -> Result<String, FragmentError> {
    match key {
        PropName::Ident(ident) => Ok(ident.sym.to_string()),
        PropName::Str(s) => s
            .value
            .as_str()
            .map(str::to_string)
            .ok_or(FragmentError::Shape("non-UTF8 string key")),
        PropName::Num(n) => Ok(n.value.to_string()),
        _ => Err(FragmentError::Shape("unsupported property key syntax")),
    }
}
