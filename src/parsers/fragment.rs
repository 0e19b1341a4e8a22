//! Object-literal fragment parsing.
//!
//! The dependency declarations found in templates are not standalone
//! JavaScript programs: an attribute value is the object literal itself
//! (which a parser in statement position would read as a block), and a
//! `data-bind` value is the *interior* of an object literal with the braces
//! missing entirely. Each shape gets the minimal wrapping that turns it into
//! a parseable expression, and the resulting object literal is returned.

use swc_common::{FileName, SourceMap};
use swc_ecma_ast::{Expr, ObjectLit, Stmt};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

use crate::error::FragmentError;

/// Parse a fragment that already carries its own braces, e.g.
/// `{"Magento_Ui/js/core/app": {}}`. Parenthesizing forces expression
/// position so the leading `{` is not read as a block statement.
pub fn parse_object_fragment(fragment: &str) -> Result<ObjectLit, FragmentError> {
    parse_expression_source(format!("({fragment})"))
}

/// Parse a brace-free comma list of named entries, e.g.
/// `mageInit: {...}, click: handler`, by synthesizing the missing braces.
pub fn parse_binding_fragment(fragment: &str) -> Result<ObjectLit, FragmentError> {
    parse_expression_source(format!("({{{fragment}}})"))
}

/// Parse wrapped source as an ES script and return the object literal of its
/// single expression statement.
fn parse_expression_source(source: String) -> Result<ObjectLit, FragmentError> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Anon.into(), source);

    let mut parser = Parser::new(
        Syntax::Es(EsSyntax::default()),
        StringInput::from(&*source_file),
        None,
    );
    let script = parser
        .parse_script()
        .map_err(|e| FragmentError::Syntax(format!("{e:?}")))?;
    // SWC recovers from some malformed input; a recovered AST would fabricate
    // dependency names, so treat any buffered error as a failed parse.
    if let Some(error) = parser.take_errors().into_iter().next() {
        return Err(FragmentError::Syntax(format!("{error:?}")));
    }

    let [Stmt::Expr(stmt)] = script.body.as_slice() else {
        return Err(FragmentError::Shape("expected a single expression statement"));
    };
    match strip_parens(&stmt.expr) {
        Expr::Object(obj) => Ok(obj.clone()),
        _ => Err(FragmentError::Shape("expected an object literal")),
    }
}

/// Peels `ParenExpr` layers introduced by the wrapping (or by the template
/// author) off an expression.
pub fn strip_parens(expr: &Expr) -> &Expr {
    let mut expr = expr;
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}
