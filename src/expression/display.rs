use std::fmt;

use crate::expression::ast::Expression;
use crate::render::render_sexpr;

/// Formats as the s-expression form; use [`crate::render_latex`] for LaTeX.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_sexpr(self))
    }
}
