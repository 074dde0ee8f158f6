use log::debug;

use crate::escape::{classify_numeral, escape_keyword, escape_string};
use crate::expression::Expression;

/// Render the tree as a Janet-style s-expression.
///
/// Sequences become `[...]` lists, commands become `(latex :name args...)`
/// calls, and literals are emitted as bare integers or decimals when their
/// text reads as one, otherwise as quoted strings.
pub fn render_sexpr(expr: &Expression) -> String {
    fn fmt(expr: &Expression) -> String {
        match expr {
            Expression::Sequence(sequence) => {
                let children = sequence.children().iter().map(fmt).collect::<Vec<_>>();
                format!("[{}]", children.join(" "))
            }
            Expression::Command(command) => {
                let mut parts = Vec::with_capacity(command.args().len() + 2);
                parts.push(String::from("latex"));
                parts.push(escape_keyword(command.name()));
                parts.extend(command.args().iter().map(fmt));
                format!("({})", parts.join(" "))
            }
            Expression::Literal(literal) => match classify_numeral(literal.text()) {
                Some(numeral) => numeral.as_str().to_string(),
                None => escape_string(literal.text()),
            },
        }
    }

    let rendered = fmt(expr);
    debug!("Rendered s-expression: {}", rendered);
    rendered
}
