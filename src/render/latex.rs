use log::debug;

use crate::expression::Expression;

/// Render the tree back to LaTeX.
/// - Sequence children are juxtaposed with a single space
/// - Commands with arguments use a single brace group, arguments separated by `, `
/// - Commands without arguments get no braces
/// - Literals are emitted as stored
pub fn render_latex(expr: &Expression) -> String {
    fn fmt(expr: &Expression) -> String {
        match expr {
            Expression::Sequence(sequence) => sequence
                .children()
                .iter()
                .map(fmt)
                .collect::<Vec<_>>()
                .join(" "),
            Expression::Command(command) => {
                if command.args().is_empty() {
                    format!("\\{}", command.name())
                } else {
                    let args = command.args().iter().map(fmt).collect::<Vec<_>>();
                    format!("\\{}{{{}}}", command.name(), args.join(", "))
                }
            }
            Expression::Literal(literal) => literal.text().to_string(),
        }
    }

    let rendered = fmt(expr);
    debug!("Rendered LaTeX: {}", rendered);
    rendered
}
