//! Serializers from an expression tree to text

mod latex;
mod sexpr;

pub use latex::render_latex;
pub use sexpr::render_sexpr;
