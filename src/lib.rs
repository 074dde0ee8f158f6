//! latex-sexpr - An expression tree for parsed LaTeX math
//!
//! A tree is built bottom-up from [`Sequence`], [`Command`] and [`Literal`]
//! nodes and rendered either back to LaTeX or to a Janet-style s-expression
//! that a downstream evaluator can read.
//!
//! ```
//! use latex_sexpr::{Expression, render_latex, render_sexpr};
//!
//! let frac = Expression::command(
//!     "frac",
//!     vec![Expression::literal("1"), Expression::literal("2")],
//! );
//! assert_eq!(render_latex(&frac), "\\frac{1, 2}");
//! assert_eq!(render_sexpr(&frac), "(latex :frac 1 2)");
//! ```

pub mod escape;
pub mod expression;
pub mod render;

// Re-export the main public API
pub use escape::{escape_keyword, escape_string};
pub use expression::{Command, Expression, ExpressionError, Literal, Sequence};
pub use render::{render_latex, render_sexpr};
