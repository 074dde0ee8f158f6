use log::warn;
use serde::{Deserialize, Serialize};

use crate::expression::errors::ExpressionError;

/// One node of a parsed LaTeX expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Sequence(Sequence),
    Command(Command),
    Literal(Literal),
}

/// Juxtaposition of two or more sub-expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Expression>", into = "Vec<Expression>")]
pub struct Sequence {
    children: Vec<Expression>,
}

/// A LaTeX macro invocation such as `\frac` or `\pi`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    name: String,
    #[serde(default)]
    args: Vec<Expression>,
}

/// Raw source text, interpreted only when rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal {
    text: String,
}

impl Sequence {
    /// # Errors
    ///
    /// Returns [`ExpressionError::InvalidStructure`] when given fewer than two
    /// children. A single child must be used directly instead of wrapped.
    pub fn new(children: Vec<Expression>) -> Result<Self, ExpressionError> {
        if children.len() < 2 {
            warn!("Rejecting sequence with {} children", children.len());
            return Err(ExpressionError::InvalidStructure {
                len: children.len(),
            });
        }
        Ok(Self { children })
    }

    pub fn children(&self) -> &[Expression] {
        &self.children
    }
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Expression {
    /// # Errors
    ///
    /// Fails under the same conditions as [`Sequence::new`].
    pub fn sequence(children: Vec<Expression>) -> Result<Self, ExpressionError> {
        Sequence::new(children).map(Expression::Sequence)
    }

    pub fn command(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Command(Command::new(name, args))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Expression::Literal(Literal::new(text))
    }
}

impl TryFrom<Vec<Expression>> for Sequence {
    type Error = ExpressionError;

    fn try_from(children: Vec<Expression>) -> Result<Self, Self::Error> {
        Sequence::new(children)
    }
}

impl From<Sequence> for Vec<Expression> {
    fn from(sequence: Sequence) -> Self {
        sequence.children
    }
}

impl From<Sequence> for Expression {
    fn from(sequence: Sequence) -> Self {
        Expression::Sequence(sequence)
    }
}

impl From<Command> for Expression {
    fn from(command: Command) -> Self {
        Expression::Command(command)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}
