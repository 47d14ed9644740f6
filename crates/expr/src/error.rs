use meval::FuncEvalError;
use thiserror::Error;

/// Errors that can occur while parsing an expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("expression is {len} bytes long, the limit is {limit}")]
    TooLong { len: usize, limit: usize },

    #[error("parentheses nest {depth} deep at offset {offset}, the limit is {limit}")]
    TooDeep {
        depth: usize,
        offset: usize,
        limit: usize,
    },

    /// The text is not a well-formed expression.
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unknown name '{0}' (variables are t and y)")]
    UnknownName(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("bad call to '{name}': {reason}")]
    Arity { name: String, reason: String },
}

impl From<meval::Error> for ExprError {
    fn from(err: meval::Error) -> Self {
        match err {
            meval::Error::UnknownVariable(name) => Self::UnknownName(name),
            meval::Error::Function(name, FuncEvalError::UnknownFunction) => {
                Self::UnknownFunction(name)
            }
            meval::Error::Function(name, reason) => Self::Arity {
                name,
                reason: reason.to_string(),
            },
            other => Self::Syntax(other.to_string()),
        }
    }
}
