//! Derivative expressions `f(t, y)` parsed from text.
//!
//! An [`Expression`] wraps a [`meval`] expression bound to the variables `t`
//! and `y`. Evaluation uses a restricted context rather than meval's default
//! one, so user-supplied text can only reach the names listed below.
//!
//! # Syntax
//!
//! Numbers, `+ - * / ^`, unary minus, and parentheses. `^` is
//! right-associative and binds tighter than a leading minus, so `-2^2` is
//! `-4` and `2^3^2` is `512`. Input is capped at [`MAX_LEN`] bytes and
//! [`MAX_DEPTH`] nested parentheses.
//!
//! # Names
//!
//! - Variables: `t` (time) and `y` (solution value)
//! - Constants: `pi`, `e`
//! - Functions: see [`Function`]
//!
//! # Example
//!
//! ```
//! use euler1d_expr::Expression;
//!
//! let f: Expression = "-y + cos(t)".parse().unwrap();
//! assert_eq!(f.eval(0.0, 1.0), 0.0);
//! ```

mod error;
mod expression;
mod function;

pub use error::ExprError;
pub use expression::{Expression, MAX_DEPTH, MAX_LEN};
pub use function::Function;
