use std::{convert::Infallible, fmt, rc::Rc, str::FromStr};

use euler1d_core::Derivative;
use meval::Expr;

use crate::{ExprError, function};

/// Longest accepted source text, in bytes.
pub const MAX_LEN: usize = 4096;

/// Deepest accepted parenthesis nesting.
pub const MAX_DEPTH: usize = 64;

/// A parsed derivative expression `f(t, y)`.
///
/// Parsing goes through [`meval`], bound to `t` and `y` against a context
/// that only knows the constants `pi` and `e` and the functions in
/// [`Function`](crate::Function). Unknown names are rejected when the
/// expression is parsed, so evaluation never fails: domain errors such as
/// `ln(-1)` or `1 / 0` follow IEEE 754 and produce NaN or an infinity.
#[derive(Clone)]
pub struct Expression {
    source: String,
    func: Rc<dyn Fn(f64, f64) -> f64>,
}

impl Expression {
    /// Parses an expression in `t` and `y`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExprError`] if the text is empty, too long or too deeply
    /// nested, malformed, or names a variable or function outside the
    /// allow-list.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let source = source.trim();
        check_size(source)?;

        let expr: Expr = source.parse()?;
        let func = expr.bind2_with_context(function::context(), "t", "y")?;

        Ok(Self {
            source: source.to_owned(),
            func: Rc::new(func),
        })
    }

    /// Evaluates the expression at time `t` and value `y`.
    #[must_use]
    pub fn eval(&self, t: f64, y: f64) -> f64 {
        (self.func)(t, y)
    }

    /// Returns the trimmed source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Bounds the input before it reaches the parser.
fn check_size(source: &str) -> Result<(), ExprError> {
    if source.is_empty() {
        return Err(ExprError::Empty);
    }
    if source.len() > MAX_LEN {
        return Err(ExprError::TooLong {
            len: source.len(),
            limit: MAX_LEN,
        });
    }

    let mut depth = 0_usize;
    for (offset, byte) in source.bytes().enumerate() {
        match byte {
            b'(' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(ExprError::TooDeep {
                        depth,
                        offset,
                        limit: MAX_DEPTH,
                    });
                }
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expression").field(&self.source).finish()
    }
}

/// Two expressions are equal when their trimmed sources are.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Derivative for Expression {
    type Error = Infallible;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Infallible> {
        Ok(self.eval(t, y))
    }
}
