use meval::Context;

/// The functions an expression may call.
///
/// Names are matched exactly (`sin`, not `Sin` or `math.sin`). Anything not
/// listed here is rejected at parse time with
/// [`ExprError::UnknownFunction`](crate::ExprError::UnknownFunction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Exp,
    /// Natural logarithm.
    Ln,
    Log10,
    Log2,
    Abs,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Floor,
    Ceil,
    /// `atan2(a, b)` is the angle of the point `(b, a)`.
    Atan2,
    Min,
    Max,
    /// `pow(a, b)` is `a ^ b`.
    Pow,
}

impl Function {
    /// Every allowed function, in declaration order.
    pub const ALL: [Function; 21] = [
        Self::Sqrt,
        Self::Exp,
        Self::Ln,
        Self::Log10,
        Self::Log2,
        Self::Abs,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Floor,
        Self::Ceil,
        Self::Atan2,
        Self::Min,
        Self::Max,
        Self::Pow,
    ];

    /// Looks up a function by its expression name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the name used in expressions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Atan2 => "atan2",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
        }
    }

    /// Returns the number of arguments the function takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Atan2 | Self::Min | Self::Max | Self::Pow => 2,
            _ => 1,
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// `args` must hold exactly [`arity`](Self::arity) values; the parser
    /// guarantees this for every call it builds.
    pub(crate) fn apply(self, args: &[f64]) -> f64 {
        match (self, args) {
            (Self::Sqrt, [x]) => x.sqrt(),
            (Self::Exp, [x]) => x.exp(),
            (Self::Ln, [x]) => x.ln(),
            (Self::Log10, [x]) => x.log10(),
            (Self::Log2, [x]) => x.log2(),
            (Self::Abs, [x]) => x.abs(),
            (Self::Sin, [x]) => x.sin(),
            (Self::Cos, [x]) => x.cos(),
            (Self::Tan, [x]) => x.tan(),
            (Self::Asin, [x]) => x.asin(),
            (Self::Acos, [x]) => x.acos(),
            (Self::Atan, [x]) => x.atan(),
            (Self::Sinh, [x]) => x.sinh(),
            (Self::Cosh, [x]) => x.cosh(),
            (Self::Tanh, [x]) => x.tanh(),
            (Self::Floor, [x]) => x.floor(),
            (Self::Ceil, [x]) => x.ceil(),
            (Self::Atan2, [a, b]) => a.atan2(*b),
            (Self::Min, [a, b]) => a.min(*b),
            (Self::Max, [a, b]) => a.max(*b),
            (Self::Pow, [a, b]) => a.powf(*b),
            _ => unreachable!("{} called with {} arguments", self.name(), args.len()),
        }
    }
}

/// Builds the evaluation context for expressions.
///
/// Starts from an empty [`Context`], so only the constants `pi` and `e` and
/// the functions in [`Function::ALL`] are visible. meval's own built-ins
/// (`round`, `signum`, variadic `max`, ...) are not.
pub(crate) fn context() -> Context<'static> {
    let mut ctx = Context::empty();
    ctx.var("pi", std::f64::consts::PI);
    ctx.var("e", std::f64::consts::E);

    for func in Function::ALL {
        if func.arity() == 1 {
            ctx.func(func.name(), move |x| func.apply(&[x]));
        } else {
            ctx.func2(func.name(), move |a, b| func.apply(&[a, b]));
        }
    }
    ctx
}
