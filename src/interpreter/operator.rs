use std::str::FromStr;

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Symbol used for the synthesized unary plus marker.
pub const UNARY_PLUS_SYMBOL: &str = "u+";
/// Symbol used for the synthesized unary minus marker.
pub const UNARY_MINUS_SYMBOL: &str = "u-";

/// The fixed set of operators understood by the converter and evaluator.
///
/// Binary `+`/`-` and the unary markers share glyphs in source text but are
/// distinct variants here. The lexer decides which one applies at each
/// position; nothing downstream re-interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Unary `+`, rendered as `u+`.
    UnaryPlus,
    /// Unary `-`, rendered as `u-`.
    UnaryMinus,
}

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Precedence tiers, weakest first.
///
/// The derived ordering is the binding order: a tier compares greater than
/// every tier it binds tighter than.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `+`, `-`
    Additive = 0,
    /// `*`, `/`
    Multiplicative = 1,
    /// `^`
    Power = 2,
    /// Unary `+`, `-`
    Prefix = 3,
}

impl Precedence {
    /// The numeric tier, `0` (weakest) through `3` (strongest).
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }
}

/// Static description of an operator: its arity, its precedence tier and the
/// function computing it.
#[derive(Debug, Clone, Copy)]
pub struct OperatorSpec {
    pub symbol:     &'static str,
    pub arity:      Arity,
    pub precedence: Precedence,
    /// Computes the operator. Unary operators ignore the second operand.
    pub eval:       fn(f64, f64) -> f64,
}

const ADD: OperatorSpec = OperatorSpec { symbol:     "+",
                                         arity:      Arity::Binary,
                                         precedence: Precedence::Additive,
                                         eval:       |a, b| a + b, };
const SUB: OperatorSpec = OperatorSpec { symbol:     "-",
                                         arity:      Arity::Binary,
                                         precedence: Precedence::Additive,
                                         eval:       |a, b| a - b, };
const MUL: OperatorSpec = OperatorSpec { symbol:     "*",
                                         arity:      Arity::Binary,
                                         precedence: Precedence::Multiplicative,
                                         eval:       |a, b| a * b, };
const DIV: OperatorSpec = OperatorSpec { symbol:     "/",
                                         arity:      Arity::Binary,
                                         precedence: Precedence::Multiplicative,
                                         eval:       |a, b| a / b, };
const POW: OperatorSpec = OperatorSpec { symbol:     "^",
                                         arity:      Arity::Binary,
                                         precedence: Precedence::Power,
                                         eval:       f64::powf, };
const UNARY_PLUS: OperatorSpec = OperatorSpec { symbol:     UNARY_PLUS_SYMBOL,
                                                arity:      Arity::Unary,
                                                precedence: Precedence::Prefix,
                                                eval:       |a, _| a, };
const UNARY_MINUS: OperatorSpec = OperatorSpec { symbol:     UNARY_MINUS_SYMBOL,
                                                 arity:      Arity::Unary,
                                                 precedence: Precedence::Prefix,
                                                 eval:       |a, _| -a, };

impl Operator {
    /// Every operator in the catalog.
    pub const ALL: [Self; 7] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div,
                                Self::Pow,
                                Self::UnaryPlus,
                                Self::UnaryMinus];

    /// Returns the static description of this operator.
    #[must_use]
    pub const fn spec(self) -> &'static OperatorSpec {
        match self {
            Self::Add => &ADD,
            Self::Sub => &SUB,
            Self::Mul => &MUL,
            Self::Div => &DIV,
            Self::Pow => &POW,
            Self::UnaryPlus => &UNARY_PLUS,
            Self::UnaryMinus => &UNARY_MINUS,
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        self.spec().arity
    }

    #[must_use]
    pub const fn precedence(self) -> Precedence {
        self.spec().precedence
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self.arity(), Arity::Unary)
    }

    /// Returns the unary marker sharing this operator's glyph, if any.
    ///
    /// Only binary `+` and `-` have a unary counterpart.
    #[must_use]
    pub const fn to_unary(self) -> Option<Self> {
        match self {
            Self::Add => Some(Self::UnaryPlus),
            Self::Sub => Some(Self::UnaryMinus),
            _ => None,
        }
    }

    /// Applies the operator.
    ///
    /// The arithmetic is plain IEEE-754: division by zero yields an infinity
    /// or NaN, and so does a negative base raised to a fractional power.
    ///
    /// # Example
    /// ```
    /// use polish::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Pow.eval(2.0, 10.0), 1024.0);
    /// assert_eq!(Operator::UnaryMinus.eval(4.0, 0.0), -4.0);
    /// assert!(Operator::Div.eval(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval(self, operand1: f64, operand2: f64) -> f64 {
        (self.spec().eval)(operand1, operand2)
    }
}

/// Looks up an operator by its symbol.
///
/// Accepts the five binary glyphs and the two rendered unary markers.
pub fn lookup(symbol: &str) -> EvalResult<Operator> {
    Operator::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or_else(|| RuntimeError::UnknownOperator { symbol: symbol.to_string() })
}

/// Returns the precedence tier of a symbol.
///
/// Unrecognized symbols get the weakest tier instead of an error.
#[must_use]
pub fn precedence_of(symbol: &str) -> u8 {
    lookup(symbol).map_or(Precedence::Additive.tier(), |op| op.precedence().tier())
}

impl FromStr for Operator {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
