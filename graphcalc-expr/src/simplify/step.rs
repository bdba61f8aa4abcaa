#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2*3 = 6`
    /// `-(4) = -4`
    /// `sin(0) = 0`
    /// etc.
    FoldConstants,

    /// `-(-a) = a`
    DoubleNegation,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `-a + -b = -(a+b)`
    /// `-a - b = -(a+b)`
    FactorNegation,

    /// `a + -b = a-b`
    /// `-a + b = b-a`
    AddNegation,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a - -b = a+b`
    SubtractNegation,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `-1*a = -a`
    /// `a*-1 = -a`
    MultiplyNegativeOne,

    /// `-a * -b = a*b`
    /// `-a / -b = a/b`
    CancelNegation,

    /// `a/1 = a`
    DivideOne,

    /// `a/-1 = -a`
    DivideNegativeOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,
}
