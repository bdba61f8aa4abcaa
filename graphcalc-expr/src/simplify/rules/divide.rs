//! Simplification rules for division.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::negate::negate;

/// Simplifies `lhs / rhs`.
///
/// - Two constants are folded with IEEE-754 semantics, so `1/0` becomes infinity and `0/0`
/// becomes NaN.
/// - `a/1 = a`
/// - `a/-1 = -a`
/// - `-a / -b = a/b`
///
/// `0/a` is left alone, since it is `NaN` when `a` is `0`.
pub fn divide(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(lhs / rhs)
        },
        (lhs, rhs) if rhs.is_constant_value(1.0) => {
            step_collector.push(Step::DivideOne);
            lhs
        },
        (lhs, rhs) if rhs.is_constant_value(-1.0) => {
            step_collector.push(Step::DivideNegativeOne);
            negate(lhs, step_collector)
        },
        (Expr::Negate(lhs), Expr::Negate(rhs)) => {
            step_collector.push(Step::CancelNegation);
            *lhs / *rhs
        },
        (lhs, rhs) => lhs / rhs,
    }
}
