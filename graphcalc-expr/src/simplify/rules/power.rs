//! Simplification rules for exponentiation.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;

/// Simplifies `lhs ^ rhs`.
///
/// - Two constants are folded with [`f64::powf`].
/// - `a^0 = 1`
/// - `a^1 = a`
/// - `1^a = 1`
///
/// `0^a` is left alone, since it is `0` only for positive `a`.
pub fn power(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(lhs.powf(rhs))
        },
        (_, rhs) if rhs.is_constant_value(0.0) => {
            step_collector.push(Step::PowerZero);
            Expr::Constant(1.0)
        },
        (lhs, rhs) if rhs.is_constant_value(1.0) => {
            step_collector.push(Step::PowerOne);
            lhs
        },
        (lhs, _) if lhs.is_constant_value(1.0) => {
            step_collector.push(Step::PowerOneLeft);
            Expr::Constant(1.0)
        },
        (lhs, rhs) => lhs.pow(rhs),
    }
}
