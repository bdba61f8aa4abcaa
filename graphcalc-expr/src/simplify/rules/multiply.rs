//! Simplification rules for multiplication.
//!
//! The checks run in a fixed order. Two constants are folded before either is looked at on its
//! own, and the single-constant rules run before sign cancellation. A node is never both a
//! constant and a negation, so at most one rule applies.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::negate::negate;

/// Applies the rules for a product where one factor is the constant `value`.
///
/// - `0*a = 0`
/// - `1*a = a`
/// - `-1*a = -a`, and `-1*(-a) = a`
///
/// Returns the other factor back in [`Err`] if none of the rules apply.
fn constant_factor(
    value: f64,
    other: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Expr> {
    if value == 0.0 {
        // the other factor is dropped without being evaluated
        step_collector.push(Step::MultiplyZero);
        Ok(Expr::Constant(0.0))
    } else if value == 1.0 {
        step_collector.push(Step::MultiplyOne);
        Ok(other)
    } else if value == -1.0 {
        step_collector.push(Step::MultiplyNegativeOne);
        Ok(negate(other, step_collector))
    } else {
        Err(other)
    }
}

/// Simplifies `lhs * rhs`.
pub fn multiply(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(lhs * rhs)
        },
        (Expr::Constant(value), rhs) => constant_factor(value, rhs, step_collector)
            .unwrap_or_else(|rhs| Expr::Constant(value) * rhs),
        (lhs, Expr::Constant(value)) => constant_factor(value, lhs, step_collector)
            .unwrap_or_else(|lhs| lhs * Expr::Constant(value)),
        (Expr::Negate(lhs), Expr::Negate(rhs)) => {
            // neither child is a constant or a negation, so no rule applies to their product
            step_collector.push(Step::CancelNegation);
            *lhs * *rhs
        },
        (lhs, rhs) => lhs * rhs,
    }
}
