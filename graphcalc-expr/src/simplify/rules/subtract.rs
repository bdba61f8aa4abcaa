//! Simplification rules for subtraction.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::{add::add, negate::negate};

/// Simplifies `lhs - rhs`.
///
/// - Two constants are folded.
/// - `a-0 = a`
/// - `0-a = -a`
/// - `a - -b = a+b`
/// - `-a - b = -(a+b)`
///
/// `a - a` is **not** reduced to `0`.
pub fn subtract(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(lhs - rhs)
        },
        (lhs, rhs) if rhs.is_constant_value(0.0) => {
            step_collector.push(Step::SubtractZero);
            lhs
        },
        (lhs, rhs) if lhs.is_constant_value(0.0) => {
            step_collector.push(Step::SubtractFromZero);
            negate(rhs, step_collector)
        },
        (lhs, Expr::Negate(rhs)) => {
            step_collector.push(Step::SubtractNegation);
            add(lhs, *rhs, step_collector)
        },
        (Expr::Negate(lhs), rhs) => {
            step_collector.push(Step::FactorNegation);
            let sum = add(*lhs, rhs, step_collector);
            negate(sum, step_collector)
        },
        (lhs, rhs) => lhs - rhs,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::rules::test_util::*;
    use super::*;

    #[test]
    fn fold_constants() {
        assert_eq!(subtract(c(1.0), c(3.0), &mut ()), c(-2.0));
    }

    #[test]
    fn zero() {
        let mut steps = Vec::new();
        assert_eq!(subtract(x(), c(0.0), &mut steps), x());
        assert_eq!(subtract(c(0.0), x(), &mut steps), -x());
        assert_eq!(subtract(c(0.0), -x(), &mut steps), x());
        assert_eq!(steps, vec![
            Step::SubtractZero,
            Step::SubtractFromZero,
            Step::SubtractFromZero,
            Step::DoubleNegation,
        ]);
    }

    #[test]
    fn subtract_negation() {
        let mut steps = Vec::new();
        assert_eq!(subtract(x(), -y(), &mut steps), x() + y());
        assert_eq!(steps, vec![Step::SubtractNegation]);
    }

    #[test]
    fn factor_negation() {
        assert_eq!(subtract(-x(), y(), &mut ()), -(x() + y()));
        assert_eq!(subtract(-x(), c(2.0), &mut ()), -(x() + c(2.0)));
    }

    #[test]
    fn both_negated() {
        // -a - -b = -a + b = b - a
        let mut steps = Vec::new();
        assert_eq!(subtract(-x(), -y(), &mut steps), y() - x());
        assert_eq!(steps, vec![Step::SubtractNegation, Step::AddNegation]);
    }

    #[test]
    fn equal_terms_are_kept() {
        assert_eq!(subtract(x(), x(), &mut ()).to_string(), "(x-x)");
    }
}
