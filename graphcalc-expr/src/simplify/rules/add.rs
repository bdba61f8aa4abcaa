//! Simplification rules for addition.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::{negate::negate, subtract::subtract};

/// Simplifies `lhs + rhs`.
///
/// - Two constants are folded.
/// - `0+a = a`, `a+0 = a`
/// - `-a + -b = -(a+b)`
/// - `a + -b = a-b`, `-a + b = b-a`
///
/// Terms that cancel each other, such as `a + -a`, are **not** combined.
pub fn add(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(lhs + rhs)
        },
        (lhs, rhs) if lhs.is_constant_value(0.0) => {
            step_collector.push(Step::AddZero);
            rhs
        },
        (lhs, rhs) if rhs.is_constant_value(0.0) => {
            step_collector.push(Step::AddZero);
            lhs
        },
        (Expr::Negate(lhs), Expr::Negate(rhs)) => {
            step_collector.push(Step::FactorNegation);
            let sum = add(*lhs, *rhs, step_collector);
            negate(sum, step_collector)
        },
        (lhs, Expr::Negate(rhs)) => {
            step_collector.push(Step::AddNegation);
            subtract(lhs, *rhs, step_collector)
        },
        (Expr::Negate(lhs), rhs) => {
            step_collector.push(Step::AddNegation);
            subtract(rhs, *lhs, step_collector)
        },
        (lhs, rhs) => lhs + rhs,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::rules::test_util::*;
    use super::*;

    #[test]
    fn fold_constants() {
        assert_eq!(add(c(0.5), c(2.0), &mut ()), c(2.5));
    }

    #[test]
    fn zero() {
        let mut steps = Vec::new();
        assert_eq!(add(c(0.0), x(), &mut steps), x());
        assert_eq!(add(x() * y(), c(0.0), &mut steps), x() * y());
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn negative_zero() {
        assert_eq!(add(c(-0.0), x(), &mut ()), x());
        assert_eq!(add(x(), c(-0.0), &mut ()), x());
    }

    #[test]
    fn factor_negation() {
        let mut steps = Vec::new();
        assert_eq!(add(-x(), -y(), &mut steps), -(x() + y()));
        assert_eq!(steps, vec![Step::FactorNegation]);
    }

    #[test]
    fn negation_becomes_subtraction() {
        assert_eq!(add(x(), -y(), &mut ()), x() - y());
        assert_eq!(add(-x(), y(), &mut ()), y() - x());
        assert_eq!(add(c(3.0), -x(), &mut ()), c(3.0) - x());
    }

    #[test]
    fn opposite_terms_are_kept() {
        assert_eq!(add(x(), -x(), &mut ()).to_string(), "(x-x)");
        assert_eq!(add(x(), x(), &mut ()).to_string(), "(x+x)");
    }
}
