//! Simplification rules for negation.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;

/// Simplifies `-child`.
///
/// - `-(c)` folds to the negated constant.
/// - `-(-a) = a`
pub fn negate(child: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match child {
        Expr::Constant(value) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(-value)
        },
        Expr::Negate(inner) => {
            step_collector.push(Step::DoubleNegation);
            *inner
        },
        child => -child,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::rules::test_util::*;
    use super::*;

    #[test]
    fn fold_constant() {
        let mut steps = Vec::new();
        assert_eq!(negate(c(4.0), &mut steps), c(-4.0));
        assert_eq!(steps, vec![Step::FoldConstants]);
    }

    #[test]
    fn double_negation() {
        let mut steps = Vec::new();
        assert_eq!(negate(-x(), &mut steps), x());
        assert_eq!(steps, vec![Step::DoubleNegation]);
    }

    #[test]
    fn no_rule() {
        let mut steps = Vec::new();
        assert_eq!(negate(x() + y(), &mut steps), -(x() + y()));
        assert!(steps.is_empty());
    }
}
