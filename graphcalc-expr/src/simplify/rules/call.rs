//! Simplification rules for function calls.

use crate::expr::{Expr, Func};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;

/// Simplifies `func(arg)`. A constant argument is folded by evaluating the function, which may
/// produce `NaN` for arguments outside the function's domain.
pub fn call(func: Func, arg: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match arg {
        Expr::Constant(value) => {
            step_collector.push(Step::FoldConstants);
            Expr::Constant(func.apply(value))
        },
        arg => Expr::call(func, arg),
    }
}
