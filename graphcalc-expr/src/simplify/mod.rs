//! Algebraic simplification of expressions.
//!
//! [`simplify()`] rewrites a tree bottom-up: the children of a node are simplified first, then the
//! rule function for the node's kind (see [`rules`]) is applied to the simplified children. The
//! rules are local. They fold operators applied to constants, remove identities such as `a*1`
//! and `a+0`, and move negations around so that they cancel where possible. Nothing is
//! reordered or collected, so `x + x` stays as it is.
//!
//! Simplification is idempotent: simplifying an already simplified tree returns the same tree.
//!
//! ```
//! use graphcalc_expr::{simplify, Expr};
//!
//! // (-1 * (-x)) + 0
//! let expr = Expr::constant(-1.0) * -Expr::var("x") + Expr::constant(0.0);
//! assert_eq!(simplify(&expr).to_string(), "x");
//! ```
//!
//! The rules applied along the way can be recorded with [`simplify_with_steps`].

pub mod rules;
pub mod step;

use crate::expr::Expr;
use crate::step_collector::StepCollector;
use rules::{add, call, divide, multiply, negate, power, subtract};
use step::Step;

/// Simplifies the children of the expression, then the expression itself.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Negate(child) => {
            let child = inner_simplify(child, step_collector);
            negate::negate(child, step_collector)
        },
        Expr::Add(lhs, rhs) => {
            let (lhs, rhs) = (inner_simplify(lhs, step_collector), inner_simplify(rhs, step_collector));
            add::add(lhs, rhs, step_collector)
        },
        Expr::Subtract(lhs, rhs) => {
            let (lhs, rhs) = (inner_simplify(lhs, step_collector), inner_simplify(rhs, step_collector));
            subtract::subtract(lhs, rhs, step_collector)
        },
        Expr::Multiply(lhs, rhs) => {
            let (lhs, rhs) = (inner_simplify(lhs, step_collector), inner_simplify(rhs, step_collector));
            multiply::multiply(lhs, rhs, step_collector)
        },
        Expr::Divide(lhs, rhs) => {
            let (lhs, rhs) = (inner_simplify(lhs, step_collector), inner_simplify(rhs, step_collector));
            divide::divide(lhs, rhs, step_collector)
        },
        Expr::Power(lhs, rhs) => {
            let (lhs, rhs) = (inner_simplify(lhs, step_collector), inner_simplify(rhs, step_collector));
            power::power(lhs, rhs, step_collector)
        },
        Expr::Call(func, arg) => {
            let arg = inner_simplify(arg, step_collector);
            call::call(*func, arg, step_collector)
        },
    }
}

/// Simplifies the given expression, returning a new tree.
///
/// For more information, see the [module-level documentation](self).
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplifies the given expression, returning a new tree along with the steps that were taken, in
/// the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    (simplified, steps)
}

impl Expr {
    /// Simplifies this expression, returning a new tree. See [`simplify()`] for details.
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}
