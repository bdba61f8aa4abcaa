//! Symbolic differentiation.
//!
//! [`derivative`] applies the textbook rule for each node kind and returns a new tree. It does
//! **not** simplify: the derivative of `x * x` is `((x*1)+(1*x))`, not `(2*x)`. Run the result
//! through [`simplify`](crate::simplify()) before displaying or evaluating it.

mod function;

use crate::expr::{Expr, Func};

/// `(f * g)' = f * g' + f' * g`
fn product_rule(lhs: &Expr, rhs: &Expr, var: &str) -> Expr {
    lhs.clone() * derivative(rhs, var) + derivative(lhs, var) * rhs.clone()
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(lhs: &Expr, rhs: &Expr, var: &str) -> Expr {
    (derivative(lhs, var) * rhs.clone() - lhs.clone() * derivative(rhs, var))
        / rhs.clone().pow(Expr::constant(2.0))
}

/// Differentiates `base ^ exponent`.
///
/// - `(f^c)' = c * f^(c - 1) * f'` if the exponent does not depend on `var`
/// - `(c^g)' = c^g * ln(c) * g'` if the base does not depend on `var`
/// - `(f^g)' = f^g * (g' * ln(f) + g * f' / f)` otherwise
fn power_rule(base: &Expr, exponent: &Expr, var: &str) -> Expr {
    if !exponent.contains_variable(var) {
        exponent.clone() * base.clone().pow(exponent.clone() - Expr::constant(1.0))
            * derivative(base, var)
    } else if !base.contains_variable(var) {
        base.clone().pow(exponent.clone()) * Expr::call(Func::Ln, base.clone())
            * derivative(exponent, var)
    } else {
        base.clone().pow(exponent.clone()) * (
            derivative(exponent, var) * Expr::call(Func::Ln, base.clone())
                + exponent.clone() * derivative(base, var) / base.clone()
        )
    }
}

/// Computes the derivative of the given expression with respect to the variable `var`.
///
/// Differentiation is total: every expression has a derivative. Variables other than `var` are
/// treated as constants, so differentiating with respect to a variable that does not appear in
/// the expression yields a tree that always evaluates to zero.
pub fn derivative(f: &Expr, var: &str) -> Expr {
    match f {
        Expr::Constant(_) => Expr::constant(0.0),
        Expr::Variable(name) => {
            if name == var {
                Expr::constant(1.0)
            } else {
                Expr::constant(0.0)
            }
        },
        Expr::Negate(child) => -derivative(child, var),
        Expr::Add(lhs, rhs) => derivative(lhs, var) + derivative(rhs, var),
        Expr::Subtract(lhs, rhs) => derivative(lhs, var) - derivative(rhs, var),
        Expr::Multiply(lhs, rhs) => product_rule(lhs, rhs, var),
        Expr::Divide(lhs, rhs) => quotient_rule(lhs, rhs, var),
        Expr::Power(base, exponent) => power_rule(base, exponent, var),
        Expr::Call(func, arg) => function::function_derivative(*func, arg, var),
    }
}

impl Expr {
    /// Computes the derivative of this expression with respect to the variable `var`. See
    /// [`derivative`] for details.
    pub fn derivative(&self, var: &str) -> Expr {
        derivative(self, var)
    }
}

#[cfg(test)]
pub mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use crate::{eval::{ctxt::Ctxt, Eval}, simplify::simplify};
    use super::*;

    /// Boilerplate helper function for evaluating an expression and substituting in "x".
    fn eval_x(e: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        e.eval(&ctxt).unwrap()
    }

    /// Performs a central finite difference to approximate the derivative of the provided
    /// expression.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative of `f` against a finite difference at each point.
    pub(crate) fn test_for_function(f: &Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let raw = derivative(f, "x");
        let simplified = simplify(&raw);

        for point in points {
            let numerically_computed = finite_difference(f, point);
            for symbolic in [&raw, &simplified] {
                let symbolically_computed = eval_x(symbolic, point);
                assert!(
                    (symbolically_computed - numerically_computed).abs() < TOL,
                    "for `{f}` at x={point}, symbolically computed derivative `{symbolic}` was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
                );
            }
        }
    }

    fn x() -> Expr {
        Expr::var("x")
    }

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&c(7.0), "x"), c(0.0));
        assert_eq!(derivative(&x(), "x"), c(1.0));
        assert_eq!(derivative(&Expr::var("y"), "x"), c(0.0));
    }

    #[test]
    fn product_rule_shape() {
        // d/dx (x * y) = (x * 0) + (1 * y)
        let f = x() * Expr::var("y");
        assert_eq!(derivative(&f, "x").to_string(), "((x*0)+(1*y))");
    }

    #[test]
    fn does_not_simplify() {
        let f = -(x() + c(3.0));
        assert_eq!(derivative(&f, "x").to_string(), "(-(1+0))");
    }

    #[test]
    fn square() {
        // d/dx (x * x) = 2x
        let f = x() * x();
        let df = simplify(&derivative(&f, "x"));
        assert_eq!(eval_x(&df, 5.0), 10.0);
    }

    #[test]
    fn other_variable_is_zero() {
        let f = x().pow(c(3.0)) * Expr::call(Func::Sin, x()) + x() / c(2.0);
        let df = derivative(&f, "t");
        for point in [-2.0, 0.5, 3.0] {
            assert_eq!(eval_x(&df, point), 0.0);
        }
        assert_eq!(simplify(&df).to_string(), "0");
    }

    #[test]
    fn power_rule() {
        // x^2 + x + 1
        let f = x().pow(c(2.0)) + x() + c(1.0);
        test_for_function(&f, [0., 1., 2., 5., 8.]);
        assert_eq!(simplify(&derivative(&f, "x")).to_string(), "((2*x)+1)");
    }

    #[test]
    fn quotient_rule() {
        // (x + 1) / (x^2 + 1)
        let f = (x() + c(1.0)) / (x().pow(c(2.0)) + c(1.0));
        test_for_function(&f, [-3., -0.5, 0., 1., 4.]);
    }

    #[test]
    fn exponential_rule() {
        // 2^x
        let f = c(2.0).pow(x());
        test_for_function(&f, [-1., 0., 1.5, 3.]);
    }

    #[test]
    fn general_power_rule() {
        // x^x
        let f = x().pow(x());
        test_for_function(&f, [0.5, 1., 2., 3.]);
    }

    #[test]
    fn negation_and_subtraction() {
        // -(x^3) - 4x
        let f = -x().pow(c(3.0)) - c(4.0) * x();
        test_for_function(&f, [-2., 0., 1., 2.5]);
    }

    #[test]
    fn derivative_of_derivative() {
        // d^2/dx^2 x^3 = 6x
        let f = x().pow(c(3.0));
        let d2f = simplify(&derivative(&simplify(&derivative(&f, "x")), "x"));
        assert_float_relative_eq!(eval_x(&d2f, 2.0), 12.0);
    }
}
