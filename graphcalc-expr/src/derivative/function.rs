//! Symbolic derivatives of the elementary functions in [`Func`].

use crate::expr::{Expr, Func};
use super::derivative;

/// Computes the derivative of `func(arg)` and applies the chain rule, `f(u)' = f'(u) * u'`.
pub(super) fn function_derivative(func: Func, arg: &Expr, var: &str) -> Expr {
    let darg = derivative(arg, var);
    let u = || arg.clone();

    match func {
        Func::Sin => Expr::call(Func::Cos, u()) * darg,
        Func::Cos => -Expr::call(Func::Sin, u()) * darg,
        Func::Tan => darg / Expr::call(Func::Cos, u()).pow(Expr::constant(2.0)),
        Func::Exp => Expr::call(Func::Exp, u()) * darg,
        Func::Ln => darg / u(),
        Func::Sqrt => darg / (Expr::constant(2.0) * Expr::call(Func::Sqrt, u())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::derivative::tests::test_for_function;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn shapes() {
        let d = |func: Func| derivative(&Expr::call(func, x()), "x").to_string();
        assert_eq!(d(Func::Sin), "(cos(x)*1)");
        assert_eq!(d(Func::Cos), "((-sin(x))*1)");
        assert_eq!(d(Func::Tan), "(1/(cos(x)^2))");
        assert_eq!(d(Func::Exp), "(exp(x)*1)");
        assert_eq!(d(Func::Ln), "(1/x)");
        assert_eq!(d(Func::Sqrt), "(1/(2*sqrt(x)))");
    }

    #[test]
    fn trigonometry() {
        // sin(x^2)
        test_for_function(&Expr::call(Func::Sin, x().pow(Expr::constant(2.0))), [-1., 0., 0.5, 2.]);
        // cos(3x)
        test_for_function(&Expr::call(Func::Cos, Expr::constant(3.0) * x()), [-1., 0., 0.5, 2.]);
        // tan(x)
        test_for_function(&Expr::call(Func::Tan, x()), [-1., 0., 0.5, 1.2]);
    }

    #[test]
    fn exponential_and_logarithm() {
        // exp(-x)
        test_for_function(&Expr::call(Func::Exp, -x()), [-2., 0., 1., 3.]);
        // ln(x^2 + 1)
        let f = Expr::call(Func::Ln, x().pow(Expr::constant(2.0)) + Expr::constant(1.0));
        test_for_function(&f, [-2., 0., 1., 3.]);
    }

    #[test]
    fn square_root() {
        // sqrt(x) * x
        let f = Expr::call(Func::Sqrt, x()) * x();
        test_for_function(&f, [0.25, 1., 4., 9.]);
    }
}
