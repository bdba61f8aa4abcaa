//! Numeric evaluation of expressions.
//!
//! Evaluation substitutes each [`Expr::Variable`] with its value from a [`Ctxt`] and applies the
//! arithmetic at every node, using plain [`f64`] arithmetic. The only failure is a variable with
//! no value in the context, reported as [`UnboundVariable`]. Everything else follows IEEE 754:
//! dividing by zero gives an infinity or `NaN`, as does taking the logarithm of a negative number.

pub mod ctxt;
pub mod error;

use crate::expr::Expr;
use ctxt::Ctxt;
use error::UnboundVariable;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, UnboundVariable>;

    /// Evaluate the expression to produce a number, using the default context.
    fn eval_default(&self) -> Result<f64, UnboundVariable> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, UnboundVariable> {
        Ok(match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => ctxt.get_var(name).ok_or_else(|| UnboundVariable {
                name: name.clone(),
                suggestions: ctxt.get_similar_vars(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })?,
            Expr::Negate(child) => -child.eval(ctxt)?,
            Expr::Add(lhs, rhs) => lhs.eval(ctxt)? + rhs.eval(ctxt)?,
            Expr::Subtract(lhs, rhs) => lhs.eval(ctxt)? - rhs.eval(ctxt)?,
            Expr::Multiply(lhs, rhs) => lhs.eval(ctxt)? * rhs.eval(ctxt)?,
            Expr::Divide(lhs, rhs) => lhs.eval(ctxt)? / rhs.eval(ctxt)?,
            Expr::Power(lhs, rhs) => lhs.eval(ctxt)?.powf(rhs.eval(ctxt)?),
            Expr::Call(func, arg) => func.apply(arg.eval(ctxt)?),
        })
    }
}
