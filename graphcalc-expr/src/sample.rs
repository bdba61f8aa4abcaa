//! Batch evaluation of a function and its derivative, for plotting.
//!
//! A plotting layer typically differentiates a curve once and then evaluates both the curve and
//! its slope at many points. [`Plot`] does the differentiation up front and evaluates the points
//! in parallel. Choosing the points (fixed step, adaptive step based on the slope, etc.) is up to
//! the caller.

use rayon::prelude::*;
use crate::derivative::derivative;
use crate::eval::{ctxt::Ctxt, error::UnboundVariable, Eval};
use crate::expr::Expr;
use crate::simplify::simplify;

/// A point on a curve, along with the slope of the curve at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// The value of the independent variable.
    pub x: f64,

    /// The value of the function at `x`.
    pub y: f64,

    /// The value of the derivative at `x`.
    pub slope: f64,
}

/// A function of one independent variable, prepared for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    /// The function to plot.
    pub expr: Expr,

    /// The simplified derivative of [`Plot::expr`] with respect to [`Plot::var`].
    pub slope: Expr,

    /// The name of the independent variable.
    pub var: String,
}

impl Plot {
    /// Prepares the given expression for plotting against the variable `var`.
    pub fn new(expr: Expr, var: impl Into<String>) -> Self {
        let var = var.into();
        let slope = simplify(&derivative(&expr, &var));
        Self { expr, slope, var }
    }

    /// Evaluates the function and its derivative at every point in `xs`.
    ///
    /// The independent variable is bound to each point in turn, on top of the variables in
    /// `ctxt`. The returned samples are in the same order as `xs`. If the expression refers to a
    /// variable that is neither the independent variable nor bound in `ctxt`, an error is
    /// returned.
    pub fn sample(&self, ctxt: &Ctxt, xs: &[f64]) -> Result<Vec<Sample>, UnboundVariable> {
        xs.par_iter()
            .map_init(|| ctxt.clone(), |ctxt, &x| -> Result<Sample, UnboundVariable> {
                ctxt.add_var(&self.var, x);
                Ok(Sample {
                    x,
                    y: self.expr.eval(ctxt)?,
                    slope: self.slope.eval(ctxt)?,
                })
            })
            .collect()
    }
}
