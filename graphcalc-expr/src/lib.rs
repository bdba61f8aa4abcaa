//! Expression trees for a graphing calculator.
//!
//! An expression is a tree of [`Expr`] nodes. Trees are immutable: evaluating, differentiating,
//! simplifying, and rendering all read an existing tree, and the two symbolic transforms return a
//! brand-new tree instead of modifying their input.
//!
//! A typical pipeline for plotting a function and its derivative looks like this:
//!
//! ```
//! use graphcalc_expr::{derivative, simplify, Ctxt, Eval, Expr};
//!
//! // x * x
//! let f = Expr::var("x") * Expr::var("x");
//!
//! // d/dx (x * x) = (x * 1) + (1 * x), which simplifies to x + x
//! let df = simplify(&derivative(&f, "x"));
//! assert_eq!(df.to_string(), "(x+x)");
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 5.0);
//! assert_eq!(df.eval(&ctxt).unwrap(), 10.0);
//! ```
//!
//! Producing trees from user input is the job of a parser, which is not part of this crate. Trees
//! can be built directly with the constructors on [`Expr`] and the [`std::ops`] operators.

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod sample;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use eval::{ctxt::Ctxt, error::UnboundVariable, Eval};
pub use expr::{Expr, Func};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
