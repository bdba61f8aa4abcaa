//! The expression tree.
//!
//! [`Expr`] is a closed set of node kinds. Leaves are numeric constants and named variables;
//! every other node exclusively owns its children through a [`Box`], so a tree is never shared
//! or cyclic. Nothing in this crate mutates a tree after it is built.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is **structural**: two expressions are equal if they have
//! the same shape, the same variable names, and bitwise-comparable constants under `f64`
//! equality. `x + y` and `y + x` are not equal, and since `NaN != NaN`, neither is a tree
//! containing a `NaN` constant equal to itself. Tests that need a semantic comparison should
//! compare rendered strings of simplified trees, or evaluate both sides.

mod fmt;
mod func;
mod iter;

pub use func::{Func, UnknownFunction};
pub use iter::ExprIter;

use std::{collections::BTreeSet, ops::{Add, Div, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `0.5`.
    Constant(f64),

    /// A named variable, such as `x`.
    Variable(String),

    /// The negation of an expression, `-a`.
    Negate(Box<Expr>),

    /// The sum of two expressions, `a + b`.
    Add(Box<Expr>, Box<Expr>),

    /// The difference of two expressions, `a - b`.
    Subtract(Box<Expr>, Box<Expr>),

    /// The product of two expressions, `a * b`.
    Multiply(Box<Expr>, Box<Expr>),

    /// The quotient of two expressions, `a / b`.
    Divide(Box<Expr>, Box<Expr>),

    /// An expression raised to a power, `a ^ b`.
    Power(Box<Expr>, Box<Expr>),

    /// An elementary function applied to an expression, such as `sin(x)`.
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a [`Expr::Variable`] with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exponent: Self) -> Self {
        Self::Power(Box::new(self), Box::new(exponent))
    }

    /// Applies the given function to this expression. No simplification is done.
    pub fn call(func: Func, arg: Self) -> Self {
        Self::Call(func, Box::new(arg))
    }

    /// If the expression is a [`Expr::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Constant`] equal to the given value.
    pub fn is_constant_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// If the expression is a [`Expr::Negate`], returns a reference to the negated expression.
    pub fn as_negate(&self) -> Option<&Expr> {
        match self {
            Self::Negate(child) => Some(child),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if a [`Expr::Variable`] with the given name appears anywhere in the tree.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_variable() == Some(name))
    }

    /// Returns the names of all variables in the tree, sorted and without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Box::new(self), Box::new(rhs))
    }
}

/// Subtracts one [`Expr`] from another. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Subtract(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Multiply(Box::new(self), Box::new(rhs))
    }
}

/// Divides one [`Expr`] by another. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Divide(Box::new(self), Box::new(rhs))
    }
}

/// Wraps this expression in a [`Expr::Negate`]. No simplification is done, not even for
/// constants.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Negate(Box::new(self))
    }
}
