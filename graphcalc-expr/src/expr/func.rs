//! Elementary functions that can appear in an expression.

use ariadne::{Fmt, Label, Report, ReportKind};
use graphcalc_error::{report_offset, ErrorKind, EXPR};
use levenshtein::levenshtein;
use std::{fmt, ops::Range, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-argument elementary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// Sine, in radians.
    Sin,

    /// Cosine, in radians.
    Cos,

    /// Tangent, in radians.
    Tan,

    /// The natural exponential function, `e^x`.
    Exp,

    /// The natural logarithm.
    Ln,

    /// The principal square root.
    Sqrt,
}

impl Func {
    /// Every supported function.
    pub const ALL: [Func; 6] = [Func::Sin, Func::Cos, Func::Tan, Func::Exp, Func::Ln, Func::Sqrt];

    /// Returns the name of the function, as it is written in an expression.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
        }
    }

    /// Applies the function to a number. Inputs outside the function's domain produce `NaN`, as
    /// with the corresponding [`f64`] methods.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
            Func::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Func {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Func::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| UnknownFunction::new(s))
    }
}

/// The function name does not name a supported [`Func`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFunction {
    /// The name that was looked up.
    pub name: String,

    /// Supported functions with a similar name, if any.
    pub suggestions: Vec<&'static str>,
}

impl UnknownFunction {
    fn new(name: &str) -> Self {
        let suggestions = Func::ALL
            .into_iter()
            .map(Func::name)
            .filter(|candidate| levenshtein(candidate, name) < 2)
            .collect();
        Self { name: name.to_string(), suggestions }
    }
}

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the `{}` function does not exist", self.name)
    }
}

impl std::error::Error for UnknownFunction {}

impl ErrorKind for UnknownFunction {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, report_offset(spans))
            .with_message(self.to_string())
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this function")
                    .with_color(EXPR)
            }));

        builder.set_help(match self.suggestions.as_slice() {
            [] => format!(
                "the available functions are: {}",
                Func::ALL.map(|func| format!("`{}`", func.name().fg(EXPR))).join(", "),
            ),
            [suggestion] => format!("did you mean the `{}` function?", suggestion.fg(EXPR)),
            suggestions => format!(
                "did you mean one of these functions? {}",
                suggestions
                    .iter()
                    .map(|s| format!("`{}`", s.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        });
        builder.finish()
    }
}
