use ariadne::{Fmt, Label, Report, ReportKind};
use graphcalc_error::{report_offset, Error, ErrorKind, EXPR};
use std::{fmt, ops::Range};
use crate::expr::Expr;

/// The expression refers to a variable that has no value in the evaluation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundVariable {
    /// The name of the variable that was unbound.
    pub name: String,

    /// Bound variables with a similar name, if any.
    pub suggestions: Vec<String>,
}

impl UnboundVariable {
    /// Creates an [`UnboundVariable`] error without suggestions.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), suggestions: Vec::new() }
    }

    /// Converts this error into an [`Error`] whose spans point at every occurrence of the
    /// variable in the rendered text of `expr`, i.e. in `expr.to_string()`.
    pub fn into_error(self, expr: &Expr) -> Error {
        let (_, spans) = expr.render_with_spans(&self.name);
        Error::new(spans, self)
    }
}

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not bound to a value", self.name)
    }
}

impl std::error::Error for UnboundVariable {}

impl ErrorKind for UnboundVariable {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, report_offset(spans))
            .with_message(self.to_string())
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this variable")
                    .with_color(EXPR)
            }));

        builder.set_help(match self.suggestions.as_slice() {
            [] => format!(
                "to evaluate this expression, bind a value to `{}` first",
                (&self.name).fg(EXPR),
            ),
            [suggestion] => format!("did you mean the `{}` variable?", suggestion.fg(EXPR)),
            suggestions => format!(
                "did you mean one of these variables? {}",
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
