//! Textual rendering of expressions.
//!
//! Every operator node is wrapped in parentheses, so the output never depends on precedence or
//! associativity rules: `(x*(y+1))`, `(-x)`, `sin((x^2))`. The output is deterministic, which
//! makes it a convenient way to compare trees in tests.

use std::{fmt::{self, Write}, ops::Range};
use super::Expr;

/// Writes an expression, keeping track of where occurrences of one variable end up in the output.
struct Renderer<'a, W> {
    out: W,

    /// Number of bytes written so far.
    written: usize,

    /// The variable whose occurrences are recorded in `spans`.
    target: Option<&'a str>,

    spans: Vec<Range<usize>>,
}

impl<'a, W: Write> Renderer<'a, W> {
    fn new(out: W, target: Option<&'a str>) -> Self {
        Self { out, written: 0, target, spans: Vec::new() }
    }

    fn write(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)?;
        self.written += s.len();
        Ok(())
    }

    fn binary(&mut self, lhs: &Expr, op: &str, rhs: &Expr) -> fmt::Result {
        self.write("(")?;
        self.render(lhs)?;
        self.write(op)?;
        self.render(rhs)?;
        self.write(")")
    }

    fn render(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::Constant(value) => self.write(&format_constant(*value)),
            Expr::Variable(name) => {
                let start = self.written;
                self.write(name)?;
                if self.target == Some(name.as_str()) {
                    self.spans.push(start..self.written);
                }
                Ok(())
            },
            Expr::Negate(child) => {
                self.write("(-")?;
                self.render(child)?;
                self.write(")")
            },
            Expr::Add(lhs, rhs) => self.binary(lhs, "+", rhs),
            Expr::Subtract(lhs, rhs) => self.binary(lhs, "-", rhs),
            Expr::Multiply(lhs, rhs) => self.binary(lhs, "*", rhs),
            Expr::Divide(lhs, rhs) => self.binary(lhs, "/", rhs),
            Expr::Power(lhs, rhs) => self.binary(lhs, "^", rhs),
            Expr::Call(func, arg) => {
                self.write(func.name())?;
                self.write("(")?;
                self.render(arg)?;
                self.write(")")
            },
        }
    }
}

/// Formats a constant. Negative zero is written as `0`.
fn format_constant(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::new(f, None).render(self)
    }
}

impl Expr {
    /// Renders the expression, also returning the byte ranges of every occurrence of the variable
    /// `name` in the rendered text.
    ///
    /// The text is identical to the [`Display`](fmt::Display) output.
    pub fn render_with_spans(&self, name: &str) -> (String, Vec<Range<usize>>) {
        let mut renderer = Renderer::new(String::new(), Some(name));
        // writing to a `String` cannot fail
        let _ = renderer.render(self);
        (renderer.out, renderer.spans)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::expr::Func;
    use super::*;

    #[test]
    fn leaves() {
        assert_eq!(Expr::constant(12.0).to_string(), "12");
        assert_eq!(Expr::constant(0.5).to_string(), "0.5");
        assert_eq!(Expr::constant(-3.0).to_string(), "-3");
        assert_eq!(Expr::constant(-0.0).to_string(), "0");
        assert_eq!(Expr::var("theta").to_string(), "theta");
    }

    #[test]
    fn fully_parenthesized() {
        let expr = Expr::var("x") * (Expr::var("y") + Expr::constant(1.0));
        assert_eq!(expr.to_string(), "(x*(y+1))");

        let expr = (Expr::var("a") - Expr::var("b")) / -Expr::var("c");
        assert_eq!(expr.to_string(), "((a-b)/(-c))");

        let expr = Expr::call(Func::Sin, Expr::var("x").pow(Expr::constant(2.0)));
        assert_eq!(expr.to_string(), "sin((x^2))");
    }

    #[test]
    fn spans_of_variable() {
        let expr = Expr::var("x") * (Expr::var("xy") + Expr::var("x"));
        let (text, spans) = expr.render_with_spans("x");
        assert_eq!(text, "(x*(xy+x))");
        assert_eq!(spans, vec![1..2, 7..8]);
        for span in spans {
            assert_eq!(&text[span], "x");
        }
    }

    #[test]
    fn spans_of_missing_variable() {
        let (text, spans) = Expr::constant(1.0).render_with_spans("x");
        assert_eq!(text, "1");
        assert!(spans.is_empty());
    }
}
