use graphcalc_expr::{simplify_with_steps, Ctxt, Eval, Expr};

/// Evaluates the given expression, printing the result or an error report.
fn eval_print(expr: &Expr, ctxt: &Ctxt) {
    match expr.eval(ctxt) {
        Ok(value) => println!("{} = {}", expr, value),
        Err(err) => err.into_error(expr).report_to_stderr("expr", &expr.to_string()),
    }
}

fn main() {
    let x = || Expr::var("x");

    // x^2 + 5x + 6
    let f = x().pow(Expr::constant(2.0)) + Expr::constant(5.0) * x() + Expr::constant(6.0);
    println!("f(x)  = {}", f);

    let raw = f.derivative("x");
    println!("f'(x) = {}", raw);

    let (df, steps) = simplify_with_steps(&raw);
    println!("      = {}", df);
    for step in steps {
        println!("  {:?}", step);
    }

    let mut ctxt = Ctxt::default();
    ctxt.add_var("x", 2.0);
    eval_print(&f, &ctxt);
    eval_print(&df, &ctxt);

    // `y` is never bound
    let g = x() * Expr::var("y") + Expr::var("y");
    eval_print(&g, &ctxt);
}
