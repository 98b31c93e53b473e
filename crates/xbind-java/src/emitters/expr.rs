use xbind_core::model::{Expr, MethodDef, Statement};

/// Render an expression using simple class names.
pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::This => "this".to_string(),
        Expr::Var(name) => name.clone(),
        Expr::StaticRef { class, field } => format!("{}.{field}", class.simple()),
        Expr::New { class, args } => format!("new {}({})", class.simple(), render_args(args)),
        Expr::StaticInvoke {
            class,
            method,
            args,
        } => format!("{}.{method}({})", class.simple(), render_args(args)),
    }
}

fn render_args(args: &[Expr]) -> String {
    args.iter().map(render_expr).collect::<Vec<_>>().join(", ")
}

pub fn render_statement(statement: &Statement) -> String {
    match statement {
        Statement::Return(expr) => format!("return {};", render_expr(expr)),
    }
}

/// `public boolean equals(Object that)`
pub fn render_signature(method: &MethodDef) -> String {
    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect();
    let declaration = format!("{} {}({})", method.return_type, method.name, params.join(", "));
    match method.visibility.keyword() {
        "" => declaration,
        keyword => format!("{keyword} {declaration}"),
    }
}
