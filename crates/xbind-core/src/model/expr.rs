use super::types::ClassName;

/// An expression inside a generated method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    This,
    Var(String),
    /// `Class.FIELD`
    StaticRef { class: ClassName, field: String },
    /// `new Class(args)`
    New { class: ClassName, args: Vec<Expr> },
    /// `Class.method(args)`
    StaticInvoke {
        class: ClassName,
        method: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn static_ref(class: ClassName, field: impl Into<String>) -> Self {
        Expr::StaticRef {
            class,
            field: field.into(),
        }
    }

    pub fn new_instance(class: ClassName) -> Self {
        Expr::New {
            class,
            args: Vec::new(),
        }
    }

    pub fn static_invoke(class: ClassName, method: impl Into<String>) -> Self {
        Expr::StaticInvoke {
            class,
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument to a `New` or `StaticInvoke`; other expressions are returned unchanged.
    pub fn arg(mut self, arg: Expr) -> Self {
        match &mut self {
            Expr::New { args, .. } | Expr::StaticInvoke { args, .. } => args.push(arg),
            Expr::This | Expr::Var(_) | Expr::StaticRef { .. } => {}
        }
        self
    }

    /// Every class name this expression refers to.
    pub fn class_names(&self) -> Vec<&ClassName> {
        let mut names = Vec::new();
        self.collect_class_names(&mut names);
        names
    }

    fn collect_class_names<'a>(&'a self, names: &mut Vec<&'a ClassName>) {
        match self {
            Expr::This | Expr::Var(_) => {}
            Expr::StaticRef { class, .. } => names.push(class),
            Expr::New { class, args } | Expr::StaticInvoke { class, args, .. } => {
                names.push(class);
                for arg in args {
                    arg.collect_class_names(names);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expr),
}

impl Statement {
    pub fn expr(&self) -> &Expr {
        match self {
            Statement::Return(expr) => expr,
        }
    }
}
