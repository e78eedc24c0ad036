//! Textual form of syntax nodes, normalized C#-style.

use super::*;
use std::fmt;

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_type_arguments(f: &mut fmt::Formatter<'_>, args: &[TypeSyntax]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_list(f, args)?;
    f.write_str(">")
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for ArgumentModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentModifier::None => Ok(()),
            ArgumentModifier::Ref => f.write_str("ref "),
            ArgumentModifier::Out => f.write_str("out "),
            ArgumentModifier::In => f.write_str("in "),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier, self.expr)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.modifier)?;
        if let Some(ty) = &self.ty {
            write!(f, "{} ", ty)?;
        }
        f.write_str(&self.name)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
        };
        f.write_str(op)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl fmt::Display for AnonymousFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_async {
            f.write_str("async ")?;
        }
        match self.form {
            FunctionForm::SimpleLambda => {
                if let Some(p) = self.parameters.as_ref().and_then(|ps| ps.first()) {
                    write!(f, "{}", p)?;
                }
                f.write_str(" => ")?;
            }
            FunctionForm::ParenthesizedLambda => {
                f.write_str("(")?;
                write_list(f, self.parameters.as_deref().unwrap_or_default())?;
                f.write_str(") => ")?;
            }
            FunctionForm::AnonymousMethod => {
                f.write_str("delegate ")?;
                if let Some(ps) = &self.parameters {
                    f.write_str("(")?;
                    write_list(f, ps)?;
                    f.write_str(") ")?;
                }
            }
        }
        match &self.body {
            FunctionBody::Expression(e) => write!(f, "{}", e),
            FunctionBody::Block(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => f.write_str(name),
            ExprKind::GenericName {
                name,
                type_arguments,
            } => {
                f.write_str(name)?;
                write_type_arguments(f, type_arguments)
            }
            ExprKind::MemberAccess {
                target,
                name,
                type_arguments,
            } => {
                write!(f, "{}.{}", target, name)?;
                write_type_arguments(f, type_arguments)
            }
            ExprKind::Invocation(inv) => {
                write!(f, "{}(", inv.callee)?;
                write_list(f, &inv.arguments)?;
                f.write_str(")")
            }
            ExprKind::AnonymousFunction(func) => write!(f, "{}", func),
            ExprKind::Literal(lit) => write!(f, "{}", lit),
            ExprKind::This => f.write_str("this"),
            ExprKind::Parenthesized(inner) => write!(f, "({})", inner),
            ExprKind::ElementAccess { target, arguments } => {
                write!(f, "{}[", target)?;
                write_list(f, arguments)?;
                f.write_str("]")
            }
            ExprKind::Cast { ty, operand } => write!(f, "({}){}", ty, operand),
            ExprKind::IsType { operand, ty } => write!(f, "{} is {}", operand, ty),
            ExprKind::AsType { operand, ty } => write!(f, "{} as {}", operand, ty),
            ExprKind::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
            ExprKind::ObjectCreation { ty, arguments } => {
                write!(f, "new {}(", ty)?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Expression(e) => write!(f, "{};", e),
            StmtKind::Return(Some(e)) => write!(f, "return {};", e),
            StmtKind::Return(None) => f.write_str("return;"),
            StmtKind::LocalDeclaration {
                ty,
                name,
                initializer,
            } => {
                match ty {
                    Some(ty) => write!(f, "{} {}", ty, name)?,
                    None => write!(f, "var {}", name)?,
                }
                if let Some(init) = initializer {
                    write!(f, " = {}", init)?;
                }
                f.write_str(";")
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if ({}) {}", condition, then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                Ok(())
            }
            StmtKind::Block(b) => write!(f, "{}", b),
            StmtKind::Throw(Some(e)) => write!(f, "throw {};", e),
            StmtKind::Throw(None) => f.write_str("throw;"),
            StmtKind::Empty => f.write_str(";"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        for stmt in &self.statements {
            write!(f, "{} ", stmt)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax::{BinaryOp, SyntaxFactory};

    #[test]
    fn test_expression_text() {
        let f = SyntaxFactory::new();
        let call = f.call(
            f.member(f.member(f.ident("a"), "b"), "C"),
            vec![f.arg(f.ident("x")), f.out_arg(f.ident("y"))],
        );
        assert_eq!(call.to_string(), "a.b.C(x, out y)");

        let lambda = f.lambda(&["x"], f.is_type(f.ident("x"), "Foo"));
        assert_eq!(lambda.to_string(), "x => x is Foo");

        let cast = f.paren_lambda(&["x", "y"], f.cast("Foo", f.ident("x")));
        assert_eq!(cast.to_string(), "(x, y) => (Foo)x");

        let neq = f.binary(BinaryOp::NotEquals, f.ident("x"), f.null());
        assert_eq!(neq.to_string(), "x != null");
    }

    #[test]
    fn test_statement_text() {
        let f = SyntaxFactory::new();
        let anon = f.anonymous_method(
            Some(&[("int", "a")][..]),
            vec![f.return_stmt(Some(f.call(f.ident("g"), vec![f.arg(f.ident("a"))])))],
        );
        assert_eq!(anon.to_string(), "delegate (int a) { return g(a); }");

        let bare = f.anonymous_method(None, vec![]);
        assert_eq!(bare.to_string(), "delegate { }");

        let generic = f.call(f.generic_name("Parse", &["int"]), vec![]);
        assert_eq!(generic.to_string(), "Parse<int>()");
    }
}
