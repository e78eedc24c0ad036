//! Body reduction.
//!
//! Reduces an anonymous function body to the one invocation it is
//! equivalent to, if any.

use lintscope_api::syntax::{FunctionBody, InvocationView, StmtKind};

/// The single invocation `body` consists of.
///
/// Accepted shapes:
/// - `x => f(x)`
/// - `x => { f(x); }`
/// - `x => { return f(x); }`
pub fn reduce_body(body: &FunctionBody) -> Option<InvocationView<'_>> {
    match body {
        FunctionBody::Expression(expr) => expr.as_invocation(),
        FunctionBody::Block(block) => {
            let [stmt] = block.statements.as_slice() else {
                return None;
            };
            match &stmt.kind {
                StmtKind::Expression(expr) => expr.as_invocation(),
                StmtKind::Return(Some(expr)) => expr.as_invocation(),
                StmtKind::Return(None)
                | StmtKind::LocalDeclaration { .. }
                | StmtKind::If { .. }
                | StmtKind::Block(_)
                | StmtKind::Throw(_)
                | StmtKind::Empty => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintscope_api::syntax::{Expr, SyntaxFactory};

    fn body_of(expr: &Expr) -> &FunctionBody {
        &expr.as_anonymous_function().unwrap().body
    }

    fn call(f: &SyntaxFactory) -> Expr {
        f.call(f.ident("g"), vec![f.arg(f.ident("a"))])
    }

    #[test]
    fn test_expression_body() {
        let f = SyntaxFactory::new();
        let lambda = f.lambda(&["a"], call(&f));
        let inv = reduce_body(body_of(&lambda)).unwrap();
        assert_eq!(inv.callee().to_string(), "g");
    }

    #[test]
    fn test_single_expression_statement() {
        let f = SyntaxFactory::new();
        let lambda = f.lambda_block(&["a"], vec![f.expr_stmt(call(&f))]);
        assert!(reduce_body(body_of(&lambda)).is_some());
    }

    #[test]
    fn test_single_return_statement() {
        let f = SyntaxFactory::new();
        let lambda = f.lambda_block(&["a"], vec![f.return_stmt(Some(call(&f)))]);
        assert!(reduce_body(body_of(&lambda)).is_some());
    }

    #[test]
    fn test_rejects_other_shapes() {
        let f = SyntaxFactory::new();
        let cases = vec![
            f.lambda(&["a"], f.ident("a")),
            f.lambda_block(&["a"], vec![]),
            f.lambda_block(&["a"], vec![f.expr_stmt(call(&f)), f.expr_stmt(call(&f))]),
            f.lambda_block(&["a"], vec![f.return_stmt(None)]),
            f.lambda_block(&["a"], vec![f.return_stmt(Some(f.ident("a")))]),
            f.lambda_block(&["a"], vec![f.local("b", Some(call(&f)))]),
            f.lambda_block(&["a"], vec![f.throw_stmt(Some(call(&f)))]),
            f.lambda_block(&["a"], vec![f.block_stmt(vec![f.expr_stmt(call(&f))])]),
        ];
        for lambda in &cases {
            assert!(reduce_body(body_of(lambda)).is_none(), "{}", lambda);
        }
    }

    #[test]
    fn test_parenthesized_call_is_not_reduced() {
        let f = SyntaxFactory::new();
        let lambda = f.lambda(&["a"], f.paren(call(&f)));
        assert!(reduce_body(body_of(&lambda)).is_none());
    }
}
