//! Programmatic construction of syntax trees.
//!
//! Parsers adapting an external tree and tests both build nodes through
//! [`SyntaxFactory`], which hands out unique [`NodeId`]s.

use super::*;
use std::cell::Cell;

/// Allocates node ids and builds nodes.
///
/// Synthetic ranges place every node on line 0 with its id as the column, so
/// ranges are unique and follow construction order.
#[derive(Debug, Default)]
pub struct SyntaxFactory {
    next: Cell<u32>,
}

impl SyntaxFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating ids at `first` (keeps ids disjoint across factories).
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Cell::new(first),
        }
    }

    pub fn next_id(&self) -> (NodeId, Range) {
        let id = self.next.get();
        self.next.set(id + 1);
        let col = id as usize;
        (NodeId(id), Range::new(0, col, 0, col + 1))
    }

    fn expr(&self, kind: ExprKind) -> Expr {
        let (id, range) = self.next_id();
        Expr { id, range, kind }
    }

    fn stmt(&self, kind: StmtKind) -> Stmt {
        let (id, range) = self.next_id();
        Stmt { id, range, kind }
    }

    // === Types and parameters ===

    pub fn ty(&self, text: &str) -> TypeSyntax {
        let (id, range) = self.next_id();
        TypeSyntax {
            id,
            range,
            text: text.into(),
        }
    }

    pub fn param(&self, name: &str) -> Parameter {
        let (id, range) = self.next_id();
        Parameter {
            id,
            range,
            name: name.into(),
            ty: None,
            modifier: ArgumentModifier::None,
        }
    }

    pub fn typed_param(&self, ty: &str, name: &str) -> Parameter {
        Parameter {
            ty: Some(self.ty(ty)),
            ..self.param(name)
        }
    }

    // === Expressions ===

    pub fn ident(&self, name: &str) -> Expr {
        self.expr(ExprKind::Identifier(name.into()))
    }

    pub fn generic_name(&self, name: &str, type_arguments: &[&str]) -> Expr {
        let type_arguments = type_arguments.iter().map(|t| self.ty(t)).collect();
        self.expr(ExprKind::GenericName {
            name: name.into(),
            type_arguments,
        })
    }

    pub fn member(&self, target: Expr, name: &str) -> Expr {
        self.expr(ExprKind::MemberAccess {
            target: Box::new(target),
            name: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn call(&self, callee: Expr, arguments: Vec<Argument>) -> Expr {
        self.expr(ExprKind::Invocation(Invocation {
            callee: Box::new(callee),
            arguments,
        }))
    }

    /// `target.name(arguments)`
    pub fn method_call(&self, target: Expr, name: &str, arguments: Vec<Argument>) -> Expr {
        let callee = self.member(target, name);
        self.call(callee, arguments)
    }

    pub fn arg(&self, expr: Expr) -> Argument {
        Argument {
            modifier: ArgumentModifier::None,
            expr,
        }
    }

    pub fn ref_arg(&self, expr: Expr) -> Argument {
        Argument {
            modifier: ArgumentModifier::Ref,
            expr,
        }
    }

    pub fn out_arg(&self, expr: Expr) -> Argument {
        Argument {
            modifier: ArgumentModifier::Out,
            expr,
        }
    }

    pub fn in_arg(&self, expr: Expr) -> Argument {
        Argument {
            modifier: ArgumentModifier::In,
            expr,
        }
    }

    /// Expression-bodied lambda; a single parameter yields `x => ...`.
    pub fn lambda(&self, parameters: &[&str], body: Expr) -> Expr {
        let form = if parameters.len() == 1 {
            FunctionForm::SimpleLambda
        } else {
            FunctionForm::ParenthesizedLambda
        };
        self.anonymous(form, parameters, FunctionBody::Expression(Box::new(body)))
    }

    /// Expression-bodied `(x) => ...` even for a single parameter.
    pub fn paren_lambda(&self, parameters: &[&str], body: Expr) -> Expr {
        self.anonymous(
            FunctionForm::ParenthesizedLambda,
            parameters,
            FunctionBody::Expression(Box::new(body)),
        )
    }

    pub fn lambda_block(&self, parameters: &[&str], statements: Vec<Stmt>) -> Expr {
        let form = if parameters.len() == 1 {
            FunctionForm::SimpleLambda
        } else {
            FunctionForm::ParenthesizedLambda
        };
        self.anonymous(form, parameters, FunctionBody::Block(self.block(statements)))
    }

    /// `delegate (T1 a, T2 b) { ... }`, or `delegate { ... }` when `parameters` is `None`.
    pub fn anonymous_method(
        &self,
        parameters: Option<&[(&str, &str)]>,
        statements: Vec<Stmt>,
    ) -> Expr {
        let parameters =
            parameters.map(|ps| ps.iter().map(|(ty, name)| self.typed_param(ty, name)).collect());
        let body = FunctionBody::Block(self.block(statements));
        self.expr(ExprKind::AnonymousFunction(AnonymousFunction {
            form: FunctionForm::AnonymousMethod,
            parameters,
            body,
            is_async: false,
        }))
    }

    fn anonymous(&self, form: FunctionForm, parameters: &[&str], body: FunctionBody) -> Expr {
        let parameters = parameters.iter().map(|p| self.param(p)).collect();
        self.expr(ExprKind::AnonymousFunction(AnonymousFunction {
            form,
            parameters: Some(parameters),
            body,
            is_async: false,
        }))
    }

    pub fn null(&self) -> Expr {
        self.expr(ExprKind::Literal(Literal::Null))
    }

    pub fn int(&self, value: i64) -> Expr {
        self.expr(ExprKind::Literal(Literal::Int(value)))
    }

    pub fn bool(&self, value: bool) -> Expr {
        self.expr(ExprKind::Literal(Literal::Bool(value)))
    }

    pub fn string(&self, value: &str) -> Expr {
        self.expr(ExprKind::Literal(Literal::String(value.into())))
    }

    pub fn this(&self) -> Expr {
        self.expr(ExprKind::This)
    }

    pub fn paren(&self, inner: Expr) -> Expr {
        self.expr(ExprKind::Parenthesized(Box::new(inner)))
    }

    pub fn index(&self, target: Expr, arguments: Vec<Argument>) -> Expr {
        self.expr(ExprKind::ElementAccess {
            target: Box::new(target),
            arguments,
        })
    }

    pub fn cast(&self, ty: &str, operand: Expr) -> Expr {
        self.expr(ExprKind::Cast {
            ty: self.ty(ty),
            operand: Box::new(operand),
        })
    }

    pub fn is_type(&self, operand: Expr, ty: &str) -> Expr {
        self.expr(ExprKind::IsType {
            operand: Box::new(operand),
            ty: self.ty(ty),
        })
    }

    pub fn as_type(&self, operand: Expr, ty: &str) -> Expr {
        self.expr(ExprKind::AsType {
            operand: Box::new(operand),
            ty: self.ty(ty),
        })
    }

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        self.expr(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn new_object(&self, ty: &str, arguments: Vec<Argument>) -> Expr {
        self.expr(ExprKind::ObjectCreation {
            ty: self.ty(ty),
            arguments,
        })
    }

    // === Statements ===

    pub fn block(&self, statements: Vec<Stmt>) -> Block {
        let (id, range) = self.next_id();
        Block {
            id,
            range,
            statements,
        }
    }

    pub fn expr_stmt(&self, expr: Expr) -> Stmt {
        self.stmt(StmtKind::Expression(expr))
    }

    pub fn return_stmt(&self, expr: Option<Expr>) -> Stmt {
        self.stmt(StmtKind::Return(expr))
    }

    pub fn local(&self, name: &str, initializer: Option<Expr>) -> Stmt {
        self.stmt(StmtKind::LocalDeclaration {
            ty: None,
            name: name.into(),
            initializer,
        })
    }

    pub fn if_stmt(&self, condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
        self.stmt(StmtKind::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn block_stmt(&self, statements: Vec<Stmt>) -> Stmt {
        let block = self.block(statements);
        self.stmt(StmtKind::Block(block))
    }

    pub fn throw_stmt(&self, expr: Option<Expr>) -> Stmt {
        self.stmt(StmtKind::Throw(expr))
    }

    pub fn empty(&self) -> Stmt {
        self.stmt(StmtKind::Empty)
    }

    pub fn tree(&self, path: &str, statements: Vec<Stmt>) -> SyntaxTree {
        SyntaxTree::new(path, self.block(statements))
    }
}
