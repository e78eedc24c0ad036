//! Read-only syntax tree view.
//!
//! The tree is produced by an external parser and only read by analyzers.
//! Every node carries a [`NodeId`] which is the key used to query the
//! semantic services, and a [`Range`] used for diagnostic locations.
//!
//! Node categories are closed enums: adding a kind means extending the enum
//! and every exhaustive `match` over it.

mod display;
pub mod factory;

use crate::models::Range;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::path::PathBuf;

pub use factory::SyntaxFactory;

pub type Name = SmolStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A type as written in source, e.g. `Foo` or `List<int>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSyntax {
    pub id: NodeId,
    pub range: Range,
    pub text: SmolStr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub range: Range,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Identifier(Name),
    /// `Name<T1, T2>` used as a simple name.
    GenericName {
        name: Name,
        type_arguments: Vec<TypeSyntax>,
    },
    MemberAccess {
        target: Box<Expr>,
        name: Name,
        type_arguments: Vec<TypeSyntax>,
    },
    Invocation(Invocation),
    AnonymousFunction(AnonymousFunction),
    Literal(Literal),
    This,
    Parenthesized(Box<Expr>),
    ElementAccess {
        target: Box<Expr>,
        arguments: Vec<Argument>,
    },
    Cast {
        ty: TypeSyntax,
        operand: Box<Expr>,
    },
    /// `operand is T`
    IsType {
        operand: Box<Expr>,
        ty: TypeSyntax,
    },
    /// `operand as T`
    AsType {
        operand: Box<Expr>,
        ty: TypeSyntax,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    ObjectCreation {
        ty: TypeSyntax,
        arguments: Vec<Argument>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    String(SmolStr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LogicalAnd,
    LogicalOr,
    Add,
    Subtract,
    Multiply,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub callee: Box<Expr>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentModifier {
    #[default]
    None,
    Ref,
    Out,
    In,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub modifier: ArgumentModifier,
    pub expr: Expr,
}

/// Surface form of an anonymous function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionForm {
    /// `x => ...`
    SimpleLambda,
    /// `(x, y) => ...`
    ParenthesizedLambda,
    /// `delegate (int x) { ... }`
    AnonymousMethod,
}

/// Classification of an anonymous function by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    LambdaWithExpressionBody,
    LambdaWithBlockBody,
    AnonymousDelegate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: NodeId,
    pub range: Range,
    pub name: Name,
    pub ty: Option<TypeSyntax>,
    pub modifier: ArgumentModifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    Expression(Box<Expr>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousFunction {
    pub form: FunctionForm,
    /// `None` for `delegate { ... }` written without a parameter list.
    pub parameters: Option<Vec<Parameter>>,
    pub body: FunctionBody,
    pub is_async: bool,
}

impl AnonymousFunction {
    pub fn candidate_kind(&self) -> CandidateKind {
        match (self.form, &self.body) {
            (FunctionForm::AnonymousMethod, _) => CandidateKind::AnonymousDelegate,
            (_, FunctionBody::Expression(_)) => CandidateKind::LambdaWithExpressionBody,
            (_, FunctionBody::Block(_)) => CandidateKind::LambdaWithBlockBody,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: NodeId,
    pub range: Range,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub id: NodeId,
    pub range: Range,
    pub kind: StmtKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Expression(Expr),
    Return(Option<Expr>),
    LocalDeclaration {
        ty: Option<TypeSyntax>,
        name: Name,
        initializer: Option<Expr>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    Block(Block),
    Throw(Option<Expr>),
    Empty,
}

/// Borrowed view of an invocation together with its enclosing expression node.
#[derive(Debug, Clone, Copy)]
pub struct InvocationView<'a> {
    pub expr: &'a Expr,
    pub invocation: &'a Invocation,
}

impl<'a> InvocationView<'a> {
    pub fn id(&self) -> NodeId {
        self.expr.id
    }

    pub fn callee(&self) -> &'a Expr {
        &self.invocation.callee
    }

    pub fn arguments(&self) -> &'a [Argument] {
        &self.invocation.arguments
    }

    /// Name of the invoked member for `x.Name(...)` / `Name(...)` shapes.
    pub fn member_name(&self) -> Option<&'a str> {
        match &self.invocation.callee.kind {
            ExprKind::MemberAccess { name, .. } => Some(name),
            ExprKind::Identifier(name) | ExprKind::GenericName { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Receiver of a member-access callee (`recv` in `recv.Name(...)`).
    pub fn receiver(&self) -> Option<&'a Expr> {
        match &self.invocation.callee.kind {
            ExprKind::MemberAccess { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl Expr {
    pub fn as_invocation(&self) -> Option<InvocationView<'_>> {
        match &self.kind {
            ExprKind::Invocation(invocation) => Some(InvocationView {
                expr: self,
                invocation,
            }),
            _ => None,
        }
    }

    pub fn as_anonymous_function(&self) -> Option<&AnonymousFunction> {
        match &self.kind {
            ExprKind::AnonymousFunction(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_null_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Literal(Literal::Null))
    }
}

/// Discriminant of every node the host can dispatch on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    IdentifierName,
    GenericName,
    MemberAccessExpression,
    InvocationExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    AnonymousMethodExpression,
    LiteralExpression,
    ThisExpression,
    ParenthesizedExpression,
    ElementAccessExpression,
    CastExpression,
    IsExpression,
    AsExpression,
    BinaryExpression,
    ObjectCreationExpression,
    ExpressionStatement,
    ReturnStatement,
    LocalDeclarationStatement,
    IfStatement,
    BlockStatement,
    ThrowStatement,
    EmptyStatement,
    Block,
}

impl ExprKind {
    pub fn syntax_kind(&self) -> SyntaxKind {
        match self {
            ExprKind::Identifier(_) => SyntaxKind::IdentifierName,
            ExprKind::GenericName { .. } => SyntaxKind::GenericName,
            ExprKind::MemberAccess { .. } => SyntaxKind::MemberAccessExpression,
            ExprKind::Invocation(_) => SyntaxKind::InvocationExpression,
            ExprKind::AnonymousFunction(f) => match f.form {
                FunctionForm::SimpleLambda => SyntaxKind::SimpleLambdaExpression,
                FunctionForm::ParenthesizedLambda => SyntaxKind::ParenthesizedLambdaExpression,
                FunctionForm::AnonymousMethod => SyntaxKind::AnonymousMethodExpression,
            },
            ExprKind::Literal(_) => SyntaxKind::LiteralExpression,
            ExprKind::This => SyntaxKind::ThisExpression,
            ExprKind::Parenthesized(_) => SyntaxKind::ParenthesizedExpression,
            ExprKind::ElementAccess { .. } => SyntaxKind::ElementAccessExpression,
            ExprKind::Cast { .. } => SyntaxKind::CastExpression,
            ExprKind::IsType { .. } => SyntaxKind::IsExpression,
            ExprKind::AsType { .. } => SyntaxKind::AsExpression,
            ExprKind::Binary { .. } => SyntaxKind::BinaryExpression,
            ExprKind::ObjectCreation { .. } => SyntaxKind::ObjectCreationExpression,
        }
    }
}

impl StmtKind {
    pub fn syntax_kind(&self) -> SyntaxKind {
        match self {
            StmtKind::Expression(_) => SyntaxKind::ExpressionStatement,
            StmtKind::Return(_) => SyntaxKind::ReturnStatement,
            StmtKind::LocalDeclaration { .. } => SyntaxKind::LocalDeclarationStatement,
            StmtKind::If { .. } => SyntaxKind::IfStatement,
            StmtKind::Block(_) => SyntaxKind::BlockStatement,
            StmtKind::Throw(_) => SyntaxKind::ThrowStatement,
            StmtKind::Empty => SyntaxKind::EmptyStatement,
        }
    }
}

/// Any node of the tree, borrowed.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Block(&'a Block),
}

impl<'a> SyntaxNode<'a> {
    pub fn id(&self) -> NodeId {
        match self {
            SyntaxNode::Expr(e) => e.id,
            SyntaxNode::Stmt(s) => s.id,
            SyntaxNode::Block(b) => b.id,
        }
    }

    pub fn range(&self) -> Range {
        match self {
            SyntaxNode::Expr(e) => e.range,
            SyntaxNode::Stmt(s) => s.range,
            SyntaxNode::Block(b) => b.range,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxNode::Expr(e) => e.kind.syntax_kind(),
            SyntaxNode::Stmt(s) => s.kind.syntax_kind(),
            SyntaxNode::Block(_) => SyntaxKind::Block,
        }
    }

    pub fn as_expr(&self) -> Option<&'a Expr> {
        match self {
            SyntaxNode::Expr(e) => Some(e),
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<SyntaxNode<'a>> {
        let mut out = Vec::new();
        match self {
            SyntaxNode::Expr(e) => push_expr_children(e, &mut out),
            SyntaxNode::Stmt(s) => push_stmt_children(s, &mut out),
            SyntaxNode::Block(b) => out.extend(b.statements.iter().map(SyntaxNode::Stmt)),
        }
        out
    }
}

fn push_expr_children<'a>(expr: &'a Expr, out: &mut Vec<SyntaxNode<'a>>) {
    match &expr.kind {
        ExprKind::Identifier(_)
        | ExprKind::GenericName { .. }
        | ExprKind::Literal(_)
        | ExprKind::This => {}
        ExprKind::MemberAccess { target, .. } => out.push(SyntaxNode::Expr(target)),
        ExprKind::Invocation(inv) => {
            out.push(SyntaxNode::Expr(&inv.callee));
            out.extend(inv.arguments.iter().map(|a| SyntaxNode::Expr(&a.expr)));
        }
        ExprKind::AnonymousFunction(f) => match &f.body {
            FunctionBody::Expression(body) => out.push(SyntaxNode::Expr(body)),
            FunctionBody::Block(block) => out.push(SyntaxNode::Block(block)),
        },
        ExprKind::Parenthesized(inner) => out.push(SyntaxNode::Expr(inner)),
        ExprKind::ElementAccess { target, arguments } => {
            out.push(SyntaxNode::Expr(target));
            out.extend(arguments.iter().map(|a| SyntaxNode::Expr(&a.expr)));
        }
        ExprKind::Cast { operand, .. }
        | ExprKind::IsType { operand, .. }
        | ExprKind::AsType { operand, .. } => out.push(SyntaxNode::Expr(operand)),
        ExprKind::Binary { left, right, .. } => {
            out.push(SyntaxNode::Expr(left));
            out.push(SyntaxNode::Expr(right));
        }
        ExprKind::ObjectCreation { arguments, .. } => {
            out.extend(arguments.iter().map(|a| SyntaxNode::Expr(&a.expr)));
        }
    }
}

fn push_stmt_children<'a>(stmt: &'a Stmt, out: &mut Vec<SyntaxNode<'a>>) {
    match &stmt.kind {
        StmtKind::Expression(e) => out.push(SyntaxNode::Expr(e)),
        StmtKind::Return(e) | StmtKind::Throw(e) => out.extend(e.iter().map(SyntaxNode::Expr)),
        StmtKind::LocalDeclaration { initializer, .. } => {
            out.extend(initializer.iter().map(SyntaxNode::Expr))
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push(SyntaxNode::Expr(condition));
            out.push(SyntaxNode::Stmt(then_branch));
            if let Some(else_branch) = else_branch {
                out.push(SyntaxNode::Stmt(else_branch));
            }
        }
        StmtKind::Block(b) => out.push(SyntaxNode::Block(b)),
        StmtKind::Empty => {}
    }
}

/// A parsed file: its path and top-level statement block.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub path: PathBuf,
    pub root: Block,
}

impl SyntaxTree {
    pub fn new(path: impl Into<PathBuf>, root: Block) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// All nodes in pre-order, root block first.
    pub fn descendants(&self) -> Vec<SyntaxNode<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![SyntaxNode::Block(&self.root)];
        while let Some(node) = stack.pop() {
            let children = node.children();
            out.push(node);
            stack.extend(children.into_iter().rev());
        }
        out
    }
}
