//! Chain-shape matching for type-filtering query chains.
//!
//! Recognized receivers of a terminal call `.M(...)`:
//!
//! ```text
//! src.Where(p => p is T).Select(q => (T)q)
//! src.Where(p => p is T).Select(q => q as T)
//! src.Select(q => q as T).Where(p => p != null)
//! ```

use lintscope_api::syntax::{
    BinaryOp, Expr, ExprKind, FunctionBody, FunctionForm, InvocationView, Parameter, TypeSyntax,
};

/// A matched chain, borrowed from the tree.
#[derive(Debug, Clone, Copy)]
pub struct ChainMatch<'a> {
    /// The unfiltered sequence (`src`).
    pub source: &'a Expr,
    /// The type filtered to (`T`).
    pub element_type: &'a TypeSyntax,
    /// Parameter of the filtering lambda.
    pub parameter: &'a Parameter,
    /// Argument of the terminal call, when it takes exactly one.
    pub follow_up: Option<&'a Expr>,
}

pub trait ChainShapeMatcher: Send + Sync {
    fn match_chain<'a>(&self, terminal: InvocationView<'a>) -> Option<ChainMatch<'a>>;
}

/// Matches `Where`/`Select` chains that filter by type.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectChainMatcher;

impl ChainShapeMatcher for SelectChainMatcher {
    fn match_chain<'a>(&self, terminal: InvocationView<'a>) -> Option<ChainMatch<'a>> {
        let outer = terminal.receiver()?.as_invocation()?;
        let (source, element_type, parameter) = match outer.member_name()? {
            "Select" => {
                let (q, projected) = lambda_argument(outer)?;
                let projected_type = projection_type(q, projected)?;
                let inner = outer.receiver()?.as_invocation()?;
                if inner.member_name()? != "Where" {
                    return None;
                }
                let (p, test) = lambda_argument(inner)?;
                let tested_type = type_test(p, test)?;
                if tested_type.text != projected_type.text {
                    return None;
                }
                (inner.receiver()?, projected_type, p)
            }
            "Where" => {
                let (p, test) = lambda_argument(outer)?;
                if !is_not_null_test(p, test) {
                    return None;
                }
                let inner = outer.receiver()?.as_invocation()?;
                if inner.member_name()? != "Select" {
                    return None;
                }
                let (q, projected) = lambda_argument(inner)?;
                let ExprKind::AsType { operand, ty } = &projected.kind else {
                    return None;
                };
                if !is_parameter(operand, q) {
                    return None;
                }
                (inner.receiver()?, ty, p)
            }
            _ => return None,
        };

        let follow_up = match terminal.arguments() {
            [arg] => Some(&arg.expr),
            _ => None,
        };

        Some(ChainMatch {
            source,
            element_type,
            parameter,
            follow_up,
        })
    }
}

/// The call's only argument as a single-parameter, expression-bodied lambda.
fn lambda_argument<'a>(call: InvocationView<'a>) -> Option<(&'a Parameter, &'a Expr)> {
    let [arg] = call.arguments() else {
        return None;
    };
    let func = arg.expr.as_anonymous_function()?;
    if func.form == FunctionForm::AnonymousMethod || func.is_async {
        return None;
    }
    let [param] = func.parameters.as_deref()? else {
        return None;
    };
    match &func.body {
        FunctionBody::Expression(body) => Some((param, body)),
        FunctionBody::Block(_) => None,
    }
}

fn is_parameter(expr: &Expr, param: &Parameter) -> bool {
    expr.as_identifier() == Some(param.name.as_str())
}

/// `T` in `p is T`.
fn type_test<'a>(param: &Parameter, body: &'a Expr) -> Option<&'a TypeSyntax> {
    match &body.kind {
        ExprKind::IsType { operand, ty } if is_parameter(operand, param) => Some(ty),
        _ => None,
    }
}

/// `T` in `(T)q` or `q as T`.
fn projection_type<'a>(param: &Parameter, body: &'a Expr) -> Option<&'a TypeSyntax> {
    match &body.kind {
        ExprKind::Cast { ty, operand } | ExprKind::AsType { operand, ty }
            if is_parameter(operand, param) =>
        {
            Some(ty)
        }
        _ => None,
    }
}

/// `p != null` or `null != p`.
fn is_not_null_test(param: &Parameter, body: &Expr) -> bool {
    match &body.kind {
        ExprKind::Binary {
            op: BinaryOp::NotEquals,
            left,
            right,
        } => {
            (is_parameter(left, param) && right.is_null_literal())
                || (left.is_null_literal() && is_parameter(right, param))
        }
        _ => false,
    }
}
