use super::{GeneratedCodeOracle, SymbolResolver, TargetTypeOracle, TypeProvider};
use crate::models::{Conversion, MethodSymbol, Symbol, SymbolInfo, TypeRef, TypeSymbol};
use crate::syntax::NodeId;

/// A semantic model that knows nothing.
/// Every query comes back empty, so no analyzer ever reports against it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSemanticModel;

impl SymbolResolver for NoOpSemanticModel {
    fn symbol_info(&self, _node: NodeId) -> SymbolInfo {
        SymbolInfo::none()
    }

    fn classify_conversion(&self, _from: NodeId, _to_position: NodeId) -> Conversion {
        Conversion::none()
    }
}

impl TypeProvider for NoOpSemanticModel {
    fn type_info(&self, _ty: &TypeRef) -> Option<TypeSymbol> {
        None
    }

    fn members(&self, _ty: &TypeRef) -> Vec<Symbol> {
        vec![]
    }

    fn base_type(&self, _ty: &TypeRef) -> Option<TypeRef> {
        None
    }

    fn delegate_invoke_method(&self, _ty: &TypeRef) -> Option<MethodSymbol> {
        None
    }
}

impl TargetTypeOracle for NoOpSemanticModel {
    fn acceptable_types(&self, _position: NodeId) -> Vec<TypeRef> {
        vec![]
    }
}

impl GeneratedCodeOracle for NoOpSemanticModel {}
