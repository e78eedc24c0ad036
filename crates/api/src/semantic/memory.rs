//! In-memory semantic model.
//!
//! Holds precomputed binding results keyed by node id. Hosts can snapshot a
//! compilation into it, and tests build one with the fluent API.

use super::{GeneratedCodeOracle, SymbolResolver, TargetTypeOracle, TypeProvider};
use crate::models::{
    Conversion, MethodSymbol, Symbol, SymbolInfo, TypeKind, TypeRef, TypeSymbol,
};
use crate::syntax::NodeId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, Clone)]
pub struct InMemorySemanticModel {
    symbols: HashMap<NodeId, SymbolInfo>,
    conversions: HashMap<(NodeId, NodeId), Conversion>,
    types: HashMap<TypeRef, TypeSymbol>,
    members: HashMap<TypeRef, Vec<Symbol>>,
    base_types: HashMap<TypeRef, TypeRef>,
    invoke_methods: HashMap<TypeRef, MethodSymbol>,
    acceptable: HashMap<NodeId, Vec<TypeRef>>,
    generated: HashSet<NodeId>,
}

impl InMemorySemanticModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, optionally deriving from `base`.
    pub fn add_class(mut self, ty: TypeRef, base: Option<TypeRef>) -> Self {
        self.types
            .insert(ty.clone(), TypeSymbol::new(ty.clone(), TypeKind::Class));
        if let Some(base) = base {
            self.base_types.insert(ty, base);
        }
        self
    }

    /// Add a delegate type. Its invoke method is also registered as a member,
    /// named `Invoke` and declared on the delegate.
    pub fn add_delegate(mut self, ty: TypeRef, invoke: MethodSymbol) -> Self {
        self.types
            .insert(ty.clone(), TypeSymbol::new(ty.clone(), TypeKind::Delegate));
        self.members
            .entry(ty.clone())
            .or_default()
            .push(Symbol::Method(invoke.clone()));
        self.invoke_methods.insert(ty, invoke);
        self
    }

    /// Declare a method on its containing type.
    pub fn add_method(mut self, method: MethodSymbol) -> Self {
        self.members
            .entry(method.containing_type.clone())
            .or_default()
            .push(Symbol::Method(method));
        self
    }

    /// Bind a node to a single method.
    pub fn bind_method(self, node: NodeId, method: MethodSymbol) -> Self {
        self.bind(node, SymbolInfo::resolved(Symbol::Method(method)))
    }

    pub fn bind(mut self, node: NodeId, info: SymbolInfo) -> Self {
        self.symbols.insert(node, info);
        self
    }

    pub fn conversion(mut self, from: NodeId, to_position: NodeId, conversion: Conversion) -> Self {
        self.conversions.insert((from, to_position), conversion);
        self
    }

    pub fn accept(mut self, position: NodeId, types: Vec<TypeRef>) -> Self {
        self.acceptable.insert(position, types);
        self
    }

    pub fn mark_generated(mut self, node: NodeId) -> Self {
        self.generated.insert(node);
        self
    }
}

impl SymbolResolver for InMemorySemanticModel {
    fn symbol_info(&self, node: NodeId) -> SymbolInfo {
        self.symbols.get(&node).cloned().unwrap_or_default()
    }

    fn classify_conversion(&self, from: NodeId, to_position: NodeId) -> Conversion {
        self.conversions
            .get(&(from, to_position))
            .copied()
            .unwrap_or_default()
    }
}

impl TypeProvider for InMemorySemanticModel {
    fn type_info(&self, ty: &TypeRef) -> Option<TypeSymbol> {
        self.types.get(ty).cloned()
    }

    fn members(&self, ty: &TypeRef) -> Vec<Symbol> {
        self.members.get(ty).cloned().unwrap_or_default()
    }

    fn base_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        self.base_types.get(ty).cloned()
    }

    fn delegate_invoke_method(&self, ty: &TypeRef) -> Option<MethodSymbol> {
        self.invoke_methods.get(ty).cloned()
    }
}

impl TargetTypeOracle for InMemorySemanticModel {
    fn acceptable_types(&self, position: NodeId) -> Vec<TypeRef> {
        self.acceptable.get(&position).cloned().unwrap_or_default()
    }
}

impl GeneratedCodeOracle for InMemorySemanticModel {
    fn is_generated_code(&self, node: NodeId) -> bool {
        self.generated.contains(&node)
    }
}
