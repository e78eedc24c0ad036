//! Semantic service abstractions.
//!
//! Analyzers never see a compiler. They query these narrow capability traits,
//! which a host implements over its own binder and type checker, and which
//! tests implement with [`InMemorySemanticModel`].
//!
//! # Key Traits
//!
//! - [`SymbolResolver`] - Binds nodes to symbols and classifies conversions
//! - [`TypeProvider`] - Type lookup, members, base types, delegate signatures
//! - [`TargetTypeOracle`] - Types the context accepts at a position
//! - [`GeneratedCodeOracle`] - Marks non-authored regions
//! - [`SemanticModel`] - Combines all four

pub mod memory;
pub mod noop;

use crate::models::{Conversion, MethodSymbol, Symbol, SymbolInfo, TypeRef, TypeSymbol};
use crate::syntax::NodeId;

pub use memory::InMemorySemanticModel;
pub use noop::NoOpSemanticModel;

/// Upper bound on base-type walks, guarding against cyclic hierarchies.
pub const MAX_BASE_DEPTH: usize = 64;

/// Binds syntax nodes to symbols.
pub trait SymbolResolver: Send + Sync {
    /// Symbol the node binds to, or the candidate set when binding is ambiguous.
    fn symbol_info(&self, node: NodeId) -> SymbolInfo;

    /// Conversion applied to the value of `from` where it flows into the slot
    /// at `to_position` (e.g. an invocation into its lambda's return).
    fn classify_conversion(&self, from: NodeId, to_position: NodeId) -> Conversion;
}

/// Provides type metadata.
pub trait TypeProvider: Send + Sync {
    fn type_info(&self, ty: &TypeRef) -> Option<TypeSymbol>;

    /// All members declared directly on the type (no inherited members).
    fn members(&self, ty: &TypeRef) -> Vec<Symbol>;

    /// Direct base class, `None` at the root of the hierarchy.
    fn base_type(&self, ty: &TypeRef) -> Option<TypeRef>;

    /// The single `Invoke` signature of a delegate type.
    fn delegate_invoke_method(&self, ty: &TypeRef) -> Option<MethodSymbol>;
}

/// Context-driven expected-type inference.
pub trait TargetTypeOracle: Send + Sync {
    /// Types the surrounding context would accept for the node at `position`.
    fn acceptable_types(&self, position: NodeId) -> Vec<TypeRef>;
}

pub trait GeneratedCodeOracle: Send + Sync {
    fn is_generated_code(&self, _node: NodeId) -> bool {
        false
    }
}

/// The combined semantic interface handed to analyzers.
pub trait SemanticModel: SymbolResolver + TypeProvider + TargetTypeOracle + GeneratedCodeOracle {
    /// Walk the base-class chain, excluding `ty` itself.
    fn walk_base_types(&self, ty: &TypeRef) -> Box<dyn Iterator<Item = TypeRef> + '_> {
        Box::new(
            std::iter::successors(self.base_type(ty), move |t| self.base_type(t))
                .take(MAX_BASE_DEPTH),
        )
    }

    fn is_delegate_type(&self, ty: &TypeRef) -> bool {
        self.type_info(ty).is_some_and(|info| info.is_delegate())
    }

    /// Methods on the containing type of `method` sharing its metadata name,
    /// `method` included. Computed on every call.
    fn method_group(&self, method: &MethodSymbol) -> Vec<MethodSymbol> {
        let containing = &method.containing_type;
        if !containing.is_named_type() {
            return vec![];
        }
        let metadata_name = method.metadata_name();
        self.members(containing)
            .into_iter()
            .filter_map(|member| match member {
                Symbol::Method(m) if m.metadata_name() == metadata_name => Some(m),
                _ => None,
            })
            .collect()
    }
}

// Blanket implementation: any type implementing all four traits is a SemanticModel
impl<T: SymbolResolver + TypeProvider + TargetTypeOracle + GeneratedCodeOracle> SemanticModel for T {}
