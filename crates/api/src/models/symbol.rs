//! Symbol and type data handed out by the semantic services.
//!
//! These are pure data types; lookup logic lives behind the traits in
//! [`crate::semantic`].

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Stable identity of a declared symbol, e.g. `"Demo.Util.Parse(string)"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SymbolId(pub SmolStr);

impl SymbolId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to a type as seen by the semantic model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A non-generic named type by fully qualified name, e.g. `System.String`.
    Named(SmolStr),
    /// A constructed generic type, e.g. `System.Func<int, bool>`.
    Generic {
        base: SmolStr,
        arguments: Vec<TypeRef>,
    },
    Array(Box<TypeRef>),
    Void,
}

impl TypeRef {
    pub fn named(fqn: impl Into<SmolStr>) -> Self {
        TypeRef::Named(fqn.into())
    }

    pub fn generic(base: impl Into<SmolStr>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            base: base.into(),
            arguments,
        }
    }

    /// Fully qualified name of the (possibly constructed) named type.
    pub fn as_fqn(&self) -> Option<&str> {
        match self {
            TypeRef::Named(fqn) => Some(fqn),
            TypeRef::Generic { base, .. } => Some(base),
            TypeRef::Array(_) | TypeRef::Void => None,
        }
    }

    /// Simple name without namespace, e.g. `Enumerable` for `System.Linq.Enumerable`.
    pub fn simple_name(&self) -> Option<&str> {
        let fqn = self.as_fqn()?;
        Some(fqn.rsplit_once('.').map_or(fqn, |(_, name)| name))
    }

    /// Namespace portion of the name, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.as_fqn()?.rsplit_once('.').map(|(ns, _)| ns)
    }

    /// Named types (including constructed generics) can declare members.
    pub fn is_named_type(&self) -> bool {
        matches!(self, TypeRef::Named(_) | TypeRef::Generic { .. })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(fqn) => f.write_str(fqn),
            TypeRef::Generic { base, arguments } => {
                write!(f, "{}<", base)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::Void => f.write_str("void"),
        }
    }
}

/// Kind of type
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    TypeParameter,
}

/// Information about a type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    pub ty: TypeRef,
    pub kind: TypeKind,
}

impl TypeSymbol {
    pub fn new(ty: TypeRef, kind: TypeKind) -> Self {
        Self { ty, kind }
    }

    pub fn is_delegate(&self) -> bool {
        self.kind == TypeKind::Delegate
    }
}

/// How a parameter is passed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

/// A formal parameter of a method or delegate invoke signature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSymbol {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    /// True when declared with `params`.
    pub is_params: bool,
}

impl ParameterSymbol {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_kind: RefKind::None,
            is_params: false,
        }
    }

    pub fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    pub fn params(mut self) -> Self {
        self.is_params = true;
        self
    }
}

/// A method, constructor-free. Delegate invoke signatures are methods too,
/// declared on the delegate type itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSymbol {
    pub id: SymbolId,
    pub name: SmolStr,
    pub containing_type: TypeRef,
    pub return_type: TypeRef,
    pub parameters: Vec<ParameterSymbol>,
    pub type_parameters: Vec<SmolStr>,
    pub is_static: bool,
    pub is_extension: bool,
}

impl MethodSymbol {
    /// Create a parameterless, non-generic instance method.
    ///
    /// The id defaults to `Containing.Name(...)` built from the signature and is
    /// refreshed whenever a parameter is added.
    pub fn new(containing_type: TypeRef, name: impl Into<SmolStr>, return_type: TypeRef) -> Self {
        let mut method = Self {
            id: SymbolId::new(""),
            name: name.into(),
            containing_type,
            return_type,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            is_static: false,
            is_extension: false,
        };
        method.id = method.signature_id();
        method
    }

    pub fn with_parameter(mut self, parameter: ParameterSymbol) -> Self {
        self.parameters.push(parameter);
        self.id = self.signature_id();
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<SmolStr>) -> Self {
        self.type_parameters.push(name.into());
        self.id = self.signature_id();
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn as_extension(mut self) -> Self {
        self.is_static = true;
        self.is_extension = true;
        self
    }

    /// Name as emitted in metadata: generic methods carry their arity, e.g. ``Map`1``.
    pub fn metadata_name(&self) -> SmolStr {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            smol_str::format_smolstr!("{}`{}", self.name, self.type_parameters.len())
        }
    }

    /// True if any parameter is `ref`, `out` or `params`.
    pub fn has_call_site_sensitive_parameters(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| matches!(p.ref_kind, RefKind::Ref | RefKind::Out) || p.is_params)
    }

    fn signature_id(&self) -> SymbolId {
        let mut id = format!("{}.{}", self.containing_type, self.metadata_name());
        id.push('(');
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                id.push_str(", ");
            }
            match p.ref_kind {
                RefKind::None => {}
                RefKind::Ref => id.push_str("ref "),
                RefKind::Out => id.push_str("out "),
                RefKind::In => id.push_str("in "),
            }
            id.push_str(&p.ty.to_string());
        }
        id.push(')');
        SymbolId::new(id)
    }
}

/// Any symbol an expression can bind to, or a type can declare.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Method(MethodSymbol),
    Field {
        name: SmolStr,
        containing_type: TypeRef,
        ty: TypeRef,
    },
    Property {
        name: SmolStr,
        containing_type: TypeRef,
        ty: TypeRef,
    },
    Event {
        name: SmolStr,
        containing_type: TypeRef,
        ty: TypeRef,
    },
    Local {
        name: SmolStr,
        ty: TypeRef,
    },
    Parameter(ParameterSymbol),
    Type(TypeRef),
}

impl Symbol {
    pub fn name(&self) -> Option<&str> {
        match self {
            Symbol::Method(m) => Some(&m.name),
            Symbol::Field { name, .. }
            | Symbol::Property { name, .. }
            | Symbol::Event { name, .. }
            | Symbol::Local { name, .. } => Some(name),
            Symbol::Parameter(p) => Some(&p.name),
            Symbol::Type(ty) => ty.simple_name(),
        }
    }

    pub fn as_method(&self) -> Option<&MethodSymbol> {
        match self {
            Symbol::Method(m) => Some(m),
            _ => None,
        }
    }
}

/// Why binding produced candidates instead of a single symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateReason {
    #[default]
    None,
    Ambiguous,
    OverloadResolutionFailure,
    NotInvocable,
    Inaccessible,
}

/// Result of binding a node: either one symbol or a candidate set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolInfo {
    pub symbol: Option<Symbol>,
    pub candidates: Vec<Symbol>,
    pub reason: CandidateReason,
}

impl SymbolInfo {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn resolved(symbol: Symbol) -> Self {
        Self {
            symbol: Some(symbol),
            candidates: Vec::new(),
            reason: CandidateReason::None,
        }
    }

    pub fn ambiguous(candidates: Vec<Symbol>) -> Self {
        Self {
            symbol: None,
            candidates,
            reason: CandidateReason::Ambiguous,
        }
    }

    /// The uniquely bound method, if binding succeeded on a method.
    pub fn method(&self) -> Option<&MethodSymbol> {
        self.symbol.as_ref().and_then(Symbol::as_method)
    }

    pub fn candidate_methods(&self) -> impl Iterator<Item = &MethodSymbol> {
        self.candidates.iter().filter_map(Symbol::as_method)
    }
}

/// Classification of the conversion applied to an expression at its position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conversion {
    pub exists: bool,
    pub is_implicit: bool,
    pub is_explicit: bool,
    pub is_identity: bool,
    pub is_reference: bool,
    pub is_boxing: bool,
    pub is_numeric: bool,
    pub is_user_defined: bool,
}

impl Conversion {
    /// No conversion exists.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn identity() -> Self {
        Self {
            exists: true,
            is_implicit: true,
            is_identity: true,
            ..Self::default()
        }
    }

    pub fn implicit_reference() -> Self {
        Self {
            exists: true,
            is_implicit: true,
            is_reference: true,
            ..Self::default()
        }
    }

    pub fn explicit_reference() -> Self {
        Self {
            exists: true,
            is_explicit: true,
            is_reference: true,
            ..Self::default()
        }
    }

    pub fn boxing() -> Self {
        Self {
            exists: true,
            is_implicit: true,
            is_boxing: true,
            ..Self::default()
        }
    }

    pub fn implicit_numeric() -> Self {
        Self {
            exists: true,
            is_implicit: true,
            is_numeric: true,
            ..Self::default()
        }
    }

    pub fn implicit_user_defined() -> Self {
        Self {
            exists: true,
            is_implicit: true,
            is_user_defined: true,
            ..Self::default()
        }
    }

    /// Implicit, and does not change the runtime representation.
    pub fn preserves_representation(&self) -> bool {
        self.exists && self.is_implicit && !self.is_explicit && (self.is_identity || self.is_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display_and_names() {
        let func = TypeRef::generic(
            "System.Func",
            vec![TypeRef::named("System.Int32"), TypeRef::named("System.Boolean")],
        );
        assert_eq!(func.to_string(), "System.Func<System.Int32, System.Boolean>");
        assert_eq!(func.simple_name(), Some("Func"));
        assert_eq!(func.namespace(), Some("System"));
        assert_eq!(TypeRef::Array(Box::new(TypeRef::named("Foo"))).to_string(), "Foo[]");
        assert_eq!(TypeRef::named("Foo").namespace(), None);
        assert!(!TypeRef::Void.is_named_type());
    }

    #[test]
    fn test_method_metadata_name_includes_arity() {
        let m = MethodSymbol::new(TypeRef::named("Demo.Util"), "Map", TypeRef::Void)
            .with_type_parameter("T");
        assert_eq!(m.metadata_name(), "Map`1");
        let plain = MethodSymbol::new(TypeRef::named("Demo.Util"), "Map", TypeRef::Void);
        assert_eq!(plain.metadata_name(), "Map");
    }

    #[test]
    fn test_method_id_tracks_signature() {
        let m = MethodSymbol::new(TypeRef::named("Demo.Util"), "Log", TypeRef::Void)
            .with_parameter(ParameterSymbol::new("a", TypeRef::named("System.String")))
            .with_parameter(
                ParameterSymbol::new("b", TypeRef::named("System.Int32"))
                    .with_ref_kind(RefKind::Out),
            );
        assert_eq!(m.id.as_str(), "Demo.Util.Log(System.String, out System.Int32)");
        assert!(m.has_call_site_sensitive_parameters());
    }

    #[test]
    fn test_conversion_representation() {
        assert!(Conversion::identity().preserves_representation());
        assert!(Conversion::implicit_reference().preserves_representation());
        assert!(!Conversion::explicit_reference().preserves_representation());
        assert!(!Conversion::boxing().preserves_representation());
        assert!(!Conversion::implicit_numeric().preserves_representation());
        assert!(!Conversion::implicit_user_defined().preserves_representation());
        assert!(!Conversion::none().preserves_representation());
    }
}
