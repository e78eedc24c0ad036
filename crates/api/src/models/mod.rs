pub mod diagnostic;
pub mod location;
pub mod symbol;

pub use diagnostic::*;
pub use location::*;
pub use symbol::*;
