pub mod fqn;
pub mod kind;
pub mod source;

pub use fqn::*;
pub use kind::*;
pub use source::*;
