//! Value objects - immutable types that represent domain concepts

mod reaction_target;
mod reaction_value;
mod resource_kind;

pub use reaction_target::ReactionTarget;
pub use reaction_value::{ReactionValue, ReactionValueError};
pub use resource_kind::ResourceKind;
