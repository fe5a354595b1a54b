pub mod construct_ref;
pub mod construct_type;
pub mod error;
pub mod match_set;
pub mod symbol;
mod text;

pub use construct_ref::ConstructRef;
pub use construct_type::{ConstructType, IntoConstructType};
pub use error::{SymbolError, SymbolErrorKind};
pub use match_set::{MatchSet, Predicate};
pub use symbol::{
    CidPart, Symbol, agent, buffer, chunk, feature, flow_bb, flow_bt, flow_in, flow_tb, flow_tt,
    subsystem, terminus,
};
