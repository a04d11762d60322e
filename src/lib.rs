// Internal modules (not public API)
mod engine;
mod error;
mod helpers;
mod matcher;
mod percent_encode;
mod reader;
mod remover;
mod source;
mod value;
mod writer;

// Public API
pub use engine::{Fetched, Get, QueryEngine, Remove, Set};
pub use error::QueryError;
pub use matcher::{EntryMatch, KeyMatcher};
pub use percent_encode::{decode_component, encode_component};
pub use reader::{get_all, get_many, get_one};
pub use remover::{remove_all, remove_many, remove_one};
pub use source::{DEFAULT_QUERY_VAR, EnvSource, NoSource, QuerySource};
pub use value::{Lookup, QueryMap, QueryValue};
pub use writer::{set_flags, set_many, set_one};

pub type Result<T> = core::result::Result<T, QueryError>;
