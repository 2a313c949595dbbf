//! fOS classList - class name helpers
//!
//! Get, set, test, add, remove, toggle and swap the class tokens of an
//! element. Two interchangeable strategies back every operation: the
//! element's native [`DOMTokenList`] view, or parsing the raw class
//! attribute string. The strategy is resolved once per process.

mod attributes;
mod class_tokens;
mod config;
mod element;
mod token_list;

pub use attributes::{Attr, NamedNodeMap};
pub use class_tokens::{
    AttributeParsing, ClassTokenOps, ClassTokens, NativeTokenList, Tokens,
    add, add_all, add_remove, enable, enable_all, get, has, remove, remove_all, set, swap, toggle,
};
pub use config::{ClassListConfig, Strategy, init, strategy};
pub use element::{ClassElement, Element};
pub use token_list::DOMTokenList;

/// Result type for class list operations
pub type ClassListResult<T> = Result<T, ClassListError>;

/// Class list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassListError {
    /// Token was the empty string
    #[error("Syntax error: token must not be empty")]
    Syntax,

    /// Token contains whitespace
    #[error("Invalid character in token: {0:?}")]
    InvalidCharacter(String),

    /// Native strategy selected but the element exposes no DOMTokenList
    #[error("Element does not expose a DOMTokenList")]
    MissingTokenList,

    /// Strategy was already resolved for this process
    #[error("Class list strategy already initialized ({0:?})")]
    AlreadyInitialized(Strategy),
}
