pub mod associations;
pub mod lookup;
pub mod options;
pub mod themed;

use std::collections::HashMap;

use crate::error::LookupError;

/// Associated word -> how strongly it relates to the word it was looked up for.
pub type Associations = HashMap<String, f64>;

/// Source of scored associations for a single word.
pub trait AssociationLookup {
    fn lookup(&self, word: &str) -> Result<Associations, LookupError>;
}
