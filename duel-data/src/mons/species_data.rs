use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is the immutable input to a battle. Battle-only state, such as current health or
/// status conditions, does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species.
    pub name: String,
    /// The primary type of the species.
    #[serde(alias = "type1")]
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    #[serde(default, alias = "type2")]
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
}

impl SpeciesData {
    /// The types of the species, primary type first.
    pub fn types(&self) -> Vec<Type> {
        let mut types = Vec::from([self.primary_type]);
        types.extend(self.secondary_type);
        types
    }
}
