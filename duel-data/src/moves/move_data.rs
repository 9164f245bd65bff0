use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    MoveCategory,
    Type,
};

/// Data about a particular move.
///
/// Every move available in a battle deals damage. The category selects which stat pair the damage
/// calculation reads, and the type decides effectiveness and same-type bonus.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    #[serde(alias = "type")]
    pub primary_type: Type,
    /// Base power.
    #[serde(default, alias = "power")]
    pub base_power: u32,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
}

impl MoveData {
    /// Creates a new move.
    pub fn new<N>(
        name: N,
        primary_type: Type,
        base_power: u32,
        accuracy: u8,
        category: MoveCategory,
    ) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            category,
            primary_type,
            base_power,
            accuracy: Accuracy::Chance(accuracy),
        }
    }
}
