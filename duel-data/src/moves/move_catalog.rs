use ahash::HashSet;
use anyhow::{
    Error,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    Id,
    MoveCategory,
    MoveData,
    Type,
};

/// The fixed set of moves available to every combatant in a battle.
///
/// Moves are not tied to species. The catalog preserves insertion order, which keeps random
/// selection reproducible for a given seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MoveData>", into = "Vec<MoveData>")]
pub struct MoveCatalog {
    moves: Vec<MoveData>,
}

impl MoveCatalog {
    /// Creates a new catalog, validating every move.
    ///
    /// The catalog must be non-empty, move names must be unique, and accuracy cannot exceed 100.
    pub fn new(moves: Vec<MoveData>) -> Result<Self> {
        if moves.is_empty() {
            return Err(Error::msg("move catalog cannot be empty"));
        }
        let mut seen = HashSet::default();
        for data in &moves {
            if !seen.insert(Id::from(data.name.as_str())) {
                return Err(Error::msg(format!("duplicate move \"{}\"", data.name)));
            }
            if let Accuracy::Chance(accuracy) = data.accuracy {
                if accuracy > 100 {
                    return Err(Error::msg(format!(
                        "move \"{}\" has accuracy {accuracy}, which exceeds 100",
                        data.name
                    )));
                }
            }
        }
        Ok(Self { moves })
    }

    /// The reference move set.
    pub fn standard() -> Self {
        Self {
            moves: Vec::from([
                MoveData::new("Thunderbolt", Type::Electric, 90, 100, MoveCategory::Special),
                MoveData::new("Flamethrower", Type::Fire, 90, 100, MoveCategory::Special),
                MoveData::new("Ice Beam", Type::Ice, 90, 100, MoveCategory::Special),
                MoveData::new("Close Combat", Type::Fighting, 120, 100, MoveCategory::Physical),
                MoveData::new("Earthquake", Type::Ground, 100, 100, MoveCategory::Physical),
                MoveData::new("Dragon Claw", Type::Dragon, 80, 100, MoveCategory::Physical),
            ]),
        }
    }

    /// All moves, in catalog order.
    pub fn moves(&self) -> &[MoveData] {
        &self.moves
    }

    /// Looks up a move by name.
    pub fn get(&self, name: &str) -> Option<&MoveData> {
        let id = Id::from(name);
        self.moves
            .iter()
            .find(|data| Id::from(data.name.as_str()) == id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.iter()
    }
}

impl TryFrom<Vec<MoveData>> for MoveCatalog {
    type Error = Error;

    fn try_from(value: Vec<MoveData>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoveCatalog> for Vec<MoveData> {
    fn from(value: MoveCatalog) -> Self {
        value.moves
    }
}
