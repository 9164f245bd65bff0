use thiserror::Error;

/// An error that prevents a battle from starting or finishing.
///
/// Randomness is never an error: misses, full paralysis, and the like are regular battle events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// A combatant record failed validation.
    #[error("invalid combatant \"{name}\": {reason}")]
    InvalidCombatant { name: String, reason: String },
    /// A type name could not be parsed.
    #[error("unknown type \"{0}\"")]
    UnknownType(String),
    /// There are no moves to select from.
    #[error("move catalog is empty")]
    EmptyMoveCatalog,
    /// The battle options are inconsistent.
    #[error("invalid battle options: {0}")]
    InvalidOptions(String),
    /// The battle did not end within the configured number of turns.
    #[error("battle did not end after {turns} turns")]
    TurnLimitExceeded { turns: u32 },
}

impl BattleError {
    pub(crate) fn invalid_combatant<N, R>(name: N, reason: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Self::InvalidCombatant {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
