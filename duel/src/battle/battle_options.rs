use duel_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::BattleError;

/// How the random factor of the damage calculation should be chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Randomize the factor between 0.85 and 1.00.
    ///
    /// This is the default behavior.
    #[default]
    Randomize,
    /// Only use the maximum factor, 1.00.
    Max,
    /// Only use the minimum factor, 0.85.
    Min,
}

/// How the battle should resolve ties when ordering combatants by speed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTieResolution {
    /// Resolves ties randomly by advancing RNG.
    Random,
    /// Keep the original order, so the first-listed combatant acts first.
    ///
    /// This is the default behavior.
    #[default]
    Keep,
    /// Reverse the original order, so the second-listed combatant acts first.
    Reverse,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_max_turns() -> u32 {
    1000
}

/// Options for a single battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,

    /// The number of turns after which the battle is abandoned with
    /// [`BattleError::TurnLimitExceeded`].
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,

    /// Describes how ties should be resolved when ordering combatants by speed.
    #[serde(default)]
    pub speed_tie_resolution: SpeedTieResolution,

    /// Describes how the random factor of the damage calculation should be chosen.
    ///
    /// Fixing the factor is useful for tests against the damage calculator.
    #[serde(default)]
    pub randomize_base_damage: RandomizeBaseDamage,

    /// The number of moves each combatant draws from the catalog at the start of the battle.
    ///
    /// By default, every combatant selects from the full catalog each turn.
    #[serde(default)]
    pub moveset_size: Option<usize>,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: default_max_turns(),
            speed_tie_resolution: SpeedTieResolution::default(),
            randomize_base_damage: RandomizeBaseDamage::default(),
            moveset_size: None,
            rng_factory: default_rng_factory(),
        }
    }
}

impl BattleOptions {
    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the battle options against the size of the move catalog.
    pub fn validate(&self, catalog_size: usize) -> Result<(), BattleError> {
        if self.max_turns == 0 {
            return Err(BattleError::InvalidOptions(
                "max_turns must be at least 1".to_owned(),
            ));
        }
        match self.moveset_size {
            Some(0) => Err(BattleError::InvalidOptions(
                "moveset_size must be at least 1".to_owned(),
            )),
            Some(size) if size > catalog_size => Err(BattleError::InvalidOptions(format!(
                "moveset_size {size} exceeds the {catalog_size} moves in the catalog"
            ))),
            _ => Ok(()),
        }
    }
}
