use anyhow::{
    Result,
    anyhow,
};
use duel::{
    Battle,
    BattleOptions,
    CombatantData,
    MoveCatalog,
    RandomizeBaseDamage,
    Side,
    SpeedTieResolution,
    TypeChart,
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    combatants: [Option<CombatantData>; 2],
    options: BattleOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            combatants: [None, None],
            options: BattleOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build<'d>(
        mut self,
        type_chart: &'d TypeChart,
        move_catalog: &'d MoveCatalog,
    ) -> Result<Battle<'d>> {
        if self.controlled_rng {
            self.options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let [combatant_1, combatant_2] = self.combatants;
        let combatant_1 = combatant_1.ok_or_else(|| anyhow!("combatant 1 is missing"))?;
        let combatant_2 = combatant_2.ok_or_else(|| anyhow!("combatant 2 is missing"))?;
        Ok(Battle::new(
            combatant_1,
            combatant_2,
            type_chart,
            move_catalog,
            self.options,
        )?)
    }

    pub fn with_combatant(mut self, side: Side, combatant: CombatantData) -> Self {
        self.combatants[side.index()] = Some(combatant);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.options.max_turns = max_turns;
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_base_damage_randomization(mut self, randomize: RandomizeBaseDamage) -> Self {
        self.options.randomize_base_damage = randomize;
        self
    }

    pub fn with_speed_sort_tie_resolution(mut self, tie_resolution: SpeedTieResolution) -> Self {
        self.options.speed_tie_resolution = tie_resolution;
        self
    }

    pub fn with_moveset_size(mut self, moveset_size: usize) -> Self {
        self.options.moveset_size = Some(moveset_size);
        self
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
