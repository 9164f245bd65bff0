use duel_data::{
    MoveCatalog,
    TypeChart,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        BattleOptions,
        CombatantData,
        Side,
        simulate_battle,
    },
    error::BattleError,
};

/// Aggregated outcome of many battles between the same two combatants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub combatant_1: String,
    pub combatant_2: String,
    /// Seed used to derive the seed of every battle.
    pub seed: u64,
    pub battles: usize,
    pub combatant_1_wins: usize,
    pub combatant_2_wins: usize,
    /// Battles abandoned at the turn limit.
    pub unfinished: usize,
    /// Mean number of turns over finished battles.
    pub mean_turns: f64,
    pub longest_battle: u32,
}

impl MatchupSummary {
    pub fn wins(&self, side: Side) -> usize {
        match side {
            Side::One => self.combatant_1_wins,
            Side::Two => self.combatant_2_wins,
        }
    }

    /// Fraction of all battles won by the given side.
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.battles == 0 {
            return 0f64;
        }
        self.wins(side) as f64 / self.battles as f64
    }
}

/// Runs independent battles between the same two combatants and summarizes the outcomes.
///
/// Each battle is seeded from a generator created with the options' seed, so the whole sample is
/// reproducible.
pub fn sample_matchup(
    combatant_1: &CombatantData,
    combatant_2: &CombatantData,
    type_chart: &TypeChart,
    move_catalog: &MoveCatalog,
    options: &BattleOptions,
    battles: usize,
) -> Result<MatchupSummary, BattleError> {
    let mut seeds = (options.rng_factory)(options.seed);
    let mut summary = MatchupSummary {
        combatant_1: combatant_1.name.clone(),
        combatant_2: combatant_2.name.clone(),
        seed: seeds.initial_seed(),
        battles,
        combatant_1_wins: 0,
        combatant_2_wins: 0,
        unfinished: 0,
        mean_turns: 0f64,
        longest_battle: 0,
    };
    let mut total_turns = 0u64;
    for _ in 0..battles {
        let seed = (seeds.next() << 32) | seeds.next();
        let result = simulate_battle(
            combatant_1.clone(),
            combatant_2.clone(),
            type_chart,
            move_catalog,
            BattleOptions {
                seed: Some(seed),
                ..options.clone()
            },
        );
        match result {
            Ok(result) => {
                match result.winning_side {
                    Side::One => summary.combatant_1_wins += 1,
                    Side::Two => summary.combatant_2_wins += 1,
                }
                total_turns += result.turns as u64;
                summary.longest_battle = summary.longest_battle.max(result.turns);
            }
            Err(BattleError::TurnLimitExceeded { turns }) => {
                log::debug!("battle with seed {seed} did not finish in {turns} turns");
                summary.unfinished += 1;
            }
            Err(err) => return Err(err),
        }
    }
    let finished = battles - summary.unfinished;
    if finished > 0 {
        summary.mean_turns = total_turns as f64 / finished as f64;
    }
    Ok(summary)
}
