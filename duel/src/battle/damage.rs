use duel_data::{
    MoveCategory,
    MoveData,
    Stat,
    TypeChart,
    TypeEffectiveness,
};
use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::{
    Combatant,
    RandomizeBaseDamage,
};

/// Every combatant is treated as this level.
pub const NOMINAL_LEVEL: u32 = 50;
/// Multiplier for a critical hit.
pub const CRITICAL_HIT_MULTIPLIER: f64 = 1.5;
/// One in this many hits is critical.
pub const CRITICAL_HIT_CHANCE: u64 = 16;
/// Multiplier for a move that matches one of the attacker's types.
pub const STAB_MULTIPLIER: f64 = 1.5;

/// The random inputs to a single damage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    pub critical: bool,
    /// Factor in `[0.85, 1.00]`.
    pub random_factor: f64,
}

impl DamageRoll {
    /// The roll that produces the most damage without a critical hit.
    pub fn max() -> Self {
        Self {
            critical: false,
            random_factor: 1f64,
        }
    }
}

/// The result of a damage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageCalculation {
    pub damage: u32,
    /// Combined effectiveness of the move against all of the defender's types.
    pub type_multiplier: f32,
    pub effectiveness: TypeEffectiveness,
    pub critical: bool,
    pub stab: bool,
}

/// Calculates the combined type effectiveness of a move against the defender.
pub fn type_multiplier(chart: &TypeChart, move_data: &MoveData, defender: &Combatant) -> f32 {
    chart.effectiveness_against(move_data.primary_type, defender.types())
}

fn stat_pair(category: MoveCategory) -> (Stat, Stat) {
    match category {
        MoveCategory::Physical => (Stat::Atk, Stat::Def),
        MoveCategory::Special => (Stat::SpAtk, Stat::SpDef),
    }
}

/// Calculates damage for a move with the given roll.
///
/// A move the defender is immune to deals exactly 0 damage. Any other hit deals at least 1.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    chart: &TypeChart,
    roll: DamageRoll,
) -> DamageCalculation {
    let type_multiplier = type_multiplier(chart, move_data, defender);
    let effectiveness = TypeEffectiveness::from(type_multiplier);
    let stab = attacker.has_type(move_data.primary_type);
    if effectiveness == TypeEffectiveness::None {
        return DamageCalculation {
            damage: 0,
            type_multiplier,
            effectiveness,
            critical: false,
            stab,
        };
    }

    let (attack_stat, defense_stat) = stat_pair(move_data.category);
    let attack = attacker.effective_stat(attack_stat);
    let defense = defender.effective_stat(defense_stat);
    let level_factor = (2 * NOMINAL_LEVEL / 5 + 2) as f64;
    let base =
        (level_factor * move_data.base_power as f64 * attack / defense) / NOMINAL_LEVEL as f64 + 2f64;

    let mut damage = base * type_multiplier as f64;
    if stab {
        damage *= STAB_MULTIPLIER;
    }
    if roll.critical {
        damage *= CRITICAL_HIT_MULTIPLIER;
    }
    damage *= roll.random_factor;

    DamageCalculation {
        damage: (damage.floor() as u32).max(1),
        type_multiplier,
        effectiveness,
        critical: roll.critical,
        stab,
    }
}

/// Rolls for a critical hit and a random factor, then calculates damage.
///
/// No random values are drawn when the defender is immune.
pub fn compute_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    chart: &TypeChart,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> DamageCalculation {
    let roll = if type_multiplier(chart, move_data, defender) == 0f32 {
        DamageRoll::max()
    } else {
        let critical = rand_util::chance(prng, 1, CRITICAL_HIT_CHANCE);
        let random_factor = match randomize {
            RandomizeBaseDamage::Randomize => (100 - rand_util::range(prng, 0, 16)) as f64 / 100f64,
            RandomizeBaseDamage::Max => 1f64,
            RandomizeBaseDamage::Min => 0.85,
        };
        DamageRoll {
            critical,
            random_factor,
        }
    };
    let calculation = calculate_damage(attacker, defender, move_data, chart, roll);
    log::trace!(
        "{} used {} on {}: {roll:?} => {calculation:?}",
        attacker.name(),
        move_data.name,
        defender.name()
    );
    calculation
}
