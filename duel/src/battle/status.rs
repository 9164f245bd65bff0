use duel_data::Stat;
use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::Combatant;

/// A status condition. A combatant holds at most one at a time.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Status {
    #[string = "None"]
    #[default]
    None,
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
}

const BURN_DAMAGE_DIVISOR: u16 = 16;
const POISON_DAMAGE_DIVISOR: u16 = 8;
const BURN_ATTACK_MODIFIER: f64 = 0.5;
const PARALYSIS_SPEED_MODIFIER: f64 = 0.5;
const FULL_PARALYSIS_CHANCE: (u64, u64) = (1, 4);
const THAW_CHANCE: (u64, u64) = (1, 5);

/// Something a status condition did at the start of a combatant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEffect {
    /// The combatant lost health to its status condition.
    Residual { status: Status, damage: u32 },
    /// The combatant is fully paralyzed and cannot act.
    FullyParalyzed,
    /// The combatant is frozen solid and cannot act.
    Frozen,
    /// The combatant thawed out and can act.
    Thawed,
    /// The combatant is fast asleep and cannot act.
    Asleep,
    /// The combatant woke up and can act.
    WokeUp,
}

/// The result of processing a status condition at the start of a combatant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreTurnOutcome {
    /// Can the combatant use a move this turn?
    pub can_act: bool,
    pub effect: Option<StatusEffect>,
}

impl PreTurnOutcome {
    fn act(effect: Option<StatusEffect>) -> Self {
        Self {
            can_act: true,
            effect,
        }
    }

    fn cant(effect: StatusEffect) -> Self {
        Self {
            can_act: false,
            effect: Some(effect),
        }
    }
}

fn residual(combatant: &mut Combatant, status: Status, divisor: u16) -> PreTurnOutcome {
    let damage = combatant.max_health() / divisor;
    let damage = combatant.apply_damage(damage as u32);
    PreTurnOutcome::act(Some(StatusEffect::Residual { status, damage }))
}

/// Applies the combatant's status condition at the start of its turn.
///
/// Residual damage is applied here and can cause the combatant to faint, so callers must check
/// for fainting before resolving a move even when the combatant can act.
pub fn apply_pre_turn(
    combatant: &mut Combatant,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> PreTurnOutcome {
    match combatant.status() {
        Status::None => PreTurnOutcome::act(None),
        Status::Burn => {
            combatant.set_modifier(Stat::Atk, BURN_ATTACK_MODIFIER);
            residual(combatant, Status::Burn, BURN_DAMAGE_DIVISOR)
        }
        Status::Poison => residual(combatant, Status::Poison, POISON_DAMAGE_DIVISOR),
        Status::Paralysis => {
            combatant.set_modifier(Stat::Spe, PARALYSIS_SPEED_MODIFIER);
            let (numerator, denominator) = FULL_PARALYSIS_CHANCE;
            if rand_util::chance(prng, numerator, denominator) {
                PreTurnOutcome::cant(StatusEffect::FullyParalyzed)
            } else {
                PreTurnOutcome::act(None)
            }
        }
        Status::Freeze => {
            let (numerator, denominator) = THAW_CHANCE;
            if rand_util::chance(prng, numerator, denominator) {
                combatant.set_status(Status::None);
                PreTurnOutcome::act(Some(StatusEffect::Thawed))
            } else {
                PreTurnOutcome::cant(StatusEffect::Frozen)
            }
        }
        Status::Sleep => match combatant.status_counter() {
            0 => {
                combatant.set_status(Status::None);
                PreTurnOutcome::act(Some(StatusEffect::WokeUp))
            }
            turns => {
                combatant.set_status_counter(turns - 1);
                PreTurnOutcome::cant(StatusEffect::Asleep)
            }
        },
    }
}
