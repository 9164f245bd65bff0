mod battle;
mod battle_options;
mod combatant;
mod damage;
mod speed_order;
mod status;

pub use battle::{
    Battle,
    BattleResult,
    BattleState,
    Side,
    simulate_battle,
};
pub use battle_options::{
    BattleOptions,
    RandomizeBaseDamage,
    SpeedTieResolution,
};
pub use combatant::{
    Combatant,
    CombatantData,
};
pub use damage::{
    CRITICAL_HIT_CHANCE,
    CRITICAL_HIT_MULTIPLIER,
    DamageCalculation,
    DamageRoll,
    NOMINAL_LEVEL,
    STAB_MULTIPLIER,
    calculate_damage,
    compute_damage,
    type_multiplier,
};
pub use speed_order::{
    SpeedOrderable,
    compare_speed,
    speed_sort,
};
pub use status::{
    PreTurnOutcome,
    Status,
    StatusEffect,
    apply_pre_turn,
};
