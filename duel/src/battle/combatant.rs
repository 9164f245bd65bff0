use std::str::FromStr;

use duel_data::{
    SpeciesData,
    Stat,
    StatMap,
    StatTable,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::Status,
    error::BattleError,
    log::Health,
};

/// Data for a single combatant, which is the input to a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantData {
    /// Name of the combatant, used in the event log.
    pub name: String,
    /// Stats. The HP stat is the maximum health.
    pub stats: StatTable,
    /// Types, primary type first.
    pub types: Vec<Type>,
    /// Status condition the combatant enters the battle with.
    #[serde(default)]
    pub status: Status,
    /// Number of turns left asleep.
    #[serde(default)]
    pub status_counter: u8,
}

impl CombatantData {
    /// Creates combatant data, parsing the given type names.
    pub fn new<N>(name: N, stats: StatTable, types: &[&str]) -> Result<Self, BattleError>
    where
        N: Into<String>,
    {
        let types = types
            .iter()
            .map(|name| {
                Type::from_str(name).map_err(|_| BattleError::UnknownType((*name).to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            stats,
            types,
            status: Status::None,
            status_counter: 0,
        })
    }

    /// Creates combatant data for a species.
    pub fn from_species(species: &SpeciesData) -> Self {
        Self {
            name: species.name.clone(),
            stats: species.base_stats.clone(),
            types: species.types(),
            status: Status::None,
            status_counter: 0,
        }
    }

    /// Sets the status condition the combatant enters the battle with.
    pub fn with_status(mut self, status: Status, status_counter: u8) -> Self {
        self.status = status;
        self.status_counter = status_counter;
        self
    }

    /// Validates the combatant data.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.name.trim().is_empty() {
            return Err(BattleError::invalid_combatant(
                &self.name,
                "name cannot be empty",
            ));
        }
        if let Some((stat, _)) = self.stats.entries().find(|(_, value)| *value == 0) {
            return Err(BattleError::invalid_combatant(
                &self.name,
                format!("{stat} must be positive"),
            ));
        }
        match self.types.as_slice() {
            [] => Err(BattleError::invalid_combatant(
                &self.name,
                "must have at least one type",
            )),
            [_] => Ok(()),
            [first, second] if first == second => Err(BattleError::invalid_combatant(
                &self.name,
                format!("duplicate type {first}"),
            )),
            [_, _] => Ok(()),
            _ => Err(BattleError::invalid_combatant(
                &self.name,
                "cannot have more than two types",
            )),
        }
    }
}

/// A combatant in a battle.
///
/// Base stats are never mutated. Status conditions impose multiplicative modifiers, which are read
/// through [`Combatant::effective_stat`].
#[derive(Debug, Clone)]
pub struct Combatant {
    name: String,
    stats: StatTable,
    types: Vec<Type>,
    current_health: u16,
    status: Status,
    status_counter: u8,
    modifiers: StatMap<f64>,
}

impl Combatant {
    /// Creates a new combatant at full health.
    pub fn new(data: CombatantData) -> Result<Self, BattleError> {
        data.validate()?;
        Ok(Self {
            current_health: data.stats.hp,
            name: data.name,
            stats: data.stats,
            types: data.types,
            status: data.status,
            status_counter: data.status_counter,
            modifiers: StatMap::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    pub fn base_stat(&self, stat: Stat) -> u16 {
        self.stats.get(stat)
    }

    /// The multiplier currently applied to the stat.
    pub fn modifier(&self, stat: Stat) -> f64 {
        self.modifiers.get(&stat).copied().unwrap_or(1f64)
    }

    /// The base stat combined with its modifier.
    pub fn effective_stat(&self, stat: Stat) -> f64 {
        self.base_stat(stat) as f64 * self.modifier(stat)
    }

    pub fn max_health(&self) -> u16 {
        self.stats.hp
    }

    pub fn current_health(&self) -> u16 {
        self.current_health
    }

    pub fn health(&self) -> Health {
        Health {
            current: self.current_health,
            max: self.max_health(),
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_counter(&self) -> u8 {
        self.status_counter
    }

    /// Subtracts damage from the combatant's health, stopping at 0.
    ///
    /// Returns the health actually lost.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.current_health as u32);
        self.current_health -= lost as u16;
        lost
    }

    /// Replaces the multiplier on the stat.
    pub(crate) fn set_modifier(&mut self, stat: Stat, modifier: f64) {
        self.modifiers.insert(stat, modifier);
    }

    /// Changes the status condition, lifting any modifier imposed by the old one.
    pub(crate) fn set_status(&mut self, status: Status) {
        if self.status == status {
            return;
        }
        match self.status {
            Status::Burn => {
                self.modifiers.remove(&Stat::Atk);
            }
            Status::Paralysis => {
                self.modifiers.remove(&Stat::Spe);
            }
            Status::None | Status::Poison | Status::Freeze | Status::Sleep => (),
        }
        self.status = status;
    }

    pub(crate) fn set_status_counter(&mut self, status_counter: u8) {
        self.status_counter = status_counter;
    }
}
