use std::fmt;

use duel_data::{
    Accuracy,
    MoveCatalog,
    MoveData,
    Stat,
    TypeChart,
};
use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        BattleOptions,
        Combatant,
        CombatantData,
        SpeedOrderable,
        Status,
        StatusEffect,
        apply_pre_turn,
        compute_damage,
        speed_sort,
    },
    error::BattleError,
    log::{
        BattleEvent,
        EventLog,
        LogEntry,
        MonRef,
    },
};

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides, in listing order.
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The opposing side.
    pub fn foe(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl From<Side> for u8 {
    fn from(value: Side) -> Self {
        value.index() as u8 + 1
    }
}

impl TryFrom<u8> for Side {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(format!("invalid side {value}")),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// The state of a battle. Terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    Ongoing,
    CombatantOneWins,
    CombatantTwoWins,
}

impl BattleState {
    fn won_by(side: Side) -> Self {
        match side {
            Side::One => Self::CombatantOneWins,
            Side::Two => Self::CombatantTwoWins,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Ongoing => None,
            Self::CombatantOneWins => Some(Side::One),
            Self::CombatantTwoWins => Some(Side::Two),
        }
    }
}

/// The outcome of a finished battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Name of the winning combatant.
    pub winner: String,
    pub winning_side: Side,
    /// Number of turns started.
    pub turns: u32,
    pub log: Vec<LogEntry>,
}

struct TurnOrderEntry {
    side: Side,
    speed: f64,
}

impl SpeedOrderable for TurnOrderEntry {
    fn speed(&self) -> f64 {
        self.speed
    }
}

/// A single battle between two combatants.
///
/// The battle owns both combatants for its whole lifetime. Static data is borrowed, so one type
/// chart and move catalog can be shared by any number of battles.
pub struct Battle<'d> {
    combatants: [Combatant; 2],
    movesets: [Vec<&'d MoveData>; 2],
    type_chart: &'d TypeChart,
    options: BattleOptions,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
    turn: u32,
    state: BattleState,
}

impl fmt::Debug for Battle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Battle")
            .field("combatants", &self.combatants)
            .field("movesets", &self.movesets)
            .field("options", &self.options)
            .field("turn", &self.turn)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'d> Battle<'d> {
    /// Creates a new battle, validating all input.
    ///
    /// No turn is run until [`Self::next_turn`] or [`Self::run`] is called.
    pub fn new(
        combatant_1: CombatantData,
        combatant_2: CombatantData,
        type_chart: &'d TypeChart,
        move_catalog: &'d MoveCatalog,
        options: BattleOptions,
    ) -> Result<Self, BattleError> {
        if move_catalog.is_empty() {
            return Err(BattleError::EmptyMoveCatalog);
        }
        options.validate(move_catalog.len())?;
        let combatants = [Combatant::new(combatant_1)?, Combatant::new(combatant_2)?];

        let mut prng = (options.rng_factory)(options.seed);
        let movesets = [
            Self::draw_moveset(move_catalog, options.moveset_size, prng.as_mut()),
            Self::draw_moveset(move_catalog, options.moveset_size, prng.as_mut()),
        ];
        log::debug!(
            "starting battle between {} and {} with seed {}",
            combatants[0].name(),
            combatants[1].name(),
            prng.initial_seed()
        );

        let mut battle = Self {
            combatants,
            movesets,
            type_chart,
            options,
            prng,
            log: EventLog::new(),
            turn: 0,
            state: BattleState::Ongoing,
        };
        battle.log.push(0, BattleEvent::BattleStart);
        for side in Side::BOTH {
            let combatant = battle.combatant(side);
            let event = BattleEvent::Appear {
                mon: battle.mon_ref(side),
                health: combatant.health(),
                types: combatant.types().to_vec(),
                status: combatant.status(),
            };
            battle.log.push(0, event);
        }
        Ok(battle)
    }

    fn draw_moveset(
        move_catalog: &'d MoveCatalog,
        size: Option<usize>,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Vec<&'d MoveData> {
        let mut moves = move_catalog.iter().collect::<Vec<_>>();
        if let Some(size) = size {
            rand_util::shuffle(prng, &mut moves);
            moves.truncate(size);
        }
        moves
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// The moves the combatant on the given side selects from.
    pub fn moveset(&self, side: Side) -> &[&'d MoveData] {
        &self.movesets[side.index()]
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The current turn. 0 before the first turn starts.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Returns an iterator over all log lines.
    pub fn full_log(&self) -> impl Iterator<Item = String> {
        self.log.lines()
    }

    /// Reads out log entries added since the last call.
    pub fn new_log_entries(&mut self) -> &[LogEntry] {
        self.log.read_out()
    }

    /// The battle's random number generator.
    ///
    /// Primarily useful for tests that control battle RNG.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    fn mon_ref(&self, side: Side) -> MonRef {
        MonRef::new(self.combatant(side).name(), side)
    }

    fn push_event(&mut self, event: BattleEvent) {
        self.log.push(self.turn, event);
    }

    /// Runs a single turn.
    ///
    /// Does nothing once the battle is over.
    pub fn next_turn(&mut self) -> Result<BattleState, BattleError> {
        if self.state.is_over() {
            return Ok(self.state);
        }
        if self.turn >= self.options.max_turns {
            log::debug!("battle abandoned after {} turns", self.turn);
            return Err(BattleError::TurnLimitExceeded { turns: self.turn });
        }

        self.turn += 1;
        log::debug!("turn {}", self.turn);
        self.push_event(BattleEvent::Turn { number: self.turn });
        for side in self.turn_order() {
            self.take_turn(side)?;
            if self.state.is_over() {
                break;
            }
        }
        Ok(self.state)
    }

    /// Runs turns until one combatant wins.
    pub fn run(mut self) -> Result<BattleResult, BattleError> {
        let winning_side = loop {
            if let Some(side) = self.next_turn()?.winner() {
                break side;
            }
        };
        Ok(BattleResult {
            winner: self.combatant(winning_side).name().to_owned(),
            winning_side,
            turns: self.turn,
            log: self.log.into_entries(),
        })
    }

    fn turn_order(&mut self) -> [Side; 2] {
        let mut order = Side::BOTH.map(|side| TurnOrderEntry {
            side,
            speed: self.combatant(side).effective_stat(Stat::Spe),
        });
        speed_sort(
            &mut order,
            self.prng.as_mut(),
            self.options.speed_tie_resolution,
        );
        order.map(|entry| entry.side)
    }

    fn take_turn(&mut self, side: Side) -> Result<(), BattleError> {
        let outcome = apply_pre_turn(&mut self.combatants[side.index()], self.prng.as_mut());
        if let Some(effect) = outcome.effect {
            self.log_status_effect(side, effect);
        }
        if self.combatant(side).is_fainted() {
            self.faint(side);
            return Ok(());
        }
        if !outcome.can_act {
            return Ok(());
        }
        self.use_move(side)
    }

    fn log_status_effect(&mut self, side: Side, effect: StatusEffect) {
        let mon = self.mon_ref(side);
        let event = match effect {
            StatusEffect::Residual { status, damage } => BattleEvent::Residual {
                mon,
                status,
                damage,
                health: self.combatant(side).health(),
            },
            StatusEffect::FullyParalyzed => BattleEvent::Cant {
                mon,
                reason: Status::Paralysis,
            },
            StatusEffect::Frozen => BattleEvent::Cant {
                mon,
                reason: Status::Freeze,
            },
            StatusEffect::Asleep => BattleEvent::Cant {
                mon,
                reason: Status::Sleep,
            },
            StatusEffect::Thawed => BattleEvent::CureStatus {
                mon,
                status: Status::Freeze,
            },
            StatusEffect::WokeUp => BattleEvent::CureStatus {
                mon,
                status: Status::Sleep,
            },
        };
        self.push_event(event);
    }

    fn use_move(&mut self, side: Side) -> Result<(), BattleError> {
        let foe = side.foe();
        let move_data: &'d MoveData =
            *rand_util::sample_slice(self.prng.as_mut(), &self.movesets[side.index()])
                .ok_or(BattleError::EmptyMoveCatalog)?;
        let event = BattleEvent::Move {
            mon: self.mon_ref(side),
            name: move_data.name.clone(),
            target: self.mon_ref(foe),
        };
        self.push_event(event);

        let hit = match move_data.accuracy {
            Accuracy::Exempt => true,
            Accuracy::Chance(accuracy) => {
                rand_util::chance(self.prng.as_mut(), accuracy as u64, 100)
            }
        };
        if !hit {
            let event = BattleEvent::Miss {
                mon: self.mon_ref(side),
                target: self.mon_ref(foe),
            };
            self.push_event(event);
            return Ok(());
        }

        let calculation = compute_damage(
            &self.combatants[side.index()],
            &self.combatants[foe.index()],
            move_data,
            self.type_chart,
            self.prng.as_mut(),
            self.options.randomize_base_damage,
        );
        let defender = &mut self.combatants[foe.index()];
        defender.apply_damage(calculation.damage);
        let event = BattleEvent::Damage {
            mon: self.mon_ref(foe),
            damage: calculation.damage,
            type_multiplier: calculation.type_multiplier,
            critical: calculation.critical,
            health: self.combatant(foe).health(),
        };
        self.push_event(event);

        if self.combatant(foe).is_fainted() {
            self.faint(foe);
        }
        Ok(())
    }

    fn faint(&mut self, side: Side) {
        let winner = side.foe();
        self.push_event(BattleEvent::Faint {
            mon: self.mon_ref(side),
        });
        self.state = BattleState::won_by(winner);
        self.push_event(BattleEvent::Win {
            mon: self.mon_ref(winner),
        });
        log::debug!(
            "{} wins on turn {}",
            self.combatant(winner).name(),
            self.turn
        );
    }
}

/// Runs a complete battle between two combatants.
pub fn simulate_battle(
    combatant_1: CombatantData,
    combatant_2: CombatantData,
    type_chart: &TypeChart,
    move_catalog: &MoveCatalog,
    options: BattleOptions,
) -> Result<BattleResult, BattleError> {
    Battle::new(combatant_1, combatant_2, type_chart, move_catalog, options)?.run()
}
