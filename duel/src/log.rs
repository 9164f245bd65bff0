use std::{
    borrow::Cow,
    fmt::{
        self,
        Display,
    },
    mem,
};

use duel_data::{
    Type,
    TypeEffectiveness,
};
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    Side,
    Status,
};

/// Trait for objects that can be added directly to a log line.
///
/// Automatically implemented for types that implement [`Display`].
pub trait BattleLoggable {
    fn log<'s>(&'s self, items: &mut Vec<Cow<'s, str>>);
}

impl<T> BattleLoggable for T
where
    T: Display,
{
    fn log(&self, parts: &mut Vec<Cow<'_, str>>) {
        parts.push(Cow::Owned(format!("{self}")))
    }
}

/// A single pipe-delimited log line.
///
/// This object should not be constructed directly. Instead, use the [`log_line`] macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine(String);

impl LogLine {
    pub fn from_parts(parts: &[&dyn BattleLoggable]) -> Self {
        let mut log_parts = Vec::with_capacity(parts.len());
        for part in parts {
            part.log(&mut log_parts);
        }
        Self(log_parts.into_iter().join("|"))
    }

    /// Appends another part to the line.
    pub fn with(mut self, part: &dyn BattleLoggable) -> Self {
        let mut log_parts = Vec::new();
        part.log(&mut log_parts);
        for part in log_parts {
            self.0.push('|');
            self.0.push_str(&part);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Constructs a [`LogLine`].
///
/// This macro enforces a common format for all lines in the event log.
#[macro_export]
macro_rules! log_line {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::LogLine::from_parts(&[$(&$arg),*])
    }};
}

/// Reference to a combatant in the log, by name and side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonRef {
    pub name: String,
    pub side: Side,
}

impl MonRef {
    pub fn new<N>(name: N, side: Side) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            side,
        }
    }
}

impl Display for MonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.side)
    }
}

/// Health of a combatant at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u16,
    pub max: u16,
}

impl Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// A discrete, renderer-agnostic battle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    /// The battle started.
    BattleStart,
    /// A combatant entered the battle.
    Appear {
        mon: MonRef,
        health: Health,
        types: Vec<Type>,
        status: Status,
    },
    /// A new turn started.
    Turn { number: u32 },
    /// A combatant took damage from its own status condition.
    Residual {
        mon: MonRef,
        status: Status,
        damage: u32,
        health: Health,
    },
    /// A combatant could not act because of its status condition.
    Cant { mon: MonRef, reason: Status },
    /// A combatant's status condition was lifted.
    CureStatus { mon: MonRef, status: Status },
    /// A combatant used a move.
    Move {
        mon: MonRef,
        name: String,
        target: MonRef,
    },
    /// A move missed its target.
    Miss { mon: MonRef, target: MonRef },
    /// A move hit and dealt damage.
    Damage {
        mon: MonRef,
        damage: u32,
        type_multiplier: f32,
        critical: bool,
        health: Health,
    },
    /// A combatant fainted.
    Faint { mon: MonRef },
    /// A combatant won the battle.
    Win { mon: MonRef },
}

impl BattleEvent {
    /// The pipe-delimited log line for this event.
    pub fn line(&self) -> LogLine {
        match self {
            Self::BattleStart => log_line!("battlestart"),
            Self::Appear {
                mon,
                health,
                types,
                status,
            } => {
                let line = log_line!(
                    "appear",
                    format!("mon:{mon}"),
                    format!("health:{health}"),
                    format!("types:{}", types.iter().join("/")),
                );
                match status {
                    Status::None => line,
                    status => line.with(&format!("status:{status}")),
                }
            }
            Self::Turn { number } => log_line!("turn", format!("turn:{number}")),
            Self::Residual {
                mon,
                status,
                health,
                ..
            } => log_line!(
                "damage",
                format!("mon:{mon}"),
                format!("from:status:{status}"),
                format!("health:{health}"),
            ),
            Self::Cant { mon, reason } => {
                log_line!("cant", format!("mon:{mon}"), format!("reason:{reason}"))
            }
            Self::CureStatus { mon, status } => {
                log_line!("curestatus", format!("mon:{mon}"), format!("status:{status}"))
            }
            Self::Move { mon, name, target } => log_line!(
                "move",
                format!("mon:{mon}"),
                format!("name:{name}"),
                format!("target:{target}"),
            ),
            Self::Miss { mon, target } => {
                log_line!("miss", format!("mon:{mon}"), format!("target:{target}"))
            }
            Self::Damage {
                mon,
                type_multiplier,
                critical,
                health,
                ..
            } => {
                let mut line = log_line!("damage", format!("mon:{mon}"), format!("health:{health}"));
                match TypeEffectiveness::from(*type_multiplier) {
                    TypeEffectiveness::None => line = line.with(&"immune"),
                    TypeEffectiveness::Weak => line = line.with(&"resisted"),
                    TypeEffectiveness::Strong => line = line.with(&"supereffective"),
                    TypeEffectiveness::Normal => (),
                }
                if *critical {
                    line = line.with(&"crit");
                }
                line
            }
            Self::Faint { mon } => log_line!("faint", format!("mon:{mon}")),
            Self::Win { mon } => log_line!("win", format!("mon:{mon}")),
        }
    }
}

impl Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line())
    }
}

/// An event, stamped with the turn it occurred on.
///
/// Events before the first turn are stamped with turn 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    #[serde(flatten)]
    pub event: BattleEvent,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.event)
    }
}

/// An ordered log of battle events.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new entries since the last call to [`Self::read_out`].
    pub fn has_new_entries(&self) -> bool {
        self.last_read < self.entries.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, turn: u32, event: BattleEvent) {
        self.entries.push(LogEntry { turn, event })
    }

    /// All entries, in order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns an iterator over all log lines.
    pub fn lines(&self) -> impl Iterator<Item = String> {
        self.entries.iter().map(|entry| entry.to_string())
    }

    /// Reads out any new entries that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> &[LogEntry] {
        let i = mem::replace(&mut self.last_read, self.entries.len());
        &self.entries[i..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}
