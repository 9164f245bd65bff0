use std::fmt::Write;

use duel::{
    BattleEvent,
    LogEntry,
    Status,
    TypeEffectiveness,
};
use itertools::Itertools;

/// How battle events are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable messages.
    Text,
    /// Pipe-delimited log lines.
    Log,
    /// One JSON object per event.
    Json,
}

/// Renders a single log entry in the given format.
pub fn render_entry(entry: &LogEntry, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => describe(&entry.event),
        OutputFormat::Log => entry.to_string(),
        OutputFormat::Json => serde_json::to_string(entry)?,
    })
}

/// Summarizes a finished battle.
///
/// Only text output gets a summary, so machine-readable output stays one event per line.
pub fn render_outcome(winner: &str, turns: u32, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => Some(format!("{winner} won in {turns} turns.")),
        OutputFormat::Log | OutputFormat::Json => None,
    }
}

fn cant_reason(status: Status) -> &'static str {
    match status {
        Status::Paralysis => "is fully paralyzed",
        Status::Freeze => "is frozen solid",
        Status::Sleep => "is fast asleep",
        Status::None | Status::Burn | Status::Poison => "can't move",
    }
}

/// Describes an event as a human-readable message.
pub fn describe(event: &BattleEvent) -> String {
    match event {
        BattleEvent::BattleStart => "The battle begins!".to_owned(),
        BattleEvent::Appear {
            mon,
            health,
            types,
            status,
        } => {
            let mut message = format!(
                "{} ({}) enters the battle with {health} HP.",
                mon.name,
                types.iter().join("/")
            );
            if *status != Status::None {
                // Infallible for String.
                let _ = write!(message, " It is affected by {status}.");
            }
            message
        }
        BattleEvent::Turn { number } => format!("\n== Turn {number} =="),
        BattleEvent::Residual {
            mon,
            status,
            damage,
            health,
        } => format!(
            "{} is hurt by its {status} and loses {damage} HP! ({health})",
            mon.name
        ),
        BattleEvent::Cant { mon, reason } => format!("{} {}!", mon.name, cant_reason(*reason)),
        BattleEvent::CureStatus { mon, status } => match status {
            Status::Freeze => format!("{} thawed out!", mon.name),
            Status::Sleep => format!("{} woke up!", mon.name),
            status => format!("{} is no longer affected by {status}.", mon.name),
        },
        BattleEvent::Move { mon, name, .. } => format!("{} used {name}!", mon.name),
        BattleEvent::Miss { mon, .. } => format!("{}'s attack missed!", mon.name),
        BattleEvent::Damage {
            mon,
            damage,
            type_multiplier,
            critical,
            health,
        } => {
            let mut message = String::new();
            if *critical {
                message.push_str("A critical hit! ");
            }
            match TypeEffectiveness::from(*type_multiplier) {
                TypeEffectiveness::None => {
                    return format!("It doesn't affect {}...", mon.name);
                }
                TypeEffectiveness::Weak => message.push_str("It's not very effective... "),
                TypeEffectiveness::Strong => message.push_str("It's super effective! "),
                TypeEffectiveness::Normal => (),
            }
            let _ = write!(message, "{} lost {damage} HP. ({health})", mon.name);
            message
        }
        BattleEvent::Faint { mon } => format!("{} fainted!", mon.name),
        BattleEvent::Win { mon } => format!("{} wins!", mon.name),
    }
}
