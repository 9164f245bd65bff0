use std::fmt;

use duel::Battle;
use itertools::Itertools;
use serde::Deserialize;

/// An expected log line.
///
/// Deserializes from either a string, matched exactly, or a list of strings, all of which must
/// appear in the line.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub enum LogMatch {
    Exact(String),
    Substrings(Vec<String>),
}

impl fmt::Debug for LogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(str) => write!(f, "\"{str}\""),
            Self::Substrings(strs) => write!(
                f,
                "substrings:{}",
                strs.iter().map(|str| format!("\"{str}\"")).join(";")
            ),
        }
    }
}

impl PartialEq<str> for LogMatch {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Exact(str) => str.eq(&other),
            Self::Substrings(strs) => strs.iter().all(|str| other.contains(str)),
        }
    }
}

impl PartialEq<String> for LogMatch {
    fn eq(&self, other: &String) -> bool {
        self.eq(other.as_str())
    }
}

impl PartialEq<&str> for LogMatch {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl From<&str> for LogMatch {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_owned())
    }
}

fn as_strs(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).collect()
}

fn position_of(lines: &[String], line: &str) -> usize {
    match lines.iter().position(|got| got == line) {
        Some(index) => index,
        None => panic!("log line \"{line}\" not found in battle log"),
    }
}

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle<'_>, want: &[LogMatch]) {
    let got = battle
        .new_log_entries()
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>();
    let got = as_strs(&got);
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}

/// Asserts that logs since the start of the battle are equal to the given logs.
#[track_caller]
pub fn assert_logs_since_start_eq(battle: &Battle<'_>, want: &[LogMatch]) {
    let got = battle.full_log().collect::<Vec<_>>();
    let start = position_of(&got, "battlestart") + 1;
    let got = as_strs(&got[start..]);
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}

/// Asserts that logs since the given turn in the battle are equal to the given logs.
#[track_caller]
pub fn assert_logs_since_turn_eq(battle: &Battle<'_>, turn: u32, want: &[LogMatch]) {
    let got = battle.full_log().collect::<Vec<_>>();
    let start = position_of(&got, &format!("turn|turn:{turn}")) + 1;
    let got = as_strs(&got[start..]);
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}

/// Asserts that logs for the given turn in the battle are equal to the given logs.
#[track_caller]
pub fn assert_turn_logs_eq(battle: &Battle<'_>, turn: u32, want: &[LogMatch]) {
    let got = battle.full_log().collect::<Vec<_>>();
    let start = position_of(&got, &format!("turn|turn:{turn}")) + 1;
    let next_turn_log = format!("turn|turn:{}", turn + 1);
    let end = got
        .iter()
        .position(|log| log == &next_turn_log)
        .unwrap_or(got.len());
    let got = as_strs(&got[start..end]);
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}
