use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ParseError;
use crate::layout::Layout;

/// Agent shown for players whose `agent` mapping is missing or empty.
pub const AGENT_UNKNOWN: &str = "";

/// A single spreadsheet value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Float(value) => write!(f, "{:.2}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub ign: String,
    pub agent: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub kd: f64,
    pub acs: f64,
    pub first_kills: i64,
    pub clutches: i64,
    pub plants: i64,
    pub wins: Option<i64>,
}

impl Row {
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::Text(self.ign.clone()),
            Cell::Text(self.agent.clone()),
            Cell::Int(self.kills),
            Cell::Int(self.deaths),
            Cell::Int(self.assists),
            Cell::Float(self.kd),
            Cell::Float(self.acs),
            Cell::Int(self.first_kills),
            Cell::Int(self.clutches),
            Cell::Int(self.plants),
        ];

        if let Some(wins) = self.wins {
            cells.push(Cell::Int(wins));
        }

        cells
    }
}

pub fn read_match_file(path: &Path) -> Result<Map<String, Value>, ParseError> {
    let contents = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_match(&contents)
}

pub fn parse_match(raw: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(players) => Ok(players),
        Value::Array(_) => Err(ParseError::NotAnObject("an array")),
        Value::String(_) => Err(ParseError::NotAnObject("a string")),
        Value::Number(_) => Err(ParseError::NotAnObject("a number")),
        Value::Bool(_) => Err(ParseError::NotAnObject("a boolean")),
        Value::Null => Err(ParseError::NotAnObject("null")),
    }
}

/// One row per player, in the order the players appear in the source file.
pub fn extract_rows(players: &Map<String, Value>, layout: Layout) -> Vec<Row> {
    players
        .values()
        .map(|player| extract_row(player, layout))
        .collect()
}

pub fn extract_row(player: &Value, layout: Layout) -> Row {
    let stats = player
        .get("side")
        .and_then(|side| side.get("Total"))
        .and_then(|total| total.as_object());

    Row {
        ign: player
            .get("gameName")
            .and_then(|value| value.as_str())
            .unwrap_or("")
            .to_string(),
        agent: first_agent(player).unwrap_or(AGENT_UNKNOWN).to_string(),
        kills: stat_int(stats, "kills"),
        deaths: stat_int(stats, "deaths"),
        assists: stat_int(stats, "assists"),
        kd: round2(stat_float(stats, "kd")),
        acs: round2(stat_float(stats, "acs")),
        first_kills: stat_int(stats, "firstKills"),
        clutches: stat_int(stats, "clutchesWon"),
        plants: stat_int(stats, "bombPlants"),
        wins: layout.reads_wins().then(|| stat_int(stats, "wins")),
    }
}

/// Rounds half away from zero to two decimals. Values too large to scale
/// are already whole and pass through unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

fn first_agent(player: &Value) -> Option<&str> {
    player
        .get("agent")
        .and_then(|agents| agents.as_object())
        .and_then(|agents| agents.values().next())
        .and_then(|entry| entry.get("agent"))
        .and_then(|value| value.as_str())
}

fn stat_int(stats: Option<&Map<String, Value>>, key: &str) -> i64 {
    stats
        .and_then(|stats| stats.get(key))
        .and_then(|value| {
            value
                .as_i64()
                .or_else(|| value.as_f64().map(|float| float.trunc() as i64))
        })
        .unwrap_or(0)
}

fn stat_float(stats: Option<&Map<String, Value>>, key: &str) -> f64 {
    stats
        .and_then(|stats| stats.get(key))
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}
