use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::extract::{Cell, Row, extract_rows};
use crate::layout::Layout;

const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Marker(&'static str),
    Blank,
    Player(Row),
}

#[derive(Debug, Clone)]
pub struct Table {
    layout: Layout,
    first: Vec<Row>,
    second: Vec<Row>,
}

impl Table {
    /// Extracts every player under `layout` and groups them, so the rows
    /// always have the shape of the layout's header.
    pub fn assemble(players: &Map<String, Value>, layout: Layout) -> Self {
        let rows = extract_rows(players, layout);
        let (mut first, mut second) = partition(rows, layout);
        sort_by_acs(&mut first);
        sort_by_acs(&mut second);

        Self {
            layout,
            first,
            second,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn header(&self) -> Vec<Cell> {
        self.layout
            .header()
            .iter()
            .map(|name| Cell::Text(name.to_string()))
            .collect()
    }

    pub fn column_count(&self) -> usize {
        self.layout.column_count()
    }

    /// Both sorted groups, labeled for display.
    pub fn groups(&self) -> [(&'static str, &[Row]); 2] {
        let (first_name, second_name) = self.layout.group_names();
        [(first_name, &self.first), (second_name, &self.second)]
    }

    pub fn entries(&self) -> Vec<Entry> {
        let (first_marker, second_marker) = self.layout.markers();
        let mut entries = Vec::with_capacity(self.first.len() + self.second.len() + 3);

        entries.push(Entry::Marker(first_marker));
        entries.extend(self.first.iter().cloned().map(Entry::Player));
        entries.push(Entry::Blank);
        entries.push(Entry::Marker(second_marker));
        entries.extend(self.second.iter().cloned().map(Entry::Player));

        entries
    }

    /// Header followed by every entry, each padded to the header's width.
    pub fn values(&self) -> Vec<Vec<Cell>> {
        let width = self.column_count();
        let mut values = vec![self.header()];

        for entry in self.entries() {
            let row = match entry {
                Entry::Marker(label) => {
                    let mut row = vec![Cell::Text(label.to_string())];
                    row.resize(width, Cell::empty());
                    row
                }
                Entry::Blank => vec![Cell::empty(); width],
                Entry::Player(player) => player.cells(),
            };
            values.push(row);
        }

        values
    }

    pub fn player_count(&self) -> usize {
        self.first.len() + self.second.len()
    }
}

pub fn partition(rows: Vec<Row>, layout: Layout) -> (Vec<Row>, Vec<Row>) {
    match layout {
        Layout::Teams => {
            if rows.len() != 2 * TEAM_SIZE {
                log::warn!(
                    "Expected {} players for two teams, found {}; splitting after the first {}",
                    2 * TEAM_SIZE,
                    rows.len(),
                    TEAM_SIZE
                );
            }

            let mut first = rows;
            let second = first.split_off(TEAM_SIZE.min(first.len()));
            (first, second)
        }
        Layout::WinLoss => rows.into_iter().partition(|row| row.wins == Some(1)),
    }
}

/// Stable: players with equal ACS keep their relative order.
pub fn sort_by_acs(rows: &mut [Row]) {
    rows.sort_by(|a, b| b.acs.partial_cmp(&a.acs).unwrap_or(Ordering::Equal));
}
