use clap::ValueEnum;

/// Row shape and grouping policy of an uploaded table. The two always travel
/// together: the `Wins` column only exists when rows are grouped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// First five players are team A, the rest team B.
    #[default]
    Teams,
    /// Players grouped by their `wins` flag.
    WinLoss,
}

const TEAMS_HEADER: [&str; 10] = [
    "IGN",
    "Agent",
    "Kills",
    "Deaths",
    "Assists",
    "K/D",
    "ACS",
    "FirstKills",
    "Clutches",
    "PostPlants",
];

const WIN_LOSS_HEADER: [&str; 11] = [
    "IGN",
    "Agent",
    "Kills",
    "Deaths",
    "Assists",
    "K/D",
    "ACS",
    "FirstKills",
    "Clutches",
    "Plants",
    "Wins",
];

impl Layout {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Layout::Teams => &TEAMS_HEADER,
            Layout::WinLoss => &WIN_LOSS_HEADER,
        }
    }

    pub fn column_count(self) -> usize {
        self.header().len()
    }

    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            Layout::Teams => ("=== TEAM A ===", "=== TEAM B ==="),
            Layout::WinLoss => ("=== WINNERS ===", "=== LOSERS ==="),
        }
    }

    pub fn group_names(self) -> (&'static str, &'static str) {
        match self {
            Layout::Teams => ("Team A", "Team B"),
            Layout::WinLoss => ("Winners", "Losers"),
        }
    }

    pub fn reads_wins(self) -> bool {
        matches!(self, Layout::WinLoss)
    }
}
