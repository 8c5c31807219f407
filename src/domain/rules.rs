use std::fmt;
use std::str::FromStr;

use super::LifeError;

/// The rule a cell evolves by.
/// Fixed per cell at grid construction, so every cell of a grid shares one kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellKind {
    /// Conway's Game of Life (B3/S23)
    #[default]
    Conway,
    /// HighLife (B36/S23)
    /// Like Conway's Life but cells with 6 neighbors are born
    HighLife,
    /// Never comes alive. Finding one alive is a logic defect.
    Inert,
}

impl CellKind {
    /// Every supported rule, in menu order
    pub const fn all() -> [CellKind; 3] {
        [CellKind::Conway, CellKind::HighLife, CellKind::Inert]
    }

    /// Name of the rule
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Conway => "Conway",
            CellKind::HighLife => "HighLife",
            CellKind::Inert => "Inert",
        }
    }

    /// Short description
    pub const fn description(self) -> &'static str {
        match self {
            CellKind::Conway => "B3/S23 - Classic",
            CellKind::HighLife => "B36/S23 - Replicators",
            CellKind::Inert => "B/S - Always dead",
        }
    }

    /// Apply the rule to compute the next liveness
    pub const fn next_state(self, alive: bool, neighbors: u8) -> bool {
        match self {
            CellKind::Conway => matches!((alive, neighbors), (true, 2 | 3) | (false, 3)),
            CellKind::HighLife => matches!((alive, neighbors), (true, 2 | 3) | (false, 3 | 6)),
            CellKind::Inert => false,
        }
    }

    /// Display symbol, distinct per rule so mixed renders stay readable
    pub const fn glyph(self, alive: bool) -> char {
        match (self, alive) {
            (CellKind::Conway, true) => '+',
            (CellKind::Conway, false) => '-',
            (CellKind::HighLife, true) => '*',
            (CellKind::HighLife, false) => '~',
            (CellKind::Inert, _) => 'x',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            // Names, or the glyph tags of either state
            "conway" | "standard" | "life" | "+" | "-" => Ok(CellKind::Conway),
            "highlife" | "*" | "~" => Ok(CellKind::HighLife),
            "inert" | "zombie" | "x" => Ok(CellKind::Inert),
            _ => Err(LifeError::UnknownRule(s.to_owned())),
        }
    }
}
