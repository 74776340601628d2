//! Season and phase of a game turn.

use serde::{Deserialize, Serialize};

/// The season of a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Fall,
    Winter,
}

impl Season {
    /// Returns the single-character abbreviation.
    pub const fn short_char(self) -> char {
        match self {
            Season::Spring => 's',
            Season::Fall => 'f',
            Season::Winter => 'w',
        }
    }

    /// Parses a season from its single-character abbreviation.
    pub fn from_short_char(c: char) -> Option<Season> {
        match c {
            's' => Some(Season::Spring),
            'f' => Some(Season::Fall),
            'w' => Some(Season::Winter),
            _ => None,
        }
    }
}

/// The phase within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Order,
    Retreat,
    Build,
}

impl Phase {
    /// Returns the single-character abbreviation.
    pub const fn short_char(self) -> char {
        match self {
            Phase::Order => 'o',
            Phase::Retreat => 'r',
            Phase::Build => 'b',
        }
    }

    /// Parses a phase from its single-character abbreviation.
    pub fn from_short_char(c: char) -> Option<Phase> {
        match c {
            'o' => Some(Phase::Order),
            'r' => Some(Phase::Retreat),
            'b' => Some(Phase::Build),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_short_char_roundtrip() {
        for s in [Season::Spring, Season::Fall, Season::Winter] {
            assert_eq!(Season::from_short_char(s.short_char()), Some(s));
        }
        assert_eq!(Season::from_short_char('x'), None);
    }

    #[test]
    fn phase_short_char_roundtrip() {
        for p in [Phase::Order, Phase::Retreat, Phase::Build] {
            assert_eq!(Phase::from_short_char(p.short_char()), Some(p));
        }
        assert_eq!(Phase::from_short_char('x'), None);
    }
}
