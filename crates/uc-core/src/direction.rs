use serde::{Deserialize, Serialize};

/// Direction of travel out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// In.
    In,
    /// Out.
    Out,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 12] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
        Self::In,
        Self::Out,
    ];

    /// Parse a direction word or abbreviation (already lower-cased).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "in" | "inside" => Some(Self::In),
            "out" | "outside" => Some(Self::Out),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_abbreviations() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("sw"), Some(Direction::Southwest));
        assert_eq!(Direction::parse("u"), Some(Direction::Up));
        assert_eq!(Direction::parse("inside"), Some(Direction::In));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }
}
