//! Algebraic square identifiers for the 8x8 board.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Error returned when parsing a malformed algebraic identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid square id {0:?}")]
pub struct InvalidSquareId(pub String);

/// Identifies one of the 64 board cells by file and rank, e.g. `e4`.
///
/// Identity is independent of board orientation: flipping the render order
/// never changes which cell an id names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SquareId {
    file: u8, // 0 = a .. 7 = h
    rank: u8, // 1..=8
}

impl SquareId {
    pub fn new(file: char, rank: u8) -> Option<Self> {
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Some(Self {
            file: file as u8 - b'a',
            rank,
        })
    }

    /// Build from the canonical grid index: 0 is a8, 63 is h1, files run
    /// fastest (standard top-left-to-bottom-right board reading).
    pub fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index out of range: {index}");
        Self {
            file: (index % 8) as u8,
            rank: 8 - (index / 8) as u8,
        }
    }

    /// The canonical grid index of this square (inverse of [`Self::from_index`]).
    pub fn index(self) -> usize {
        (8 - self.rank as usize) * 8 + self.file as usize
    }

    pub fn file(self) -> char {
        (b'a' + self.file) as char
    }

    /// Zero-based file offset (a = 0 .. h = 7).
    pub fn file_index(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank)
    }
}

impl FromStr for SquareId {
    type Err = InvalidSquareId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                rank.to_digit(10).and_then(|r| SquareId::new(file, r as u8))
            }
            _ => None,
        };
        parsed.ok_or_else(|| InvalidSquareId(s.to_string()))
    }
}

impl serde::Serialize for SquareId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for SquareId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: SquareId = "e4".parse().unwrap();
        assert_eq!(id.file(), 'e');
        assert_eq!(id.rank(), 4);
        assert_eq!(id.to_string(), "e4");

        assert!("i4".parse::<SquareId>().is_err());
        assert!("e9".parse::<SquareId>().is_err());
        assert!("e44".parse::<SquareId>().is_err());
        assert!("".parse::<SquareId>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(SquareId::from_index(0).to_string(), "a8");
        assert_eq!(SquareId::from_index(7).to_string(), "h8");
        assert_eq!(SquareId::from_index(63).to_string(), "h1");
        for index in 0..64 {
            assert_eq!(SquareId::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_serde_as_algebraic_string() {
        let id: SquareId = "c7".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c7\"");
        let back: SquareId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
