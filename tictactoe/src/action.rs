use serde::de::{Deserialize, Deserializer, Error as DeserializeError, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use super::BOARD_SIZE;

/// Marks the square at `row`, `column` (both 0-based) for the player to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Action {
    pub row: usize,
    pub column: usize,
}

impl Action {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub(crate) fn from_square(square: usize) -> Self {
        Self::new(square / BOARD_SIZE, square % BOARD_SIZE)
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Square index used by the piece boards. Only meaningful on the board.
    pub(crate) fn square(&self) -> usize {
        self.row * BOARD_SIZE + self.column
    }

    pub(crate) fn square_bit(&self) -> u16 {
        1 << self.square()
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    /// Accepts `"row column"` or `"row,column"`, e.g. `"1 2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(anyhow!("Expected a row and a column, e.g. '1 2'"));
        }

        let row = parts[0].parse()?;
        let column = parts[1].parse()?;

        Ok(Action::new(row, column))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct ActionVisitor {}

impl ActionVisitor {
    fn new() -> Self {
        Self {}
    }
}

impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expecting a string with the row then the column of a square, e.g. '1 2'.")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: DeserializeError,
    {
        v.parse::<Action>()
            .map_err(|_| DeserializeError::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ActionVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!("1 2".parse::<Action>().unwrap(), Action::new(1, 2));
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(" 0, 2 ".parse::<Action>().unwrap(), Action::new(0, 2));
    }

    #[test]
    fn test_parse_rejects_single_number() {
        assert!("1".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("a b".parse::<Action>().is_err());
        assert!("1 2 3".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_keeps_out_of_bounds_for_rules_to_reject() {
        let action = "3 0".parse::<Action>().unwrap();
        assert!(!action.is_on_board());
    }

    #[test]
    fn test_square_round_trip() {
        for square in 0..9 {
            assert_eq!(Action::from_square(square).square(), square);
        }
        assert_eq!(Action::from_square(5), Action::new(1, 2));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Action::new(2, 1)).unwrap();
        assert_eq!(json, "\"2 1\"");
        let action: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, Action::new(2, 1));
    }
}
