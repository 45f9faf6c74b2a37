use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Drops a disc into a 0-based column; the row follows from gravity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    DropPiece(usize),
}

impl Action {
    pub fn column(&self) -> usize {
        let Action::DropPiece(column) = self;
        *column
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    /// Parses the column number. Range checking is left to the rules so an
    /// out-of-range column surfaces as an illegal move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column_num = s.trim().parse()?;

        Ok(Action::DropPiece(column_num))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Action::DropPiece(column) = self;
        write!(f, "{}", column)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.column() as u64)
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
        formatter.write_str(
            "Expecting an integer from 0-6 that represents the column that a piece was dropped.",
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Action::DropPiece(v as usize))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u64(ActionVisitor::new())
    }
}
