use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Arithmetic operator applied across the operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Short name used in the REST routes (`/add`, `/sub`, `/mult`, `/div`).
    #[must_use]
    pub fn route_name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "sub",
            Operator::Multiply => "mult",
            Operator::Divide => "div",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operator name is not one of the supported four.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operator::Add),
            "sub" | "subtract" => Ok(Operator::Subtract),
            "mult" | "multiply" => Ok(Operator::Multiply),
            "div" | "divide" => Ok(Operator::Divide),
            _ => Err(UnknownOperator(s.to_owned())),
        }
    }
}
