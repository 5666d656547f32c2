//! String-to-value conversion for the closed set of supported types.
//!
//! Adding a supported type means adding one variant to [`TypeTag`] and
//! [`Value`] and one arm to [`TypeTag::convert`]; no other module changes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which conversion rule applies to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Int,
    Text,
    Bool,
}

impl TypeTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Bool => "bool",
        }
    }

    /// Attempt to parse `raw` under this tag's rule.
    ///
    /// - `Int`: the full string as a base-10 signed integer; any leading or
    ///   trailing non-numeric content (including whitespace) fails.
    /// - `Text`: identity, never fails.
    /// - `Bool`: exactly `"true"`/`"1"` or `"false"`/`"0"`.
    pub fn convert(self, raw: &str) -> Option<Value> {
        match self {
            Self::Int => raw.parse::<i64>().ok().map(Value::Int),
            Self::Text => Some(Value::Text(raw.to_string())),
            Self::Bool => match raw {
                "true" | "1" => Some(Value::Bool(true)),
                "false" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully converted parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Int(_) => TypeTag::Int,
            Self::Text(_) => TypeTag::Text,
            Self::Bool(_) => TypeTag::Bool,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}
