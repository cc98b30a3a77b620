//! Operation identifiers.
//!
//! Built-in operations use a closed enum so callers get compile-time checked
//! keys, while runtime-registered operations use an open string tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four operations every default calculator carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BuiltinOp {
    pub const ALL: [BuiltinOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Stable external spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Recognise a builtin from user input: names in any case, or the operator symbol.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => return Some(Self::Add),
            "-" => return Some(Self::Subtract),
            "*" | "x" => return Some(Self::Multiply),
            "/" => return Some(Self::Divide),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key selecting an operation in the registry.
///
/// `From<&str>` always produces a [`OperationKey::Custom`] tag, so a custom
/// operation named `"add"` never collides with [`BuiltinOp::Add`]. Use
/// [`str::parse`] when the text comes from a user and builtin spellings
/// should be recognised.
///
/// Ordering puts builtins first in declaration order, then custom keys by name.
///
/// Serializes as the bare name. The encoding is output-only: a custom key
/// named like a builtin would read back as the builtin, so there is no
/// `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum OperationKey {
    Builtin(BuiltinOp),
    Custom(String),
}

impl OperationKey {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    pub fn as_builtin(&self) -> Option<BuiltinOp> {
        match self {
            Self::Builtin(op) => Some(*op),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(op) => write!(f, "{op}"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

impl From<BuiltinOp> for OperationKey {
    fn from(op: BuiltinOp) -> Self {
        Self::Builtin(op)
    }
}

impl From<&str> for OperationKey {
    fn from(name: &str) -> Self {
        Self::Custom(name.to_string())
    }
}

impl From<String> for OperationKey {
    fn from(name: String) -> Self {
        Self::Custom(name)
    }
}

impl From<&OperationKey> for OperationKey {
    fn from(key: &OperationKey) -> Self {
        key.clone()
    }
}

impl FromStr for OperationKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match BuiltinOp::from_name(trimmed) {
            Some(op) => Self::Builtin(op),
            None => Self::Custom(trimmed.to_string()),
        })
    }
}
