//! Chain steps folded over an accumulator.

use std::fmt;
use std::str::FromStr;

use super::key::OperationKey;
use crate::error::CalcError;

/// One `(operation, operand)` pair applied to the running accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStep {
    pub key: OperationKey,
    pub operand: f64,
}

impl ChainStep {
    pub fn new(key: impl Into<OperationKey>, operand: f64) -> Self {
        Self {
            key: key.into(),
            operand,
        }
    }
}

impl<K: Into<OperationKey>> From<(K, f64)> for ChainStep {
    fn from((key, operand): (K, f64)) -> Self {
        Self::new(key, operand)
    }
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.operand)
    }
}

/// Parses `<op>:<operand>`, e.g. `add:3`, `*:2` or `power:-1.5`.
///
/// The operation name goes through [`OperationKey::from_str`], so builtin
/// spellings resolve to builtin keys.
impl FromStr for ChainStep {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CalcError::InvalidStep {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        // Split on the last colon so custom names may contain one.
        let (name, operand) = s
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing ':' separator"))?;
        if name.trim().is_empty() {
            return Err(invalid("missing operation name"));
        }
        let operand: f64 = operand
            .trim()
            .parse()
            .map_err(|_| invalid("operand is not a number"))?;
        let Ok(key) = name.parse::<OperationKey>();

        Ok(Self { key, operand })
    }
}
