//! Identifier newtypes.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Server-assigned user identifier.
///
/// Never generated on the client; the only way to obtain one is to decode it
/// from an API response or parse it from a navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u64);

impl UserId {
    /// The raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(UserId)
            .map_err(|_| ModelError::InvalidUserId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!("42".parse::<UserId>(), Ok(UserId(42)));
        assert_eq!(UserId(7).to_string(), "7");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            "abc".parse::<UserId>(),
            Err(ModelError::InvalidUserId("abc".to_string()))
        );
        assert!("-1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }
}
