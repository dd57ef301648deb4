//! ID types for the Fantasy Premier League API.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First gameweek of a season.
pub const FIRST_GAMEWEEK: u32 = 1;
/// Last gameweek of a season.
pub const LAST_GAMEWEEK: u32 = 38;

/// A gameweek number, guaranteed to be within `1..=38`.
///
/// Every gameweek-scoped operation goes through [`Gameweek::new`] before any
/// request is built, so an out-of-range number never reaches the network.
///
/// # Examples
///
/// ```rust
/// use fpl_api::Gameweek;
///
/// let gw = Gameweek::new(18).unwrap();
/// assert_eq!(gw.as_u32(), 18);
/// assert!(Gameweek::new(0).is_err());
/// assert!(Gameweek::new(39).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Gameweek(u32);

impl Gameweek {
    pub fn new(gameweek: u32) -> Result<Self> {
        if (FIRST_GAMEWEEK..=LAST_GAMEWEEK).contains(&gameweek) {
            Ok(Self(gameweek))
        } else {
            Err(FplError::GameweekOutOfRange { gameweek })
        }
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Gameweek {
    type Error = FplError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Gameweek {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        Gameweek::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim().parse::<u32>().map_err(|_| FplError::InvalidId {
            what: "gameweek",
            value: s.to_string(),
        })?;
        Self::new(raw)
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = FplError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(FplError::MissingId { what: $what });
                }
                trimmed.parse().map(Self).map_err(|_| FplError::InvalidId {
                    what: $what,
                    value: s.to_string(),
                })
            }
        }
    };
}

id_type!(
    /// Player ("element") id, shared by the snapshot, the player summary and
    /// the live score list.
    PlayerId,
    "player id"
);

id_type!(
    /// Manager ("entry") id.
    ManagerId,
    "manager id"
);

id_type!(
    /// Classic league id.
    LeagueId,
    "league id"
);

id_type!(TeamId, "team id");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_gameweek_bounds() {
        assert!(Gameweek::new(1).is_ok());
        assert!(Gameweek::new(38).is_ok());

        for bad in [0, 39, 100, u32::MAX] {
            let err = Gameweek::new(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert!(matches!(err, FplError::GameweekOutOfRange { gameweek } if gameweek == bad));
        }
    }

    #[test]
    fn test_gameweek_from_str() {
        assert_eq!("7".parse::<Gameweek>().unwrap().as_u32(), 7);
        assert!(matches!(
            "39".parse::<Gameweek>(),
            Err(FplError::GameweekOutOfRange { gameweek: 39 })
        ));
        assert!(matches!(
            "seven".parse::<Gameweek>(),
            Err(FplError::InvalidId { what: "gameweek", .. })
        ));
    }

    #[test]
    fn test_gameweek_deserialize_rejects_out_of_range() {
        let ok: Gameweek = serde_json::from_str("12").unwrap();
        assert_eq!(ok.as_u32(), 12);
        assert!(serde_json::from_str::<Gameweek>("0").is_err());
    }

    #[test]
    fn test_player_id_parsing() {
        let id: PlayerId = "351".parse().unwrap();
        assert_eq!(id, PlayerId::new(351));
        assert_eq!(id.to_string(), "351");

        assert!(matches!(
            "".parse::<PlayerId>(),
            Err(FplError::MissingId { what: "player id" })
        ));
        assert!(matches!(
            "abc".parse::<ManagerId>(),
            Err(FplError::InvalidId { what: "manager id", .. })
        ));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&LeagueId::new(1346286)).unwrap(), "1346286");
        let team: TeamId = serde_json::from_str("14").unwrap();
        assert_eq!(team.as_u32(), 14);
    }
}
