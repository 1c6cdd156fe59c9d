use serde::{Deserialize, Serialize};

/// League identity as it appears in both `/leagues` and `/fixtures` payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct League {
    pub id: i32,
    pub name: String,
}

/// One item of the `/leagues` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub league: League,
}

/// A league selected for the run.
///
/// Created from configuration with an empty name; the name is filled in
/// once by the league name resolver and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueRef {
    pub id: i32,
    pub season: i32,
    pub name: String,
}

impl LeagueRef {
    pub fn new(id: i32, season: i32) -> Self {
        Self {
            id,
            season,
            name: String::new(),
        }
    }
}
