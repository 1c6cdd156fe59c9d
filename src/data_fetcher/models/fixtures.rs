use super::leagues::League;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    /// ISO 8601 kickoff with offset, e.g. `2025-03-22T21:30:00+00:00`
    pub date: String,
    /// Kickoff as unix seconds
    pub timestamp: i64,
    pub status: FixtureStatus,
}

/// Goal counts stay `None` until the match starts; `None` is not `0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Goals {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

impl Goals {
    /// Both counts, only when both are known
    pub fn score(&self) -> Option<(i32, i32)> {
        self.home.zip(self.away)
    }
}

/// One item of the `/fixtures` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    pub league: League,
    pub teams: Teams,
    #[serde(default)]
    pub goals: Goals,
}

impl Fixture {
    /// Kickoff instant. Uses the ISO date and falls back to the unix
    /// timestamp when the date string does not parse.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.fixture.date)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| DateTime::from_timestamp(self.fixture.timestamp, 0))
    }
}

/// Outcome of a successful fixtures request for one league
#[derive(Debug, Clone)]
pub enum LeagueFixtures {
    /// Non-empty list in API order
    Found(Vec<Fixture>),
    /// API reported zero results
    Empty,
}

impl LeagueFixtures {
    pub fn len(&self) -> usize {
        match self {
            LeagueFixtures::Found(fixtures) => fixtures.len(),
            LeagueFixtures::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ApiResponse;
    use chrono::TimeZone;

    const FIXTURES_JSON: &str = r#"{
        "get": "fixtures",
        "errors": [],
        "results": 2,
        "response": [
            {
                "fixture": {
                    "id": 1180398,
                    "referee": null,
                    "timezone": "UTC",
                    "date": "2025-03-22T19:00:00+00:00",
                    "timestamp": 1742670000,
                    "status": {"long": "Match Finished", "short": "FT", "elapsed": 90}
                },
                "league": {"id": 71, "name": "Serie A", "season": 2025},
                "teams": {
                    "home": {"id": 127, "name": "Flamengo", "winner": true},
                    "away": {"id": 121, "name": "Palmeiras", "winner": false}
                },
                "goals": {"home": 2, "away": 1}
            },
            {
                "fixture": {
                    "id": 1180399,
                    "date": "2025-03-22T21:30:00+00:00",
                    "timestamp": 1742679000,
                    "status": {"long": "Not Started", "short": "NS"}
                },
                "league": {"id": 71, "name": "Serie A"},
                "teams": {
                    "home": {"id": 126, "name": "Sao Paulo"},
                    "away": {"id": 131, "name": "Corinthians"}
                },
                "goals": {"home": null, "away": null}
            }
        ]
    }"#;

    #[test]
    fn test_fixtures_response_deserialization() {
        let response: ApiResponse<Fixture> = serde_json::from_str(FIXTURES_JSON).unwrap();
        assert_eq!(response.results, 2);

        let finished = &response.response[0];
        assert_eq!(finished.fixture.id, 1180398);
        assert_eq!(finished.fixture.status.long, "Match Finished");
        assert_eq!(finished.fixture.status.short, "FT");
        assert_eq!(finished.teams.home.name, "Flamengo");
        assert_eq!(finished.teams.away.name, "Palmeiras");
        assert_eq!(finished.goals.score(), Some((2, 1)));

        let upcoming = &response.response[1];
        assert_eq!(upcoming.goals, Goals::default());
        assert_eq!(upcoming.goals.score(), None);
    }

    #[test]
    fn test_missing_goal_is_not_zero() {
        let goals = Goals {
            home: Some(0),
            away: None,
        };
        assert_eq!(goals.score(), None);

        let goals = Goals {
            home: Some(0),
            away: Some(0),
        };
        assert_eq!(goals.score(), Some((0, 0)));
    }

    #[test]
    fn test_kickoff_from_iso_date_with_offset() {
        let response: ApiResponse<Fixture> = serde_json::from_str(FIXTURES_JSON).unwrap();
        let mut fixture = response.response[0].clone();
        fixture.fixture.date = "2025-03-22T16:00:00-03:00".to_string();

        assert_eq!(
            fixture.kickoff(),
            Some(Utc.with_ymd_and_hms(2025, 3, 22, 19, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_kickoff_falls_back_to_timestamp() {
        let response: ApiResponse<Fixture> = serde_json::from_str(FIXTURES_JSON).unwrap();
        let mut fixture = response.response[1].clone();
        fixture.fixture.date = "not a date".to_string();

        assert_eq!(
            fixture.kickoff(),
            Some(Utc.with_ymd_and_hms(2025, 3, 22, 21, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_league_fixtures_len() {
        assert_eq!(LeagueFixtures::Empty.len(), 0);
        assert!(LeagueFixtures::Empty.is_empty());

        let response: ApiResponse<Fixture> = serde_json::from_str(FIXTURES_JSON).unwrap();
        let found = LeagueFixtures::Found(response.response);
        assert_eq!(found.len(), 2);
        assert!(!found.is_empty());
    }
}
