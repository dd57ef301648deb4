//! Unit tests for the pure joins

use super::*;
use serde_json::json;

const BOOTSTRAP: &str = include_str!("../../../tests/data/bootstrap.json");
const SUMMARY_351: &str = include_str!("../../../tests/data/element_summary_351.json");
const LIVE_GW18: &str = include_str!("../../../tests/data/event_18_live.json");
const FIXTURES_FUTURE: &str = include_str!("../../../tests/data/fixtures_future.json");

fn bootstrap() -> Bootstrap {
    serde_json::from_str(BOOTSTRAP).unwrap()
}

fn summary() -> PlayerSummary {
    serde_json::from_str(SUMMARY_351).unwrap()
}

fn fixture(id: u32, event: Option<u32>, kickoff: Option<&str>) -> Fixture {
    serde_json::from_value(json!({
        "code": 2444000 + id,
        "event": event,
        "finished": false,
        "finished_provisional": false,
        "id": id,
        "kickoff_time": kickoff,
        "minutes": 0,
        "provisional_start_time": false,
        "started": false,
        "team_a": 1,
        "team_a_score": null,
        "team_h": 2,
        "team_h_score": null,
        "stats": [],
        "team_h_difficulty": 3,
        "team_a_difficulty": 3,
        "pulse_id": 110000 + id
    }))
    .unwrap()
}

#[cfg(test)]
mod profile_tests {
    use super::*;

    #[test]
    fn test_find_element() {
        let element = find_element(bootstrap(), PlayerId::new(351)).unwrap();
        assert_eq!(element.web_name, "Haaland");
        assert!(find_element(bootstrap(), PlayerId::new(9999)).is_none());
    }

    #[test]
    fn test_combine_profile_joins_both_halves() {
        let id = PlayerId::new(351);
        let profile = combine_profile(id, find_element(bootstrap(), id), summary()).unwrap();

        assert_eq!(profile.id(), id);
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["total_points"], 104);
        assert_eq!(value["web_name"], "Haaland");
        assert_eq!(value["history"].as_array().unwrap().len(), 2);
        assert_eq!(value["history_past"][0]["season_name"], "2023/24");
        assert_eq!(value["fixtures"][0]["event"], 18);
    }

    #[test]
    fn test_combine_profile_without_element_is_absent() {
        assert!(combine_profile(PlayerId::new(351), None, summary()).is_none());
    }

    #[test]
    fn test_combine_profile_rejects_mismatched_ids() {
        // snapshot half of another player
        let salah = find_element(bootstrap(), PlayerId::new(182));
        assert!(combine_profile(PlayerId::new(351), salah, summary()).is_none());

        // summary whose history belongs to another player
        let mut foreign = summary();
        foreign.history[1].element = PlayerId::new(182);
        let haaland = find_element(bootstrap(), PlayerId::new(351));
        assert!(combine_profile(PlayerId::new(351), haaland, foreign).is_none());
    }

    #[test]
    fn test_combine_profile_with_empty_history() {
        let mut fresh = summary();
        fresh.history.clear();
        let id = PlayerId::new(351);
        assert!(combine_profile(id, find_element(bootstrap(), id), fresh).is_some());
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn test_find_player_score() {
        let scores: GameweekScores = serde_json::from_str(LIVE_GW18).unwrap();
        let score = find_player_score(scores.clone(), PlayerId::new(351)).unwrap();
        assert_eq!(score.id, PlayerId::new(351));
        assert_eq!(score.stats.total_points, 2);

        assert!(find_player_score(scores, PlayerId::new(1)).is_none());
    }

    #[test]
    fn test_find_player_score_returns_first_match() {
        let mut scores: GameweekScores = serde_json::from_str(LIVE_GW18).unwrap();
        let mut duplicate = scores.elements[1].clone();
        duplicate.stats.total_points = 99;
        scores.elements.push(duplicate);

        let score = find_player_score(scores, PlayerId::new(351)).unwrap();
        assert_eq!(score.stats.total_points, 2);
    }
}

#[cfg(test)]
mod upcoming_tests {
    use super::*;

    #[test]
    fn test_upcoming_gameweek_sorted_input() {
        let fixtures: Vec<Fixture> = serde_json::from_str(FIXTURES_FUTURE).unwrap();
        assert_eq!(upcoming_gameweek(&fixtures), Some(Gameweek::new(18).unwrap()));
    }

    #[test]
    fn test_upcoming_gameweek_empty() {
        assert_eq!(upcoming_gameweek(&[]), None);
    }

    #[test]
    fn test_upcoming_gameweek_does_not_trust_upstream_order() {
        let fixtures = vec![
            fixture(186, Some(19), Some("2024-12-29T14:00:00Z")),
            fixture(180, Some(18), Some("2024-12-26T17:30:00Z")),
        ];
        assert_eq!(upcoming_gameweek(&fixtures), Some(Gameweek::new(18).unwrap()));
    }

    #[test]
    fn test_upcoming_gameweek_skips_unscheduled() {
        let fixtures = vec![
            fixture(205, None, None),
            fixture(186, Some(19), Some("2024-12-29T14:00:00Z")),
        ];
        assert_eq!(upcoming_gameweek(&fixtures), Some(Gameweek::new(19).unwrap()));

        assert_eq!(upcoming_gameweek(&[fixture(205, None, None)]), None);
    }

    #[test]
    fn test_upcoming_gameweek_falls_back_to_upstream_order() {
        let fixtures = vec![
            fixture(190, Some(20), None),
            fixture(191, Some(21), Some("not a timestamp")),
        ];
        assert_eq!(upcoming_gameweek(&fixtures), Some(Gameweek::new(20).unwrap()));
    }

    #[test]
    fn test_upcoming_gameweek_ties_keep_upstream_order() {
        let fixtures = vec![
            fixture(200, Some(22), Some("2025-01-04T15:00:00Z")),
            fixture(201, Some(23), Some("2025-01-04T15:00:00Z")),
        ];
        assert_eq!(upcoming_gameweek(&fixtures), Some(Gameweek::new(22).unwrap()));
    }

    #[test]
    fn test_upcoming_gameweek_out_of_range_event() {
        assert_eq!(
            upcoming_gameweek(&[fixture(300, Some(40), Some("2025-06-01T15:00:00Z"))]),
            None
        );
    }
}
