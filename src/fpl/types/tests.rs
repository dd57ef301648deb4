//! Unit tests for the schema catalog

use super::*;
use crate::types::PlayerId;
use serde_json::json;

const BOOTSTRAP: &str = include_str!("../../../tests/data/bootstrap.json");
const SUMMARY_351: &str = include_str!("../../../tests/data/element_summary_351.json");

#[cfg(test)]
mod enum_tests {
    use super::*;

    #[test]
    fn test_element_status_codes() {
        let statuses: Vec<ElementStatus> =
            serde_json::from_value(json!(["a", "u", "i", "s", "n", "d"])).unwrap();
        assert_eq!(
            statuses,
            vec![
                ElementStatus::Available,
                ElementStatus::Unavailable,
                ElementStatus::Injured,
                ElementStatus::Suspended,
                ElementStatus::NotInSquad,
                ElementStatus::Doubtful,
            ]
        );
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status: ElementStatus = serde_json::from_value(json!("x")).unwrap();
        assert_eq!(status, ElementStatus::Other("x".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("x"));
    }

    #[test]
    fn test_chip_names() {
        let chips: Vec<ChipName> =
            serde_json::from_value(json!(["bboost", "3xc", "freehit", "wildcard", "manager"]))
                .unwrap();
        assert_eq!(chips[0], ChipName::BenchBoost);
        assert_eq!(chips[1], ChipName::TripleCaptain);
        assert_eq!(chips[4], ChipName::Other("manager".to_string()));
        assert_eq!(
            serde_json::to_value(&chips).unwrap(),
            json!(["bboost", "3xc", "freehit", "wildcard", "manager"])
        );
    }

    #[test]
    fn test_league_type() {
        let kinds: Vec<LeagueType> = serde_json::from_value(json!(["x", "s"])).unwrap();
        assert_eq!(kinds, vec![LeagueType::Private, LeagueType::System]);
    }
}

#[cfg(test)]
mod bootstrap_tests {
    use super::*;

    #[test]
    fn test_bootstrap_lookups() {
        let bootstrap: Bootstrap = serde_json::from_str(BOOTSTRAP).unwrap();

        let haaland = bootstrap.element(PlayerId::new(351)).unwrap();
        assert_eq!(haaland.status, ElementStatus::Available);
        assert_eq!(haaland.price(), 14.5);
        assert_eq!(bootstrap.team(haaland.team).unwrap().short_name, "MCI");

        assert_eq!(bootstrap.next_event().unwrap().id, 18);
        assert!(bootstrap.current_event().is_none());
        assert!(bootstrap.element(PlayerId::new(1)).is_none());
    }

    #[test]
    fn test_unmodelled_fields_land_in_extra() {
        let bootstrap: Bootstrap = serde_json::from_str(BOOTSTRAP).unwrap();
        assert!(bootstrap.extra.contains_key("chips"));

        let haaland = bootstrap.element(PlayerId::new(351)).unwrap();
        assert_eq!(haaland.extra["expected_goals"], "13.72");
        assert!(!haaland.extra.contains_key("total_points"));
    }

    #[test]
    fn test_nullable_event_fields() {
        let bootstrap: Bootstrap = serde_json::from_str(BOOTSTRAP).unwrap();
        let gw18 = &bootstrap.events[1];
        assert!(gw18.highest_score.is_none());
        assert!(gw18.top_element_info.is_none());

        let gw17 = &bootstrap.events[0];
        assert_eq!(gw17.top_element_info.as_ref().unwrap().points, 19);
        assert_eq!(gw17.chip_plays[1].chip_name, ChipName::TripleCaptain);
    }
}

#[cfg(test)]
mod profile_tests {
    use super::*;

    fn halves() -> (Element, PlayerSummary) {
        let bootstrap: Bootstrap = serde_json::from_str(BOOTSTRAP).unwrap();
        let element = bootstrap.element(PlayerId::new(351)).unwrap().clone();
        let summary: PlayerSummary = serde_json::from_str(SUMMARY_351).unwrap();
        (element, summary)
    }

    #[test]
    fn test_join_serializes_flat() {
        let (element, summary) = halves();
        let profile = PlayerProfile::join(PlayerId::new(351), element, summary).unwrap();

        let value = serde_json::to_value(&profile).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("total_points"));
        assert!(object.contains_key("history"));
        assert!(object.contains_key("history_past"));
        assert!(object.contains_key("fixtures"));
        assert_eq!(object["expected_goals"], "13.72");
    }

    #[test]
    fn test_join_requires_matching_ids() {
        let (element, summary) = halves();
        assert!(PlayerProfile::join(PlayerId::new(182), element, summary).is_none());
    }

    #[test]
    fn test_into_parts() {
        let (element, summary) = halves();
        let profile = PlayerProfile::join(PlayerId::new(351), element.clone(), summary.clone()).unwrap();
        assert_eq!(profile.into_parts(), (element, summary));
    }
}
