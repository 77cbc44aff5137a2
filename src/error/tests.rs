//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // relative URL fails in the request builder, before any network access
        let client = reqwest::Client::new();
        let result = client.get("not a url").send().await;
        let reqwest_error = result.unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::UpstreamUnavailable(_) => (),
            _ => panic!("Expected UpstreamUnavailable error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidLeagueId(_) => (),
            _ => panic!("Expected InvalidLeagueId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FPL_LEAGUE_ID"));
    }

    #[test]
    fn test_missing_required_sample_error() {
        let error = FplError::MissingRequiredSample {
            manager: ManagerId::new(42),
            what: "history entry for gameweek 3".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Manager 42 is missing a required sample: history entry for gameweek 3"
        );
    }

    #[test]
    fn test_unknown_player_error() {
        let error = FplError::UnknownPlayer {
            player: PlayerId::new(77),
        };
        assert_eq!(error.to_string(), "Player 77 is not in the player directory");
    }

    #[test]
    fn test_unknown_position_code_error() {
        let error = FplError::UnknownPositionCode { code: 5 };
        assert_eq!(error.to_string(), "Unknown position code: 5");
    }

    #[test]
    fn test_misaligned_history_error() {
        let error = FplError::MisalignedHistory {
            player: PlayerId::new(300),
            gameweek: Gameweek::new(4),
            len: 2,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("player 300"));
        assert!(error_string.contains("gameweek 4"));
        assert!(error_string.contains("2 records"));
    }

    #[test]
    fn test_invalid_window_error() {
        let error = FplError::InvalidWindow { start: 5, end: 2 };
        assert_eq!(error.to_string(), "Invalid gameweek window: 5..=2");
    }

    #[test]
    fn test_reports_failed_lists_names() {
        let error = FplError::ReportsFailed {
            failed: vec!["least_and_most_points".to_string(), "other".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Reports failed: least_and_most_points, other"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = FplError::UnknownPositionCode { code: 9 };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("UnknownPositionCode"));
    }
}
