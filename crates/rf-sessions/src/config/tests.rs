use super::*;
use crate::scoring::{DISLIKE_WEIGHT, LIKE_WEIGHT, VIEW_WEIGHT};

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[scoring]
like_weight = 2.0
dislike_weight = 1.5
view_weight = 0.01

[filter]
since = "2023-03-06"
"#;

    let config = AnalysisConfig::from_toml_str(toml_str).unwrap();

    assert_eq!(config.scoring.like_weight, 2.0);
    assert_eq!(config.scoring.dislike_weight, 1.5);
    assert_eq!(config.scoring.view_weight, 0.01);
    assert_eq!(
        config.filter.since,
        Some(NaiveDate::from_ymd_opt(2023, 3, 6).unwrap())
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AnalysisConfig::from_toml_str("").unwrap();

    assert_eq!(config.scoring.like_weight, LIKE_WEIGHT);
    assert_eq!(config.scoring.dislike_weight, DISLIKE_WEIGHT);
    assert_eq!(config.scoring.view_weight, VIEW_WEIGHT);
    assert!(config.filter.since.is_none());
}

#[test]
fn test_partial_scoring_section() {
    let toml_str = r#"
[scoring]
dislike_weight = 0.5
"#;

    let config = AnalysisConfig::from_toml_str(toml_str).unwrap();

    assert_eq!(config.scoring.like_weight, LIKE_WEIGHT);
    assert_eq!(config.scoring.dislike_weight, 0.5);
    assert_eq!(config.scoring.view_weight, VIEW_WEIGHT);
}

#[test]
fn test_zero_weight_is_rejected() {
    let toml_str = r#"
[scoring]
view_weight = 0.0
"#;

    let err = AnalysisConfig::from_toml_str(toml_str).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidWeight {
            name: "view_weight",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "view_weight must be a finite positive number, got 0"
    );
}

#[test]
fn test_negative_weight_is_rejected() {
    let config = AnalysisConfig {
        scoring: ScoringWeights {
            like_weight: -1.0,
            ..ScoringWeights::default()
        },
        ..AnalysisConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeight {
            name: "like_weight",
            ..
        })
    ));
}

#[test]
fn test_invalid_date_is_parse_error() {
    let toml_str = r#"
[filter]
since = "last week"
"#;

    let err = AnalysisConfig::from_toml_str(toml_str).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AnalysisConfig::from_file(Path::new("/nonexistent/rf-analysis.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
