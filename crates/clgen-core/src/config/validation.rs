//! Configuration validation

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

use super::types::ChangelogConfig;

/// Validate configuration
///
/// Every pattern field must compile; an invalid expression is a fatal
/// configuration error rather than a silent non-match at run time.
pub fn validate_config(config: &ChangelogConfig) -> Result<()> {
    debug!("validating configuration");
    validate_patterns(config)?;
    validate_processing(config)?;
    validate_headings(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_patterns(config: &ChangelogConfig) -> Result<()> {
    check_list("pre_captures", &config.pre_captures)?;
    check_pattern("pre_captures_after_trim", &config.pre_captures_after_trim)?;
    check_list("type_captures", &config.type_captures)?;
    check_pattern("type_captures_after_trim", &config.type_captures_after_trim)?;
    check_list(
        "breaking_change_line_captures",
        &config.breaking_change_line_captures,
    )?;
    check_pattern(
        "breaking_change_line_captures_after_trim",
        &config.breaking_change_line_captures_after_trim,
    )?;
    check_pattern("title_left_trim", &config.title_left_trim)?;
    check_pattern("title_right_trim", &config.title_right_trim)?;
    Ok(())
}

fn validate_processing(config: &ChangelogConfig) -> Result<()> {
    if let Some(pre) = &config.preprocessing {
        check_pattern("preprocessing.search", &pre.search)?;
    }
    if let Some(post) = &config.postprocessing {
        check_pattern("postprocessing.search", &post.search)?;
    }
    Ok(())
}

fn validate_headings(config: &ChangelogConfig) -> Result<()> {
    if config.others_heading.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "others_heading".to_string(),
            message: "heading cannot be empty".to_string(),
        }
        .into());
    }

    if config.breaking_changes_heading.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "breaking_changes_heading".to_string(),
            message: "heading cannot be empty".to_string(),
        }
        .into());
    }

    for (token, key) in &config.supported_types {
        if !config.headings.contains_key(key) && !config.headings.contains_key(token) {
            warn!(
                token = %token,
                heading_key = %key,
                "supported type has no configured heading, its commits will not be rendered"
            );
        }
    }

    Ok(())
}

fn check_list(field: &str, patterns: &[String]) -> Result<()> {
    for (index, pattern) in patterns.iter().enumerate() {
        check_pattern(&format!("{}[{}]", field, index), pattern)?;
    }
    Ok(())
}

fn check_pattern(field: &str, pattern: &str) -> Result<()> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        field: field.to_string(),
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Processing;
    use crate::error::ClgenError;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ChangelogConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_type_capture_rejected() {
        let config = ChangelogConfig {
            type_captures: vec![r"(\w+):".to_string(), r"(\w+".to_string()],
            ..Default::default()
        };

        let err = validate_config(&config).unwrap_err();
        match err {
            ClgenError::Config(ConfigError::InvalidPattern { field, pattern, .. }) => {
                assert_eq!(field, "type_captures[1]");
                assert_eq!(pattern, r"(\w+");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_trim_rejected() {
        let config = ChangelogConfig {
            title_right_trim: "[".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_postprocessing_rejected() {
        let config = ChangelogConfig {
            postprocessing: Some(Processing::new("(", "")),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_others_heading_rejected() {
        let config = ChangelogConfig {
            others_heading: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
