use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Transcript language preference list is not empty
/// - Request timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.transcripts.languages.is_empty() {
        return Err(ConfigError::ValidationError(
            "transcripts.languages cannot be empty".to_string(),
        ));
    }

    if config.transcripts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "transcripts.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
