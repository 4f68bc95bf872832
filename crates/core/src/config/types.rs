use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub transcripts: TranscriptsConfig,
}

/// Document extraction pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    /// Directory scanned (non-recursively) for `*.pdf` files
    #[serde(default = "default_documents_input_dir")]
    pub input_dir: PathBuf,
    /// Secondary directory tried when `input_dir` does not exist
    #[serde(default)]
    pub fallback_dir: Option<PathBuf>,
    /// Directory the extracted `.txt` files are written to
    #[serde(default = "default_documents_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_documents_input_dir(),
            fallback_dir: None,
            output_dir: default_documents_output_dir(),
        }
    }
}

fn default_documents_input_dir() -> PathBuf {
    PathBuf::from("planes")
}

fn default_documents_output_dir() -> PathBuf {
    PathBuf::from("planes-resumen")
}

/// Transcript download pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptsConfig {
    /// TOML file listing the candidates to fetch transcripts for
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,
    /// Directory the transcript `.txt` files are written to
    #[serde(default = "default_transcripts_output_dir")]
    pub output_dir: PathBuf,
    /// Transcript language variants, tried in order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for TranscriptsConfig {
    fn default() -> Self {
        Self {
            roster_path: default_roster_path(),
            output_dir: default_transcripts_output_dir(),
            languages: default_languages(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("candidates.toml")
}

fn default_transcripts_output_dir() -> PathBuf {
    PathBuf::from("transcripciones")
}

fn default_languages() -> Vec<String> {
    vec![
        "es".to_string(),
        "es-419".to_string(),
        "es-ES".to_string(),
    ]
}

fn default_timeout() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.documents.input_dir.to_str().unwrap(), "planes");
        assert_eq!(
            config.documents.output_dir.to_str().unwrap(),
            "planes-resumen"
        );
        assert!(config.documents.fallback_dir.is_none());
        assert_eq!(
            config.transcripts.roster_path.to_str().unwrap(),
            "candidates.toml"
        );
        assert_eq!(config.transcripts.languages, vec!["es", "es-419", "es-ES"]);
        assert_eq!(config.transcripts.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_documents_section() {
        let toml = r#"
[documents]
input_dir = "/data/planes"
fallback_dir = "planes"
output_dir = "/data/planes-resumen"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.documents.input_dir.to_str().unwrap(), "/data/planes");
        assert_eq!(
            config.documents.fallback_dir.as_ref().unwrap().to_str().unwrap(),
            "planes"
        );
        assert_eq!(
            config.documents.output_dir.to_str().unwrap(),
            "/data/planes-resumen"
        );
    }

    #[test]
    fn test_deserialize_transcripts_section() {
        let toml = r#"
[transcripts]
roster_path = "data/roster.toml"
output_dir = "docs/transcripciones"
languages = ["es-ES", "es"]
timeout_secs = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.transcripts.roster_path.to_str().unwrap(),
            "data/roster.toml"
        );
        assert_eq!(config.transcripts.languages, vec!["es-ES", "es"]);
        assert_eq!(config.transcripts.timeout_secs, 10);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml = r#"
[transcripts]
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.transcripts.timeout_secs, 5);
        assert_eq!(config.transcripts.languages, vec!["es", "es-419", "es-ES"]);
        assert_eq!(config.documents.input_dir.to_str().unwrap(), "planes");
    }
}
