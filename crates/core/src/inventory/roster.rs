//! Candidate roster loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::InventoryError;

/// The candidate roster: one entry per transcript to download.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub candidates: Vec<CandidateEntry>,
}

/// One roster entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CandidateEntry {
    /// Party code (e.g., "PLN")
    pub party: String,
    /// Candidate full name, as published
    pub name: String,
    /// Opaque external video id; assumed valid, never validated
    pub video_id: String,
}

/// Load the roster from a TOML data file.
///
/// A missing or malformed roster is fatal for the transcripts pipeline:
/// there is nothing to enumerate without it.
pub fn load_roster(path: &Path) -> Result<Roster, InventoryError> {
    if !path.exists() {
        return Err(InventoryError::RosterNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| InventoryError::RosterReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let roster: Roster = toml::from_str(&raw).map_err(|e| InventoryError::RosterParseFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        "Loaded roster with {} candidates from {}",
        roster.candidates.len(),
        path.display()
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_roster_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[candidates]]
party = "PLN"
name = "ALVARO ROBERTO RAMOS CHAVES"
video_id = "yxStLBeuNEI"

[[candidates]]
party = "FA"
name = "ANDRES ARIEL ROBLES BARRANTES"
video_id = "8DQt5h-f9NI"
"#
        )
        .unwrap();

        let roster = load_roster(temp_file.path()).unwrap();
        assert_eq!(roster.candidates.len(), 2);
        assert_eq!(roster.candidates[0].party, "PLN");
        assert_eq!(roster.candidates[1].video_id, "8DQt5h-f9NI");
    }

    #[test]
    fn test_load_roster_preserves_order() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[candidates]]
party = "B"
name = "SECOND FIRST"
video_id = "bbb"

[[candidates]]
party = "A"
name = "FIRST SECOND"
video_id = "aaa"
"#
        )
        .unwrap();

        let roster = load_roster(temp_file.path()).unwrap();
        assert_eq!(roster.candidates[0].party, "B");
        assert_eq!(roster.candidates[1].party, "A");
    }

    #[test]
    fn test_load_roster_missing_file() {
        let result = load_roster(Path::new("/nonexistent/candidates.toml"));
        assert!(matches!(
            result,
            Err(InventoryError::RosterNotFound { .. })
        ));
    }

    #[test]
    fn test_load_roster_malformed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[[candidates]]\nparty = 42").unwrap();

        let result = load_roster(temp_file.path());
        assert!(matches!(
            result,
            Err(InventoryError::RosterParseFailed { .. })
        ));
    }
}
