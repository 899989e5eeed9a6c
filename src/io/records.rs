//! Read/write record JSON files.
//!
//! The file format is exactly what the backend serves from `/exoplanets`:
//! a JSON array of records. That makes a saved export a valid `--source file`
//! input.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::ExoplanetRecord;
use crate::error::AppError;

/// Read a JSON array of records.
pub fn read_records_json(path: &Path) -> Result<Vec<ExoplanetRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open records JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::usage(format!("Invalid records JSON '{}': {e}", path.display())))
}

/// Write records as a pretty-printed JSON array.
pub fn write_records_json(path: &Path, records: &[&ExoplanetRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create records JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, records)
        .map_err(|e| AppError::runtime(format!("Failed to write records JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_catalog;

    #[test]
    fn written_records_read_back() {
        let records = mock_catalog();
        let refs: Vec<&ExoplanetRecord> = records.iter().take(3).collect();

        let path = std::env::temp_dir().join(format!("exo-atlas-records-{}.json", std::process::id()));
        write_records_json(&path, &refs).unwrap();
        let back = read_records_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.len(), 3);
        assert_eq!(back[1], records[1]);
        assert_eq!(back[1].mass, None, "absent fields stay absent");
    }

    #[test]
    fn invalid_json_is_a_usage_error() {
        let path = std::env::temp_dir().join(format!("exo-atlas-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        let err = read_records_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.message().starts_with("Invalid records JSON"));
    }
}
