//! Export the filtered catalog to CSV or JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream scripts;
//! absent values are left as empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ExoplanetRecord;
use crate::error::AppError;

/// Pick the export format from the file extension (`.csv`, otherwise JSON).
pub fn export_records(path: &Path, records: &[&ExoplanetRecord]) -> Result<(), AppError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        write_records_csv(path, records)
    } else {
        crate::io::records::write_records_json(path, records)
    }
}

/// Write one CSV row per record.
pub fn write_records_csv(path: &Path, records: &[&ExoplanetRecord]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "id,name,discovery_method,discovery_year,mission,host_star,radius,mass,distance,orbital_period,temperature,detection_confidence"
    )
    .map_err(|e| AppError::runtime(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&r.id),
            csv_field(&r.name),
            csv_field(r.discovery_method.label()),
            r.discovery_year,
            csv_field(r.mission.as_deref().unwrap_or("")),
            csv_field(r.host_star.as_deref().unwrap_or("")),
            opt_num(r.radius),
            opt_num(r.mass),
            opt_num(r.distance),
            opt_num(r.orbital_period),
            opt_num(r.temperature),
            opt_num(r.detection_confidence),
        )
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

fn opt_num(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
