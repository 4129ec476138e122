// mod.rs - Series export module

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono;
use serde::Serialize;

use crate::data::AlphaSeries;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Write an alpha diversity series in TSV format
pub fn write_tsv(
    file_path: &str,
    series: &AlphaSeries,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# alphadiv v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;

    // Write header
    writeln!(writer, "Sample\t{}", series.name()).map_err(|e| format!("Write error: {}", e))?;

    // Write one row per sample, index order preserved
    for (sample_id, value) in series.iter() {
        writeln!(writer, "{}\t{}", sample_id, value).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Alpha diversity series written to: {}", file_path);
    Ok(())
}

/// Write an alpha diversity series in CSV format
pub fn write_csv(
    file_path: &str,
    series: &AlphaSeries,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# alphadiv v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;

    // Write header
    writeln!(writer, "Sample,{}", series.name()).map_err(|e| format!("Write error: {}", e))?;

    // Write one row per sample, index order preserved
    for (sample_id, value) in series.iter() {
        writeln!(writer, "{},{}", sample_id, value).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Alpha diversity series written to: {}", file_path);
    Ok(())
}

/// JSON export document wrapping the series with provenance
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    command: &'a str,
    generated: String,
    version: &'static str,
    series: &'a AlphaSeries,
}

/// Write an alpha diversity series as a JSON document
pub fn write_json(
    file_path: &str,
    series: &AlphaSeries,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let export = JsonExport {
        command: command_line,
        generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        version: env!("CARGO_PKG_VERSION"),
        series,
    };
    let content = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("Failed to serialize series: {}", e))?;

    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;

    println!("✅ Alpha diversity series written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write an alpha diversity series in the specified format
pub fn write_series(
    file_path: &str,
    format: &str,
    series: &AlphaSeries,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, series, command_line),
        "csv" => write_csv(file_path, series, command_line),
        "json" => write_json(file_path, series, command_line),
        _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format() {
        let series = AlphaSeries::new("shannon", vec!["S1".to_string()], vec![1.0]).unwrap();
        let err = write_series("out.txt", "xml", &series, "test").unwrap_err();
        assert!(err.contains("Unsupported output format: xml"));
    }

    #[test]
    fn test_tsv_round_trip_through_disk() {
        let series = AlphaSeries::new(
            "observed_otus",
            vec!["S1".to_string(), "S2".to_string()],
            vec![3.0, 1.0],
        )
        .unwrap();

        let path = std::env::temp_dir().join("alphadiv_test_series.tsv");
        let path_str = path.to_str().unwrap();
        write_series(path_str, "tsv", &series, "unit test").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Sample\tobserved_otus"));
        assert!(content.contains("S1\t3"));
        assert!(content.contains("S2\t1"));
        std::fs::remove_file(&path).ok();
    }
}
