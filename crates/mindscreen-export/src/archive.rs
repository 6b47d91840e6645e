use std::path::{Path, PathBuf};

use mindscreen_core::ScreeningReport;

use crate::error::ExportError;

const FILE_PREFIX: &str = "mental_health_report";

/// `mental_health_report_<YYYYMMDD_HHMMSS>.json`, stamped in UTC from the
/// report's generation time.
pub fn report_file_name(report: &ScreeningReport) -> String {
    format!(
        "{FILE_PREFIX}_{}.json",
        report.generated_at.strftime("%Y%m%d_%H%M%S")
    )
}

/// Write `report` as pretty JSON into `dir`, creating the directory if needed.
///
/// An existing report is never replaced. When the stamped name is taken the
/// session id is appended, then a counter until a free name is found.
pub fn save_report(dir: &Path, report: &ScreeningReport) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let json = serde_json::to_string_pretty(report)?;

    // Write to a temp file, then link it into place so a crash never leaves
    // half a report and a taken name fails instead of being overwritten.
    let tmp_path = dir.join(format!(".{}.tmp", report.session_id.simple()));
    std::fs::write(&tmp_path, json.as_bytes()).map_err(|source| ExportError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    let result = claim_name(dir, report, &tmp_path);
    let _ = std::fs::remove_file(&tmp_path);
    let path = result?;

    tracing::info!(
        path = %path.display(),
        session = %report.session_id,
        results = report.results.len(),
        "report saved"
    );
    Ok(path)
}

fn claim_name(
    dir: &Path,
    report: &ScreeningReport,
    tmp_path: &Path,
) -> Result<PathBuf, ExportError> {
    let name = report_file_name(report);
    let stem = name.trim_end_matches(".json");
    let session = report.session_id.simple();

    let mut attempt = 0u32;
    loop {
        let path = match attempt {
            0 => dir.join(&name),
            1 => dir.join(format!("{stem}_{session}.json")),
            n => dir.join(format!("{stem}_{session}_{n}.json")),
        };
        match std::fs::hard_link(tmp_path, &path) {
            Ok(()) => return Ok(path),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "report name taken");
                attempt += 1;
            }
            Err(source) => return Err(ExportError::Io { path, source }),
        }
    }
}

pub fn load_report(path: &Path) -> Result<ScreeningReport, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
