use std::fmt;

/// Minimum symptoms answered yes.
pub const MIN_YES_COUNT: usize = 3;
/// Minimum weighted severity score.
pub const MIN_SEVERITY: u32 = 8;
/// Minimum confidence percentage.
pub const MIN_CONFIDENCE: f64 = 40.0;

/// One of the three thresholds a condition must clear to be diagnosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    YesCount,
    Severity,
    Confidence,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::YesCount => write!(f, "yes_count >= {MIN_YES_COUNT}"),
            Constraint::Severity => write!(f, "severity >= {MIN_SEVERITY}"),
            Constraint::Confidence => write!(f, "confidence >= {MIN_CONFIDENCE}"),
        }
    }
}

/// The diagnostic gate: all three thresholds must hold at once. Bounds are
/// inclusive.
pub fn meets_constraints(yes_count: usize, severity: u32, confidence: f64) -> bool {
    unmet_constraints(yes_count, severity, confidence).is_empty()
}

/// Thresholds that `yes_count`, `severity` and `confidence` fail to clear.
pub fn unmet_constraints(yes_count: usize, severity: u32, confidence: f64) -> Vec<Constraint> {
    let mut unmet = Vec::new();
    if yes_count < MIN_YES_COUNT {
        unmet.push(Constraint::YesCount);
    }
    if severity < MIN_SEVERITY {
        unmet.push(Constraint::Severity);
    }
    if confidence.is_nan() || confidence < MIN_CONFIDENCE {
        unmet.push(Constraint::Confidence);
    }
    unmet
}
