use serde::{Deserialize, Serialize};

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full run configuration, resolved against the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconConfig {
    pub scan: ScanConfig,
    pub audit: MatchConfig,
    pub columns: ColumnMapping,
    pub rules: NormalizeRules,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            audit: MatchConfig::audit_defaults(),
            columns: ColumnMapping::default(),
            rules: NormalizeRules::default(),
        }
    }
}

/// On-disk shape: every section and every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    scan: MatchOverrides,
    #[serde(default)]
    audit: MatchOverrides,
    #[serde(default)]
    columns: ColumnMapping,
    #[serde(default)]
    rules: NormalizeRules,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchOverrides {
    first_name_cutoff: Option<f64>,
    last_name_cutoff: Option<f64>,
    top_n_anchor: Option<usize>,
    top_n_near: Option<usize>,
    window_radius: Option<usize>,
    split_last_name: Option<bool>,
}

impl MatchOverrides {
    fn apply(&self, base: MatchConfig) -> MatchConfig {
        MatchConfig {
            first_name_cutoff: self.first_name_cutoff.unwrap_or(base.first_name_cutoff),
            last_name_cutoff: self.last_name_cutoff.unwrap_or(base.last_name_cutoff),
            top_n_anchor: self.top_n_anchor.unwrap_or(base.top_n_anchor),
            top_n_near: self.top_n_near.unwrap_or(base.top_n_near),
            window_radius: self.window_radius.unwrap_or(base.window_radius),
        }
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Tuning surface for one workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchConfig {
    /// Minimum first-name ratio (0-100) for a first-name hit to count.
    pub first_name_cutoff: f64,
    /// Minimum last-name ratio (0-100) for a surname anchor or hit to count.
    pub last_name_cutoff: f64,
    /// How many anchor hits per query are opened as windows. Higher values
    /// look further down the list of weak anchors.
    pub top_n_anchor: usize,
    /// How many in-window candidates at or above the cutoff each anchor
    /// records. `1` keeps only the best complementary match per window.
    pub top_n_near: usize,
    /// Tokens on each side of the anchor searched for the other name part.
    pub window_radius: usize,
}

impl MatchConfig {
    pub fn scan_defaults() -> Self {
        Self {
            first_name_cutoff: 60.0,
            last_name_cutoff: 60.0,
            top_n_anchor: 5,
            top_n_near: 1,
            window_radius: 4,
        }
    }

    /// Looser cutoffs and a wider window: the audit tolerates more OCR noise.
    pub fn audit_defaults() -> Self {
        Self {
            first_name_cutoff: 35.0,
            last_name_cutoff: 35.0,
            top_n_anchor: 8,
            top_n_near: 5,
            window_radius: 8,
        }
    }

    fn validate(&self, section: &str) -> Result<(), ReconError> {
        for (name, value) in [
            ("first_name_cutoff", self.first_name_cutoff),
            ("last_name_cutoff", self.last_name_cutoff),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ReconError::ConfigValidation(format!(
                    "[{section}] {name} must be between 0 and 100, got {value}"
                )));
            }
        }
        if self.top_n_anchor == 0 {
            return Err(ReconError::ConfigValidation(format!(
                "[{section}] top_n_anchor must be at least 1"
            )));
        }
        if self.top_n_near == 0 {
            return Err(ReconError::ConfigValidation(format!(
                "[{section}] top_n_near must be at least 1"
            )));
        }
        Ok(())
    }
}

/// Scan workflow settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanConfig {
    #[serde(flatten)]
    pub matching: MatchConfig,
    /// Anchor on each surname part instead of the whole surname string.
    /// Off by default: the scan has always anchored on the full surname,
    /// unlike the audit's per-part search.
    pub split_last_name: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            matching: MatchConfig::scan_defaults(),
            split_last_name: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMapping {
    pub first_name: String,
    pub last_name: String,
    pub attended: String,
    pub match_score: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            first_name: "First Name".into(),
            last_name: "Last Name".into(),
            attended: "Attended".into(),
            match_score: "MatchScore".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization rules
// ---------------------------------------------------------------------------

/// Corpus-specific cleaning heuristics.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeRules {
    /// Regex fragments; each match and the rest of its line are dropped.
    pub course_code_markers: Vec<String>,
    /// Whole words removed case-insensitively.
    pub noise_words: Vec<String>,
}

impl Default for NormalizeRules {
    fn default() -> Self {
        Self {
            course_code_markers: vec!["CNIT".into()],
            noise_words: ["Am", "un", "JAN", "Date", "Z"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let raw: RawConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        if raw.audit.split_last_name.is_some() {
            return Err(ReconError::ConfigValidation(
                "[audit] split_last_name is only valid in [scan]; the audit always splits".into(),
            ));
        }
        let config = ReconConfig {
            scan: ScanConfig {
                matching: raw.scan.apply(MatchConfig::scan_defaults()),
                split_last_name: raw.scan.split_last_name.unwrap_or(false),
            },
            audit: raw.audit.apply(MatchConfig::audit_defaults()),
            columns: raw.columns,
            rules: raw.rules,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ReconError> {
        toml::to_string_pretty(self).map_err(|e| ReconError::ConfigParse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        self.scan.matching.validate("scan")?;
        self.audit.validate("audit")?;

        let cols = &self.columns;
        for (name, value) in [
            ("first_name", &cols.first_name),
            ("last_name", &cols.last_name),
            ("attended", &cols.attended),
            ("match_score", &cols.match_score),
        ] {
            if value.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "[columns] {name} must not be empty"
                )));
            }
        }
        if cols.first_name == cols.last_name {
            return Err(ReconError::ConfigValidation(
                "[columns] first_name and last_name must differ".into(),
            ));
        }

        if self.rules.noise_words.iter().any(|w| w.trim().is_empty()) {
            return Err(ReconError::ConfigValidation(
                "[rules] noise_words must not contain empty entries".into(),
            ));
        }
        if self.rules.course_code_markers.iter().any(|m| m.is_empty()) {
            return Err(ReconError::ConfigValidation(
                "[rules] course_code_markers must not contain empty patterns".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
