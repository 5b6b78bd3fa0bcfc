use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One expected attendee, as read from the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRecord {
    /// Stable row index; join key between the scan and the audit.
    pub index: usize,
    pub first_name: String,
    pub last_name: String,
    pub attended: bool,
    pub match_score: f64,
}

impl RosterRecord {
    pub fn new(index: usize, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            index,
            first_name: first_name.into(),
            last_name: last_name.into(),
            attended: false,
            match_score: 0.0,
        }
    }

    pub fn with_attended(mut self, attended: bool) -> Self {
        self.attended = attended;
        self
    }
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// Which name part located the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "LAST->FIRST")]
    LastToFirst,
    #[serde(rename = "FIRST->LAST")]
    FirstToLast,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastToFirst => write!(f, "LAST->FIRST"),
            Self::FirstToLast => write!(f, "FIRST->LAST"),
        }
    }
}

/// A roster record matched against one window of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub roster_index: usize,
    pub direction: Direction,
    pub first_token: Option<String>,
    pub last_token: Option<String>,
    pub first_score: f64,
    pub last_score: f64,
    /// Always `first_score + last_score`.
    pub combined: f64,
    /// Position of the anchor token in the document.
    pub anchor_position: usize,
    /// Window tokens joined by spaces.
    pub context: String,
}

impl CandidateMatch {
    /// The matched tokens as a display name, e.g. `"john smith"`.
    pub fn matched_name(&self) -> String {
        let first = self.first_token.as_deref().unwrap_or("");
        let last = self.last_token.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// Scan output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanSummary {
    /// Records in the roster.
    pub records: usize,
    /// Records marked attended.
    pub attended: usize,
    /// Records never attempted because a name part was empty.
    pub skipped: usize,
    /// Tokens in the document.
    pub tokens: usize,
}

// ---------------------------------------------------------------------------
// Audit output
// ---------------------------------------------------------------------------

/// Best candidate for one record the scan left unattended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub roster_index: usize,
    pub roster_first: String,
    pub roster_last: String,
    pub best: CandidateMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditSummary {
    /// Records in the roster.
    pub records: usize,
    /// Unattended records examined.
    pub examined: usize,
    /// Examined records with a qualifying candidate.
    pub matched: usize,
    /// Examined records with none.
    pub unmatched: usize,
    /// Candidates generated before ranking.
    pub candidates: usize,
    pub tokens: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub summary: AuditSummary,
    /// Sorted by `roster_index` ascending.
    pub results: Vec<AuditResult>,
}
