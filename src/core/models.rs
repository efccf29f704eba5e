use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Airtable never returns more than this many rows in one page.
pub const MAX_BATCH_SIZE: usize = 100;

pub const NAME_FIELD: &str = "Name";
pub const JOB_FIELD: &str = "Job Applied For";
pub const STATUS_FIELD: &str = "Status";
pub const INTERVIEW_DATE_FIELD: &str = "Interview Date";
pub const FIT_SCORE_FIELD: &str = "Fit Score";

pub const UNNAMED: &str = "Unnamed";
pub const UNKNOWN_ROLE: &str = "Unknown Role";
pub const NO_STATUS: &str = "No Status";
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the candidate table. Owned by Airtable; read-only here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl CandidateRecord {
    /// Text of `name`, or `default` when the field is absent or `null`.
    #[must_use]
    pub fn field_or<'a>(&'a self, name: &str, default: &'a str) -> Cow<'a, str> {
        self.fields
            .get(name)
            .and_then(render_value)
            .unwrap_or(Cow::Borrowed(default))
    }

    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        self.field_or(NAME_FIELD, UNNAMED)
    }

    #[must_use]
    pub fn job_applied_for(&self) -> Cow<'_, str> {
        self.field_or(JOB_FIELD, UNKNOWN_ROLE)
    }

    #[must_use]
    pub fn status(&self) -> Cow<'_, str> {
        self.field_or(STATUS_FIELD, NO_STATUS)
    }

    #[must_use]
    pub fn interview_date(&self) -> Cow<'_, str> {
        self.field_or(INTERVIEW_DATE_FIELD, NOT_AVAILABLE)
    }

    #[must_use]
    pub fn fit_score(&self) -> Cow<'_, str> {
        self.field_or(FIT_SCORE_FIELD, NOT_AVAILABLE)
    }
}

fn render_value(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Array(items) => Some(Cow::Owned(
            items
                .iter()
                .filter_map(render_value)
                .collect::<Vec<_>>()
                .join(", "),
        )),
        Value::Object(_) => Some(Cow::Owned(value.to_string())),
    }
}

/// Body of an Airtable "list records" response.
#[derive(Debug, Default, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<CandidateRecord>,
    /// Cursor for the next page. Only the first page is ever read.
    #[serde(default)]
    pub offset: Option<String>,
}

/// The rows pulled by a single run, capped at [`MAX_BATCH_SIZE`].
#[derive(Debug, Clone, Default)]
pub struct CandidateBatch {
    records: Vec<CandidateRecord>,
}

impl CandidateBatch {
    #[must_use]
    pub fn from_records(mut records: Vec<CandidateRecord>) -> Self {
        records.truncate(MAX_BATCH_SIZE);
        Self { records }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.iter()
    }
}

impl From<RecordPage> for CandidateBatch {
    fn from(page: RecordPage) -> Self {
        Self::from_records(page.records)
    }
}
