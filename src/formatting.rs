//! Plain-text rendering of candidate batches and of the posted Slack message.

use chrono::NaiveDate;

use crate::core::models::{CandidateBatch, CandidateRecord};

/// Render one candidate as a single bullet line.
#[must_use]
pub fn format_candidate_line(record: &CandidateRecord) -> String {
    format!(
        "- {} | {} | Status: {} | Interview: {} | Fit Score: {}",
        record.name(),
        record.job_applied_for(),
        record.status(),
        record.interview_date(),
        record.fit_score()
    )
}

/// One line per record, joined with `\n`. An empty batch renders as `""`.
#[must_use]
pub fn format_candidates(batch: &CandidateBatch) -> String {
    batch
        .iter()
        .map(format_candidate_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bold header carrying the month name and zero-padded day, e.g. `October 06`.
#[must_use]
pub fn summary_header(date: NaiveDate) -> String {
    format!("📋 *BriefBot Summary – {}*", date.format("%B %d"))
}

/// The exact text posted to Slack: header, blank line, then the model output untouched.
#[must_use]
pub fn compose_summary_message(date: NaiveDate, summary: &str) -> String {
    format!("{}\n\n{}", summary_header(date), summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_pads_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(summary_header(date), "📋 *BriefBot Summary – March 07*");
    }

    #[test]
    fn test_compose_keeps_summary_verbatim() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let summary = "  *New Applicants*\n- Ada\n";
        let message = compose_summary_message(date, summary);
        assert!(message.ends_with(summary));
        assert!(message.starts_with("📋 *BriefBot Summary – December 25*\n\n"));
    }
}
