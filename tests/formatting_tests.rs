use briefbot::core::models::{CandidateBatch, CandidateRecord};
use briefbot::formatting::{compose_summary_message, format_candidates, summary_header};
use chrono::NaiveDate;
use serde_json::{Value, json};

/// Tests for the candidate line template and the posted message header.

fn record(fields: Value) -> CandidateRecord {
    serde_json::from_value(json!({ "id": "rec", "fields": fields })).unwrap()
}

#[test]
fn test_empty_batch_formats_to_empty_string() {
    let batch = CandidateBatch::from_records(vec![]);
    assert_eq!(format_candidates(&batch), "");
}

#[test]
fn test_one_line_per_record() {
    let batch = CandidateBatch::from_records(vec![
        record(json!({
            "Name": "Ada Lovelace",
            "Job Applied For": "Engineer",
            "Status": "New",
            "Interview Date": "2024-05-01",
            "Fit Score": 9
        })),
        record(json!({
            "Name": "Grace Hopper",
            "Job Applied For": "Architect",
            "Status": "Interview Scheduled",
            "Interview Date": "2024-05-03",
            "Fit Score": 8.5
        })),
        record(json!({ "Name": "Alan Turing" })),
    ]);

    let formatted = format_candidates(&batch);
    let lines: Vec<&str> = formatted.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(!formatted.ends_with('\n'));
    assert_eq!(
        lines[0],
        "- Ada Lovelace | Engineer | Status: New | Interview: 2024-05-01 | Fit Score: 9"
    );
    assert_eq!(
        lines[1],
        "- Grace Hopper | Architect | Status: Interview Scheduled | Interview: 2024-05-03 | Fit Score: 8.5"
    );
}

#[test]
fn test_missing_fields_use_sentinels() {
    let batch = CandidateBatch::from_records(vec![record(json!({}))]);

    assert_eq!(
        format_candidates(&batch),
        "- Unnamed | Unknown Role | Status: No Status | Interview: N/A | Fit Score: N/A"
    );
}

#[test]
fn test_missing_fit_score() {
    let batch = CandidateBatch::from_records(vec![record(json!({
        "Name": "Ada Lovelace",
        "Job Applied For": "Engineer",
        "Status": "New"
    }))]);

    let formatted = format_candidates(&batch);
    assert!(formatted.contains("Fit Score: N/A"), "Actual: {formatted}");
}

#[test]
fn test_header_contains_month_and_day() {
    let date = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
    let header = summary_header(date);

    assert!(header.contains("October 16"));
    assert!(compose_summary_message(date, "body").starts_with(&header));
}
