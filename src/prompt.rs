/// Persona sent as the system message on every summary request.
pub const SYSTEM_PROMPT: &str = "You are BriefBot, a helpful recruitment assistant.";

/// Upper bound on the completion length.
pub const SUMMARY_MAX_TOKENS: i64 = 500;

/// Kept low so the categories come back in a stable shape.
pub const SUMMARY_TEMPERATURE: f64 = 0.1;

/// The four buckets the model is asked to sort candidates into, in output order.
pub const SUMMARY_CATEGORIES: [&str; 4] = [
    "New Applicants (just mention the top 5 names)",
    "Missed Interviews (compare with today's date to determine if missed)",
    "Follow-ups Needed",
    "Top Fit Candidates",
];

/// Build the user message wrapping the formatted candidate lines.
///
/// Whether an interview was missed is left to the model; no date is computed here.
#[must_use]
pub fn build_summary_prompt(candidate_text: &str) -> String {
    let categories = SUMMARY_CATEGORIES
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{SYSTEM_PROMPT}\n\n\
         Summarize the following candidate activity. Categorize them into:\n\
         {categories}\n\n\
         Here is the data:\n\
         {candidate_text}\n"
    )
}
