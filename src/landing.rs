// src/landing.rs — Landing surface: welcome copy and the disclaimer flag

use crate::infra::prefs::Prefs;

pub const PRODUCT_NAME: &str = "Haqooq-e-Niswan";

pub const WELCOME_BLURB: &str = "I'm here to help you understand your rights as a woman in Pakistan. \
Ask me anything about legal matters, and I'll provide accurate, source-backed answers.";

pub const TOPICS: [&str; 3] = ["Property Rights", "Marriage Laws", "Protection Acts"];

pub const DISCLAIMER: &str = "This assistant provides general legal information drawn from Pakistani \
legislation and court judgments. It is not legal advice. For advice on your situation, consult a \
qualified lawyer or a legal aid organization.";

/// Whether the disclaimer still needs to be shown. Read once at startup.
pub fn disclaimer_pending(prefs: &Prefs) -> bool {
    !prefs.disclaimer_seen()
}

/// Record that the user has dismissed the disclaimer. Failure to persist is
/// logged; the banner is still hidden for this run.
pub fn dismiss_disclaimer(prefs: &Prefs) {
    if let Err(e) = prefs.mark_disclaimer_seen() {
        tracing::warn!("Could not persist disclaimer flag to {}: {}", prefs.path().display(), e);
    }
}

/// Example question by 1-based index, as typed on the number row.
pub fn example_question(examples: &[String], digit: char) -> Option<&str> {
    let n = digit.to_digit(10)? as usize;
    if n == 0 {
        return None;
    }
    examples.get(n - 1).map(String::as_str)
}
