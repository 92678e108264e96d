//! Pattern library for the heuristic scorer.
//!
//! Every text heuristic the scorer relies on lives here as a named rule, so the
//! weighting code in `sections`, `format` and `relevance` never touches a regex
//! directly and each rule can be tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

/// A text signal looked for in summaries and achievement lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Percentages, "N times", "Nx", dollar amounts, "N people".
    QuantifiedImpact,
    /// Outcome verbs such as "increased" or "launched".
    ImpactVerb,
    /// "N years" / "N+ years".
    YearsOfExperience,
    /// "experience", "skills" or "expertise" in a summary.
    ExpertiseKeyword,
}

struct SignalRule {
    signal: Signal,
    pattern: Regex,
}

static SIGNAL_RULES: Lazy<Vec<SignalRule>> = Lazy::new(|| {
    vec![
        signal_rule(
            Signal::QuantifiedImpact,
            r"(?i)\d+(?:\.\d+)?\s*%|\b\d+\s*times\b|\b\d+(?:\.\d+)?x\b|\$\s*\d|\b\d+\s*people\b",
        ),
        signal_rule(
            Signal::ImpactVerb,
            r"(?i)increased|improved|reduced|saved|delivered|launched|created|developed|implemented",
        ),
        signal_rule(Signal::YearsOfExperience, r"(?i)\d+\+?\s*years?"),
        signal_rule(Signal::ExpertiseKeyword, r"(?i)experience|skills|expertise"),
    ]
});

fn signal_rule(signal: Signal, pattern: &str) -> SignalRule {
    SignalRule {
        signal,
        pattern: Regex::new(pattern).expect("signal pattern must compile"),
    }
}

impl Signal {
    fn rule(self) -> &'static SignalRule {
        SIGNAL_RULES
            .iter()
            .find(|r| r.signal == self)
            .expect("every signal has a rule")
    }

    pub fn matches(self, text: &str) -> bool {
        self.rule().pattern.is_match(text)
    }
}

/// Date-format class used by the format consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateFormat {
    /// `2021`
    Year,
    /// `March 2021`, `Mar 2021`, `Sept. 2021`
    MonthYear,
    /// `03/15/2021`
    NumericDate,
    Other,
}

// Checked in order; the first match wins, anything unmatched is `Other`.
static DATE_FORMAT_RULES: Lazy<Vec<(DateFormat, Regex)>> = Lazy::new(|| {
    vec![
        (DateFormat::Year, date_rule(r"^\d{4}$")),
        (
            DateFormat::MonthYear,
            date_rule(
                r"(?i)^(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}$",
            ),
        ),
        (DateFormat::NumericDate, date_rule(r"^\d{1,2}/\d{1,2}/\d{4}$")),
    ]
});

fn date_rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("date pattern must compile")
}

impl DateFormat {
    pub fn classify(date: &str) -> DateFormat {
        let date = date.trim();
        DATE_FORMAT_RULES
            .iter()
            .find(|(_, pattern)| pattern.is_match(date))
            .map(|(format, _)| *format)
            .unwrap_or(DateFormat::Other)
    }
}
