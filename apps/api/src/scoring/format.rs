//! Format score — structural completeness and date consistency.

use std::collections::BTreeSet;

use crate::models::resume::{is_filled, ResumeRecord};
use crate::scoring::clamp_score;
use crate::scoring::patterns::DateFormat;

const BASE: f64 = 70.0;

pub fn score_format(resume: &ResumeRecord) -> u8 {
    let mut points = BASE;

    if date_formats(resume).len() <= 1 {
        points += 10.0;
    }

    let info = &resume.personal_info;
    if is_filled(&info.name) && is_filled(&info.title) && is_filled(&info.summary) {
        points += 5.0;
    }

    for present in [
        !resume.skills.is_empty(),
        !resume.experience.is_empty(),
        !resume.education.is_empty(),
    ] {
        if present {
            points += 5.0;
        }
    }

    clamp_score(points)
}

/// Distinct format classes across all experience and education dates.
/// A blank date classifies as `Other` like any unrecognised string.
pub fn date_formats(resume: &ResumeRecord) -> BTreeSet<DateFormat> {
    let experience_dates = resume
        .experience
        .iter()
        .flat_map(|e| [e.start_date.as_str(), e.end_date.as_str()]);
    let education_dates = resume
        .education
        .iter()
        .flat_map(|e| [e.start_date.as_str(), e.end_date.as_str()]);

    experience_dates
        .chain(education_dates)
        .map(DateFormat::classify)
        .collect()
}
