//! Relevance score — density of outcome language in experience achievements.

use crate::models::resume::ResumeRecord;
use crate::scoring::clamp_score;
use crate::scoring::patterns::Signal;

const BASE: f64 = 60.0;
const IMPACT_CAP: f64 = 20.0;

pub fn score_relevance(resume: &ResumeRecord) -> u8 {
    let mut points = BASE;

    let impact: f64 = resume
        .experience
        .iter()
        .flat_map(|e| &e.achievements)
        .map(|a| achievement_impact(a))
        .sum();
    points += impact.min(IMPACT_CAP);

    if !resume.skills.is_empty() {
        points += 10.0;
    }
    if !resume.projects.is_empty() {
        points += 10.0;
    }

    clamp_score(points)
}

/// 0, 5 or 10 points: an impact verb and a quantified outcome are worth 5 each.
fn achievement_impact(achievement: &str) -> f64 {
    [Signal::ImpactVerb, Signal::QuantifiedImpact]
        .into_iter()
        .filter(|signal| signal.matches(achievement))
        .count() as f64
        * 5.0
}
