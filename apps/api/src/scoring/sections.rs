//! Section scorers — one additive point table per resume section.
//!
//! Each scorer returns 0–100. Bonuses that accumulate across entries are summed
//! first and capped once, so a handful of short entries can reach a cap as
//! quickly as one long entry.

use std::collections::HashSet;

use crate::models::resume::{
    is_filled, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillCategory,
};
use crate::scoring::clamp_score;
use crate::scoring::patterns::Signal;

const EXPERIENCE_COMPLETENESS_CAP: f64 = 20.0;
const EXPERIENCE_ACHIEVEMENT_CAP: f64 = 20.0;
const EXPERIENCE_QUANTIFIED_CAP: f64 = 20.0;
const EDUCATION_COMPLETENESS_CAP: f64 = 50.0;
const PROJECT_COMPLETENESS_CAP: f64 = 30.0;
const PROJECT_ACHIEVEMENT_CAP: f64 = 20.0;

pub fn score_personal_info(info: &PersonalInfo) -> u8 {
    let mut points = 0.0;

    for field in [
        &info.name,
        &info.title,
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
    ] {
        if is_filled(field) {
            points += 10.0;
        }
    }

    let summary = info.summary.as_str();
    if is_filled(summary) {
        points += 10.0;
        let len = summary.chars().count();
        if len > 30 {
            points += 5.0;
        }
        if len > 100 {
            points += 5.0;
        }
        if Signal::ExpertiseKeyword.matches(summary) {
            points += 5.0;
        }
        if Signal::YearsOfExperience.matches(summary) {
            points += 5.0;
        }
    }

    clamp_score(points)
}

pub fn score_skills(categories: &[SkillCategory]) -> u8 {
    let mut points = 0.0;

    points += tiered(categories.len(), &[(1, 20.0), (2, 20.0)]);

    let total_skills: usize = categories.iter().map(|c| c.skills.len()).sum();
    points += tiered(total_skills, &[(5, 15.0), (10, 15.0), (15, 10.0)]);

    let distinct_names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    points += tiered(distinct_names.len(), &[(2, 10.0), (3, 10.0)]);

    clamp_score(points)
}

pub fn score_experience(entries: &[ExperienceEntry]) -> u8 {
    let mut points = tiered(entries.len(), &[(1, 20.0), (2, 10.0), (3, 10.0)]);

    points += average(entries.iter().map(|e| {
        filled_ratio(&[
            &e.company,
            &e.position,
            &e.start_date,
            &e.end_date,
            &e.location,
            &e.description,
        ]) * 10.0
    }))
    .min(EXPERIENCE_COMPLETENESS_CAP);

    let achievement_bonus: f64 = entries
        .iter()
        .map(|e| achievement_tier(e.achievements.len()))
        .sum();
    points += achievement_bonus.min(EXPERIENCE_ACHIEVEMENT_CAP);

    let quantified = entries
        .iter()
        .flat_map(|e| &e.achievements)
        .filter(|a| Signal::QuantifiedImpact.matches(a))
        .count();
    points += (quantified as f64 * 5.0).min(EXPERIENCE_QUANTIFIED_CAP);

    clamp_score(points)
}

pub fn score_education(entries: &[EducationEntry]) -> u8 {
    let mut points = tiered(entries.len(), &[(1, 30.0)]);

    points += average(entries.iter().map(|e| {
        filled_ratio(&[
            &e.institution,
            &e.degree,
            &e.field,
            &e.start_date,
            &e.end_date,
            &e.location,
            &e.description,
        ]) * 20.0
    }))
    .min(EDUCATION_COMPLETENESS_CAP);

    // Not capped separately; the section ceiling applies.
    let detailed = entries
        .iter()
        .filter(|e| e.description.chars().count() > 20)
        .count();
    points += detailed as f64 * 5.0;

    clamp_score(points)
}

pub fn score_projects(entries: &[ProjectEntry]) -> u8 {
    let mut points = tiered(entries.len(), &[(1, 20.0), (2, 10.0), (3, 10.0)]);

    points += average(entries.iter().map(|p| {
        filled_ratio(&[
            &p.name,
            &p.description,
            &p.technologies,
            &p.link,
            &p.start_date,
            &p.end_date,
        ]) * 10.0
    }))
    .min(PROJECT_COMPLETENESS_CAP);

    let achievement_bonus: f64 = entries
        .iter()
        .map(|p| achievement_tier(p.achievements.len()))
        .sum();
    points += achievement_bonus.min(PROJECT_ACHIEVEMENT_CAP);

    clamp_score(points)
}

/// Sums every `(threshold, points)` pair whose threshold `count` reaches.
fn tiered(count: usize, tiers: &[(usize, f64)]) -> f64 {
    tiers
        .iter()
        .filter(|(threshold, _)| count >= *threshold)
        .map(|(_, points)| points)
        .sum()
}

/// +5 for having any achievement, +5 more from three on.
fn achievement_tier(count: usize) -> f64 {
    tiered(count, &[(1, 5.0), (3, 5.0)])
}

fn filled_ratio(fields: &[&String]) -> f64 {
    let filled = fields.iter().filter(|f| is_filled(f)).count();
    filled as f64 / fields.len() as f64
}

/// Mean of the values, 0.0 for an empty sequence.
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
