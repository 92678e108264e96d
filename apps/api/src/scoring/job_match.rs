//! Job-description keyword coverage.
//!
//! Keywords are pulled from the job description by frequency and looked up in
//! the resume:
//! 1. exact (case-insensitive) skill name → strength 1.0
//! 2. substring of the resume's free text → strength 0.6
//! 3. otherwise → 0.0
//!
//! `score = Σ(strength × frequency) / Σ(frequency) × 100`. Coverage is reported
//! next to the heuristic scores and never feeds into them.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

const MAX_KEYWORDS: usize = 20;
const SKILL_MATCH: f64 = 1.0;
const TEXT_MATCH: f64 = 0.6;

const STOP_WORDS: &[&str] = &[
    "a", "about", "across", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "being", "but", "by", "can", "do", "does", "each", "etc", "for", "from", "has", "have", "help",
    "how", "if", "in", "including", "into", "is", "it", "its", "join", "looking", "may", "more",
    "must", "new", "not", "of", "on", "or", "other", "our", "out", "over", "per", "plus",
    "preferred", "required", "role", "should", "so", "such", "team", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "up", "us", "using",
    "via", "we", "well", "were", "what", "which", "while", "who", "will", "with", "within",
    "work", "working", "would", "year", "years", "you", "your",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

/// Returns `None` when no job description (or only whitespace) was supplied.
pub fn compute_job_match(resume: &ResumeRecord, job_description: Option<&str>) -> Option<JobMatch> {
    let job_description = job_description.filter(|jd| !jd.trim().is_empty())?;
    let keywords = extract_keywords(job_description);

    if keywords.is_empty() {
        return Some(JobMatch {
            score: 0,
            matched_keywords: vec![],
            missing_keywords: vec![],
            recommendation: "No keywords found in the job description, so coverage cannot be measured."
                .to_string(),
        });
    }

    let skill_names: HashSet<String> = resume
        .skills
        .iter()
        .flat_map(|c| &c.skills)
        .map(|s| s.name.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let text = resume_text(resume);

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut total_weight = 0.0;
    let mut total_score = 0.0;

    for entry in &keywords {
        let strength = if skill_names.contains(&entry.keyword) {
            SKILL_MATCH
        } else if text.contains(&entry.keyword) {
            TEXT_MATCH
        } else {
            0.0
        };

        total_weight += f64::from(entry.frequency);
        total_score += strength * f64::from(entry.frequency);

        if strength > 0.0 {
            matched_keywords.push(entry.keyword.clone());
        } else {
            missing_keywords.push(entry.keyword.clone());
        }
    }

    let score = ((total_score / total_weight) * 100.0).round().clamp(0.0, 100.0) as u8;
    let recommendation = build_recommendation(score, &missing_keywords);

    Some(JobMatch {
        score,
        matched_keywords,
        missing_keywords,
        recommendation,
    })
}

/// Most frequent job-description terms, ties kept in order of first appearance.
pub fn extract_keywords(job_description: &str) -> Vec<KeywordEntry> {
    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize(job_description) {
        if token.chars().count() < 2
            || token.chars().all(|c| c.is_ascii_digit())
            || STOP_WORDS.contains(&token.as_str())
        {
            continue;
        }
        match index.entry(token) {
            Entry::Occupied(slot) => entries[*slot.get()].frequency += 1,
            Entry::Vacant(slot) => {
                entries.push(KeywordEntry {
                    keyword: slot.key().clone(),
                    frequency: 1,
                });
                slot.insert(entries.len() - 1);
            }
        }
    }

    // Stable sort keeps first-appearance order among equal frequencies.
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(MAX_KEYWORDS);
    entries
}

/// Lowercase terms; `+`, `#` and inner `.` stay attached so `c++`, `c#` and
/// `node.js` survive.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|t| t.trim_matches('.').to_lowercase())
        .filter(|t| !t.is_empty())
}

fn resume_text(resume: &ResumeRecord) -> String {
    let info = &resume.personal_info;
    let mut parts: Vec<&str> = vec![info.title.as_str(), info.summary.as_str()];

    for category in &resume.skills {
        parts.push(category.name.as_str());
        parts.extend(category.skills.iter().map(|s| s.name.as_str()));
    }
    for job in &resume.experience {
        parts.extend([
            job.position.as_str(),
            job.company.as_str(),
            job.description.as_str(),
        ]);
        parts.extend(job.achievements.iter().map(String::as_str));
    }
    for school in &resume.education {
        parts.extend([
            school.degree.as_str(),
            school.field.as_str(),
            school.description.as_str(),
        ]);
    }
    for project in &resume.projects {
        parts.extend([
            project.name.as_str(),
            project.description.as_str(),
            project.technologies.as_str(),
        ]);
        parts.extend(project.achievements.iter().map(String::as_str));
    }

    parts.join("\n").to_lowercase()
}

fn build_recommendation(score: u8, missing: &[String]) -> String {
    let top_missing = missing
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if score >= 80 {
        "Strong match. Your resume covers the key terms in this job description.".to_string()
    } else if top_missing.is_empty() {
        format!(
            "Moderate match ({score}/100). The key terms appear in your descriptions; list them as skills too."
        )
    } else if score >= 60 {
        format!("Moderate match ({score}/100). Consider working in: {top_missing}.")
    } else {
        format!("Low match ({score}/100). Missing key terms: {top_missing}.")
    }
}
