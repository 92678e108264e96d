// Resume quality scoring.
// A pure transform from `ResumeRecord` to `ScoreReport`: no I/O, no shared
// state, no mutation of the input. The HTTP handler is the only caller that logs.

pub mod feedback;
pub mod format;
pub mod handlers;
pub mod job_match;
pub mod patterns;
pub mod relevance;
pub mod sections;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;
use crate::scoring::feedback::build_feedback;
use crate::scoring::job_match::{compute_job_match, JobMatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PersonalInfo,
    Skills,
    Experience,
    Education,
    Projects,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::PersonalInfo,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
    ];

    /// Key used in `ScoreReport::section_scores`.
    pub fn key(self) -> &'static str {
        match self {
            Section::PersonalInfo => "personalInfo",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
        }
    }
}

/// Share of the content score per section, in percent.
const SECTION_WEIGHTS: &[(Section, u32)] = &[
    (Section::PersonalInfo, 15),
    (Section::Skills, 20),
    (Section::Experience, 35),
    (Section::Education, 15),
    (Section::Projects, 15),
];

const CONTENT_WEIGHT: u32 = 50;
const FORMAT_WEIGHT: u32 = 25;
const RELEVANCE_WEIGHT: u32 = 25;

/// Full quality report. Built fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u8,
    pub content_score: u8,
    pub format_score: u8,
    pub relevance_score: u8,
    pub section_scores: BTreeMap<String, u8>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatch>,
}

/// Pluggable scorer carried in `AppState` as `Arc<dyn ResumeScorer>`.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume: &ResumeRecord, job_description: Option<&str>) -> ScoreReport;
}

/// Rule-based scorer. Holds no state; every call is independent.
pub struct HeuristicScorer;

impl ResumeScorer for HeuristicScorer {
    fn score(&self, resume: &ResumeRecord, job_description: Option<&str>) -> ScoreReport {
        score(resume, job_description)
    }
}

pub fn score(resume: &ResumeRecord, job_description: Option<&str>) -> ScoreReport {
    let section_scores: Vec<(Section, u8)> = Section::ALL
        .into_iter()
        .map(|section| (section, score_section(resume, section)))
        .collect();

    let content_score = weighted_percent(SECTION_WEIGHTS.iter().map(|&(section, weight)| {
        let score = section_scores
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, score)| *score)
            .unwrap_or_default();
        (score, weight)
    }));
    let format_score = format::score_format(resume);
    let relevance_score = relevance::score_relevance(resume);
    let overall_score = weighted_percent(
        [
            (content_score, CONTENT_WEIGHT),
            (format_score, FORMAT_WEIGHT),
            (relevance_score, RELEVANCE_WEIGHT),
        ]
        .into_iter(),
    );

    let feedback = build_feedback(&section_scores, resume.is_blank());

    ScoreReport {
        overall_score,
        content_score,
        format_score,
        relevance_score,
        section_scores: section_scores
            .iter()
            .map(|(section, score)| (section.key().to_string(), *score))
            .collect(),
        strengths: feedback.strengths,
        weaknesses: feedback.weaknesses,
        suggestions: feedback.suggestions,
        job_match: compute_job_match(resume, job_description),
    }
}

fn score_section(resume: &ResumeRecord, section: Section) -> u8 {
    match section {
        Section::PersonalInfo => sections::score_personal_info(&resume.personal_info),
        Section::Skills => sections::score_skills(&resume.skills),
        Section::Experience => sections::score_experience(&resume.experience),
        Section::Education => sections::score_education(&resume.education),
        Section::Projects => sections::score_projects(&resume.projects),
    }
}

/// Rounds accumulated points to the nearest integer and clamps to 0–100.
pub(crate) fn clamp_score(points: f64) -> u8 {
    points.round().clamp(0.0, 100.0) as u8
}

/// Weighted mean of `(score, percent)` pairs, rounded half up. Integer math
/// keeps `.5` boundaries exact.
fn weighted_percent(parts: impl Iterator<Item = (u8, u32)>) -> u8 {
    let total: u32 = parts.map(|(score, weight)| u32::from(score) * weight).sum();
    ((total + 50) / 100).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Skill, SkillCategory,
    };

    fn section(report: &ScoreReport, section: Section) -> u8 {
        report.section_scores[section.key()]
    }

    fn strong_resume() -> ResumeRecord {
        let skills = |name: &str, items: &[&str]| SkillCategory {
            name: name.to_string(),
            skills: items
                .iter()
                .map(|s| Skill {
                    name: s.to_string(),
                })
                .collect(),
        };
        let job = |company: &str, start: &str, end: &str| ExperienceEntry {
            company: company.to_string(),
            position: "Senior Engineer".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            location: "Berlin".to_string(),
            description: "Owned the payments platform".to_string(),
            achievements: vec![
                "Increased checkout conversion by 12%".to_string(),
                "Reduced infra spend by $30k a year".to_string(),
                "Mentored 4 people".to_string(),
            ],
        };

        ResumeRecord {
            personal_info: PersonalInfo {
                name: "Grace Hopper".to_string(),
                title: "Staff Engineer".to_string(),
                email: "grace@example.com".to_string(),
                phone: "555-0101".to_string(),
                location: "Berlin".to_string(),
                website: "https://grace.dev".to_string(),
                summary: "Engineer with 10+ years of experience designing payment systems, \
                          leading platform teams and shipping reliable distributed services."
                    .to_string(),
            },
            skills: vec![
                skills("Languages", &["Rust", "Go", "Python", "TypeScript", "SQL", "Java"]),
                skills("Infrastructure", &["Kubernetes", "Terraform", "AWS", "Kafka", "Redis"]),
                skills("Practices", &["TDD", "Observability", "SRE", "Code review", "Mentoring"]),
            ],
            experience: vec![
                job("Acme", "2019", "2024"),
                job("Globex", "2016", "2019"),
                job("Initech", "2013", "2016"),
            ],
            education: vec![EducationEntry {
                institution: "TU Berlin".to_string(),
                degree: "MSc".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2011".to_string(),
                end_date: "2013".to_string(),
                location: "Berlin".to_string(),
                description: "Thesis on consensus in partitioned networks".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "ledger-rs".to_string(),
                description: "Double-entry ledger library".to_string(),
                technologies: "Rust".to_string(),
                link: "https://github.com/grace/ledger-rs".to_string(),
                start_date: "2022".to_string(),
                end_date: "2023".to_string(),
                achievements: vec!["Adopted by 3 fintechs".to_string()],
            }],
        }
    }

    #[test]
    fn test_empty_resume_scores_from_bases() {
        let report = score(&ResumeRecord::default(), None);
        assert_eq!(report.content_score, 0);
        assert_eq!(report.format_score, 80);
        assert_eq!(report.relevance_score, 60);
        // 0×0.5 + 80×0.25 + 60×0.25
        assert_eq!(report.overall_score, 35);
        assert!(report.strengths.is_empty());
        assert_eq!(report.weaknesses.len(), 6);
        assert_eq!(report.suggestions.len(), 9);
        assert!(report.job_match.is_none());
    }

    #[test]
    fn test_every_section_is_reported() {
        let report = score(&ResumeRecord::default(), None);
        assert_eq!(report.section_scores.len(), 5);
        for section in Section::ALL {
            assert!(report.section_scores.contains_key(section.key()));
        }
    }

    #[test]
    fn test_strong_resume_scores() {
        let report = score(&strong_resume(), None);
        assert_eq!(section(&report, Section::PersonalInfo), 90);
        assert_eq!(section(&report, Section::Skills), 100);
        assert_eq!(section(&report, Section::Experience), 90);
        assert_eq!(section(&report, Section::Education), 55);
        assert_eq!(section(&report, Section::Projects), 35);
        // 13.5 + 20 + 31.5 + 8.25 + 5.25 = 78.5 -> 79
        assert_eq!(report.content_score, 79);
        assert_eq!(report.format_score, 100);
        assert_eq!(report.relevance_score, 100);
        // 39.5 + 25 + 25 = 89.5 -> 90
        assert_eq!(report.overall_score, 90);
        assert_eq!(report.strengths.len(), 3);
        assert_eq!(report.weaknesses.len(), 2);
    }

    #[test]
    fn test_all_scores_in_range() {
        let mut resume = strong_resume();
        resume.education = vec![resume.education[0].clone(); 30];
        resume.projects = vec![resume.projects[0].clone(); 30];
        let report = score(&resume, Some("Rust Kafka payments"));
        for value in report.section_scores.values() {
            assert!(*value <= 100);
        }
        assert!(report.overall_score <= 100);
        assert!(report.content_score <= 100);
        assert!(report.format_score <= 100);
        assert!(report.relevance_score <= 100);
        assert_eq!(section(&report, Section::Education), 100);
    }

    #[test]
    fn test_score_is_deterministic_and_does_not_mutate_input() {
        let resume = strong_resume();
        let before = resume.clone();
        let first = score(&resume, Some("Rust engineer"));
        let second = score(&resume, Some("Rust engineer"));
        assert_eq!(first, second);
        assert_eq!(resume, before);
    }

    #[test]
    fn test_quantified_achievement_lifts_experience_and_relevance() {
        let with_achievement = |line: &str| ResumeRecord {
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                achievements: vec![line.to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let vague = score(&with_achievement("Did some tasks."), None);
        let strong = score(&with_achievement("Increased revenue by 20%"), None);
        assert_eq!(
            section(&strong, Section::Experience),
            section(&vague, Section::Experience) + 5
        );
        assert_eq!(strong.relevance_score, vague.relevance_score + 10);
    }

    #[test]
    fn test_job_description_does_not_change_scores() {
        let resume = strong_resume();
        let plain = score(&resume, None);
        let targeted = score(&resume, Some("Rust Kafka Haskell"));
        assert_eq!(plain.overall_score, targeted.overall_score);
        assert_eq!(plain.suggestions, targeted.suggestions);
        let job_match = targeted.job_match.unwrap();
        assert_eq!(job_match.missing_keywords, vec!["haskell"]);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let value = serde_json::to_value(score(&ResumeRecord::default(), None)).unwrap();
        assert_eq!(value["overallScore"], 35);
        assert_eq!(value["sectionScores"]["personalInfo"], 0);
        assert!(value.get("jobMatch").is_none());
    }

    #[test]
    fn test_heuristic_scorer_matches_free_function() {
        let resume = strong_resume();
        let scorer: &dyn ResumeScorer = &HeuristicScorer;
        assert_eq!(scorer.score(&resume, None), score(&resume, None));
    }

    #[test]
    fn test_weighted_percent_rounds_half_up() {
        assert_eq!(weighted_percent([(1, 50), (0, 50)].into_iter()), 1);
        assert_eq!(weighted_percent([(100, 100)].into_iter()), 100);
        assert_eq!(weighted_percent(std::iter::empty()), 0);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(37.5), 38);
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        /// Field text biased towards the shapes the heuristics look for.
        fn text() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(String::new()),
                Just("2021".to_string()),
                Just("March 2020".to_string()),
                Just("03/15/2021".to_string()),
                "[0-9]{1,3}%",
                "Increased revenue by [0-9]{1,3}%",
                "Saved \\$[0-9]{1,6} for [0-9]{1,3} people",
                "[0-9]{1,2}\\+? years of experience",
                "[a-zA-Z ]{0,40}",
                ".{0,120}",
            ]
        }

        fn personal_info() -> impl Strategy<Value = PersonalInfo> {
            (text(), text(), text(), text(), text(), text(), text()).prop_map(
                |(name, title, email, phone, location, website, summary)| PersonalInfo {
                    name,
                    title,
                    email,
                    phone,
                    location,
                    website,
                    summary,
                },
            )
        }

        fn skill_category() -> impl Strategy<Value = SkillCategory> {
            (text(), vec(text().prop_map(|name| Skill { name }), 0..20))
                .prop_map(|(name, skills)| SkillCategory { name, skills })
        }

        fn experience_entry() -> impl Strategy<Value = ExperienceEntry> {
            (
                text(),
                text(),
                text(),
                text(),
                text(),
                text(),
                vec(text(), 0..8),
            )
                .prop_map(
                    |(company, position, start_date, end_date, location, description, achievements)| {
                        ExperienceEntry {
                            company,
                            position,
                            start_date,
                            end_date,
                            location,
                            description,
                            achievements,
                        }
                    },
                )
        }

        fn education_entry() -> impl Strategy<Value = EducationEntry> {
            (text(), text(), text(), text(), text(), text(), text()).prop_map(
                |(institution, degree, field, start_date, end_date, location, description)| {
                    EducationEntry {
                        institution,
                        degree,
                        field,
                        start_date,
                        end_date,
                        location,
                        description,
                    }
                },
            )
        }

        fn project_entry() -> impl Strategy<Value = ProjectEntry> {
            (
                text(),
                text(),
                text(),
                text(),
                text(),
                text(),
                vec(text(), 0..8),
            )
                .prop_map(
                    |(name, description, technologies, link, start_date, end_date, achievements)| {
                        ProjectEntry {
                            name,
                            description,
                            technologies,
                            link,
                            start_date,
                            end_date,
                            achievements,
                        }
                    },
                )
        }

        fn resume_record() -> impl Strategy<Value = ResumeRecord> {
            (
                personal_info(),
                vec(skill_category(), 0..5),
                vec(experience_entry(), 0..6),
                vec(education_entry(), 0..5),
                vec(project_entry(), 0..6),
            )
                .prop_map(
                    |(personal_info, skills, experience, education, projects)| ResumeRecord {
                        personal_info,
                        skills,
                        experience,
                        education,
                        projects,
                    },
                )
        }

        proptest! {
            /// Every score in the report stays within 0–100.
            #[test]
            fn scores_stay_in_range(
                resume in resume_record(),
                job_description in proptest::option::of(text())
            ) {
                let report = score(&resume, job_description.as_deref());

                prop_assert!(report.overall_score <= 100);
                prop_assert!(report.content_score <= 100);
                prop_assert!(report.format_score <= 100);
                prop_assert!(report.relevance_score <= 100);
                prop_assert_eq!(report.section_scores.len(), Section::ALL.len());
                for value in report.section_scores.values() {
                    prop_assert!(*value <= 100, "section score {} out of range", value);
                }
                if let Some(job_match) = &report.job_match {
                    prop_assert!(job_match.score <= 100);
                }
            }

            /// Scoring twice gives the same report and leaves the input untouched.
            #[test]
            fn scoring_is_deterministic_and_pure(
                resume in resume_record(),
                job_description in proptest::option::of(text())
            ) {
                let before = resume.clone();
                let first = score(&resume, job_description.as_deref());
                let second = score(&resume, job_description.as_deref());

                prop_assert_eq!(&first, &second);
                prop_assert_eq!(&resume, &before);
            }

            /// The overall score is the fixed 50/25/25 blend of the sub-scores.
            #[test]
            fn overall_follows_fixed_weights(resume in resume_record()) {
                let report = score(&resume, None);
                let blended = (u32::from(report.content_score) * 50
                    + u32::from(report.format_score) * 25
                    + u32::from(report.relevance_score) * 25
                    + 50)
                    / 100;

                prop_assert_eq!(u32::from(report.overall_score), blended);
                prop_assert!(report.format_score >= 70);
                prop_assert!(report.relevance_score >= 60);
            }
        }
    }
}
