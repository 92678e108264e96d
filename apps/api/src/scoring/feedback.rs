//! Threshold rules that turn section scores into strengths, weaknesses and
//! suggestions. Output order follows `Section::ALL`, then the generic advice.

use crate::scoring::Section;

const STRENGTH_THRESHOLD: u8 = 80;
const WEAKNESS_THRESHOLD: u8 = 70;
const SUGGESTION_THRESHOLD: u8 = 90;

const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Tailor your resume to each job description by mirroring the key terms it uses.",
    "Add a core competencies section near the top to surface your strongest skills.",
    "Keep your resume concise: one page for early-career roles, two at most.",
];

const BLANK_RESUME_WEAKNESS: &str = "No resume content has been provided yet.";
const BLANK_RESUME_SUGGESTION: &str =
    "Start with your personal information and a short professional summary.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn build_feedback(section_scores: &[(Section, u8)], resume_is_blank: bool) -> Feedback {
    let mut feedback = Feedback::default();

    if resume_is_blank {
        feedback.weaknesses.push(BLANK_RESUME_WEAKNESS.to_string());
        feedback.suggestions.push(BLANK_RESUME_SUGGESTION.to_string());
    }

    for &(section, score) in section_scores {
        if score >= STRENGTH_THRESHOLD {
            feedback.strengths.push(strength(section).to_string());
        }
        if score < WEAKNESS_THRESHOLD {
            feedback.weaknesses.push(weakness(section).to_string());
        }
        if score < SUGGESTION_THRESHOLD {
            feedback.suggestions.push(suggestion(section).to_string());
        }
    }

    feedback
        .suggestions
        .extend(GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()));

    feedback
}

fn strength(section: Section) -> &'static str {
    match section {
        Section::PersonalInfo => {
            "Your contact details and professional summary are complete and compelling."
        }
        Section::Skills => "Your skills are broad and well organized into clear categories.",
        Section::Experience => {
            "Your work experience is detailed and backed by measurable achievements."
        }
        Section::Education => "Your education history is complete and clearly presented.",
        Section::Projects => "Your projects show hands-on work with concrete results.",
    }
}

fn weakness(section: Section) -> &'static str {
    match section {
        Section::PersonalInfo => "Your contact information or professional summary is incomplete.",
        Section::Skills => "Your skills section is sparse or lacks clear categories.",
        Section::Experience => "Your work experience lacks detail or quantified achievements.",
        Section::Education => "Your education entries are missing key details.",
        Section::Projects => "Your projects section is thin or missing details.",
    }
}

fn suggestion(section: Section) -> &'static str {
    match section {
        Section::PersonalInfo => {
            "Fill in every contact field and open your summary with your years of experience and core expertise."
        }
        Section::Skills => "List at least 10 skills grouped into 3 or more named categories.",
        Section::Experience => {
            "Add achievements to every role and quantify them with percentages, dollar amounts or team sizes."
        }
        Section::Education => {
            "Complete dates, location and a short description of coursework or honors for each degree."
        }
        Section::Projects => {
            "Add more projects with their technologies, links and the results they delivered."
        }
    }
}
