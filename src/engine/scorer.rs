// src/engine/scorer.rs
//! Weighted resume scoring over parsed sections. Pure and deterministic:
//! identical sections and job role always produce identical output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::engine::catalog::{self, ACTION_VERBS, TECHNICAL_INDICATORS};
use crate::types::{ScoreBreakdown, Sections};

/// Result of scoring one parsed resume against a job role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub issues: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub suggested_roles: Vec<String>,
}

static QUANTIFIED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\d+%").unwrap(),
        Regex::new(r"\$\d+").unwrap(),
        Regex::new(r"\d+\s*(?:users?|customers?|clients?)").unwrap(),
        Regex::new(r"\d+\s*(?:hours?|days?|weeks?|months?|years?)").unwrap(),
        Regex::new(r"\d+\s*(?:projects?|applications?|systems?|requests?)").unwrap(),
    ]
});

/// Score parsed sections for a target job role.
pub fn score(sections: &Sections, job_role: &str, config: &AnalyzerConfig) -> ScoreOutcome {
    let mut issues = Vec::new();

    let structure_score = structure_score(sections, &mut issues);
    let skills_score = skills_score(sections, job_role, &mut issues);
    let content_score = content_score(sections, &mut issues);
    let ats_compatibility = ats_score(sections);

    let breakdown = ScoreBreakdown {
        structure_score,
        skills_score,
        content_score,
        ats_compatibility,
    };

    ScoreOutcome {
        overall_score: overall_score(&breakdown, config),
        breakdown,
        issues,
        suggested_keywords: suggested_keywords(sections, job_role, config),
        suggested_roles: catalog::suggest_roles(
            &sections.skills,
            config.suggestions.max_roles,
        ),
    }
}

/// The overall score is a fixed weighted combination of the four sub-scores,
/// reproducible from the breakdown alone.
pub fn overall_score(breakdown: &ScoreBreakdown, config: &AnalyzerConfig) -> u8 {
    let w = &config.weights;
    let weighted = f64::from(breakdown.structure_score) * w.structure
        + f64::from(breakdown.skills_score) * w.skills
        + f64::from(breakdown.content_score) * w.content
        + f64::from(breakdown.ats_compatibility) * w.ats;
    weighted.round().clamp(0.0, 100.0) as u8
}

/// Presence-weighted structure score. Each missing expected element lowers
/// the score and records an issue.
fn structure_score(sections: &Sections, issues: &mut Vec<String>) -> u8 {
    let mut score: u32 = 0;
    let contact = &sections.contact_info;

    if contact.email.is_some() {
        score += 15;
    } else {
        issues.push("No email address found".to_string());
    }
    if contact.name.is_some() {
        score += 10;
    } else {
        issues.push("Candidate name could not be detected near the top of the document".to_string());
    }
    if contact.phone.is_some() {
        score += 5;
    } else {
        issues.push("No phone number found".to_string());
    }

    if !sections.education.is_empty() {
        score += 20;
    } else {
        issues.push("Missing education section".to_string());
    }
    if !sections.skills.is_empty() {
        score += 20;
    } else {
        issues.push("Missing skills section".to_string());
    }
    if !sections.experience.is_empty() {
        score += 15;
    } else {
        issues.push("Missing experience section".to_string());
    }
    if !sections.projects.is_empty() {
        score += 15;
    }
    if !sections.certifications.is_empty() {
        score += 10;
    }

    score.min(100) as u8
}

/// Skill count plus overlap with the role's keyword set, saturating at 100.
fn skills_score(sections: &Sections, job_role: &str, issues: &mut Vec<String>) -> u8 {
    if sections.skills.is_empty() {
        return 0;
    }

    let mut score: u32 = match sections.skills.len() {
        0 => 0,
        1..=2 => 10,
        3..=4 => 20,
        _ => 30,
    };

    let skills_text = sections.skills.join(" ").to_lowercase();
    match catalog::find_role(job_role) {
        Some(profile) => {
            let matched = profile
                .keywords
                .iter()
                .filter(|keyword| skills_text.contains(*keyword))
                .count();
            let relevance =
                (matched as f64 / profile.keywords.len() as f64 * 50.0).min(50.0);
            score += relevance.round() as u32;

            if matched == 0 {
                issues.push(format!(
                    "Listed skills do not mention keywords expected for a {} role",
                    job_role
                ));
            }
        }
        // Unknown role: flat credit for having a skills section at all.
        None => score += 20,
    }

    // Diversity bonus for broad skill lists.
    if sections.skills.len() >= 10 {
        score += 20;
    } else if sections.skills.len() >= 8 {
        score += 10;
    }

    score.min(100) as u8
}

/// Richness of experience and project descriptions: action verbs,
/// quantifiable results and technical depth. Monotonic in the amount of
/// substantive content detected.
fn content_score(sections: &Sections, issues: &mut Vec<String>) -> u8 {
    let text = sections
        .experience
        .iter()
        .chain(sections.projects.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    if text.is_empty() {
        return 0;
    }

    let mut score: u32 = 0;

    let verb_count = ACTION_VERBS.iter().filter(|v| text.contains(*v)).count();
    score += match verb_count {
        0 => 0,
        1..=2 => 10,
        3..=4 => 20,
        _ => 30,
    };
    if verb_count == 0 {
        issues.push("Start bullet points with strong action verbs".to_string());
    }

    let quantified_count = QUANTIFIED_PATTERNS
        .iter()
        .filter(|re| re.is_match(&text))
        .count();
    score += match quantified_count {
        0 => 0,
        1 => 10,
        2 => 15,
        _ => 25,
    };
    if quantified_count == 0 {
        issues.push(
            "Add quantified achievements (numbers, percentages) to your bullet points".to_string(),
        );
    }

    let technical_count = TECHNICAL_INDICATORS
        .iter()
        .filter(|t| text.contains(*t))
        .count();
    score += match technical_count {
        0 => 0,
        1..=2 => 10,
        _ => 20,
    };

    score.min(100) as u8
}

/// Proxy for how well the document survives automated parsing: standard
/// section headers present and machine-readable contact details.
fn ats_score(sections: &Sections) -> u8 {
    let mut score: u32 = 0;

    if !sections.education.is_empty() {
        score += 20;
    }
    if !sections.experience.is_empty() {
        score += 20;
    }
    if !sections.skills.is_empty() {
        score += 20;
    }

    let contact = &sections.contact_info;
    if contact.email.is_some() {
        score += 15;
    }
    if contact.phone.is_some() {
        score += 10;
    }
    if contact.name.is_some() {
        score += 15;
    }

    score.min(100) as u8
}

/// Role keywords absent from the resume, in catalog order. Drives the
/// keyword-suggestion display; empty for roles outside the catalog.
fn suggested_keywords(
    sections: &Sections,
    job_role: &str,
    config: &AnalyzerConfig,
) -> Vec<String> {
    let Some(profile) = catalog::find_role(job_role) else {
        return Vec::new();
    };

    let resume_text = sections
        .skills
        .iter()
        .chain(sections.experience.iter())
        .chain(sections.projects.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    profile
        .keywords
        .iter()
        .filter(|keyword| !resume_text.contains(*keyword))
        .take(config.suggestions.max_keywords)
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    fn ml_sections(skills: &[&str]) -> Sections {
        Sections {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Sections::default()
        }
    }

    #[test]
    fn overall_is_exactly_the_weighted_combination() {
        let breakdown = ScoreBreakdown {
            structure_score: 80,
            skills_score: 60,
            content_score: 40,
            ats_compatibility: 100,
        };
        // 80*0.25 + 60*0.30 + 40*0.25 + 100*0.20 = 68
        assert_eq!(overall_score(&breakdown, &config()), 68);
    }

    #[test]
    fn missing_sections_produce_issues() {
        let outcome = score(&Sections::default(), "Software Engineer", &config());
        assert!(outcome.issues.iter().any(|i| i == "Missing education section"));
        assert!(outcome.issues.iter().any(|i| i == "Missing experience section"));
        assert!(outcome.issues.iter().any(|i| i == "Missing skills section"));
        assert_eq!(outcome.breakdown.skills_score, 0);
        assert_eq!(outcome.breakdown.content_score, 0);
    }

    #[test]
    fn skills_score_is_monotonic_in_matched_keywords() {
        let cfg = config();
        let base = score(&ml_sections(&["TensorFlow"]), "ML Engineer", &cfg);
        let more = score(
            &ml_sections(&["TensorFlow", "PyTorch", "Scikit-learn"]),
            "ML Engineer",
            &cfg,
        );
        let most = score(
            &ml_sections(&["TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy"]),
            "ML Engineer",
            &cfg,
        );
        assert!(more.breakdown.skills_score > base.breakdown.skills_score);
        assert!(most.breakdown.skills_score > more.breakdown.skills_score);
    }

    #[test]
    fn ml_engineer_scenario_detects_all_three_libraries() {
        let text = "SKILLS\nTensorFlow, PyTorch, Scikit-learn\n";
        let sections = parser::parse(text);
        for skill in ["TensorFlow", "PyTorch", "Scikit-learn"] {
            assert!(sections.skills.iter().any(|s| s == skill));
        }
        let outcome = score(&sections, "ML Engineer", &config());
        assert!(outcome.breakdown.skills_score > 0);
        // The matched libraries must not be suggested back as missing.
        assert!(!outcome.suggested_keywords.iter().any(|k| k == "tensorflow"));
        assert!(outcome.suggested_keywords.iter().any(|k| k == "mlops"));
    }

    #[test]
    fn unknown_role_yields_no_keyword_suggestions() {
        let outcome = score(&ml_sections(&["Python"]), "Marine Biologist", &config());
        assert!(outcome.suggested_keywords.is_empty());
        assert!(outcome.breakdown.skills_score > 0);
    }

    #[test]
    fn content_score_rises_with_substantive_content() {
        let cfg = config();
        let thin = Sections {
            experience: vec!["Worked at a company".to_string()],
            ..Sections::default()
        };
        let rich = Sections {
            experience: vec![
                "Developed and optimized billing services handling 2M requests".to_string(),
                "Improved deployment pipeline, reducing release time by 40%".to_string(),
                "Led performance testing and security integration for 3 systems".to_string(),
            ],
            ..Sections::default()
        };
        let thin_score = score(&thin, "Software Engineer", &cfg).breakdown.content_score;
        let rich_score = score(&rich, "Software Engineer", &cfg).breakdown.content_score;
        assert!(rich_score > thin_score);
    }

    #[test]
    fn scoring_is_deterministic() {
        let sections = parser::parse(
            "Jane Doe\njane@example.com\nSKILLS\nPython, Docker\nEXPERIENCE\nBuilt tools\n",
        );
        let first = score(&sections, "DevOps Engineer", &config());
        let second = score(&sections, "DevOps Engineer", &config());
        assert_eq!(first, second);
    }
}
