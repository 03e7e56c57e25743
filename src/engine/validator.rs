// src/engine/validator.rs
//! Resume-plausibility gate. Scans the document for resume trigger
//! categories, accumulates evidence points against a threshold, and checks
//! for strong non-resume indicators (certificates, company lists, letters).
//! Always produces a structured accept/reject outcome, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ValidationConfig;
use crate::engine::parser;
use crate::types::Rejection;

struct TriggerCategory {
    name: &'static str,
    keywords: &'static [&'static str],
    /// Points per keyword occurrence.
    weight: i32,
    /// Flat bonus when any keyword of the category is present.
    bonus: i32,
}

const CORE_IDENTITY: &str = "Core Resume Identity";

const TRIGGER_CATEGORIES: &[TriggerCategory] = &[
    TriggerCategory {
        name: CORE_IDENTITY,
        keywords: &[
            "resume", "cv", "curriculum vitae", "professional profile", "career summary",
            "profile summary",
        ],
        weight: 10,
        bonus: 3,
    },
    TriggerCategory {
        name: "Education",
        keywords: &[
            "education", "qualification", "academic", "degree", "university", "college",
            "school", "bachelor", "master", "phd", "gpa", "cgpa", "graduate",
            "undergraduate", "diploma", "mba",
        ],
        weight: 1,
        bonus: 3,
    },
    TriggerCategory {
        name: "Experience",
        keywords: &[
            "experience", "employment", "internship", "intern", "designation", "company",
            "organization", "responsibilities", "position", "role", "work history",
            "professional experience", "career",
        ],
        weight: 1,
        bonus: 3,
    },
    TriggerCategory {
        name: "Skills",
        keywords: &[
            "skills", "technical skills", "programming", "languages", "frameworks",
            "tools", "technologies", "python", "java", "sql", "javascript",
            "machine learning", "expertise", "proficiency",
        ],
        weight: 1,
        bonus: 3,
    },
    TriggerCategory {
        name: "Projects & Achievements",
        keywords: &[
            "projects", "achievements", "awards", "certifications", "hackathon",
            "portfolio", "accomplishments", "publications", "research",
        ],
        weight: 1,
        bonus: 3,
    },
    TriggerCategory {
        name: "Contact",
        keywords: &[
            "email", "phone", "mobile", "contact", "linkedin", "github", "address",
            "location", "website",
        ],
        weight: 1,
        bonus: 3,
    },
    TriggerCategory {
        name: "Resume Sections",
        keywords: &[
            "objective", "career objective", "summary", "profile", "strengths",
            "hobbies", "interests", "declaration", "references", "about me",
            "professional summary",
        ],
        weight: 1,
        bonus: 3,
    },
];

/// Phrases that mark documents which are structurally text but not resumes.
const NON_RESUME_INDICATORS: &[&str] = &[
    "certificate of completion", "certificate of achievement", "course completion",
    "training certificate", "marksheet", "transcript", "offer letter",
    "appointment letter", "salary slip", "invoice", "receipt", "syllabus",
    "course outline", "lesson plan", "project report", "thesis", "dissertation",
    "id card", "passport", "driving license", "congratulations", "party invitation",
    "blog post", "meeting notes", "agenda", "minutes", "memo", "policy document",
    "handbook", "top companies", "list of companies", "company list", "best companies",
    "fortune 500", "company directory", "business directory", "company profiles",
    "job openings", "job vacancies", "hiring now", "apply now", "job posting",
    "permission letter", "authorization letter", "recommendation letter",
    "reference letter",
];

static COMPANY_LIST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // "3. Acme Technologies" style enumerations of organizations.
        Regex::new(
            r"(?m)^\s*\d+[.)]\s+[A-Z][A-Za-z&.\- ]*(?:Technologies|Services|Solutions|Systems|Limited|Ltd|Inc|Corp|Corporation)\b",
        )
        .unwrap(),
        Regex::new(r"(?i)top\s+\d+\s+[\w\s]*compan").unwrap(),
        Regex::new(r"(?i)list\s+of\s+[\w\s]*compan").unwrap(),
    ]
});

static ENUMERATED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+[.)]\s+\S").unwrap());

/// Decide whether `text` plausibly represents a resume. `Ok(())` means the
/// document proceeds to parsing and scoring; `Err` carries the user-facing
/// rejection descriptor.
pub fn validate(text: &str, config: &ValidationConfig) -> Result<(), Rejection> {
    let stripped = parser::strip_page_markers(text);
    let trimmed = stripped.trim();

    if trimmed.chars().count() < config.min_text_chars {
        return Err(rejection(format!(
            "Document too short or empty. At least {} characters of text are required for analysis.",
            config.min_text_chars
        )));
    }

    let normalized = normalize(trimmed);
    let (evidence, detected_categories) = keyword_evidence(&normalized, trimmed);
    let indicators = non_resume_indicators(&normalized, trimmed);

    // Strong negative signals veto acceptance unless the resume evidence is
    // overwhelming.
    if indicators.len() >= 2 && evidence < config.non_resume_override_ceiling {
        return Err(rejection(format!(
            "Document contains non-resume indicators: {}.",
            indicators[..indicators.len().min(3)].join(", ")
        )));
    }

    // Structural floor: a document with no contact info and no recognized
    // section headers is not a resume regardless of stray keyword hits.
    let has_contact =
        parser::EMAIL_RE.is_match(trimmed) || parser::PHONE_RE.is_match(trimmed);
    if !has_contact && !parser::has_section_headers(trimmed) {
        return Err(rejection(
            "No contact information or recognizable resume sections (education, experience, skills) were found.".to_string(),
        ));
    }

    if evidence < config.resume_threshold {
        return Err(rejection(format!(
            "Document is missing essential resume structure (detected: {}).",
            if detected_categories.is_empty() {
                "none".to_string()
            } else {
                detected_categories.join(", ")
            }
        )));
    }

    Ok(())
}

fn rejection(details: String) -> Rejection {
    Rejection::new(
        "This uploaded file is not a resume. Please upload a proper CV or resume for scoring.",
    )
    .with_details(details)
    .with_suggestions(vec![
        "Upload a document that contains your work experience".to_string(),
        "Include education details, skills, and work history".to_string(),
        "Ensure the document is a proper resume or CV".to_string(),
        "Avoid uploading certificates, marksheets, or reports".to_string(),
    ])
}

/// Lowercase, strip punctuation except the characters that appear inside
/// emails and compound terms, and collapse whitespace.
fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '@' | '.' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accumulate evidence points across the trigger categories: per-occurrence
/// keyword points plus a flat category bonus, with the core identity
/// category carrying an extra bump. Regex-detected contact details count as
/// contact evidence even when the literal words "email"/"phone" are absent.
fn keyword_evidence(normalized: &str, raw: &str) -> (i32, Vec<String>) {
    let mut total = 0;
    let mut detected = Vec::new();

    for category in TRIGGER_CATEGORIES {
        let occurrences: i32 = category
            .keywords
            .iter()
            .map(|keyword| word_occurrences(normalized, keyword) as i32)
            .sum();

        if occurrences > 0 {
            let mut points = occurrences * category.weight + category.bonus;
            if category.name == CORE_IDENTITY {
                points += 10;
            }
            total += points;
            detected.push(category.name.to_string());
        }
    }

    let mut contact_points = 0;
    if parser::EMAIL_RE.is_match(raw) {
        contact_points += 5;
    }
    if parser::PHONE_RE.is_match(raw) {
        contact_points += 3;
    }
    if contact_points > 0 {
        total += contact_points;
        if !detected.iter().any(|name| name == "Contact") {
            detected.push("Contact".to_string());
        }
    }

    (total, detected)
}

fn non_resume_indicators(normalized: &str, raw: &str) -> Vec<String> {
    let mut found: Vec<String> = NON_RESUME_INDICATORS
        .iter()
        .filter(|indicator| word_occurrences(normalized, indicator) > 0)
        .map(|indicator| indicator.to_string())
        .collect();

    if COMPANY_LIST_PATTERNS.iter().any(|re| re.is_match(raw)) {
        found.push("company list pattern".to_string());
    }

    // A long plain enumeration without any section headers reads like a
    // directory, not a resume.
    if ENUMERATED_LINE_RE.find_iter(raw).count() >= 5 && !parser::has_section_headers(raw) {
        found.push("enumerated list document".to_string());
    }

    found
}

/// Count word-boundary occurrences of `needle` (already lowercase, possibly
/// multi-word) inside normalized text.
fn word_occurrences(haystack: &str, needle: &str) -> usize {
    let bytes = haystack.as_bytes();
    let mut count = 0;
    let mut from = 0;

    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let boundary_before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let boundary_after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if boundary_before && boundary_after {
            count += 1;
        }
        from = start + 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    const RESUME: &str = "\
John Smith
john.smith@email.com
(555) 123-4567

EDUCATION
B.S. Computer Science, Stanford University, GPA 3.8

EXPERIENCE
Software Engineer Intern, Acme Inc
Developed REST APIs and internal tools

SKILLS
Python, JavaScript, SQL, React
";

    #[test]
    fn well_formed_resume_is_accepted() {
        assert!(validate(RESUME, &config()).is_ok());
    }

    #[test]
    fn resume_with_page_markers_is_accepted() {
        let text = format!("--- Page 1 ---\n{}\n--- Page 2 ---\n", RESUME);
        assert!(validate(&text, &config()).is_ok());
    }

    #[test]
    fn empty_and_tiny_inputs_are_rejected() {
        assert!(validate("", &config()).is_err());
        assert!(validate("hello", &config()).is_err());
    }

    #[test]
    fn company_list_is_rejected_with_structure_message() {
        let text = "\
Top 10 IT Companies in India

1. Tata Consultancy Services
2. Infosys Limited
3. Wipro Technologies
4. HCL Technologies
5. Tech Mahindra Limited
6. Accenture Solutions
7. Capgemini Technologies
";
        let rejection = validate(text, &config()).unwrap_err();
        assert!(rejection.message.contains("not a resume"));
        assert!(!rejection.suggestions.is_empty());
    }

    #[test]
    fn certificate_is_rejected() {
        let text = "\
Certificate of Completion

This certifies that John Doe has successfully completed the course
Machine Learning Specialization offered by an online university.
Certificate ID: ABC123XYZ. Congratulations on this achievement!
";
        assert!(validate(text, &config()).is_err());
    }

    #[test]
    fn prose_without_contact_or_headers_is_rejected() {
        let text = "\
The quarterly report shows steady growth across all regions. Revenue
increased due to seasonal demand, and the outlook for next year remains
positive according to management commentary.
";
        let rejection = validate(text, &config()).unwrap_err();
        assert!(rejection.details.is_some());
    }

    #[test]
    fn validation_never_panics_on_binary_garbage() {
        let garbage: String = (0u8..=255).map(|b| b as char).cycle().take(500).collect();
        let _ = validate(&garbage, &config());
    }

    #[test]
    fn word_occurrences_respects_boundaries() {
        assert_eq!(word_occurrences("cv and cvs", "cv"), 1);
        assert_eq!(word_occurrences("work history and history", "work history"), 1);
        assert_eq!(word_occurrences("experience experience", "experience"), 2);
    }
}
