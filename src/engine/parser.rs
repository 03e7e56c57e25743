// src/engine/parser.rs
//! Heuristic section parser: pure functions from extracted text to
//! structured `Sections`. Parsing never fails; anything that cannot be
//! detected simply comes back empty and is reported as an issue by the
//! scorer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{ContactInfo, Sections};

/// Page-break markers emitted by PDF text extraction, e.g. `--- Page 2 ---`.
pub static PAGE_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*-{2,}\s*Page\s+\d+\s*-{2,}\s*$").unwrap());

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    // "Austin, TX" or "New York, New York"
    Regex::new(r"\b([A-Z][a-z]+(?: [A-Z][a-z]+)*),\s*([A-Z]{2}|[A-Z][a-z]+)\b").unwrap()
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(https?://|www\.|linkedin\.com|github\.com)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

/// Classify a line as a recognized section header, if it is one. Headers are
/// short label lines such as "EXPERIENCE" or "Technical Skills:"; matching is
/// case-insensitive and tolerates a trailing colon.
fn header_kind(line: &str) -> Option<SectionKind> {
    let label = line.trim().trim_end_matches(':').trim();
    if label.is_empty() || label.len() > 40 {
        return None;
    }

    match label.to_uppercase().as_str() {
        "SUMMARY" | "PROFESSIONAL SUMMARY" | "OBJECTIVE" | "CAREER OBJECTIVE" | "PROFILE"
        | "ABOUT ME" => Some(SectionKind::Summary),
        "EDUCATION" | "ACADEMIC BACKGROUND" | "QUALIFICATIONS" | "ACADEMICS" => {
            Some(SectionKind::Education)
        }
        "EXPERIENCE" | "WORK EXPERIENCE" | "PROFESSIONAL EXPERIENCE" | "EMPLOYMENT"
        | "EMPLOYMENT HISTORY" | "WORK HISTORY" => Some(SectionKind::Experience),
        "SKILLS" | "TECHNICAL SKILLS" | "CORE SKILLS" | "KEY SKILLS" | "TECHNOLOGIES"
        | "SKILLS & TOOLS" => Some(SectionKind::Skills),
        "PROJECTS" | "PERSONAL PROJECTS" | "ACADEMIC PROJECTS" | "SELECTED PROJECTS" => {
            Some(SectionKind::Projects)
        }
        "CERTIFICATIONS" | "CERTIFICATES" | "LICENSES" | "LICENSES & CERTIFICATIONS" => {
            Some(SectionKind::Certifications)
        }
        _ => None,
    }
}

/// True when the text contains at least one recognized section header. Used
/// by the validator's structural check.
pub fn has_section_headers(text: &str) -> bool {
    text.lines().any(|line| header_kind(line).is_some())
}

/// Remove page-break markers so they never leak into names or section
/// content.
pub fn strip_page_markers(text: &str) -> String {
    PAGE_MARKER_RE.replace_all(text, "").into_owned()
}

/// Parse extracted resume text into structured sections. Never fails.
pub fn parse(text: &str) -> Sections {
    let text = strip_page_markers(text);
    let lines: Vec<&str> = text.lines().collect();

    let mut sections = Sections {
        contact_info: extract_contact_info(&text, &lines),
        ..Sections::default()
    };

    // Header-bounded block extraction: each recognized header owns the lines
    // up to the next recognized header or end of document.
    let headers: Vec<(usize, SectionKind)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| header_kind(line).map(|kind| (idx, kind)))
        .collect();

    for (pos, &(start, kind)) in headers.iter().enumerate() {
        let end = headers
            .get(pos + 1)
            .map(|&(next, _)| next)
            .unwrap_or(lines.len());

        let entries: Vec<String> = lines[start + 1..end]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        match kind {
            SectionKind::Education => sections.education.extend(entries),
            SectionKind::Experience => sections.experience.extend(entries),
            SectionKind::Projects => sections.projects.extend(entries),
            SectionKind::Certifications => sections.certifications.extend(entries),
            SectionKind::Skills => {
                append_skills(&mut sections.skills, &entries);
            }
            SectionKind::Summary => {}
        }
    }

    sections
}

fn extract_contact_info(text: &str, lines: &[&str]) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|p| p.chars().filter(|c| c.is_ascii_digit()).count() >= 10);
    let location = LOCATION_RE.find(text).map(|m| m.as_str().to_string());
    let name = extract_name(lines);

    ContactInfo {
        name,
        email,
        phone,
        location,
    }
}

/// The name is taken as the most name-like line near the top of the
/// document: short, title-cased, free of digits, emails, URLs and section
/// labels. First matching candidate wins.
fn extract_name(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| is_name_candidate(line))
        .map(str::to_string)
}

fn is_name_candidate(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 4 {
        return false;
    }
    if header_kind(line).is_some() {
        return false;
    }
    if line.chars().any(|c| c.is_ascii_digit())
        || line.contains('@')
        || URL_RE.is_match(line)
    {
        return false;
    }
    let lowered = line.to_lowercase();
    if ["resume", "curriculum", "vitae"].iter().any(|w| lowered.contains(w))
        || lowered == "cv"
    {
        return false;
    }
    // Every word starts with an uppercase letter (handles "John Doe" and
    // all-caps names alike); allow dots, apostrophes and hyphens inside.
    words.iter().all(|word| {
        word.chars().next().is_some_and(|c| c.is_uppercase())
            && word
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'))
    })
}

/// Split skills-section lines on common delimiters into discrete tokens,
/// deduplicated case-insensitively while preserving first-seen casing and
/// order.
fn append_skills(skills: &mut Vec<String>, entries: &[String]) {
    let mut seen: std::collections::HashSet<String> =
        skills.iter().map(|s| s.to_lowercase()).collect();

    for entry in entries {
        for token in entry.split(|c| matches!(c, ',' | ';' | '|' | '•' | '·' | '\t')) {
            let token = token
                .trim()
                .trim_start_matches(['-', '*', '•'])
                .trim();
            if token.len() < 2 || token.len() > 40 {
                continue;
            }
            let key = token.to_lowercase();
            if seen.insert(key) {
                skills.push(token.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
John Smith
john.smith@email.com
(555) 123-4567
Austin, TX

EDUCATION
B.S. Computer Science, Stanford University

EXPERIENCE
Software Engineer at Acme Corp
Developed billing services handling 2M requests per day

SKILLS
Python, Rust | Docker, Kubernetes
- PostgreSQL

PROJECTS
Inventory tracker built with React
";

    #[test]
    fn extracts_contact_info() {
        let sections = parse(SAMPLE);
        let contact = &sections.contact_info;
        assert_eq!(contact.name.as_deref(), Some("John Smith"));
        assert_eq!(contact.email.as_deref(), Some("john.smith@email.com"));
        assert_eq!(contact.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(contact.location.as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn blocks_are_bounded_by_next_header() {
        let sections = parse(SAMPLE);
        assert_eq!(
            sections.education,
            vec!["B.S. Computer Science, Stanford University".to_string()]
        );
        assert_eq!(sections.experience.len(), 2);
        assert_eq!(
            sections.projects,
            vec!["Inventory tracker built with React".to_string()]
        );
        // Skills block must not swallow the projects block.
        assert!(!sections.skills.iter().any(|s| s.contains("Inventory")));
    }

    #[test]
    fn skills_split_on_delimiters_and_bullets() {
        let sections = parse(SAMPLE);
        assert_eq!(
            sections.skills,
            vec!["Python", "Rust", "Docker", "Kubernetes", "PostgreSQL"]
        );
    }

    #[test]
    fn skills_dedupe_is_case_insensitive_keeping_first_casing() {
        let text = "SKILLS\nPython, python, PYTHON\n";
        let sections = parse(text);
        assert_eq!(sections.skills, vec!["Python".to_string()]);
    }

    #[test]
    fn page_marker_is_never_the_name() {
        let text = "--- Page 1 ---\nMAHENDRA KUMAR\nmahendra@email.com\n\nEXPERIENCE\nBuilt things\n";
        let sections = parse(text);
        assert_eq!(sections.contact_info.name.as_deref(), Some("MAHENDRA KUMAR"));
    }

    #[test]
    fn header_line_is_not_a_name() {
        let text = "SUMMARY\nExperienced engineer\nJane Doe\n";
        let sections = parse(text);
        // "Experienced engineer" is lowercase-second-word, "Jane Doe" wins.
        assert_eq!(sections.contact_info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn empty_text_parses_to_empty_sections() {
        let sections = parse("");
        assert_eq!(sections, Sections::default());
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(parse(SAMPLE), parse(SAMPLE));
    }
}
