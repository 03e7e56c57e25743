// src/engine/catalog.rs
//! Job-role keyword catalog plus the word lists the content and ATS
//! heuristics rely on. Catalog order is significant: role suggestions break
//! overlap ties by catalog position.

/// Keyword profile for one job role.
pub struct RoleProfile {
    /// Lowercase role name matched against the requested job role.
    pub role: &'static str,
    /// Alternative lowercase names that also select this profile.
    pub aliases: &'static [&'static str],
    /// Display name used in role suggestions.
    pub display: &'static str,
    /// Lowercase keywords expected on a resume targeting this role.
    pub keywords: &'static [&'static str],
}

pub const ROLE_CATALOG: &[RoleProfile] = &[
    RoleProfile {
        role: "software engineer",
        aliases: &["software developer"],
        display: "Software Engineer",
        keywords: &[
            "python", "java", "javascript", "react", "node.js", "sql", "git", "api",
            "database", "algorithms", "data structures", "testing", "debugging", "agile",
            "scrum",
        ],
    },
    RoleProfile {
        role: "frontend developer",
        aliases: &["front-end developer", "web developer"],
        display: "Frontend Developer",
        keywords: &[
            "javascript", "typescript", "react", "vue", "angular", "html", "css",
            "responsive", "webpack", "npm", "git", "testing", "accessibility",
            "performance",
        ],
    },
    RoleProfile {
        role: "backend developer",
        aliases: &["back-end developer"],
        display: "Backend Developer",
        keywords: &[
            "python", "java", "node.js", "api", "rest", "database", "sql",
            "microservices", "docker", "kubernetes", "aws", "testing", "security",
            "scalability",
        ],
    },
    RoleProfile {
        role: "ml engineer",
        aliases: &["machine learning engineer", "ai engineer"],
        display: "ML Engineer",
        keywords: &[
            "python", "tensorflow", "pytorch", "scikit-learn", "machine learning",
            "deep learning", "nlp", "pandas", "numpy", "statistics", "mlops",
            "model deployment", "feature engineering", "docker",
        ],
    },
    RoleProfile {
        role: "data scientist",
        aliases: &["data analyst"],
        display: "Data Scientist",
        keywords: &[
            "python", "r", "machine learning", "statistics", "pandas", "numpy",
            "tensorflow", "pytorch", "sql", "tableau", "visualization", "modeling",
            "analysis", "research",
        ],
    },
    RoleProfile {
        role: "devops engineer",
        aliases: &["site reliability engineer", "sre"],
        display: "DevOps Engineer",
        keywords: &[
            "docker", "kubernetes", "aws", "azure", "jenkins", "terraform", "ansible",
            "linux", "monitoring", "ci/cd", "automation", "infrastructure", "security",
            "scripting",
        ],
    },
    RoleProfile {
        role: "product manager",
        aliases: &["product owner"],
        display: "Product Manager",
        keywords: &[
            "strategy", "roadmap", "stakeholder", "requirements", "analytics",
            "user experience", "market research", "agile", "scrum", "leadership",
            "communication", "metrics",
        ],
    },
];

/// Verbs that indicate substantive, achievement-oriented bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "created", "built", "designed", "implemented", "managed", "led",
    "improved", "optimized", "achieved", "delivered", "collaborated", "analyzed",
    "researched", "established", "maintained", "coordinated", "executed", "launched",
    "automated",
];

/// Words that signal technical depth in experience or project descriptions.
pub const TECHNICAL_INDICATORS: &[&str] = &[
    "architecture", "framework", "algorithm", "optimization", "scalability",
    "performance", "security", "integration", "deployment", "testing",
];

/// Find the catalog profile for a requested job role. Matching is
/// case-insensitive: the profile applies when its name or one of its aliases
/// occurs inside the requested role string, so "Senior ML Engineer" resolves
/// to the ML profile.
pub fn find_role(job_role: &str) -> Option<&'static RoleProfile> {
    let requested = job_role.to_lowercase();
    ROLE_CATALOG.iter().find(|profile| {
        requested.contains(profile.role)
            || profile.aliases.iter().any(|alias| requested.contains(alias))
    })
}

/// Rank alternative roles by how many of their keywords appear among the
/// detected skills. Only roles with at least one overlapping keyword are
/// suggested; ties keep catalog order.
pub fn suggest_roles(skills: &[String], max_roles: usize) -> Vec<String> {
    let skills_text = skills.join(" ").to_lowercase();

    let mut ranked: Vec<(usize, &RoleProfile)> = ROLE_CATALOG
        .iter()
        .map(|profile| {
            let overlap = profile
                .keywords
                .iter()
                .filter(|keyword| skills_text.contains(*keyword))
                .count();
            (overlap, profile)
        })
        .filter(|(overlap, _)| *overlap > 0)
        .collect();

    // Stable sort keeps catalog order for equal overlap counts.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(max_roles)
        .map(|(_, profile)| profile.display.to_string())
        .collect()
}
