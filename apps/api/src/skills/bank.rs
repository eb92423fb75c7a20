//! Keyword bank: the closed vocabulary of canonical skills the detector can
//! recognise, plus the alias table folding common spellings onto it.

/// Canonical skills, lowercase, space-normalized, sorted and deduplicated.
///
/// `ci/cd` and `scikit-learn` contain characters that normalization strips,
/// so free text can never produce them; they stay in the bank because role
/// blueprints reference them.
pub const SKILL_BANK: &[&str] = &[
    ".net", "airflow", "android", "android sdk", "angular", "api testing", "asp.net",
    "automation testing", "aws", "azure", "c#", "ci/cd", "cloudwatch", "css", "dart",
    "data analysis", "data preprocessing", "data visualization", "deep learning", "django",
    "docker", "ec2", "entity framework", "etl", "excel", "express", "feature engineering",
    "firebase", "flask", "gcp", "git", "go", "gradle", "hibernate", "html", "iam",
    "incident response", "java", "javascript", "jenkins", "jira", "jpa", "junit", "kafka",
    "kotlin", "kubernetes", "laravel", "linux", "logging", "machine learning", "maven",
    "microservices", "model deployment", "mongodb", "monitoring", "mysql", "network security",
    "nlp", "node", "numpy", "owasp", "pandas", "php", "playwright", "postgresql", "power bi",
    "python", "pytorch", "react", "redis", "redux", "responsive design", "rest api", "rxjs",
    "s3", "scikit-learn", "selenium", "spacy", "spark", "spring", "spring boot", "sql",
    "statistics", "tableau", "tensorflow", "terraform", "testng", "tokenization",
    "transformers", "typescript", "ui design", "vpc", "vulnerability assessment", "wireshark",
];

/// Compact (whitespace-free) variant → canonical skill, applied in this order.
pub const ALIASES: &[(&str, &str)] = &[
    ("springboot", "spring boot"),
    ("restapis", "rest api"),
    ("restful", "rest api"),
    ("nodejs", "node"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("dotnet", ".net"),
    ("aspnet", "asp.net"),
    ("machinelearning", "machine learning"),
    ("deeplearning", "deep learning"),
    ("powerbi", "power bi"),
];

/// Returns true if `skill` is a canonical bank entry.
#[cfg(test)]
pub fn is_bank_skill(skill: &str) -> bool {
    SKILL_BANK.binary_search(&skill).is_ok()
}
