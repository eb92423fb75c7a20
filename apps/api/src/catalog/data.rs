use super::{CategoryGroup, RoleGroup, Track};

/// The static role registry, in declaration order.
pub static ROLES: &[RoleGroup] = &[
    RoleGroup {
        name: "Developer",
        categories: &[
            CategoryGroup {
                name: "Web Developer",
                tracks: &[
                    Track {
                        name: "Java",
                        title: "Java Web Developer",
                        path: "Developer → Web Developer → Java",
                        skills: &[
                            "java", "spring", "spring boot", "rest api", "jpa", "hibernate",
                            "maven", "git", "sql", "mysql", "html", "css", "javascript",
                            "docker", "aws",
                        ],
                    },
                    Track {
                        name: "Python",
                        title: "Python Web Developer",
                        path: "Developer → Web Developer → Python",
                        skills: &[
                            "python", "flask", "django", "rest api", "sql", "postgresql",
                            "git", "html", "css", "javascript", "docker", "aws",
                        ],
                    },
                    Track {
                        name: "MERN",
                        title: "MERN Stack Developer",
                        path: "Developer → Web Developer → MERN",
                        skills: &[
                            "javascript", "typescript", "react", "node", "express", "mongodb",
                            "rest api", "git", "html", "css", "docker", "aws",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "Mobile Developer",
                tracks: &[
                    Track {
                        name: "Android",
                        title: "Android Developer",
                        path: "Developer → Mobile Developer → Android",
                        skills: &[
                            "kotlin", "android", "jetpack", "mvvm", "rest api", "git",
                            "firebase", "sqlite", "testing",
                        ],
                    },
                    Track {
                        name: "Flutter",
                        title: "Flutter Developer",
                        path: "Developer → Mobile Developer → Flutter",
                        skills: &[
                            "dart", "flutter", "state management", "rest api", "git",
                            "firebase", "ui", "testing",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "Backend Developer",
                tracks: &[
                    Track {
                        name: "Java",
                        title: "Java Backend Developer",
                        path: "Developer → Backend Developer → Java",
                        skills: &[
                            "java", "spring boot", "microservices", "rest api", "sql",
                            "postgresql", "redis", "kafka", "docker", "kubernetes", "aws",
                            "git", "testing",
                        ],
                    },
                    Track {
                        name: "Python",
                        title: "Python Backend Developer",
                        path: "Developer → Backend Developer → Python",
                        skills: &[
                            "python", "fastapi", "django", "rest api", "sql", "postgresql",
                            "redis", "celery", "docker", "aws", "git", "testing",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "Data",
        categories: &[
            CategoryGroup {
                name: "Data Analyst",
                tracks: &[
                    Track {
                        name: "General",
                        title: "Data Analyst",
                        path: "Data → Data Analyst → General",
                        skills: &[
                            "excel", "sql", "python", "pandas", "numpy", "power bi", "tableau",
                            "statistics", "data analysis", "data visualization",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "Data Scientist",
                tracks: &[
                    Track {
                        name: "ML",
                        title: "Data Scientist",
                        path: "Data → Data Scientist → ML",
                        skills: &[
                            "python", "pandas", "numpy", "statistics", "machine learning",
                            "scikit-learn", "feature engineering", "model evaluation", "sql",
                            "data visualization",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "Data Engineer",
                tracks: &[
                    Track {
                        name: "Cloud",
                        title: "Data Engineer",
                        path: "Data → Data Engineer → Cloud",
                        skills: &[
                            "python", "sql", "etl", "airflow", "spark", "data warehousing",
                            "aws", "s3", "redshift", "glue", "kafka", "docker",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "AI/ML",
        categories: &[
            CategoryGroup {
                name: "ML Engineer",
                tracks: &[
                    Track {
                        name: "General",
                        title: "ML Engineer",
                        path: "AI/ML → ML Engineer → General",
                        skills: &[
                            "python", "machine learning", "scikit-learn", "pandas", "numpy",
                            "model deployment", "fastapi", "docker", "aws", "mlops", "git",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "NLP Engineer",
                tracks: &[
                    Track {
                        name: "Transformers",
                        title: "NLP Engineer",
                        path: "AI/ML → NLP Engineer → Transformers",
                        skills: &[
                            "python", "nlp", "transformers", "pytorch", "huggingface",
                            "tokenization", "model fine-tuning", "evaluation", "docker", "api",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "Cloud/DevOps",
        categories: &[
            CategoryGroup {
                name: "DevOps Engineer",
                tracks: &[
                    Track {
                        name: "AWS",
                        title: "DevOps Engineer",
                        path: "Cloud/DevOps → DevOps Engineer → AWS",
                        skills: &[
                            "linux", "git", "docker", "kubernetes", "ci/cd", "github actions",
                            "terraform", "aws", "monitoring", "logging",
                        ],
                    },
                ],
            },
            CategoryGroup {
                name: "Cloud Engineer",
                tracks: &[
                    Track {
                        name: "AWS",
                        title: "Cloud Engineer",
                        path: "Cloud/DevOps → Cloud Engineer → AWS",
                        skills: &[
                            "aws", "iam", "ec2", "s3", "vpc", "lambda", "cloudwatch",
                            "terraform", "linux", "networking",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "Security",
        categories: &[
            CategoryGroup {
                name: "Cybersecurity Analyst",
                tracks: &[
                    Track {
                        name: "SOC",
                        title: "Cybersecurity Analyst",
                        path: "Security → Cybersecurity Analyst → SOC",
                        skills: &[
                            "networking", "linux", "siem", "incident response", "logs",
                            "threat analysis", "vulnerability", "security basics",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "QA",
        categories: &[
            CategoryGroup {
                name: "QA Engineer",
                tracks: &[
                    Track {
                        name: "Automation",
                        title: "QA Automation Engineer",
                        path: "QA → QA Engineer → Automation",
                        skills: &[
                            "testing", "test cases", "selenium", "api testing", "postman",
                            "python", "java", "git", "ci/cd",
                        ],
                    },
                ],
            },
        ],
    },
    RoleGroup {
        name: "Product",
        categories: &[
            CategoryGroup {
                name: "Business Analyst",
                tracks: &[
                    Track {
                        name: "IT",
                        title: "Business Analyst (IT)",
                        path: "Product → Business Analyst → IT",
                        skills: &[
                            "requirements", "user stories", "sql", "excel", "communication",
                            "agile", "jira", "process",
                        ],
                    },
                ],
            },
        ],
    },
];
