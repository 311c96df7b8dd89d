//! Developer records loaded into every fresh `MemStorage`.

use crate::models::{Developer, ProjectHighlight};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_developers() -> Vec<Developer> {
    vec![
        Developer {
            id: 1,
            name: "Alex Chen".to_string(),
            username: "alexchen".to_string(),
            location: "San Francisco, CA".to_string(),
            skills: strings(&["React", "Node.js", "Python", "Django", "PostgreSQL", "AWS"]),
            experience: "3.5y".to_string(),
            projects: 8,
            rating: "4.9".to_string(),
            summary: "Built fintech apps with React & Python. Led team in blockchain hackathon, \
                      created trading dashboard."
                .to_string(),
            detailed_summary: Some(
                "Alex is an exceptionally talented full-stack developer with a proven track \
                 record in fintech applications. His experience building complex financial \
                 dashboards and real-time trading systems makes him an ideal candidate for \
                 projects requiring both technical excellence and domain expertise in finance."
                    .to_string(),
            ),
            github_url: Some("https://github.com/alexchen".to_string()),
            linkedin_url: Some("https://linkedin.com/in/alexchen".to_string()),
            hourly_rate: Some("$85/hr".to_string()),
            project_date: Some("2024-01".to_string()),
            match_score: Some(95),
            project_highlights: Some(vec![
                ProjectHighlight {
                    title: "FinanceTracker Pro".to_string(),
                    description: "Built a comprehensive personal finance management \
                                  application with real-time bank integration and AI-powered \
                                  spending insights."
                        .to_string(),
                    technologies: strings(&["React", "Python", "ML"]),
                },
                ProjectHighlight {
                    title: "Blockchain Trading Dashboard".to_string(),
                    description: "Led a team of 4 developers to create a real-time \
                                  cryptocurrency trading dashboard with advanced charting and \
                                  portfolio management."
                        .to_string(),
                    technologies: strings(&["Vue.js", "WebSocket", "Chart.js"]),
                },
            ]),
        },
        Developer {
            id: 2,
            name: "Sarah Rodriguez".to_string(),
            username: "sarahrod".to_string(),
            location: "Austin, TX".to_string(),
            skills: strings(&["Vue.js", "Django", "PostgreSQL", "Docker", "Kubernetes"]),
            experience: "5.2y".to_string(),
            projects: 12,
            rating: "4.8".to_string(),
            summary: "Full-stack developer specializing in e-commerce. Won health-tech \
                      hackathon with ML recommendation engine."
                .to_string(),
            detailed_summary: Some(
                "Sarah brings extensive experience in building scalable e-commerce platforms \
                 and has a strong background in machine learning applications for health \
                 technology."
                    .to_string(),
            ),
            github_url: Some("https://github.com/sarahrod".to_string()),
            linkedin_url: Some("https://linkedin.com/in/sarahrod".to_string()),
            hourly_rate: Some("$95/hr".to_string()),
            project_date: Some("2023-12".to_string()),
            match_score: Some(92),
            project_highlights: Some(vec![]),
        },
        Developer {
            id: 3,
            name: "Marcus Kim".to_string(),
            username: "marcusk".to_string(),
            location: "Seattle, WA".to_string(),
            skills: strings(&[
                "Angular",
                "Java",
                "MongoDB",
                "Spring Boot",
                "Microservices",
                "AWS",
                "DevOps",
            ]),
            experience: "6.1y".to_string(),
            projects: 15,
            rating: "4.7".to_string(),
            summary: "Enterprise software architect. Created IoT monitoring system, won smart \
                      city hackathon with data visualization."
                .to_string(),
            detailed_summary: Some(
                "Marcus specializes in enterprise-grade software architecture with expertise \
                 in IoT systems and data visualization platforms for smart city applications."
                    .to_string(),
            ),
            github_url: Some("https://github.com/marcusk".to_string()),
            linkedin_url: Some("https://linkedin.com/in/marcusk".to_string()),
            hourly_rate: Some("$120/hr".to_string()),
            project_date: Some("2023-11".to_string()),
            match_score: Some(88),
            project_highlights: Some(vec![]),
        },
    ]
}
