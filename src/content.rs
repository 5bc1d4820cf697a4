use serde_json::{json, Value};

use crate::certificates::CERTIFICATES;

pub const SITE_URL: &str = "https://alexchen.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Red,
    Blue,
    Green,
}

impl Accent {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::Red => "text-red-600",
            Self::Blue => "text-blue-600",
            Self::Green => "text-green-600",
        }
    }

    pub fn bar(&self) -> &'static str {
        match self {
            Self::Primary => "bg-primary",
            Self::Red => "bg-red-600",
            Self::Blue => "bg-blue-600",
            Self::Green => "bg-green-600",
        }
    }

    pub fn border_left(&self) -> &'static str {
        match self {
            Self::Primary => "border-l-primary",
            Self::Red => "border-l-red-500",
            Self::Blue => "border-l-blue-500",
            Self::Green => "border-l-green-500",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Primary => "bg-muted text-primary border-muted",
            Self::Red => "bg-red-50 text-red-700 border-red-200",
            Self::Blue => "bg-blue-50 text-blue-700 border-blue-200",
            Self::Green => "bg-green-50 text-green-700 border-green-200",
        }
    }
}

/// Icons from the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Database,
    Code,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    GraduationCap,
    Briefcase,
    ChevronDown,
    Lock,
    BarChart,
    Brain,
    Server,
    Eye,
    FileText,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Shield => "icon-shield",
            Self::Database => "icon-database",
            Self::Code => "icon-code",
            Self::Mail => "icon-mail",
            Self::Github => "icon-github",
            Self::Linkedin => "icon-linkedin",
            Self::ExternalLink => "icon-external-link",
            Self::GraduationCap => "icon-graduation-cap",
            Self::Briefcase => "icon-briefcase",
            Self::ChevronDown => "icon-chevron-down",
            Self::Lock => "icon-lock",
            Self::BarChart => "icon-bar-chart-3",
            Self::Brain => "icon-brain",
            Self::Server => "icon-server",
            Self::Eye => "icon-eye",
            Self::FileText => "icon-file-text",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: [&'static str; 2],
    pub focus_tags: [&'static str; 4],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Chen",
    headline: "Data Scientist & Cybersecurity Specialist",
    tagline: "Protecting digital assets while extracting meaningful insights from complex data",
    bio: [
        "I'm a passionate computer science professional with expertise in both data science and cybersecurity. With over 5 years of experience, I specialize in building secure data pipelines, implementing threat detection systems, and extracting actionable insights from complex datasets.",
        "My unique combination of skills allows me to not only analyze data but also ensure its security and integrity throughout the entire data lifecycle. I'm committed to using technology to solve real-world problems while maintaining the highest security standards.",
    ],
    focus_tags: [
        "Python",
        "Machine Learning",
        "Penetration Testing",
        "Cloud Security",
    ],
};

pub struct SkillMeter {
    pub label: &'static str,
    pub percent: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub highlights: [(Icon, &'static str); 4],
    pub meters: [SkillMeter; 2],
}

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        title: "Data Science & Analytics",
        description: "Extracting insights and building predictive models from complex datasets",
        icon: Icon::BarChart,
        accent: Accent::Blue,
        highlights: [
            (Icon::Database, "SQL & NoSQL"),
            (Icon::Brain, "Machine Learning"),
            (Icon::BarChart, "Data Visualization"),
            (Icon::Code, "Python/R"),
        ],
        meters: [
            SkillMeter {
                label: "Python & Libraries",
                percent: 95,
            },
            SkillMeter {
                label: "Statistical Analysis",
                percent: 90,
            },
        ],
    },
    SkillGroup {
        title: "Cybersecurity",
        description: "Protecting systems and data from cyber threats and vulnerabilities",
        icon: Icon::Shield,
        accent: Accent::Red,
        highlights: [
            (Icon::Lock, "Penetration Testing"),
            (Icon::Eye, "Threat Detection"),
            (Icon::Server, "Network Security"),
            (Icon::FileText, "Compliance"),
        ],
        meters: [
            SkillMeter {
                label: "Security Assessment",
                percent: 92,
            },
            SkillMeter {
                label: "Incident Response",
                percent: 88,
            },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub stack: [&'static str; 3],
    pub detail: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Threat Detection System",
        summary: "ML-powered system for real-time cybersecurity threat detection and response",
        icon: Icon::Shield,
        accent: Accent::Red,
        stack: ["Python", "TensorFlow", "SIEM"],
        detail: "Developed an AI system that analyzes network traffic patterns to identify potential security threats with 95% accuracy.",
    },
    Project {
        title: "Customer Analytics Platform",
        summary: "Comprehensive data analytics platform for customer behavior analysis",
        icon: Icon::BarChart,
        accent: Accent::Blue,
        stack: ["React", "Python", "PostgreSQL"],
        detail: "Built a secure analytics platform processing 1M+ daily transactions with advanced visualization and reporting.",
    },
    Project {
        title: "Secure Data Pipeline",
        summary: "End-to-end encrypted data processing pipeline for sensitive healthcare data",
        icon: Icon::Lock,
        accent: Accent::Green,
        stack: ["Apache Kafka", "Docker", "AWS"],
        detail: "Designed HIPAA-compliant data pipeline with zero-trust architecture and end-to-end encryption.",
    },
];

pub enum EntryBody {
    Bullets(&'static [&'static str]),
    Paragraph(&'static str),
}

pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub body: EntryBody,
}

impl ExperienceEntry {
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.organization, self.period)
    }
}

pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        role: "Senior Data Security Analyst",
        organization: "TechCorp Solutions",
        period: "2022 - Present",
        icon: Icon::Briefcase,
        accent: Accent::Primary,
        body: EntryBody::Bullets(&[
            "Led implementation of ML-based threat detection system, reducing false positives by 60%",
            "Designed secure data architecture for processing 10TB+ daily data with zero security incidents",
            "Mentored junior analysts and established security best practices across data teams",
        ]),
    },
    ExperienceEntry {
        role: "Data Scientist",
        organization: "DataInsights Inc",
        period: "2020 - 2022",
        icon: Icon::Database,
        accent: Accent::Blue,
        body: EntryBody::Bullets(&[
            "Developed predictive models improving customer retention by 25%",
            "Built automated reporting systems serving 500+ stakeholders",
            "Implemented data governance framework ensuring GDPR compliance",
        ]),
    },
    ExperienceEntry {
        role: "M.S. Computer Science",
        organization: "Stanford University",
        period: "2018 - 2020",
        icon: Icon::GraduationCap,
        accent: Accent::Green,
        body: EntryBody::Paragraph(
            "Specialization in Machine Learning and Cybersecurity. Thesis: \"Privacy-Preserving Machine Learning for Threat Detection\"",
        ),
    },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const CONTACT_EMAIL: &str = "alex.chen@email.com";

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        display: CONTACT_EMAIL,
        href: "mailto:alex.chen@email.com",
        icon: Icon::Mail,
    },
    ContactChannel {
        label: "LinkedIn",
        display: "linkedin.com/in/alexchen",
        href: "https://linkedin.com/in/alexchen",
        icon: Icon::Linkedin,
    },
    ContactChannel {
        label: "GitHub",
        display: "github.com/alexchen",
        href: "https://github.com/alexchen",
        icon: Icon::Github,
    },
];

/// schema.org `Person` description embedded in the page head.
pub fn structured_data() -> Value {
    let same_as = CONTACT_CHANNELS
        .iter()
        .filter(|c| c.href.starts_with("https://"))
        .map(|c| c.href)
        .collect::<Vec<_>>();
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.headline,
        "description": PROFILE.tagline,
        "email": format!("mailto:{CONTACT_EMAIL}"),
        "url": SITE_URL,
        "sameAs": same_as,
        "knowsAbout": PROFILE.focus_tags,
        "hasCredential": CERTIFICATES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_meters_are_percentages() {
        for group in &SKILL_GROUPS {
            for meter in &group.meters {
                assert!(meter.percent <= 100, "{} over 100%", meter.label);
            }
        }
    }

    #[test]
    fn test_experience_subtitle() {
        assert_eq!(
            EXPERIENCE[0].subtitle(),
            "TechCorp Solutions • 2022 - Present"
        );
        assert_eq!(EXPERIENCE[2].subtitle(), "Stanford University • 2018 - 2020");
    }

    #[test]
    fn test_contact_email_channel_matches() {
        let email = &CONTACT_CHANNELS[0];
        assert_eq!(email.display, CONTACT_EMAIL);
        assert_eq!(email.href, format!("mailto:{CONTACT_EMAIL}"));
    }

    #[test]
    fn test_structured_data() {
        let data = structured_data();
        let text = serde_json::to_string(&data).expect("json serializes");
        let parsed: Value = serde_json::from_str(&text).expect("json parses");
        assert_eq!(parsed["@type"], "Person");
        assert_eq!(parsed["name"], "Alex Chen");
        assert_eq!(parsed["hasCredential"].as_array().map(Vec::len), Some(6));
        assert_eq!(
            parsed["hasCredential"][0],
            json!({
                "@type": "EducationalOccupationalCredential",
                "identifier": "cissp",
                "name": "Certified Information Systems Security Professional",
                "recognizedBy": { "@type": "Organization", "name": "ISC²" },
                "validUntil": "2026-12-01",
                "credentialCategory": "Security",
            })
        );
        assert_eq!(parsed["hasCredential"][4]["identifier"], "aws-ml");
        assert_eq!(
            parsed["hasCredential"][4]["credentialCategory"],
            "Data Science"
        );
        assert_eq!(
            parsed["sameAs"],
            json!(["https://linkedin.com/in/alexchen", "https://github.com/alexchen"])
        );
    }
}
