use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::content::{Accent, Icon};

pub const CARD_IMAGE_SIZE: (u32, u32) = (200, 120);
pub const MODAL_IMAGE_SIZE: (u32, u32) = (600, 400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificateId {
    Cissp,
    Ceh,
    Gcih,
    Tensorflow,
    AwsMl,
    AwsSa,
}

impl CertificateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cissp => "cissp",
            Self::Ceh => "ceh",
            Self::Gcih => "gcih",
            Self::Tensorflow => "tensorflow",
            Self::AwsMl => "aws-ml",
            Self::AwsSa => "aws-sa",
        }
    }

    /// Heading shown in the certificate modal.
    pub fn modal_title(&self) -> &'static str {
        match self {
            Self::Cissp => "CISSP - Certified Information Systems Security Professional",
            Self::Ceh => "CEH - Certified Ethical Hacker",
            Self::Gcih => "GCIH - GIAC Certified Incident Handler",
            Self::Tensorflow => "TensorFlow Developer Certificate",
            Self::AwsMl => "AWS Certified Machine Learning - Specialty",
            Self::AwsSa => "AWS Certified Solutions Architect - Professional",
        }
    }

    pub fn certificate(&self) -> &'static Certificate {
        match self {
            Self::Cissp => &CERTIFICATES[0],
            Self::Ceh => &CERTIFICATES[1],
            Self::Gcih => &CERTIFICATES[2],
            Self::Tensorflow => &CERTIFICATES[3],
            Self::AwsMl => &CERTIFICATES[4],
            Self::AwsSa => &CERTIFICATES[5],
        }
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown certificate: {0}")]
pub struct UnknownCertificate(pub String);

impl FromStr for CertificateId {
    type Err = UnknownCertificate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CERTIFICATES
            .iter()
            .map(|c| c.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCertificate(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertCategory {
    Security,
    #[serde(rename = "Data Science")]
    DataScience,
    Cloud,
}

impl CertCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::DataScience => "Data Science",
            Self::Cloud => "Cloud",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Self::Security => Accent::Red,
            Self::DataScience => Accent::Blue,
            Self::Cloud => Accent::Green,
        }
    }
}

/// Serializes as a schema.org `EducationalOccupationalCredential`.
#[derive(Debug, Clone, Serialize)]
#[serde(
    tag = "@type",
    rename = "EducationalOccupationalCredential",
    rename_all = "camelCase"
)]
pub struct Certificate {
    #[serde(rename = "identifier")]
    pub id: CertificateId,
    #[serde(skip)]
    pub title: &'static str,
    pub name: &'static str,
    #[serde(rename = "recognizedBy", serialize_with = "organization")]
    pub issuer: &'static str,
    #[serde(skip)]
    pub issue_year: u16,
    pub valid_until: NaiveDate,
    #[serde(rename = "credentialCategory")]
    pub category: CertCategory,
    #[serde(skip)]
    pub icon: Icon,
    /// Alt text for the certificate thumbnail.
    #[serde(skip)]
    pub image_alt: &'static str,
}

impl Certificate {
    pub fn valid_until_label(&self) -> String {
        self.valid_until.format("%b %Y").to_string()
    }
}

fn organization<S: Serializer>(name: &&'static str, serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Organization<'a> {
        #[serde(rename = "@type")]
        kind: &'static str,
        name: &'a str,
    }

    Organization {
        kind: "Organization",
        name: *name,
    }
    .serialize(serializer)
}

const fn month(year: i32, month: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => panic!("invalid certificate expiry"),
    }
}

pub static CERTIFICATES: [Certificate; 6] = [
    Certificate {
        id: CertificateId::Cissp,
        title: "CISSP",
        name: "Certified Information Systems Security Professional",
        issuer: "ISC²",
        issue_year: 2023,
        valid_until: month(2026, 12),
        category: CertCategory::Security,
        icon: Icon::Shield,
        image_alt: "CISSP Certificate",
    },
    Certificate {
        id: CertificateId::Ceh,
        title: "CEH",
        name: "Certified Ethical Hacker",
        issuer: "EC-Council",
        issue_year: 2022,
        valid_until: month(2025, 8),
        category: CertCategory::Security,
        icon: Icon::Lock,
        image_alt: "CEH Certificate",
    },
    Certificate {
        id: CertificateId::Gcih,
        title: "GCIH",
        name: "GIAC Certified Incident Handler",
        issuer: "SANS/GIAC",
        issue_year: 2023,
        valid_until: month(2027, 1),
        category: CertCategory::Security,
        icon: Icon::Eye,
        image_alt: "GCIH Certificate",
    },
    Certificate {
        id: CertificateId::Tensorflow,
        title: "TensorFlow Developer",
        name: "TensorFlow Developer Certificate",
        issuer: "Google",
        issue_year: 2023,
        valid_until: month(2026, 3),
        category: CertCategory::DataScience,
        icon: Icon::Brain,
        image_alt: "TensorFlow Certificate",
    },
    Certificate {
        id: CertificateId::AwsMl,
        title: "AWS ML Specialty",
        name: "AWS Certified Machine Learning - Specialty",
        issuer: "Amazon Web Services",
        issue_year: 2022,
        valid_until: month(2025, 11),
        category: CertCategory::DataScience,
        icon: Icon::BarChart,
        image_alt: "AWS ML Certificate",
    },
    Certificate {
        id: CertificateId::AwsSa,
        title: "AWS Solutions Architect",
        name: "AWS Certified Solutions Architect - Professional",
        issuer: "Amazon Web Services",
        issue_year: 2023,
        valid_until: month(2026, 9),
        category: CertCategory::Cloud,
        icon: Icon::Server,
        image_alt: "AWS Solutions Architect Certificate",
    },
];

/// Interactions that can reach the certificate modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    CardClicked(CertificateId),
    BackdropClicked,
    DismissClicked,
    /// Clicks inside the dialog body; stopped before they reach the backdrop.
    BodyClicked,
    EscapePressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertModal {
    #[default]
    Closed,
    Open(CertificateId),
}

impl CertModal {
    pub fn selected(&self) -> Option<CertificateId> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(*id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn handle(&mut self, event: ModalEvent) {
        match event {
            ModalEvent::CardClicked(id) => *self = Self::Open(id),
            ModalEvent::BackdropClicked
            | ModalEvent::DismissClicked
            | ModalEvent::EscapePressed => *self = Self::Closed,
            ModalEvent::BodyClicked => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertStat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

// Literal figures shown under the grid. These are not computed from CERTIFICATES.
pub const CERT_STATS: [CertStat; 4] = [
    CertStat {
        value: "6+",
        label: "Active Certifications",
        accent: Accent::Primary,
    },
    CertStat {
        value: "3",
        label: "Security Certs",
        accent: Accent::Red,
    },
    CertStat {
        value: "2",
        label: "Data Science Certs",
        accent: Accent::Blue,
    },
    CertStat {
        value: "1",
        label: "Cloud Architecture",
        accent: Accent::Green,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_ids() -> Vec<CertificateId> {
        CERTIFICATES.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_certificate_ids_are_unique_and_indexed() {
        let ids = all_ids();
        assert_eq!(ids.len(), 6);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
            assert_eq!(id.certificate().id, *id);
        }
    }

    #[test]
    fn test_id_parsing() {
        for id in all_ids() {
            assert_eq!(id.as_str().parse::<CertificateId>(), Ok(id));
        }
        assert_eq!(
            "oscp".parse::<CertificateId>(),
            Err(UnknownCertificate("oscp".to_string()))
        );
        assert!("".parse::<CertificateId>().is_err());
    }

    #[test]
    fn test_modal_titles() {
        let expected = [
            ("cissp", "CISSP - Certified Information Systems Security Professional"),
            ("ceh", "CEH - Certified Ethical Hacker"),
            ("gcih", "GCIH - GIAC Certified Incident Handler"),
            ("tensorflow", "TensorFlow Developer Certificate"),
            ("aws-ml", "AWS Certified Machine Learning - Specialty"),
            ("aws-sa", "AWS Certified Solutions Architect - Professional"),
        ];
        for (id, title) in expected {
            let id = id.parse::<CertificateId>().expect("known id");
            assert_eq!(id.modal_title(), title);
        }
    }

    #[test]
    fn test_modal_starts_closed() {
        let modal = CertModal::default();
        assert_eq!(modal, CertModal::Closed);
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn test_card_click_opens_with_that_card() {
        for id in all_ids() {
            let mut modal = CertModal::default();
            modal.handle(ModalEvent::CardClicked(id));
            assert!(modal.is_open());
            assert_eq!(modal.selected(), Some(id));
            assert_eq!(
                modal.selected().map(|id| id.modal_title()),
                Some(id.modal_title())
            );
        }
    }

    #[test]
    fn test_card_click_while_open_replaces_selection() {
        let mut modal = CertModal::Open(CertificateId::Ceh);
        modal.handle(ModalEvent::CardClicked(CertificateId::AwsSa));
        assert_eq!(modal, CertModal::Open(CertificateId::AwsSa));
    }

    #[test]
    fn test_dismissal_closes() {
        for event in [
            ModalEvent::BackdropClicked,
            ModalEvent::DismissClicked,
            ModalEvent::EscapePressed,
        ] {
            let mut modal = CertModal::Open(CertificateId::Cissp);
            modal.handle(event);
            assert_eq!(modal, CertModal::Closed);
        }
    }

    #[test]
    fn test_body_click_keeps_modal_open() {
        let mut modal = CertModal::Open(CertificateId::Gcih);
        modal.handle(ModalEvent::BodyClicked);
        assert_eq!(modal, CertModal::Open(CertificateId::Gcih));

        let mut closed = CertModal::Closed;
        closed.handle(ModalEvent::BodyClicked);
        assert_eq!(closed, CertModal::Closed);
    }

    #[test]
    fn test_modal_toggles_repeatedly() {
        let mut modal = CertModal::default();
        for id in all_ids().into_iter().cycle().take(12) {
            modal.handle(ModalEvent::CardClicked(id));
            assert_eq!(modal.selected(), Some(id));
            modal.handle(ModalEvent::BackdropClicked);
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn test_valid_until_labels() {
        let labels = CERTIFICATES
            .iter()
            .map(|c| c.valid_until_label())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Dec 2026", "Aug 2025", "Jan 2027", "Mar 2026", "Nov 2025", "Sep 2026"]
        );
    }

    #[test]
    fn test_stat_badges_are_literals() {
        let values = CERT_STATS.iter().map(|s| s.value).collect::<Vec<_>>();
        assert_eq!(values, ["6+", "3", "2", "1"]);
        let labels = CERT_STATS.iter().map(|s| s.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "Active Certifications",
                "Security Certs",
                "Data Science Certs",
                "Cloud Architecture"
            ]
        );
    }

    // The badges are independent of the list: "6+" is not a count, and any
    // edit to CERTIFICATES leaves them untouched.
    #[test]
    fn test_stat_badges_do_not_track_certificate_list() {
        let shortened = &CERTIFICATES[..4];
        assert_ne!(shortened.len().to_string(), CERT_STATS[0].value);
        assert_eq!(CERT_STATS[0].value, "6+");
        let cloud = shortened
            .iter()
            .filter(|c| c.category == CertCategory::Cloud)
            .count();
        assert_eq!(cloud, 0);
        assert_eq!(CERT_STATS[3].value, "1");
    }
}
