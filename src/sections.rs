use std::{fmt, str::FromStr};

use thiserror::Error;

/// Distance below the top of the viewport used when deciding which section is in view.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Certifications,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Home",
        section: SectionId::Home,
    },
    NavItem {
        label: "About",
        section: SectionId::About,
    },
    NavItem {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavItem {
        label: "Certifications",
        section: SectionId::Certifications,
    },
    NavItem {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Experience",
        section: SectionId::Experience,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

/// Vertical placement of a section within the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `top` is inside, `top + height` is not.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Access to the rendered sections, backed by the DOM in the browser.
pub trait SectionLayout {
    /// `None` when no element with the section's id is in the document.
    fn extent(&self, section: SectionId) -> Option<SectionExtent>;

    /// Smoothly scrolls the section into view. Returns whether the section existed.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

/// Picks the first section, in document order, whose extent contains
/// `scroll_y + SCROLL_LOOKAHEAD`. Sections missing from the layout are skipped.
pub fn section_at<L: SectionLayout + ?Sized>(layout: &L, scroll_y: f64) -> Option<SectionId> {
    let position = scroll_y + SCROLL_LOOKAHEAD;
    SectionId::ALL.into_iter().find(|section| {
        layout
            .extent(*section)
            .is_some_and(|extent| extent.contains(position))
    })
}

/// Resolves the section to highlight after a scroll, keeping `current`
/// when no section contains the lookahead position.
pub fn next_active_section<L: SectionLayout + ?Sized>(
    layout: &L,
    current: SectionId,
    scroll_y: f64,
) -> SectionId {
    section_at(layout, scroll_y).unwrap_or(current)
}

pub fn scroll_to_section<L: SectionLayout + ?Sized>(layout: &L, section: SectionId) {
    if !layout.scroll_into_view(section) {
        log::debug!("no element for section '{section}', skipping scroll");
    }
}
