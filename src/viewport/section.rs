use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Page regions that take part in nav highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Objectives,
    Projects,
    Events,
    Members,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section anchor `{0}`")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Objectives,
        SectionId::Projects,
        SectionId::Events,
        SectionId::Members,
        SectionId::Contact,
    ];

    /// Sections listed in the header and footer navigation.
    pub const NAV: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Events,
        SectionId::Members,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Objectives => "objectives",
            SectionId::Projects => "projects",
            SectionId::Events => "events",
            SectionId::Members => "members",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Objectives => "Objectives",
            SectionId::Projects => "Projects",
            SectionId::Events => "Events",
            SectionId::Members => "Members",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == anchor)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_parse_back() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
            assert_eq!(id.href().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert_eq!(
            "join-us".parse::<SectionId>(),
            Err(UnknownSection("join-us".to_string()))
        );
    }

    #[test]
    fn nav_skips_objectives() {
        assert!(!SectionId::NAV.contains(&SectionId::Objectives));
        assert_eq!(SectionId::NAV[0], SectionId::default());
    }
}
