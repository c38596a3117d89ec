use std::collections::BTreeSet;

use serde::Serialize;

/// One parsed line of the metadata index: a byte range in the license blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub library: String,
    pub offset: u64,
    pub length: u64,
}

/// Decoded license bytes for a single library, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    pub library: String,
    pub text: String,
}

/// What a [`LicenseEntry`] turned into after HTML/URL handling and optional fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub library: String,
    pub text: String,
    pub url: Option<String>,
}

/// Libraries sharing one normalized license body.
#[derive(Debug, Clone)]
pub struct LicenseGroup {
    pub libraries: BTreeSet<String>,
    pub text: String,
    pub urls: BTreeSet<String>,
}

/// License family detected from license text by signature matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LicenseKind {
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "LGPL")]
    Lgpl,
    #[serde(rename = "AGPL")]
    Agpl,
    #[serde(rename = "GPL")]
    Gpl,
    #[serde(rename = "MPL")]
    Mpl,
    #[serde(rename = "EPL")]
    Epl,
    #[serde(rename = "SIL-OFL")]
    SilOfl,
    #[serde(rename = "CC")]
    CreativeCommons,
    Unknown,
}

impl std::fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseKind::Apache2 => write!(f, "Apache-2.0"),
            LicenseKind::Mit => write!(f, "MIT"),
            LicenseKind::Bsd2Clause => write!(f, "BSD-2-Clause"),
            LicenseKind::Bsd3Clause => write!(f, "BSD-3-Clause"),
            LicenseKind::Isc => write!(f, "ISC"),
            LicenseKind::Lgpl => write!(f, "LGPL"),
            LicenseKind::Agpl => write!(f, "AGPL"),
            LicenseKind::Gpl => write!(f, "GPL"),
            LicenseKind::Mpl => write!(f, "MPL"),
            LicenseKind::Epl => write!(f, "EPL"),
            LicenseKind::SilOfl => write!(f, "SIL-OFL"),
            LicenseKind::CreativeCommons => write!(f, "CC"),
            LicenseKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Heading under which a group is rendered in the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Font,
    Library,
}

impl SectionKind {
    pub fn label(&self, plural: bool) -> &'static str {
        match (self, plural) {
            (SectionKind::Font, false) => "Font",
            (SectionKind::Font, true) => "Fonts",
            (SectionKind::Library, false) => "Library",
            (SectionKind::Library, true) => "Libraries",
        }
    }
}
