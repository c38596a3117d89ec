use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::license::classifier::classify_license_text;
use crate::models::{LicenseGroup, LicenseKind, SectionKind};

/// The one notice file a run leaves in the project root.
pub const OUTPUT_NAME: &str = "THIRDPARTY_NOTICE.txt";

pub const SEPARATOR: &str = "================================================================";

pub const HEADER: &str = "NOTICES\n\n\
This repository incorporates material as listed below or described in the code. \
The following third-party software components may be included in or distributed with this project.\n\n\
For each component, the entry contains either the full license text or, if the full text is not present, \
a URL or short reference to where the license can be found.\n\n";

/// One emitted block of the notice.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub libraries: Vec<String>,
    pub urls: Vec<String>,
    pub license: LicenseKind,
}

#[derive(Debug, Default)]
pub struct Notice {
    pub content: String,
    pub sections: Vec<Section>,
}

/// Decide whether a group is rendered under "Font(s)" or "Library(ies)".
///
/// `names_lower` must already be lower-cased.
pub fn section_kind(names_lower: &[String], text: &str, font_families: &[String]) -> SectionKind {
    let font_name = names_lower.iter().any(|n| {
        n.contains("font")
            || n.contains("typeface")
            || n.ends_with(".ttf")
            || n.ends_with(".otf")
            || font_families.iter().any(|f| n.contains(f.as_str()))
    });

    let text_lower = text.to_lowercase();
    let ofl_text = text_lower.contains("open font license")
        || text_lower.contains("\nofl")
        || text_lower.contains(" ofl ");

    if font_name || ofl_text {
        SectionKind::Font
    } else {
        SectionKind::Library
    }
}

/// Render all groups, in order, into the notice text.
///
/// A library already emitted by an earlier group is left out of later ones; a group
/// left with no libraries is skipped entirely.
pub fn render_notice(groups: &[LicenseGroup], font_families: &[String]) -> Notice {
    let mut notice = Notice {
        content: HEADER.to_string(),
        sections: Vec::new(),
    };
    let mut seen: HashSet<&str> = HashSet::new();

    for group in groups {
        let libs: Vec<&str> = group
            .libraries
            .iter()
            .map(String::as_str)
            .filter(|lib| !seen.contains(lib))
            .collect();
        if libs.is_empty() {
            continue;
        }

        let names_lower: Vec<String> = libs.iter().map(|l| l.to_lowercase()).collect();
        let kind = section_kind(&names_lower, &group.text, font_families);

        let out = &mut notice.content;
        out.push_str(SEPARATOR);
        out.push('\n');
        if let [only] = libs.as_slice() {
            out.push_str(&format!("{}: {}\n", kind.label(false), only));
        } else {
            out.push_str(&format!("{}:\n", kind.label(true)));
            for lib in &libs {
                out.push_str(&format!(" - {lib}\n"));
            }
        }
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&group.text);
        out.push_str("\n\n");

        notice.sections.push(Section {
            kind,
            libraries: libs.iter().map(|l| l.to_string()).collect(),
            urls: group.urls.iter().cloned().collect(),
            license: classify_license_text(&group.text),
        });
        seen.extend(libs);
    }

    notice
}

/// Write the rendered notice as UTF-8, replacing any previous file.
pub fn write_notice(path: &Path, notice: &Notice) -> Result<()> {
    std::fs::write(path, notice.content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
