use std::path::PathBuf;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::models::SectionKind;
use crate::report::notice::Section;

/// Everything worth telling the user once the notice is on disk.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub metadata: PathBuf,
    pub licenses: PathBuf,
    pub output: PathBuf,
    pub raw_entries: usize,
    pub groups: usize,
    pub sections: &'a [Section],
    pub removed: &'a [String],
}

impl RunSummary<'_> {
    fn count(&self, kind: SectionKind) -> usize {
        self.sections.iter().filter(|s| s.kind == kind).count()
    }
}

/// Print the run summary in colour; `quiet` collapses it to a single line.
pub fn render(summary: &RunSummary<'_>, quiet: bool) {
    let line = format!(
        "{} has been generated ({} grouped entries from {} raw entries).",
        summary.output.display(),
        summary.groups,
        summary.raw_entries
    );

    if quiet {
        println!("{line}");
        return;
    }

    println!(
        "\n {} v{}",
        "thirdparty-notice".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" {} {}", "metadata:".dimmed(), summary.metadata.display());
    println!(" {} {}", "licenses:".dimmed(), summary.licenses.display());
    println!();
    println!(" {} {}", "✓".green(), line);
    println!(
        "   {} library section(s), {} font section(s), {} URL reference(s)",
        summary.count(SectionKind::Library).to_string().cyan(),
        summary.count(SectionKind::Font).to_string().cyan(),
        summary
            .sections
            .iter()
            .map(|s| s.urls.len())
            .sum::<usize>()
            .to_string()
            .cyan(),
    );

    if !summary.removed.is_empty() {
        println!(
            " {} Removed duplicate notice files: {}",
            "→".yellow(),
            summary.removed.join(", ")
        );
    }
}

/// Print the run summary as pretty JSON on stdout.
pub fn render_json(summary: &RunSummary<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LicenseKind;

    #[test]
    fn test_json_shape() {
        let sections = vec![Section {
            kind: SectionKind::Font,
            libraries: vec!["Yomogi".to_string()],
            urls: vec![],
            license: LicenseKind::SilOfl,
        }];
        let removed = vec!["THIRDPARTY_NOTICE_old.txt".to_string()];
        let summary = RunSummary {
            metadata: PathBuf::from("m"),
            licenses: PathBuf::from("l"),
            output: PathBuf::from("THIRDPARTY_NOTICE.txt"),
            raw_entries: 3,
            groups: 1,
            sections: &sections,
            removed: &removed,
        };

        let value: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["raw_entries"], 3);
        assert_eq!(value["sections"][0]["kind"], "font");
        assert_eq!(value["sections"][0]["license"], "SIL-OFL");
        assert_eq!(value["removed"][0], "THIRDPARTY_NOTICE_old.txt");
        assert_eq!(summary.count(SectionKind::Library), 0);
    }
}
