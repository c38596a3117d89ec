use std::path::Path;

use tracing::debug;

/// Stale notice files share this prefix and the `.txt` suffix.
pub const OUTPUT_PREFIX: &str = "THIRDPARTY_NOTICE";

/// Remove every `THIRDPARTY_NOTICE*.txt` in `project_root` except `keep`.
///
/// Best effort: unreadable directories and failed removals are ignored. Returns the
/// names that were actually removed, sorted.
pub fn remove_stale_notices(project_root: &Path, keep: &str) -> Vec<String> {
    let Ok(dir) = std::fs::read_dir(project_root) else {
        return Vec::new();
    };

    let mut removed: Vec<String> = dir
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            let stale = name.starts_with(OUTPUT_PREFIX) && name.ends_with(".txt") && name != keep;
            if !stale {
                return None;
            }
            match std::fs::remove_file(e.path()) {
                Ok(()) => Some(name),
                Err(err) => {
                    debug!("could not remove {name}: {err}");
                    None
                }
            }
        })
        .collect();

    removed.sort();
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_only_stale_notices() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "THIRDPARTY_NOTICE.txt",
            "THIRDPARTY_NOTICE_old.txt",
            "THIRDPARTY_NOTICE-2.txt",
            "THIRDPARTY_NOTICE.md",
            "README.txt",
        ] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        let removed = remove_stale_notices(dir.path(), "THIRDPARTY_NOTICE.txt");
        assert_eq!(removed, vec!["THIRDPARTY_NOTICE-2.txt", "THIRDPARTY_NOTICE_old.txt"]);

        assert!(dir.path().join("THIRDPARTY_NOTICE.txt").exists());
        assert!(dir.path().join("THIRDPARTY_NOTICE.md").exists());
        assert!(dir.path().join("README.txt").exists());
        assert!(!dir.path().join("THIRDPARTY_NOTICE_old.txt").exists());
    }

    #[test]
    fn test_missing_root_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_stale_notices(&dir.path().join("gone"), "THIRDPARTY_NOTICE.txt").is_empty());
    }
}
