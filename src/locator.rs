use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Built-in locations (relative to the project root) where the build drops its license resources.
pub const DEFAULT_SEARCH_ROOTS: [&str; 2] = [
    "app/build/generated/third_party_licenses",
    "app/src/main/res/raw",
];

/// Why the inputs could not be resolved. Every variant maps to exit code 2.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("No search roots found. Tried: {}", display_paths(.0))]
    NoSearchRoots(Vec<PathBuf>),
    #[error("Metadata file not found: {0}")]
    MetadataNotFound(String),
    #[error("Combined licenses file not found: {0}")]
    LicensesNotFound(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the caller asked for; everything optional except the project root.
#[derive(Debug)]
pub struct LocateRequest<'a> {
    pub project_root: &'a Path,
    pub root: Option<&'a Path>,
    pub extra_roots: &'a [PathBuf],
    pub metadata: Option<&'a Path>,
    pub licenses: Option<&'a Path>,
    pub metadata_name: &'a str,
    pub licenses_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub metadata: PathBuf,
    pub licenses: PathBuf,
}

/// Resolve the metadata index and the license blob.
///
/// Explicit paths win. Whatever is still missing is searched for under `--root`,
/// then the configured roots, then [`DEFAULT_SEARCH_ROOTS`], stopping as soon as
/// both files are known.
pub fn locate_inputs(req: &LocateRequest<'_>) -> Result<Inputs, LocateError> {
    let mut metadata = req.metadata.map(|p| resolve(req.project_root, p));
    let mut licenses = req.licenses.map(|p| resolve(req.project_root, p));

    if metadata.is_none() || licenses.is_none() {
        let roots = search_roots(req);
        let existing: Vec<&PathBuf> = roots.iter().filter(|p| p.is_dir()).collect();
        if existing.is_empty() {
            return Err(LocateError::NoSearchRoots(roots));
        }

        for root in existing {
            if metadata.is_none() {
                metadata = find_file(root, req.metadata_name);
            }
            if licenses.is_none() {
                licenses = find_file(root, req.licenses_name);
            }
            if metadata.is_some() && licenses.is_some() {
                break;
            }
        }
    }

    let metadata =
        metadata.ok_or_else(|| LocateError::MetadataNotFound(req.metadata_name.to_string()))?;
    let licenses =
        licenses.ok_or_else(|| LocateError::LicensesNotFound(req.licenses_name.to_string()))?;

    Ok(Inputs { metadata, licenses })
}

fn search_roots(req: &LocateRequest<'_>) -> Vec<PathBuf> {
    req.root
        .into_iter()
        .map(Path::to_path_buf)
        .chain(req.extra_roots.iter().cloned())
        .chain(DEFAULT_SEARCH_ROOTS.iter().map(PathBuf::from))
        .map(|p| resolve(req.project_root, &p))
        .collect()
}

fn resolve(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Depth-first walk of `root`, returning the first file named exactly `name`.
pub fn find_file(root: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name() == name)
        .map(|e| e.into_path())
}
