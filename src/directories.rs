use crate::error::MultishellError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the directory list comes from. Sources are combined in field order.
#[derive(Debug, Default)]
pub struct DirectorySources<'a> {
    /// Comma-separated list from --directories
    pub list: Option<&'a str>,

    /// File with one directory per line from --file
    pub file: Option<&'a Path>,

    /// Every immediate subdirectory of `base` (--all)
    pub all_in: Option<&'a Path>,
}

impl DirectorySources<'_> {
    pub fn is_empty(&self) -> bool {
        self.list.is_none() && self.file.is_none() && self.all_in.is_none()
    }
}

/// Assemble the ordered directory list.
///
/// `fallback` is used only when no source is given at all.
pub fn resolve_directories(
    sources: &DirectorySources<'_>,
    fallback: &[String],
) -> Result<Vec<PathBuf>, MultishellError> {
    let mut directories = Vec::new();

    if sources.is_empty() {
        directories.extend(clean_entries(fallback.iter().map(String::as_str)));
    }

    if let Some(list) = sources.list {
        directories.extend(parse_list(list));
    }

    if let Some(path) = sources.file {
        let from_file = read_directory_file(path)?;
        if from_file.is_empty() {
            log::warn!("Directory file {} lists no directories", path.display());
        }
        directories.extend(from_file);
    }

    if let Some(base) = sources.all_in {
        directories.extend(list_subdirectories(base)?);
    }

    if directories.is_empty() {
        return Err(MultishellError::NoDirectories);
    }

    log::debug!("Resolved {} directories: {:?}", directories.len(), directories);
    Ok(directories)
}

/// Split a comma-separated list
pub fn parse_list(list: &str) -> Vec<PathBuf> {
    clean_entries(list.split(','))
}

/// Read one directory per line
pub fn read_directory_file(path: &Path) -> Result<Vec<PathBuf>, MultishellError> {
    let content = fs::read_to_string(path).map_err(|source| MultishellError::DirectoryFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_entries(content.lines()))
}

/// Immediate subdirectories of `base`, sorted by name
pub fn list_subdirectories(base: &Path) -> Result<Vec<PathBuf>, MultishellError> {
    let mut subdirectories = Vec::new();

    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirectories.push(entry.path());
        }
    }

    subdirectories.sort();
    Ok(subdirectories)
}

/// Trailing whitespace is stripped and blank entries dropped
fn clean_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<PathBuf> {
    entries
        .map(str::trim_end)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_parse_list_trims_and_drops_blanks() {
        assert_eq!(parse_list("api, web ,docs,"), paths(&["api", " web", "docs"]));
    }

    #[test]
    fn test_read_directory_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dirs.txt");
        fs::write(&file, "one\r\ntwo  \n\nthree\n").unwrap();

        assert_eq!(
            read_directory_file(&file).unwrap(),
            paths(&["one", "two", "three"])
        );
    }

    #[test]
    fn test_missing_directory_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.txt");

        let err = read_directory_file(&file).unwrap_err();
        assert!(matches!(err, MultishellError::DirectoryFile { .. }));
    }

    #[test]
    fn test_list_subdirectories_sorted_and_skips_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::create_dir(dir.path().join("mid")).unwrap();
        fs::write(dir.path().join("file.txt"), "").unwrap();

        let found = list_subdirectories(dir.path()).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("alpha"),
                dir.path().join("mid"),
                dir.path().join("zeta"),
            ]
        );
    }

    #[test]
    fn test_sources_combined_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dirs.txt");
        fs::write(&file, "from-file\n").unwrap();
        let base = dir.path().join("base");
        fs::create_dir_all(base.join("sub")).unwrap();

        let sources = DirectorySources {
            list: Some("a,b"),
            file: Some(&file),
            all_in: Some(&base),
        };
        let resolved = resolve_directories(&sources, &["ignored".to_string()]).unwrap();

        assert_eq!(
            resolved,
            vec![
                PathBuf::from("a"),
                PathBuf::from("b"),
                PathBuf::from("from-file"),
                base.join("sub"),
            ]
        );
    }

    #[test]
    fn test_fallback_used_without_sources() {
        let resolved =
            resolve_directories(&DirectorySources::default(), &["api".to_string()]).unwrap();
        assert_eq!(resolved, paths(&["api"]));
    }

    #[test]
    fn test_empty_resolution_is_error() {
        let err = resolve_directories(&DirectorySources::default(), &[]).unwrap_err();
        assert!(matches!(err, MultishellError::NoDirectories));

        let sources = DirectorySources {
            list: Some(" , ,"),
            ..Default::default()
        };
        let err = resolve_directories(&sources, &[]).unwrap_err();
        assert!(matches!(err, MultishellError::NoDirectories));
    }
}
