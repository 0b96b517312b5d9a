use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Same bound as Linux `MAXSYMLINKS`.
const MAX_LINK_DEPTH: usize = 40;

/// Errors that can occur while resolving a path
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Cannot resolve path '{path}': {error}")]
    CannotResolve { path: PathBuf, error: io::Error },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: String },
}

/// Resolves a path to canonical absolute form without requiring it to exist.
///
/// This function performs the following steps:
/// 1. Anchors relative paths at `base`
/// 2. Walks the components, canonicalizing each existing prefix so that
///    symlinks are followed and `..` applies to the real parent
/// 3. Appends components that do not exist yet lexically
///
/// A file that is about to be created therefore resolves to the same place
/// it will end up on disk.
///
/// # Arguments
///
/// * `input_path` - The path to resolve (can be relative or absolute)
/// * `base` - Directory relative paths are anchored at
///
/// # Returns
///
/// * `Ok(PathBuf)` - The resolved path
/// * `Err(PathSecurityError)` - If the path is malformed or the filesystem
///   refuses to answer (permission denied, symlink loop, ...)
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use notes_guard::core::security::resolve_path;
///
/// let resolved = resolve_path(Path::new("a/./b/../c.md"), Path::new("/nonexistent")).unwrap();
/// assert_eq!(resolved, Path::new("/nonexistent/a/c.md"));
/// ```
pub fn resolve_path(input_path: &Path, base: &Path) -> Result<PathBuf, PathSecurityError> {
    if input_path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(PathSecurityError::InvalidPath {
            path: input_path.to_path_buf(),
            reason: "embedded null byte".to_string(),
        });
    }

    let absolute = if input_path.is_absolute() {
        input_path.to_path_buf()
    } else {
        base.join(input_path)
    };

    resolve_components(&absolute, 0).map_err(|e| PathSecurityError::CannotResolve {
        path: input_path.to_path_buf(),
        error: e,
    })
}

fn resolve_components(absolute: &Path, depth: usize) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                match resolved.canonicalize() {
                    Ok(real) => resolved = real,
                    Err(e) if is_missing(&e) => {
                        // Dangling symlink: the write would land on its target.
                        if let Some(target) = dangling_link_target(&resolved)? {
                            if depth >= MAX_LINK_DEPTH {
                                return Err(io::Error::other("too many levels of symbolic links"));
                            }
                            resolved.pop();
                            resolved = resolve_components(&resolved.join(target), depth + 1)?;
                        }
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(resolved)
}

fn dangling_link_target(path: &Path) -> io::Result<Option<PathBuf>> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::read_link(path).map(Some),
        Ok(_) => Ok(None),
        Err(e) if is_missing(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Checks if a path is within (or equal to) a root directory
pub fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

/// Errors that mean "nothing on disk here yet" rather than "cannot look".
fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn canonical_temp() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        (temp_dir, root)
    }

    #[test]
    fn test_existing_file_resolves_to_canonical() {
        let (_temp_dir, root) = canonical_temp();
        let test_file = root.join("test.txt");
        fs::write(&test_file, "test").unwrap();

        let result = resolve_path(&test_file, Path::new("/")).unwrap();

        assert_eq!(result, test_file);
    }

    #[test]
    fn test_missing_file_resolves_lexically() {
        let (_temp_dir, root) = canonical_temp();
        let missing = root.join("new_dir").join("new.txt");

        let result = resolve_path(&missing, Path::new("/")).unwrap();

        assert_eq!(result, missing);
    }

    #[test]
    fn test_relative_path_anchored_at_base() {
        let (_temp_dir, root) = canonical_temp();
        fs::create_dir(root.join("src")).unwrap();

        let result = resolve_path(Path::new("src/./main.rs"), &root).unwrap();

        assert_eq!(result, root.join("src").join("main.rs"));
    }

    #[test]
    fn test_parent_segments_normalized() {
        let (_temp_dir, root) = canonical_temp();
        let subdir = root.join("subdir");
        fs::create_dir(&subdir).unwrap();

        let traversal_path = subdir.join("../.notes/plan.md");
        let result = resolve_path(&traversal_path, Path::new("/")).unwrap();

        assert_eq!(result, root.join(".notes").join("plan.md"));
    }

    #[test]
    fn test_parent_segments_through_missing_dirs() {
        let (_temp_dir, root) = canonical_temp();

        let traversal_path = root.join("missing/deeper/../../.notes/plan.md");
        let result = resolve_path(&traversal_path, Path::new("/")).unwrap();

        assert_eq!(result, root.join(".notes").join("plan.md"));
    }

    #[test]
    fn test_path_below_a_file_is_treated_as_missing() {
        let (_temp_dir, root) = canonical_temp();
        let file = root.join("file.txt");
        fs::write(&file, "test").unwrap();

        let result = resolve_path(&file.join("child"), Path::new("/")).unwrap();

        assert_eq!(result, file.join("child"));
    }

    #[test]
    fn test_null_byte_rejected() {
        let result = resolve_path(Path::new("/tmp/.notes/a\0b"), Path::new("/"));

        assert!(matches!(result, Err(PathSecurityError::InvalidPath { .. })));
    }

    #[test]
    fn test_within_root_is_component_wise() {
        let root = Path::new("/project/.notes");

        assert!(is_within_root(Path::new("/project/.notes"), root));
        assert!(is_within_root(Path::new("/project/.notes/a/b.md"), root));
        assert!(!is_within_root(Path::new("/project/.notes-old/a.md"), root));
        assert!(!is_within_root(Path::new("/project"), root));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_followed_to_target() {
        use std::os::unix::fs::symlink;

        let (_temp_dir, root) = canonical_temp();
        let target_dir = root.join(".notes");
        let link_dir = root.join("shortcut");

        fs::create_dir(&target_dir).unwrap();
        symlink(&target_dir, &link_dir).unwrap();

        let result = resolve_path(&link_dir.join("plan.md"), Path::new("/")).unwrap();

        assert_eq!(result, target_dir.join("plan.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_symlink_is_real_parent() {
        use std::os::unix::fs::symlink;

        let (_temp_dir, root) = canonical_temp();
        let real_dir = root.join("real").join("inner");
        fs::create_dir_all(&real_dir).unwrap();
        symlink(&real_dir, root.join("link")).unwrap();

        let result = resolve_path(&root.join("link/../x.md"), Path::new("/")).unwrap();

        assert_eq!(result, root.join("real").join("x.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_resolves_to_its_target() {
        use std::os::unix::fs::symlink;

        let (_temp_dir, root) = canonical_temp();
        fs::create_dir(root.join(".notes")).unwrap();
        symlink(root.join(".notes").join("new.md"), root.join("innocent.md")).unwrap();

        let result = resolve_path(&root.join("innocent.md"), Path::new("/")).unwrap();

        assert_eq!(result, root.join(".notes").join("new.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_an_error() {
        use std::os::unix::fs::symlink;

        let (_temp_dir, root) = canonical_temp();
        symlink(root.join("b"), root.join("a")).unwrap();
        symlink(root.join("a"), root.join("b")).unwrap();

        let result = resolve_path(&root.join("a").join("file.md"), Path::new("/"));

        assert!(matches!(
            result,
            Err(PathSecurityError::CannotResolve { .. })
        ));
    }
}
