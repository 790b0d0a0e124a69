//! Path resolution helpers.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::platform::Os;

/// Expand `~` and environment variables, then absolutize against the
/// current directory.
pub fn resolve(input: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(input)
        .map_err(|e| Error::InvalidArgument(format!("Cannot expand path '{}': {}", input, e)))?;

    let path = Path::new(expanded.as_ref());
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// User home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeDirUnavailable)
}

/// Base directory for PostgreSQL client config files.
///
/// Windows keeps them under `%APPDATA%/postgresql` (falling back to the
/// home directory when APPDATA is unset); everywhere else they sit
/// directly in the home directory.
pub fn pg_base_dir(os: Os) -> Result<PathBuf> {
    if os == Os::Windows {
        let base = env::var("APPDATA")
            .map(PathBuf::from)
            .or_else(|_| home_dir())?;
        Ok(base.join("postgresql"))
    } else {
        home_dir()
    }
}

/// File name of `path` for status messages, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_expands_tilde_to_home() {
        let resolved = resolve("~/notes.txt").unwrap();
        assert_eq!(resolved, home_dir().unwrap().join("notes.txt"));
    }

    #[test]
    fn resolve_absolutizes_relative_paths() {
        let resolved = resolve("some/relative/file.txt").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/file.txt"));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let resolved = resolve("/var/tmp/file.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/var/tmp/file.txt"));
    }

    #[test]
    fn resolve_rejects_undefined_variables() {
        let err = resolve("$TOOLBELT_DOES_NOT_EXIST/file").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn pg_base_dir_is_home_on_posix() {
        assert_eq!(pg_base_dir(Os::Linux).unwrap(), home_dir().unwrap());
        assert_eq!(pg_base_dir(Os::MacOs).unwrap(), home_dir().unwrap());
    }

    #[test]
    fn pg_base_dir_uses_postgresql_subdir_on_windows() {
        let base = pg_base_dir(Os::Windows).unwrap();
        assert!(base.ends_with("postgresql"));
    }

    #[test]
    fn pg_base_dir_is_deterministic() {
        assert_eq!(
            pg_base_dir(Os::Windows).unwrap(),
            pg_base_dir(Os::Windows).unwrap()
        );
    }
}
