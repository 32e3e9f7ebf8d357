//! Filesystem predicates.
//!
//! The string value is taken as a path. Without the `filesystem` feature
//! every predicate is false.

use super::Input;

#[cfg(feature = "filesystem")]
use std::path::Path;

impl Input {
    #[cfg(feature = "filesystem")]
    fn path(&self) -> Option<&Path> {
        self.string_view().filter(|s| !s.is_empty()).map(Path::new)
    }

    /// An existing regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        #[cfg(feature = "filesystem")]
        {
            self.path().is_some_and(Path::is_file)
        }
        #[cfg(not(feature = "filesystem"))]
        {
            false
        }
    }

    /// An existing directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        #[cfg(feature = "filesystem")]
        {
            self.path().is_some_and(Path::is_dir)
        }
        #[cfg(not(feature = "filesystem"))]
        {
            false
        }
    }

    /// An existing file or directory.
    #[must_use]
    pub fn is_file_or_directory(&self) -> bool {
        #[cfg(feature = "filesystem")]
        {
            self.path().is_some_and(Path::exists)
        }
        #[cfg(not(feature = "filesystem"))]
        {
            false
        }
    }

    /// An existing path whose permissions allow writing.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        #[cfg(feature = "filesystem")]
        {
            self.path()
                .and_then(|p| std::fs::metadata(p).ok())
                .is_some_and(|meta| !meta.permissions().readonly())
        }
        #[cfg(not(feature = "filesystem"))]
        {
            false
        }
    }

    /// An existing path this process can open for reading.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        #[cfg(feature = "filesystem")]
        {
            self.path().is_some_and(|p| {
                if p.is_dir() {
                    std::fs::read_dir(p).is_ok()
                } else {
                    std::fs::File::open(p).is_ok()
                }
            })
        }
        #[cfg(not(feature = "filesystem"))]
        {
            false
        }
    }
}

#[cfg(all(test, feature = "filesystem"))]
mod tests {
    use super::*;
    use std::io::Write;

    fn path_input(path: &Path) -> Input {
        Input::new(path.to_string_lossy().into_owned())
    }

    #[test]
    fn files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("notes.txt");
        std::fs::File::create(&file_path)
            .and_then(|mut f| f.write_all(b"hej"))
            .unwrap();

        let file = path_input(&file_path);
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert!(file.is_file_or_directory());
        assert!(file.is_readable());
        assert!(file.is_writable());

        let folder = path_input(dir.path());
        assert!(folder.is_dir());
        assert!(!folder.is_file());
        assert!(folder.is_readable());

        let missing = path_input(&dir.path().join("missing"));
        assert!(!missing.is_file_or_directory());
        assert!(!missing.is_readable());
        assert!(!missing.is_writable());
    }

    #[test]
    fn read_only_files_are_not_writable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut permissions = std::fs::metadata(file.path()).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(file.path(), permissions).unwrap();

        assert!(!path_input(file.path()).is_writable());
    }

    #[test]
    fn non_strings_are_never_paths() {
        assert!(!Input::new(serde_json::json!(["/tmp"])).is_dir());
        assert!(!Input::new("").is_file_or_directory());
    }
}
