use std::path::Path;

/// Path helpers shared by the loader and the command line output.
pub trait PathExt {
    /// The file stem, if it is valid unicode.
    fn stem_str(&self) -> Option<&str>;

    /// The last component, if it is valid unicode.
    fn file_name_str(&self) -> Option<&str>;

    /// The part of the path after `root`, or the whole path when it does not
    /// start with `root`. Used to keep printed paths short.
    fn beyond(&self, root: &Path) -> &Path;
}
impl<T: AsRef<Path> + ?Sized> PathExt for T {
    fn stem_str(&self) -> Option<&str> {
        self.as_ref().file_stem()?.to_str()
    }

    fn file_name_str(&self) -> Option<&str> {
        self.as_ref().file_name()?.to_str()
    }

    fn beyond(&self, root: &Path) -> &Path {
        let path = self.as_ref();
        match path.strip_prefix(root) {
            Ok(rest) if !rest.as_os_str().is_empty() => rest,
            _ => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn stem_drops_extension() {
        assert_eq!(Path::new("Pkg/Main.tr").stem_str(), Some("Main"));
    }

    #[test]
    fn beyond_strips_root() {
        let path = PathBuf::from("/work/space/Pkg/A.tr");

        assert_eq!(path.beyond(Path::new("/work/space")), Path::new("Pkg/A.tr"));
    }

    #[test]
    fn beyond_keeps_unrelated_path() {
        let path = Path::new("/elsewhere/A.tr");

        assert_eq!(path.beyond(Path::new("/work")), path);
    }

    #[test]
    fn beyond_keeps_root_itself() {
        let path = Path::new("/work");

        assert_eq!(path.beyond(Path::new("/work")), path);
    }
}
