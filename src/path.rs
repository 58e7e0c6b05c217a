use std::path::{Component, Path, PathBuf};

use path_absolutize::Absolutize;
use url::Url;

use crate::{Error, RResult};

pub trait NormalizePath {
    /// Resolves `.` and `..` without touching the filesystem.
    /// `..` at the root stays at the root.
    fn normalize(&self) -> PathBuf;
}

impl NormalizePath for Path {
    fn normalize(&self) -> PathBuf {
        self.components()
            .fold(PathBuf::new(), |mut acc, path_component| {
                match path_component {
                    Component::Prefix(prefix) => acc.push(prefix.as_os_str()),
                    Component::Normal(name) => acc.push(name),
                    Component::RootDir => acc.push(Component::RootDir),
                    Component::CurDir => {}
                    Component::ParentDir => {
                        acc.pop();
                    }
                }
                acc
            })
    }
}

/// The directory of a module, given as a `file:` url or as a path.
///
/// ```rust
/// use nodejs_find_up::resolve_module_directory;
///
/// let dir = resolve_module_directory(file!()).unwrap();
/// assert!(dir.is_absolute());
/// ```
pub fn resolve_module_directory(url_or_path: &str) -> RResult<PathBuf> {
    let path = if url_or_path.starts_with("file:") {
        Url::parse(url_or_path)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| Error::InvalidUrl(url_or_path.to_string()))?
    } else if url_or_path.is_empty() {
        return Err(Error::InvalidUrl(String::new()));
    } else {
        PathBuf::from(url_or_path)
    };
    let dir = path.absolutize()?.join("..").normalize();
    // Eliminate `\\?\` prefix in windows.
    Ok(dunce::simplified(&dir).to_path_buf())
}

/// Resolves `segments` against the current working directory,
/// an absolute segment restarts the path.
pub fn cwd_join<I, S>(segments: I) -> RResult<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let cwd = std::env::current_dir()?;
    let joined = segments
        .into_iter()
        .fold(PathBuf::new(), |acc, segment| acc.join(segment));
    Ok(joined.absolutize_from(cwd.as_path())?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_test() {
        assert_eq!(Path::new("/a/./b/../c").normalize(), PathBuf::from("/a/c"));
        assert_eq!(Path::new("/a/b/").normalize(), PathBuf::from("/a/b"));
        assert_eq!(Path::new("/..").normalize(), PathBuf::from("/"));
        assert_eq!(Path::new("/a/..").normalize(), PathBuf::from("/"));
    }

    #[test]
    fn cwd_join_test() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(cwd_join(Vec::<&str>::new()).unwrap(), cwd);
        assert_eq!(cwd_join(["a", "../b"]).unwrap(), cwd.join("b"));
        assert_eq!(cwd_join(["src", "lib.rs"]).unwrap(), cwd.join("src").join("lib.rs"));
    }

    #[cfg(unix)]
    #[test]
    fn cwd_join_absolute_segment() {
        assert_eq!(cwd_join(["a", "/x", "y"]).unwrap(), PathBuf::from("/x/y"));
    }

    #[cfg(unix)]
    #[test]
    fn module_directory_test() {
        assert_eq!(
            resolve_module_directory("file:///a/b/c.js").unwrap(),
            PathBuf::from("/a/b")
        );
        assert_eq!(
            resolve_module_directory("/a/b/c.rs").unwrap(),
            PathBuf::from("/a/b")
        );
        assert_eq!(resolve_module_directory("/").unwrap(), PathBuf::from("/"));
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_module_directory("src/lib.rs").unwrap(), cwd.join("src"));
    }

    #[cfg(unix)]
    #[test]
    fn module_directory_invalid_url() {
        assert!(matches!(
            resolve_module_directory("file://example.com/a.js"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            resolve_module_directory(""),
            Err(Error::InvalidUrl(_))
        ));
    }
}
