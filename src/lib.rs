//! # nodejs_find_up
//!
//! ## How to use?
//!
//! ```rust
//! // |-- package.json
//! // |-- src
//! // |---- utils
//! // |------ index.js
//!
//! use nodejs_find_up::Locator;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let cwd = std::env::current_dir().unwrap();
//! let locator = Locator::new(Default::default());
//!
//! locator.locate_manifest(&cwd.join("src/utils/index.js")).await;
//! // -> Ok(Some("<cwd>/package.json"))
//!
//! locator.locate(&cwd.join("src/utils"), "tsconfig.json").await;
//! // -> Ok(None) when no ancestor holds a `tsconfig.json`
//! # });
//! ```

mod builder;
mod error;
mod fs;
mod locate;
mod log;
mod options;
mod path;

pub use builder::LocatorBuilder;
pub use error::Error;
pub use fs::{FileSystem, OsFileSystem};
pub use options::Options;
pub use path::{cwd_join, resolve_module_directory, NormalizePath};
pub use tokio_util::sync::CancellationToken;

use std::path::{Path, PathBuf};

pub type RResult<T> = Result<T, Error>;

#[derive(Debug)]
pub struct Locator {
    pub options: Options,
    pub(crate) fs: Box<dyn FileSystem>,
}

impl Locator {
    pub fn new(options: Options) -> Self {
        LocatorBuilder::new(Box::<OsFileSystem>::default()).build(options)
    }
}

/// Finds the closest `file_name` from `path` upward, on the real filesystem.
pub async fn locate(path: &Path, file_name: &str) -> RResult<Option<PathBuf>> {
    Locator::new(Options::default()).locate(path, file_name).await
}

/// Finds the closest `package.json` from `path` upward, on the real filesystem.
pub async fn locate_manifest(path: &Path) -> RResult<Option<PathBuf>> {
    Locator::new(Options::default()).locate_manifest(path).await
}

#[cfg(debug_assertions)]
pub mod test_helper {
    use std::{
        collections::HashSet,
        io,
        path::{Path, PathBuf},
        sync::atomic::{AtomicUsize, Ordering},
    };

    use crate::FileSystem;

    /// A filesystem made of listed paths. The ancestors of every
    /// listed path are directories.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        dirs: HashSet<PathBuf>,
        files: HashSet<PathBuf>,
        denied: HashSet<PathBuf>,
        dir_probes: AtomicUsize,
        exist_probes: AtomicUsize,
    }

    impl MemoryFs {
        pub fn new(dirs: Vec<&str>, files: Vec<&str>) -> Self {
            let mut fs = Self::default();
            for path in dirs.iter().chain(files.iter()).map(Path::new) {
                fs.dirs.extend(path.ancestors().skip(1).map(Path::to_path_buf));
            }
            fs.dirs.extend(dirs.into_iter().map(PathBuf::from));
            fs.files.extend(files.into_iter().map(PathBuf::from));
            fs
        }

        /// `is_dir` on `path` fails with `PermissionDenied`.
        pub fn deny(mut self, path: &str) -> Self {
            self.denied.insert(PathBuf::from(path));
            self
        }

        pub fn dir_probes(&self) -> usize {
            self.dir_probes.load(Ordering::SeqCst)
        }

        pub fn exist_probes(&self) -> usize {
            self.exist_probes.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl FileSystem for MemoryFs {
        async fn is_dir(&self, path: &Path) -> io::Result<bool> {
            self.dir_probes.fetch_add(1, Ordering::SeqCst);
            if self.denied.contains(path) {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else if self.dirs.contains(path) {
                Ok(true)
            } else if self.files.contains(path) {
                Ok(false)
            } else {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
        }

        fn exists(&self, path: &Path) -> bool {
            self.exist_probes.fetch_add(1, Ordering::SeqCst);
            self.dirs.contains(path) || self.files.contains(path)
        }
    }

    // `Box<dyn FileSystem>` owns the filesystem, tests keep a handle through `Arc`.
    #[async_trait::async_trait]
    impl FileSystem for std::sync::Arc<MemoryFs> {
        async fn is_dir(&self, path: &Path) -> io::Result<bool> {
            self.as_ref().is_dir(path).await
        }

        fn exists(&self, path: &Path) -> bool {
            self.as_ref().exists(path)
        }
    }
}
