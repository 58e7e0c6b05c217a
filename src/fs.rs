use std::{fmt::Debug, io, path::Path};

/// The filesystem probes used while walking up the tree.
#[async_trait::async_trait]
pub trait FileSystem: Sync + Send + Debug {
    /// Fails for paths that can't be stat-ed, including missing ones.
    async fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Must not fail: any access problem reads as `false`.
    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

#[async_trait::async_trait]
impl FileSystem for OsFileSystem {
    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        tokio::fs::metadata(path).await.map(|meta| meta.is_dir())
    }

    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn os_probes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("package.json");
        std::fs::write(&file, "{}").unwrap();

        let fs = OsFileSystem;
        assert!(fs.is_dir(dir.path()).await.unwrap());
        assert!(!fs.is_dir(&file).await.unwrap());
        assert!(fs.exists(&file));

        let missing = dir.path().join("missing");
        assert!(!fs.exists(&missing));
        let error = fs.is_dir(&missing).await.unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
