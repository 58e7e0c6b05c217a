use std::{
    borrow::Cow,
    io,
    path::{Path, PathBuf},
};

use path_absolutize::Absolutize;
use tokio_util::sync::CancellationToken;

use crate::{log::depth, Error, Locator, RResult};

impl Locator {
    /// Finds the closest `file_name` in the directory of `path`
    /// or in one of its ancestors.
    ///
    /// `path` may point at a file, the search then starts in its
    /// directory. A relative `path` is resolved against the current
    /// working directory. Returns `Ok(None)` once the root (or
    /// `Options::stop_dir`) has been checked without a match.
    #[tracing::instrument(skip(self))]
    pub async fn locate(&self, path: &Path, file_name: &str) -> RResult<Option<PathBuf>> {
        self.walk(path, file_name, None).await
    }

    /// Finds the closest `Options::description_file`, `package.json` by default.
    pub async fn locate_manifest(&self, path: &Path) -> RResult<Option<PathBuf>> {
        self.locate(path, &self.options.description_file).await
    }

    /// Same as `locate`, but gives up with `Error::Cancelled` as soon
    /// as `token` is cancelled.
    #[tracing::instrument(skip(self, token))]
    pub async fn locate_with_cancel(
        &self,
        path: &Path,
        file_name: &str,
        token: &CancellationToken,
    ) -> RResult<Option<PathBuf>> {
        self.walk(path, file_name, Some(token)).await
    }

    async fn walk(
        &self,
        path: &Path,
        file_name: &str,
        token: Option<&CancellationToken>,
    ) -> RResult<Option<PathBuf>> {
        if file_name.is_empty() {
            return Err(Error::InvalidArgument(String::from("file name is required")));
        }
        if token.map_or(false, |token| token.is_cancelled()) {
            return Err(Error::Cancelled);
        }

        let stop_dir = self
            .options
            .stop_dir
            .as_deref()
            .map(|dir| dir.absolutize().map(Cow::into_owned))
            .transpose()?;
        let mut current = path.absolutize()?.into_owned();
        let mut last_candidate: Option<PathBuf> = None;
        let mut level = 0;

        loop {
            let dir = if self.probe_dir(&current, token).await? {
                current.as_path()
            } else {
                current.parent().unwrap_or(current.as_path())
            };
            let candidate = dir.join(file_name);
            tracing::debug!("{} check '{}'", depth(level), candidate.display());

            // a file and its directory give the same candidate
            if last_candidate.as_ref() != Some(&candidate) && self.fs.exists(&candidate) {
                tracing::debug!("found '{}'", candidate.display());
                return Ok(Some(candidate));
            }

            let reached_stop = stop_dir.as_deref().map_or(false, |stop| stop == dir);
            let parent = match current.parent() {
                Some(parent) if !reached_stop => parent.to_path_buf(),
                _ => {
                    tracing::debug!("'{}' not found from '{}'", file_name, path.display());
                    return Ok(None);
                }
            };
            last_candidate = Some(candidate);
            current = parent;
            level += 1;
        }
    }

    async fn probe_dir(&self, path: &Path, token: Option<&CancellationToken>) -> RResult<bool> {
        let result = match token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(Error::Cancelled),
                result = self.fs.is_dir(path) => result,
            },
            None => self.fs.is_dir(path).await,
        };
        match result {
            Ok(is_dir) => Ok(is_dir),
            Err(error) if error.kind() == io::ErrorKind::NotFound && self.options.missing_as_file => {
                Ok(false)
            }
            Err(error) => {
                tracing::warn!("failed to stat '{}': {}", path.display(), error);
                Err(Error::Io(error))
            }
        }
    }
}
