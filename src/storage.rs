//! Document storage collaborator backing the MCP resources.

use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;

use tracing::debug;

use crate::{AppError, Result};

/// Key → document lookup used by `resources/read`.
pub trait DocumentStore: Send + Sync {
    /// Load the full text of `logical_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the document is absent or unreadable.
    fn load<'a>(
        &'a self,
        logical_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// [`DocumentStore`] reading plain files from one directory.
///
/// Documents are re-read on every call.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory documents are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical name to a file directly inside the root.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` unless `logical_name` is a single plain
    /// file-name component.
    pub fn resolve(&self, logical_name: &str) -> Result<PathBuf> {
        let mut components = Path::new(logical_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !logical_name.contains('\\') => {
                Ok(self.root.join(name))
            }
            _ => Err(AppError::NotFound(format!(
                "invalid document name '{logical_name}'"
            ))),
        }
    }

    async fn read(&self, logical_name: &str) -> Result<String> {
        let path = self.resolve(logical_name)?;
        debug!(path = %path.display(), "loading document");
        tokio::fs::read_to_string(&path).await.map_err(|err| {
            AppError::NotFound(format!("document '{logical_name}' unavailable: {err}"))
        })
    }
}

impl DocumentStore for FsDocumentStore {
    fn load<'a>(
        &'a self,
        logical_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.read(logical_name))
    }
}
