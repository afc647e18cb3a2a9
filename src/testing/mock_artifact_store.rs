use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, RenderedArtifact};
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Default)]
pub struct MockArtifactStore {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub writes: RefCell<Vec<PathBuf>>,
    pub removals: RefCell<Vec<PathBuf>>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.borrow().contains_key(Path::new(path))
    }
}

impl ArtifactStore for MockArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, artifact: &RenderedArtifact) -> Result<(), AppError> {
        self.writes.borrow_mut().push(artifact.path.clone());
        self.files.borrow_mut().insert(artifact.path.clone(), artifact.content.clone());
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<bool, AppError> {
        self.removals.borrow_mut().push(path.to_path_buf());
        Ok(self.files.borrow_mut().remove(path).is_some())
    }
}
