use super::TagSource;
use crate::error::Result;

/// In-memory [TagSource] for testing the collector and resolver without a
/// real repository.
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    head_tags: Vec<String>,
    repo_tags: Vec<String>,
}

impl MockTagSource {
    /// Creates a mock with the given tags at HEAD and in the whole repository.
    pub fn new<S: Into<String>>(
        head_tags: impl IntoIterator<Item = S>,
        repo_tags: impl IntoIterator<Item = S>,
    ) -> Self {
        MockTagSource {
            head_tags: head_tags.into_iter().map(Into::into).collect(),
            repo_tags: repo_tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl TagSource for MockTagSource {
    fn tags_at_head(&self) -> Result<Vec<String>> {
        Ok(self.head_tags.clone())
    }

    fn all_tags(&self) -> Result<Vec<String>> {
        Ok(self.repo_tags.clone())
    }
}
