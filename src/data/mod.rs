//! Read-only article data access.
//!
//! Aggregation code only sees `ArticleSource`, so the built-in dataset can
//! be swapped for a file or a real backend without touching it.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::models::article::Article;

/// Dataset compiled into the binary.
const BUILTIN_DATASET: &str = include_str!("../../data/oasis.json");

pub trait ArticleSource: Send + Sync {
    fn articles(&self) -> &[Article];

    /// Institutions offered by the filter control. Defaults to the distinct
    /// approving institutions, sorted.
    fn institutions(&self) -> Vec<String> {
        distinct_institutions(self.articles())
    }
}

pub fn distinct_institutions(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .map(|a| a.approving_institution.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "Dataset I/O error: {e}"),
            DataError::Parse(e) => write!(f, "Dataset parse error: {e}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e)
    }
}

#[derive(Deserialize)]
struct DatasetFile {
    #[serde(default)]
    institutions: Option<Vec<String>>,
    articles: Vec<Article>,
}

/// Articles held in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    articles: Vec<Article>,
    institutions: Option<Vec<String>>,
}

impl InMemorySource {
    /// Institution names are trimmed here, once, so the filter control and
    /// the exact-match filter see the same strings.
    pub fn new(mut articles: Vec<Article>) -> Self {
        for a in &mut articles {
            let trimmed = a.approving_institution.trim();
            if trimmed.len() != a.approving_institution.len() {
                a.approving_institution = trimmed.to_string();
            }
        }
        InMemorySource { articles, institutions: None }
    }

    /// Fix the institution list instead of deriving it from the articles.
    pub fn with_institutions(mut self, institutions: Vec<String>) -> Self {
        self.institutions = Some(institutions.iter().map(|i| i.trim().to_string()).collect());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        let source = Self::new(file.articles);
        Ok(match file.institutions {
            Some(list) => source.with_institutions(list),
            None => source,
        })
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub async fn load_file(path: &Path) -> Result<Self, DataError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }
}

impl ArticleSource for InMemorySource {
    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn institutions(&self) -> Vec<String> {
        match &self.institutions {
            Some(list) => list.clone(),
            None => distinct_institutions(&self.articles),
        }
    }
}
