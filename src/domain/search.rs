//! Document search filter: case-insensitive substring match over excerpt and
//! file name.

use crate::domain::entities::Document;
use crate::domain::errors::DomainError;

/// Trim and lowercase a query. Blank queries are rejected.
pub fn normalize_query(query: &str) -> Result<String, DomainError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidQuery);
    }
    Ok(trimmed.to_lowercase())
}

/// True when the (already normalized) needle occurs in the excerpt or file name.
fn matches(document: &Document, needle: &str) -> bool {
    document.excerpt.to_lowercase().contains(needle)
        || document.file_name.to_lowercase().contains(needle)
}

/// Filter `candidates` by `query`, keeping their relative order.
pub fn search(query: &str, candidates: &[Document]) -> Result<Vec<Document>, DomainError> {
    let needle = normalize_query(query)?;
    Ok(candidates
        .iter()
        .filter(|doc| matches(doc, &needle))
        .cloned()
        .collect())
}
