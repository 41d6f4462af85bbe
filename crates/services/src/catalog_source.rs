use std::path::Path;

use checkup_core::Catalog;
use tracing::info;

use crate::error::CatalogLoadError;

/// Load the question catalog, preferring `path` over the bundled one.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` if the file cannot be read, or
/// `CatalogLoadError::Catalog` if it is not a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let catalog = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Catalog::from_json(&text)?
        }
        None => Catalog::bundled()?,
    };

    info!(
        source = %path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        topics = catalog.topics().len(),
        questions = catalog.question_count(),
        "question catalog loaded"
    );
    Ok(catalog)
}
