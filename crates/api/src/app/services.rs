//! Shared application state handed to every handler.

use std::sync::Arc;

use biobox_catalog::Catalog;
use biobox_core::DomainResult;

/// State shared by all handlers. The catalog is immutable after load, so no
/// locking is needed.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub catalog: Arc<Catalog>,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Load the embedded reference catalog.
pub fn build_services() -> DomainResult<AppServices> {
    Catalog::seeded().map(AppServices::new)
}
