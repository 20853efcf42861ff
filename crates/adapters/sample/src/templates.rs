//! Static [`TemplateSource`].

use robodesk_app::ports::TemplateSource;
use robodesk_domain::error::RoboDeskError;
use robodesk_domain::template::TemplateCatalog;

/// Serves a catalog fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateSource {
    catalog: TemplateCatalog,
}

impl StaticTemplateSource {
    #[must_use]
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }
}

impl TemplateSource for StaticTemplateSource {
    async fn catalog(&self) -> Result<TemplateCatalog, RoboDeskError> {
        Ok(self.catalog.clone())
    }
}
