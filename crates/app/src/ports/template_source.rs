//! Template source port: where the wizard's condition/action catalog comes from.

use std::future::Future;
use std::sync::Arc;

use robodesk_domain::error::RoboDeskError;
use robodesk_domain::template::TemplateCatalog;

/// Provides the read-only [`TemplateCatalog`].
pub trait TemplateSource {
    /// The full catalog, every category included.
    fn catalog(&self) -> impl Future<Output = Result<TemplateCatalog, RoboDeskError>> + Send;
}

impl<T: TemplateSource + Send + Sync> TemplateSource for Arc<T> {
    fn catalog(&self) -> impl Future<Output = Result<TemplateCatalog, RoboDeskError>> + Send {
        (**self).catalog()
    }
}
