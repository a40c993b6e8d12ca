#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unreachable")]
    Unreachable,
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
