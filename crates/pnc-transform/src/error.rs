use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A referenced column is absent from the header. This is a
    /// configuration problem with the export, not a per-row failure.
    #[error("column {0:?} not found in export header")]
    MissingColumn(String),
}
