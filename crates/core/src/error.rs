use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The request body could not be read as a JSON object.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}
