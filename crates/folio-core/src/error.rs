use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no particle with id {0}")]
    UnknownParticle(u32),
}
