use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}
