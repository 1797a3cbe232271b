use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
