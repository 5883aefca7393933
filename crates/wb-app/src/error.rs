use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid value '{value}' for {key}")]
    Config { key: &'static str, value: String },
}
