use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("course file parse error: {0}")]
    CourseParse(String),

    #[error("refusing to overwrite existing file: {0}")]
    TemplateExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;
