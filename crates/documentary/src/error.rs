use documentary_core::schema::SchemaError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Invalid URL template: {0}")]
    UrlTemplate(String),

    #[error("Invalid method: {0}")]
    Method(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
