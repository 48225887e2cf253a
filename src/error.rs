use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch the page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("The page is not an HTML document: {0}")]
    Parse(String),
    /// `target` is either a file path or `"stdout"`.
    #[error("Failed to write the output to {target}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}
