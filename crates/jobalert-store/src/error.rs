use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read seen file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write seen file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
