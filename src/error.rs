use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Value graph is not encodable: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed or incompatible JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Principal collection under the reserved session key did not bind: {0}")]
    Principals(#[source] serde_json::Error),
}
