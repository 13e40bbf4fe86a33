/// Failures surfaced by backend calls.
///
/// A declined payment is not an error; it arrives as data in
/// `PaymentOutcome`. These variants cover transport and protocol trouble
/// only.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
