use thiserror::Error;
use xcp_l1_txfmt::TxFmtError;

/// Errors that can occur while parsing Bitcoin script envelopes.
#[derive(Debug, Error)]
pub enum EnvelopeParseError {
    /// The script does not open with `OP_FALSE OP_IF`.
    #[error("script does not start with OP_FALSE OP_IF")]
    MissingEnvelopeMarker,

    /// The script ran out before `OP_ENDIF`.
    #[error("envelope not closed by OP_ENDIF")]
    MissingEndif,

    /// An ord envelope without the `xcp` metaprotocol marker.
    #[error("ord envelope missing xcp marker")]
    MissingXcpMarker,

    /// An ord envelope without a content type push.
    #[error("ord envelope missing content type")]
    MissingContentType,

    /// The content type is not valid UTF-8.
    #[error("ord envelope content type is not utf-8")]
    InvalidContentType,

    /// A push inside the envelope was malformed.
    #[error("invalid push: {0}")]
    Push(#[from] TxFmtError),
}
