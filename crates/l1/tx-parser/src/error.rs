use thiserror::Error;
use xcp_l1_envelope_fmt::errors::EnvelopeParseError;
use xcp_l1_txfmt::TxFmtError;

/// Reasons a transaction or script does not yield a protocol message.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The first input txid is not hex.
    #[error("invalid txid hex: {0}")]
    InvalidTxidHex(#[source] hex::FromHexError),

    /// The raw transaction is not hex.
    #[error("invalid transaction hex: {0}")]
    InvalidTxHex(#[source] hex::FromHexError),

    /// The raw transaction does not deserialize.
    #[error("invalid transaction: {0}")]
    TxDecode(#[from] bitcoin::consensus::encode::Error),

    /// The `OP_RETURN` carrier did not hold a message.
    #[error("op_return: {0}")]
    OpReturn(#[from] TxFmtError),

    /// No input carries witness data.
    #[error("transaction has no witness data")]
    NoWitness,

    /// No witness item opens an envelope.
    #[error("no envelope found in witness")]
    NoEnvelope,

    /// The envelope script is malformed.
    #[error("envelope: {0}")]
    Envelope(#[from] EnvelopeParseError),

    /// The ord metadata is not valid CBOR.
    #[error("ord metadata is not valid cbor: {0}")]
    OrdCbor(String),

    /// The ord metadata is not an array.
    #[error("ord metadata is not an array")]
    OrdNotArray,

    /// The ord metadata array is empty.
    #[error("ord metadata array is empty")]
    OrdEmptyArray,

    /// The first ord metadata element is not a message type id.
    #[error("ord metadata does not start with a message type id")]
    OrdInvalidTypeId,

    /// The message type id could not be framed off.
    #[error("framing: {0}")]
    Framing(#[from] xcp_msg_fmt::Error),
}

/// Result of extracting a message.
pub type ExtractResult<T> = Result<T, ExtractError>;
