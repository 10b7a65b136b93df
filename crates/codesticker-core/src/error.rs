use thiserror::Error;

/// Failures of the reversible text transforms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Represents input that is not a valid base64 string
    #[error("Input is not a valid base64 string")]
    MalformedBase64,

    /// Represents base64 input that decodes to bytes which are not valid UTF-8
    #[error("Base64 input does not decode to valid UTF-8 text")]
    InvalidUtf8,

    /// Represents a byteshift transform that would leave the Unicode scalar range
    #[error("Code point U+{code_point:04X} shifted by {delta} is not a valid Unicode scalar")]
    CodePointRange { code_point: u32, delta: i64 },
}

/// Failures of the bit frame format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The bit sequence does not start with the sync pattern, the carrier holds no frame
    #[error("Sync pattern mismatch, the carrier holds no embedded frame")]
    SyncMismatch,

    /// The frame declares more payload bits than the bit sequence provides
    #[error("Frame needs {needed} bits but only {available} are available")]
    Truncated { needed: usize, available: usize },

    /// The payload does not fit into the 16-bit length field
    #[error("Payload of {0} bits exceeds the 16-bit length field")]
    PayloadTooLarge(usize),
}

/// Failures when turning a message into a framed bit sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Failures when recovering a message from a framed bit sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The sync pattern did not match, the carrier most likely holds no message
    #[error("No embedded message found")]
    NoMessageFound,

    /// The sync pattern matched but length and payload are inconsistent
    #[error("Corrupt frame: {0}")]
    CorruptFrame(FrameError),

    /// The payload bits do not form valid UTF-8 byte boundaries
    #[error("Payload bits do not align to valid UTF-8 text")]
    InvalidEncoding,

    /// No cipher method was supplied and none of the known methods applied
    #[error("The cipher method could not be inferred")]
    AmbiguousMethod,

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

impl From<FrameError> for DecodeError {
    /// A sync mismatch means "no message", everything else means a damaged frame.
    fn from(value: FrameError) -> Self {
        match value {
            FrameError::SyncMismatch => DecodeError::NoMessageFound,
            other => DecodeError::CorruptFrame(other),
        }
    }
}

/// Top level error of the sticker commands and the fluent API.
#[derive(Error, Debug)]
pub enum StickerError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Represents an invalid carrier image, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding the sticker image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("Data grid capacity of {cells} cells cannot hold {bits} bits")]
    GridCapacity { cells: usize, bits: usize },

    #[error("Data grid exceeds the {width}x{height} carrier image")]
    GridOutOfBounds { width: u32, height: u32 },

    #[error("Image of {width}x{height} is too small for a single {cell_size}px cell")]
    ImageTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
