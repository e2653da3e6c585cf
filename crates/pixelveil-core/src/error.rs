use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents an unsupported carrier media, for example a GIF image
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a lossy carrier media such as JPEG, whose re-encoding would destroy the LSB data
    #[error("Lossy media cannot carry least significant bit data")]
    LossyMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier image without any pixels
    #[error("Image has no pixels")]
    InvalidImage,

    /// Represents a message that does not fit into the carrier image
    #[error("Message needs {required} carrier bits but the image only offers {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a message character that cannot be embedded as a single byte
    #[error("Message contains {ch:?} which cannot be embedded as a single byte")]
    MalformedMessage { ch: char },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
