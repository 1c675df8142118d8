//! Error types for bitmap export and payload decoding

/// Export and decode errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Surface has no pixels to encode
    #[error("cannot encode an empty {width}x{height} surface")]
    EmptySurface {
        /// Surface width
        width: u32,
        /// Surface height
        height: u32,
    },

    /// Compression stream failed
    #[error("image compression failed: {0}")]
    Compression(#[from] std::io::Error),

    /// Payload is not a PNG data URL
    #[error("not a PNG data URL")]
    NotPngDataUrl,

    /// Payload body is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
