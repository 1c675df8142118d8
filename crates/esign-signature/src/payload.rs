//! Exported signature image
//!
//! The payload is a self-contained PNG data URL that can be embedded in a
//! contract record and rendered later without the drawing surface.

use crate::bitmap::Bitmap;
use crate::error::ExportError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Data URL prefix of every payload
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// PNG data URL of a signature bitmap
///
/// Deserialization goes through [`SignaturePayload::from_data_url`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignaturePayload(String);

impl SignaturePayload {
    /// Encode a bitmap
    ///
    /// # Errors
    /// Propagates PNG encoding failures.
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Self, ExportError> {
        let png = crate::png::encode(bitmap)?;
        Ok(Self::from_png_bytes(&png))
    }

    /// Wrap already-encoded PNG bytes
    #[must_use]
    pub fn from_png_bytes(png: &[u8]) -> Self {
        Self(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(png)))
    }

    /// Accept an existing data URL
    ///
    /// # Errors
    /// - `ExportError::NotPngDataUrl` if the prefix is wrong
    /// - `ExportError::Base64` if the body does not decode
    pub fn from_data_url(url: impl Into<String>) -> Result<Self, ExportError> {
        let payload = Self(url.into());
        payload.png_bytes()?;
        Ok(payload)
    }

    /// The `data:image/png;base64,...` string
    #[inline]
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.0
    }

    /// Decode back to PNG bytes
    ///
    /// # Errors
    /// See [`SignaturePayload::from_data_url`].
    pub fn png_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let body = self
            .0
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(ExportError::NotPngDataUrl)?;
        Ok(STANDARD.decode(body)?)
    }

    /// SHA-256 of the data URL, hex encoded
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }

    /// Length of the data URL in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty (never true for encoded payloads)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for SignaturePayload {
    type Error = ExportError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::from_data_url(url)
    }
}

impl From<SignaturePayload> for String {
    fn from(payload: SignaturePayload) -> Self {
        payload.0
    }
}

// Debug shows the fingerprint, never the base64 body.
impl fmt::Debug for SignaturePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignaturePayload")
            .field("len", &self.0.len())
            .field("fingerprint", &&self.fingerprint()[..16])
            .finish()
    }
}
