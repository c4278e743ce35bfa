//! Decoding of the public key the host page provides for push encryption.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::Error;

/// The length in bytes of an uncompressed P-256 public key.
pub const APPLICATION_SERVER_KEY_LEN: usize = 65;

/// The public key identifying the application server to the push service
/// (also known as the VAPID key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationServerKey([u8; APPLICATION_SERVER_KEY_LEN]);

impl ApplicationServerKey {
    /// Decode a base64 encoded key.
    ///
    /// Both the URL-safe and the standard alphabet are accepted, with or
    /// without padding.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingPublicKey] if `encoded` is blank and
    /// [Error::InvalidPublicKey] if it is not valid base64 or does not decode
    /// to exactly [APPLICATION_SERVER_KEY_LEN] bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, Error> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(Error::MissingPublicKey);
        }

        let normalized: String = encoded
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                c => c,
            })
            .collect();

        let bytes = URL_SAFE_NO_PAD
            .decode(normalized)
            .map_err(|error| Error::InvalidPublicKey(error.to_string()))?;

        let key: [u8; APPLICATION_SERVER_KEY_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            Error::InvalidPublicKey(format!(
                "expected {APPLICATION_SERVER_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Self(key))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
