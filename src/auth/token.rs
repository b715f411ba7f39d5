//! Bearer token formatting and parsing
//!
//! Issued tokens are opaque strings of the form
//! `sf_v1_{token id}.{secret}`: the id half names the token in the
//! registry, the hex-encoded secret half proves possession. Nothing
//! about the account is recoverable from the token itself.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;
use uuid::Uuid;

/// Token identifier prefix
pub const TOKEN_PREFIX: &str = "sf";

/// Version segment carried by every issued token
pub const TOKEN_VERSION: &str = "v1";

/// Number of secret bytes encoded in a token
pub const TOKEN_SECRET_BYTES: usize = 32;

const TOKEN_SECRET_HEX_CHARS: usize = TOKEN_SECRET_BYTES * 2;

/// The random half of a bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret {
    bytes: [u8; TOKEN_SECRET_BYTES],
}

impl TokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")
    }
}

/// A token split back into its id and secret halves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    pub token_id: Uuid,
    pub secret: TokenSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token format is invalid")]
    InvalidFormat,

    #[error("token version is not supported")]
    UnsupportedVersion,

    #[error("token secret encoding is invalid")]
    InvalidSecretEncoding,
}

/// Draw a fresh token secret from the operating system RNG
#[must_use]
pub fn generate_secret() -> TokenSecret {
    let mut secret = [0_u8; TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    TokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_token(token_id: Uuid, secret: &TokenSecret) -> String {
    format!(
        "{TOKEN_PREFIX}_{TOKEN_VERSION}_{}.{}",
        token_id.simple(),
        encode_secret_hex(secret.as_bytes())
    )
}

pub fn parse_token(token: &str) -> Result<ParsedToken, TokenError> {
    let (prefix_and_id, secret_hex) = token.split_once('.').ok_or(TokenError::InvalidFormat)?;

    let mut id_parts = prefix_and_id.splitn(3, '_');

    let prefix = id_parts.next().ok_or(TokenError::InvalidFormat)?;
    let version_segment = id_parts.next().ok_or(TokenError::InvalidFormat)?;
    let token_id_segment = id_parts.next().ok_or(TokenError::InvalidFormat)?;

    if prefix != TOKEN_PREFIX {
        return Err(TokenError::InvalidFormat);
    }

    if version_segment != TOKEN_VERSION {
        return Err(TokenError::UnsupportedVersion);
    }

    let token_id = Uuid::try_parse(token_id_segment).map_err(|_| TokenError::InvalidFormat)?;

    let secret = decode_secret_hex(secret_hex).ok_or(TokenError::InvalidSecretEncoding)?;

    Ok(ParsedToken {
        token_id,
        secret: TokenSecret::from_bytes(secret),
    })
}

fn encode_secret_hex(secret: &[u8; TOKEN_SECRET_BYTES]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(TOKEN_SECRET_HEX_CHARS);

    for byte in secret {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}

fn decode_secret_hex(secret_hex: &str) -> Option<[u8; TOKEN_SECRET_BYTES]> {
    if secret_hex.len() != TOKEN_SECRET_HEX_CHARS {
        return None;
    }

    let mut secret = [0_u8; TOKEN_SECRET_BYTES];
    let secret_bytes = secret_hex.as_bytes();

    for (index, byte) in secret.iter_mut().enumerate() {
        let hi = decode_hex_nibble(secret_bytes[index * 2])?;
        let lo = decode_hex_nibble(secret_bytes[(index * 2) + 1])?;

        *byte = (hi << 4) | lo;
    }

    Some(secret)
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}
