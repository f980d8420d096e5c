//! RS256 signature verification with a JWK's RSA public key.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken as jwt;

use crate::config::ExponentPolicy;
use crate::error::VerificationError;
use crate::keyset::Key;

/// 65537, big-endian.
const STANDARD_EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];

/// Verifies `signature` (base64url, unpadded) over `signed_content` with `key`, using exponent 65537.
///
/// `signed_content` is `header.payload` exactly as received. See [verify_with] for the checks made.
pub fn verify(
    key: &Key,
    signed_content: &[u8],
    signature: &str,
) -> Result<(), VerificationError> {
    verify_with(key, signed_content, signature, ExponentPolicy::Standard)
}

/// Verifies an RSASSA-PKCS1-v1_5 / SHA-256 signature with the exponent chosen by `policy`.
///
/// Errors:
/// - [VerificationError::MalformedKey] when the key is not an RSA signing key, or its modulus
///   (or exponent, under [ExponentPolicy::FromKey]) is not a base64url positive integer
/// - [VerificationError::MalformedSignature] when `signature` is not base64url without padding
/// - [VerificationError::VerificationFailed] for every other failure, including a key whose
///   `alg` is not RS256 and moduli below 2048 bits
pub fn verify_with(
    key: &Key,
    signed_content: &[u8],
    signature: &str,
    policy: ExponentPolicy,
) -> Result<(), VerificationError> {
    if key.kty() != "RSA" {
        return Err(VerificationError::MalformedKey("key type is not RSA"));
    }
    if !key.key_use().is_empty() && key.key_use() != "sig" {
        return Err(VerificationError::MalformedKey("key is not a signing key"));
    }
    let n = decode_unsigned(key.n()).ok_or(VerificationError::MalformedKey(
        "modulus is not a base64url positive integer",
    ))?;

    let e = match policy {
        ExponentPolicy::Standard => STANDARD_EXPONENT.to_vec(),
        ExponentPolicy::FromKey => decode_unsigned(key.e()).ok_or(
            VerificationError::MalformedKey("exponent is not a base64url positive integer"),
        )?,
    };

    // jsonwebtoken decodes the signature itself; decoding here only tells a malformed
    // signature apart from one that does not verify.
    URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(VerificationError::MalformedSignature)?;

    if !key.alg().is_empty() && key.alg() != "RS256" {
        return Err(VerificationError::VerificationFailed);
    }

    let decoding_key = jwt::DecodingKey::from_rsa_raw_components(&n, &e);

    match jwt::crypto::verify(signature, signed_content, &decoding_key, jwt::Algorithm::RS256) {
        Ok(true) => Ok(()),
        _ => Err(VerificationError::VerificationFailed),
    }
}

/// Decodes a base64url big-endian unsigned integer without its leading zero octets.
///
/// `None` when the input does not decode or the value is zero.
fn decode_unsigned(b64: &str) -> Option<Vec<u8>> {
    let bytes = URL_SAFE_NO_PAD.decode(b64).ok()?;
    let first = bytes.iter().position(|b| *b != 0)?;
    Some(bytes[first..].to_vec())
}
