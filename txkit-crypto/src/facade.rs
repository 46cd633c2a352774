//! A single place to reach for the primitives the rest of the crate builds
//! on: hashing, HMAC/PBKDF2 key stretching, the Ed25519 signature scheme
//! and the ChaCha20-Poly1305 AEAD used by the at-rest key envelope, plus
//! a CRC-32 checksum for that same envelope's framing.
//!
//! Every function here is a thin wrapper over [`cryptoxide`] or
//! [`crc32fast`]; the point is that callers elsewhere in the workspace
//! import `txkit_crypto::facade` instead of reaching for `cryptoxide`
//! directly, so the primitive choice lives in one file.

use cryptoxide::{
    chacha20poly1305::ChaCha20Poly1305, hmac::Hmac, mac::Mac as _, pbkdf2::pbkdf2, sha2::Sha512,
};

pub const PBKDF2_HMAC_SHA512_ITERATIONS: u32 = 19_162;

/// Derive `out.len()` bytes of key material from `passphrase` and `salt`
/// using PBKDF2-HMAC-SHA-512, per EMIP-3.
pub fn pbkdf2_hmac_sha512(passphrase: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    let mut mac = Hmac::new(Sha512::new(), passphrase);
    pbkdf2(&mut mac, salt, iterations, out);
}

/// One-shot HMAC-SHA-512, used where a MAC is needed without the
/// incremental PBKDF2 stretching above.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    let mut mac = Hmac::new(Sha512::new(), key);
    mac.input(data);
    let mut out = [0u8; 64];
    mac.raw_result(&mut out);
    out
}

/// Encrypt `plaintext` in place with ChaCha20-Poly1305, returning the
/// 16-byte authentication tag. `key` must be 32 bytes, `nonce` 12 bytes.
pub fn chacha20poly1305_encrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
    ciphertext: &mut [u8],
) -> [u8; 16] {
    let mut cipher = ChaCha20Poly1305::new(key, nonce, aad);
    let mut tag = [0u8; 16];
    cipher.encrypt(plaintext, ciphertext, &mut tag);
    tag
}

/// Decrypt `ciphertext` in place with ChaCha20-Poly1305, verifying
/// `tag`. Returns `false` (and leaves `plaintext` undefined) if the tag
/// does not match.
#[must_use]
pub fn chacha20poly1305_decrypt(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8; 16],
    plaintext: &mut [u8],
) -> bool {
    let mut cipher = ChaCha20Poly1305::new(key, nonce, aad);
    cipher.decrypt(ciphertext, plaintext, tag)
}

/// CRC-32 (IEEE) checksum, used to frame the secure-key-handler's
/// at-rest envelope.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pbkdf2_is_deterministic() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        pbkdf2_hmac_sha512(b"hunter2", b"some-salt", 1000, &mut a);
        pbkdf2_hmac_sha512(b"hunter2", b"some-salt", 1000, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn chacha20poly1305_roundtrips() {
        let key = [7u8; 32];
        let nonce = [9u8; 12];
        let plaintext = b"a secret payload";
        let mut ciphertext = vec![0u8; plaintext.len()];
        let tag = chacha20poly1305_encrypt(&key, &nonce, &[], plaintext, &mut ciphertext);

        let mut decrypted = vec![0u8; plaintext.len()];
        assert!(chacha20poly1305_decrypt(
            &key,
            &nonce,
            &[],
            &ciphertext,
            &tag,
            &mut decrypted
        ));
        assert_eq!(&decrypted, plaintext);
    }

    #[test]
    fn crc32_matches_known_vector() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }
}
