//! EMIP-3 at-rest private key encryption.
//!
//! A [`PrivateKey`] is never persisted in the clear: [`encrypt_private_key`]
//! wraps it in the EMIP-3 envelope `salt || ciphertext || tag`. The
//! passphrase is stretched with PBKDF2-HMAC-SHA-512, at EMIP-3's mandated
//! iteration count, into 64 bytes of key material; the first 32 bytes are
//! the ChaCha20-Poly1305 cipher key and the next 12 are its nonce (the
//! remaining 20 bytes go unused). Because both key and nonce are
//! rederived from `salt` and `password` alone, neither needs to be stored
//! in the envelope.

use rand::{CryptoRng, RngCore};
use txkit_crypto::{
    facade::{chacha20poly1305_decrypt, chacha20poly1305_encrypt, pbkdf2_hmac_sha512},
    key::ed25519::{SecretKey, SecretKeyExtended},
};

use crate::{Error, PrivateKey};

const SALT_SIZE: usize = 32;
const NONCE_SIZE: usize = 12;
const TAG_SIZE: usize = 16;
const KEY_SIZE: usize = 32;
const DERIVED_MATERIAL_SIZE: usize = 64;

/// Derives the ChaCha20-Poly1305 key and nonce from `password` and `salt`
/// per EMIP-3: 64 bytes of PBKDF2-HMAC-SHA-512 output, split into a
/// 32-byte key and a 12-byte nonce (the trailing 20 bytes are unused).
fn derive_key_and_nonce(password: &str, salt: &[u8]) -> ([u8; KEY_SIZE], [u8; NONCE_SIZE]) {
    let mut material = [0u8; DERIVED_MATERIAL_SIZE];
    pbkdf2_hmac_sha512(
        password.as_bytes(),
        salt,
        txkit_crypto::facade::PBKDF2_HMAC_SHA512_ITERATIONS,
        &mut material,
    );

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&material[..KEY_SIZE]);
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&material[KEY_SIZE..KEY_SIZE + NONCE_SIZE]);

    (key, nonce)
}

/// Encrypts an arbitrary plaintext buffer under `password`, returning
/// `salt || ciphertext || tag`. The length-based dispatch in
/// [`decrypt_private_key`] is the only place that cares what the buffer
/// actually holds; this function and [`decrypt_bytes`] don't.
pub fn encrypt_bytes<Rng>(mut rng: Rng, plaintext: &[u8], password: &str) -> Vec<u8>
where
    Rng: RngCore + CryptoRng,
{
    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);

    let (sym_key, nonce) = derive_key_and_nonce(password, &salt);

    let mut ciphertext = vec![0u8; plaintext.len()];
    let tag = chacha20poly1305_encrypt(&sym_key, &nonce, &[], plaintext, &mut ciphertext);

    let mut out = Vec::with_capacity(SALT_SIZE + ciphertext.len() + TAG_SIZE);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&ciphertext);
    out.extend_from_slice(&tag);
    out
}

/// Decrypts an envelope produced by [`encrypt_bytes`], returning the raw
/// plaintext buffer. Callers are responsible for zero-wiping the result
/// once they've copied what they need out of it.
pub fn decrypt_bytes(password: &str, data: &[u8]) -> Result<Vec<u8>, Error> {
    let header_size = SALT_SIZE + TAG_SIZE;
    if data.len() <= header_size {
        return Err(Error::WrapperDataInvalidSize);
    }

    let salt = &data[..SALT_SIZE];
    let ciphertext = &data[SALT_SIZE..data.len() - TAG_SIZE];
    let tag: [u8; TAG_SIZE] = data[data.len() - TAG_SIZE..]
        .try_into()
        .map_err(|_| Error::WrapperDataInvalidSize)?;

    let (sym_key, nonce) = derive_key_and_nonce(password, salt);

    let mut plaintext = vec![0u8; ciphertext.len()];
    if !chacha20poly1305_decrypt(&sym_key, &nonce, &[], ciphertext, &tag, &mut plaintext) {
        return Err(Error::WrapperDataFailedToDecrypt);
    }

    Ok(plaintext)
}

/// Encrypts `private_key` under `password`, returning the EMIP-3 envelope
/// `salt || ciphertext || tag`.
pub fn encrypt_private_key<Rng>(rng: Rng, private_key: PrivateKey, password: &str) -> Vec<u8>
where
    Rng: RngCore + CryptoRng,
{
    encrypt_bytes(rng, &private_key.as_bytes(), password)
}

/// Decrypts an envelope produced by [`encrypt_private_key`].
pub fn decrypt_private_key(password: &str, data: Vec<u8>) -> Result<PrivateKey, Error> {
    let plaintext = decrypt_bytes(password, &data)?;

    match plaintext.len() {
        SecretKey::SIZE => {
            let bytes: [u8; SecretKey::SIZE] = plaintext
                .try_into()
                .map_err(|_| Error::WrapperDataInvalidSize)?;
            Ok(PrivateKey::Normal(SecretKey::from(bytes)))
        }
        SecretKeyExtended::SIZE => {
            let bytes: [u8; SecretKeyExtended::SIZE] = plaintext
                .try_into()
                .map_err(|_| Error::WrapperDataInvalidSize)?;
            Ok(PrivateKey::Extended(SecretKeyExtended::from_bytes(bytes)?))
        }
        _ => Err(Error::WrapperDataInvalidSize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn private_key_encryption_roundtrip_normal() {
        let key = SecretKey::new(OsRng);
        let public = key.public_key();
        let encrypted = encrypt_private_key(OsRng, PrivateKey::Normal(key), "hunter2");

        let decrypted = decrypt_private_key("hunter2", encrypted).unwrap();
        assert_eq!(decrypted.public_key(), public);
    }

    #[test]
    fn private_key_encryption_roundtrip_extended() {
        let key = SecretKeyExtended::new(OsRng);
        let public = key.public_key();
        let encrypted = encrypt_private_key(OsRng, PrivateKey::Extended(key), "hunter2");

        let decrypted = decrypt_private_key("hunter2", encrypted).unwrap();
        assert_eq!(decrypted.public_key(), public);
    }

    #[test]
    fn wrong_password_fails_to_decrypt() {
        let key = SecretKey::new(OsRng);
        let encrypted = encrypt_private_key(OsRng, PrivateKey::Normal(key), "hunter2");

        assert!(matches!(
            decrypt_private_key("not-hunter2", encrypted),
            Err(Error::WrapperDataFailedToDecrypt)
        ));
    }
}
