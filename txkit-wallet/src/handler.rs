//! Secure key handler: a polymorphic facade over an Ed25519 or BIP32
//! private key, held only as an encrypted envelope plus the passphrase
//! callback needed to unlock it for signing.
//!
//! On-disk layout (all integers big-endian):
//!
//! ```text
//! magic (4) | version (1) | handler type (1) | ciphertext len (4) | ciphertext (N) | crc32 (4)
//! ```
//!
//! The CRC-32 covers every byte preceding it, so a truncated or corrupted
//! envelope is rejected before any expensive decryption is attempted.

use rand::{CryptoRng, RngCore};
use txkit_crypto::{
    key::ed25519::{PublicKey, SecretKey},
    memsec::Scrubbed,
};
use txkit_primitives::conway::{Tx, VKeyWitness, WitnessSet};
use txkit_primitives::NonEmptySet;

use crate::{
    hd::{Bip32PrivateKey, Bip32PublicKey},
    wrapper, Error, PrivateKey,
};

const MAGIC: [u8; 4] = [0x0A, 0x0A, 0x0A, 0x0A];
const FORMAT_VERSION: u8 = 0x01;
const XPRV_SIZE: usize = 96;

/// Distinguishes the kind of key material a handler envelope carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HandlerType {
    Ed25519 = 0x00,
    Bip32 = 0x01,
}

impl TryFrom<u8> for HandlerType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Ed25519),
            0x01 => Ok(Self::Bip32),
            _ => Err(Error::InvalidMagic),
        }
    }
}

/// Supplies a passphrase into a caller-owned buffer, mirroring EMIP-3's
/// `(out_buf, cap) -> length` callback contract as an idiomatic closure.
pub trait PassphraseCallback: FnMut(&mut [u8]) -> Result<usize, Error> {}
impl<F> PassphraseCallback for F where F: FnMut(&mut [u8]) -> Result<usize, Error> {}

fn read_passphrase(callback: &mut dyn FnMut(&mut [u8]) -> Result<usize, Error>) -> Result<String, Error> {
    let mut buf = [0u8; 256];
    let len = callback(&mut buf)?;
    let slice = buf.get(..len).ok_or(Error::InvalidPassphrase)?;
    let passphrase = String::from_utf8(slice.to_vec()).map_err(|_| Error::InvalidPassphrase);
    buf.scrub();
    passphrase
}

fn sign_with(key: &PrivateKey, tx: &Tx<'_>) -> VKeyWitness {
    let id = tx.id();
    let signature = key.sign(id);
    let vkey = key.public_key();

    VKeyWitness {
        vkey: vkey.as_ref().to_vec().into(),
        signature: signature.as_ref().to_vec().into(),
    }
}

fn witness_set_from(witnesses: Vec<VKeyWitness>) -> WitnessSet<'static> {
    WitnessSet {
        vkeywitness: NonEmptySet::try_from(witnesses).ok(),
        native_script: None,
        bootstrap_witness: None,
        plutus_v1_script: None,
        plutus_data: None,
        redeemer: None,
        plutus_v2_script: None,
        plutus_v3_script: None,
    }
}

/// Derives the key at `path` from `root`, one BIP32 child step per
/// element. `path` must not be empty.
fn derive_path(root: &Bip32PrivateKey, path: &[u32]) -> Bip32PrivateKey {
    let (first, rest) = path.split_first().expect("derivation path must not be empty");
    let mut key = root.derive(*first);
    for index in rest {
        key = key.derive(*index);
    }
    key
}

/// A key handler: holds a private key only as long as a signing
/// operation takes, otherwise it exists exclusively as an encrypted
/// envelope obtained via [`SecureKeyHandler::serialize`].
pub struct SecureKeyHandler {
    handler_type: HandlerType,
    ciphertext: Vec<u8>,
    callback: Box<dyn FnMut(&mut [u8]) -> Result<usize, Error>>,
}

impl SecureKeyHandler {
    /// Builds a handler around a plain Ed25519 key, encrypting it under
    /// the passphrase `callback` returns.
    pub fn from_ed25519_key<Rng>(
        rng: Rng,
        key: SecretKey,
        mut callback: impl PassphraseCallback + 'static,
    ) -> Result<Self, Error>
    where
        Rng: RngCore + CryptoRng,
    {
        let passphrase = read_passphrase(&mut callback)?;
        let mut bytes = unsafe { SecretKey::leak_into_bytes(key) };
        let ciphertext = wrapper::encrypt_bytes(rng, &bytes, &passphrase);
        bytes.scrub();

        Ok(Self {
            handler_type: HandlerType::Ed25519,
            ciphertext,
            callback: Box::new(callback),
        })
    }

    /// Builds a handler around a BIP32 extended private key, encrypting
    /// it under the passphrase `callback` returns.
    pub fn from_bip32_key<Rng>(
        rng: Rng,
        key: Bip32PrivateKey,
        mut callback: impl PassphraseCallback + 'static,
    ) -> Result<Self, Error>
    where
        Rng: RngCore + CryptoRng,
    {
        let passphrase = read_passphrase(&mut callback)?;
        let mut bytes = key.as_bytes();
        let ciphertext = wrapper::encrypt_bytes(rng, &bytes, &passphrase);
        bytes.scrub();

        Ok(Self {
            handler_type: HandlerType::Bip32,
            ciphertext,
            callback: Box::new(callback),
        })
    }

    fn decrypt_ed25519(&mut self) -> Result<SecretKey, Error> {
        if self.handler_type != HandlerType::Ed25519 {
            return Err(Error::WrongHandlerType(HandlerType::Ed25519));
        }

        let passphrase = read_passphrase(&mut self.callback)?;
        let mut plaintext = wrapper::decrypt_bytes(&passphrase, &self.ciphertext)?;
        let bytes: [u8; SecretKey::SIZE] = plaintext
            .as_slice()
            .try_into()
            .map_err(|_| Error::WrapperDataInvalidSize)?;
        plaintext.scrub();

        Ok(SecretKey::from(bytes))
    }

    fn decrypt_bip32(&mut self) -> Result<Bip32PrivateKey, Error> {
        if self.handler_type != HandlerType::Bip32 {
            return Err(Error::WrongHandlerType(HandlerType::Bip32));
        }

        let passphrase = read_passphrase(&mut self.callback)?;
        let mut plaintext = wrapper::decrypt_bytes(&passphrase, &self.ciphertext)?;
        let bytes: [u8; XPRV_SIZE] = plaintext
            .as_slice()
            .try_into()
            .map_err(|_| Error::WrapperDataInvalidSize)?;
        plaintext.scrub();

        Bip32PrivateKey::from_bytes(bytes)
    }

    /// The Ed25519 public key associated with this handler's secret.
    pub fn ed25519_get_public_key(&mut self) -> Result<PublicKey, Error> {
        Ok(self.decrypt_ed25519()?.public_key())
    }

    /// Signs `tx`'s id with this handler's Ed25519 secret, returning a
    /// witness set carrying exactly one vkey witness.
    pub fn ed25519_sign_transaction(&mut self, tx: &Tx<'_>) -> Result<WitnessSet<'static>, Error> {
        let key = self.decrypt_ed25519()?;
        let witness = sign_with(&PrivateKey::Normal(key), tx);

        Ok(witness_set_from(vec![witness]))
    }

    /// The BIP32 public key at `account_path`, derived from this
    /// handler's root extended private key.
    pub fn bip32_get_extended_account_public_key(
        &mut self,
        account_path: &[u32],
    ) -> Result<Bip32PublicKey, Error> {
        let root = self.decrypt_bip32()?;
        Ok(derive_path(&root, account_path).to_public())
    }

    /// Signs `tx`'s id once per path in `paths`, deriving a child key at
    /// each path from this handler's root extended private key. Returns
    /// a witness set carrying one vkey witness per path.
    pub fn bip32_sign_transaction(
        &mut self,
        tx: &Tx<'_>,
        paths: &[&[u32]],
    ) -> Result<WitnessSet<'static>, Error> {
        let root = self.decrypt_bip32()?;

        let witnesses = paths
            .iter()
            .map(|path| {
                let child = derive_path(&root, path);
                sign_with(&child.to_ed25519_private_key(), tx)
            })
            .collect();

        Ok(witness_set_from(witnesses))
    }

    /// Serializes this handler into its self-describing, CRC-32-checked
    /// envelope.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + 1 + 4 + self.ciphertext.len() + 4);
        out.extend_from_slice(&MAGIC);
        out.push(FORMAT_VERSION);
        out.push(self.handler_type as u8);
        out.extend_from_slice(&(self.ciphertext.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.ciphertext);

        let crc = txkit_crypto::facade::crc32(&out);
        out.extend_from_slice(&crc.to_be_bytes());

        out
    }

    /// Validates and loads an envelope produced by
    /// [`SecureKeyHandler::serialize`]. The envelope's ciphertext is not
    /// decrypted until an operation that needs the secret is called.
    pub fn deserialize(
        envelope: &[u8],
        callback: impl PassphraseCallback + 'static,
    ) -> Result<Self, Error> {
        if envelope.len() < 4 + 1 + 1 + 4 + 4 {
            return Err(Error::WrapperDataInvalidSize);
        }

        let (body, trailing_crc) = envelope.split_at(envelope.len() - 4);
        let expected_crc = u32::from_be_bytes(trailing_crc.try_into().unwrap());
        if txkit_crypto::facade::crc32(body) != expected_crc {
            return Err(Error::ChecksumMismatch);
        }

        if body[0..4] != MAGIC {
            return Err(Error::InvalidMagic);
        }

        if body[4] != FORMAT_VERSION {
            return Err(Error::InvalidMagic);
        }

        let handler_type = HandlerType::try_from(body[5])?;

        let len = u32::from_be_bytes(body[6..10].try_into().unwrap()) as usize;
        let ciphertext = body.get(10..10 + len).ok_or(Error::WrapperDataInvalidSize)?;
        if 10 + len != body.len() {
            return Err(Error::WrapperDataInvalidSize);
        }

        Ok(Self {
            handler_type,
            ciphertext: ciphertext.to_vec(),
            callback: Box::new(callback),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use txkit_primitives::conway::TransactionBody;
    use txkit_primitives::{Hash, KeepRaw, Set, TransactionInput};

    fn fixed_passphrase(passphrase: &'static str) -> impl PassphraseCallback {
        move |buf: &mut [u8]| -> Result<usize, Error> {
            let bytes = passphrase.as_bytes();
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    fn fake_tx() -> Tx<'static> {
        let body = TransactionBody {
            inputs: Set::from(vec![TransactionInput {
                transaction_id: Hash::new([0u8; 32]),
                index: 0,
            }]),
            outputs: Vec::new(),
            fee: 0,
            ttl: None,
            certificates: None,
            withdrawals: None,
            auxiliary_data_hash: None,
            validity_interval_start: None,
            mint: None,
            script_data_hash: None,
            collateral: None,
            required_signers: None,
            network_id: None,
            collateral_return: None,
            total_collateral: None,
            reference_inputs: None,
            voting_procedures: None,
            proposal_procedures: None,
            treasury_value: None,
            donation: None,
        };

        let body_bytes: &'static [u8] =
            Box::leak(txkit_codec::minicbor::to_vec(&body).unwrap().into_boxed_slice());
        let transaction_body: KeepRaw<TransactionBody> =
            txkit_codec::minicbor::decode(body_bytes).unwrap();

        let witness_set = witness_set_from(Vec::new());
        let witness_bytes: &'static [u8] = Box::leak(
            txkit_codec::minicbor::to_vec(&witness_set)
                .unwrap()
                .into_boxed_slice(),
        );
        let transaction_witness_set: KeepRaw<WitnessSet> =
            txkit_codec::minicbor::decode(witness_bytes).unwrap();

        Tx {
            transaction_body,
            transaction_witness_set,
            success: true,
            auxiliary_data: txkit_primitives::Nullable::Null,
        }
    }

    #[test]
    fn envelope_roundtrips() {
        let key = SecretKey::new(OsRng);
        let public = key.public_key();

        let handler =
            SecureKeyHandler::from_ed25519_key(OsRng, key, fixed_passphrase("hunter2")).unwrap();
        let envelope = handler.serialize();

        let mut decoded =
            SecureKeyHandler::deserialize(&envelope, fixed_passphrase("hunter2")).unwrap();
        assert_eq!(decoded.ed25519_get_public_key().unwrap(), public);
    }

    #[test]
    fn tampered_envelope_fails_checksum() {
        let key = SecretKey::new(OsRng);
        let handler =
            SecureKeyHandler::from_ed25519_key(OsRng, key, fixed_passphrase("hunter2")).unwrap();
        let mut envelope = handler.serialize();

        let last = envelope.len() - 1;
        envelope[last] ^= 0xFF;

        assert!(matches!(
            SecureKeyHandler::deserialize(&envelope, fixed_passphrase("hunter2")),
            Err(Error::ChecksumMismatch)
        ));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let key = SecretKey::new(OsRng);
        let handler =
            SecureKeyHandler::from_ed25519_key(OsRng, key, fixed_passphrase("hunter2")).unwrap();
        let mut envelope = handler.serialize();

        envelope[0] = 0xFF;
        let crc = txkit_crypto::facade::crc32(&envelope[..envelope.len() - 4]);
        let len = envelope.len();
        envelope[len - 4..].copy_from_slice(&crc.to_be_bytes());

        assert!(matches!(
            SecureKeyHandler::deserialize(&envelope, fixed_passphrase("hunter2")),
            Err(Error::InvalidMagic)
        ));
    }

    #[test]
    fn ed25519_handler_rejects_bip32_operations() {
        let key = SecretKey::new(OsRng);
        let mut handler =
            SecureKeyHandler::from_ed25519_key(OsRng, key, fixed_passphrase("hunter2")).unwrap();

        assert!(matches!(
            handler.bip32_get_extended_account_public_key(&[]),
            Err(Error::WrongHandlerType(HandlerType::Bip32))
        ));
    }

    #[test]
    fn ed25519_sign_transaction_produces_one_witness() {
        let key = SecretKey::new(OsRng);
        let public = key.public_key();
        let mut handler =
            SecureKeyHandler::from_ed25519_key(OsRng, key, fixed_passphrase("hunter2")).unwrap();

        let tx = fake_tx();
        let witness_set = handler.ed25519_sign_transaction(&tx).unwrap();
        let witnesses = witness_set.vkeywitness.unwrap().to_vec();

        assert_eq!(witnesses.len(), 1);
        assert_eq!(witnesses[0].vkey.as_ref(), public.as_ref());
    }

    #[test]
    fn bip32_sign_transaction_derives_one_witness_per_path() {
        let root = Bip32PrivateKey::generate(OsRng);
        let mut handler =
            SecureKeyHandler::from_bip32_key(OsRng, root, fixed_passphrase("hunter2")).unwrap();

        let tx = fake_tx();
        let paths: Vec<&[u32]> = vec![
            &[crate::hd::harden(1852), crate::hd::harden(1815), crate::hd::harden(0), 0, 0],
            &[crate::hd::harden(1852), crate::hd::harden(1815), crate::hd::harden(0), 0, 1],
        ];

        let witness_set = handler.bip32_sign_transaction(&tx, &paths).unwrap();
        let witnesses = witness_set.vkeywitness.unwrap().to_vec();

        assert_eq!(witnesses.len(), 2);
        assert_ne!(witnesses[0].vkey, witnesses[1].vkey);
    }
}
