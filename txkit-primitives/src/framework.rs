pub type Error = Box<dyn std::error::Error>;

use txkit_codec::minicbor::{decode, to_vec, Decode, Encode};

pub trait Fragment<'a>
where
    Self: Sized,
{
    fn encode_fragment(&self) -> Result<Vec<u8>, Error>;
    fn decode_fragment(bytes: &'a [u8]) -> Result<Self, Error>;
}

impl<'a, T> Fragment<'a> for T
where
    T: Encode<()> + Decode<'a, ()> + Sized,
{
    fn encode_fragment(&self) -> Result<Vec<u8>, Error> {
        to_vec(self).map_err(|e| e.into())
    }

    fn decode_fragment(bytes: &'a [u8]) -> Result<Self, Error> {
        decode(bytes).map_err(|e| e.into())
    }
}

#[cfg(feature = "json")]
pub trait ToCanonicalJson {
    fn to_json(&self) -> serde_json::Value;
}

/// Entities with a ledger-defined Blake2b digest: `N` is the digest size
/// in bytes (28 for most credential/script hashes, 32 for transaction
/// and block ids). Implementors for [`txkit_codec::utils::KeepRaw`]
/// wrappers must hash the original captured bytes rather than
/// re-encoding, so that the id of a value decoded from non-canonical
/// input still matches what the chain actually hashed.
pub trait ToHash<const N: usize> {
    fn to_hash(&self) -> txkit_crypto::hash::Hash<N>;
}
