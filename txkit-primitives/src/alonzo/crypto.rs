use crate::ToHash;

use super::{AuxiliaryData, Header, NativeScript, PlutusData, PlutusScript, TransactionBody};
use txkit_codec::utils::KeepRaw;
use txkit_crypto::hash::{Hash, Hasher};

impl ToHash<32> for Header {
    fn to_hash(&self) -> txkit_crypto::hash::Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

impl ToHash<32> for AuxiliaryData {
    fn to_hash(&self) -> txkit_crypto::hash::Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

impl ToHash<28> for NativeScript {
    fn to_hash(&self) -> Hash<28> {
        Hasher::<224>::hash_tagged_cbor(self, 0)
    }
}

impl ToHash<28> for PlutusScript {
    fn to_hash(&self) -> Hash<28> {
        Hasher::<224>::hash_tagged_cbor(self, 1)
    }
}

impl ToHash<32> for PlutusData {
    fn to_hash(&self) -> Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

impl ToHash<32> for TransactionBody {
    fn to_hash(&self) -> Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

impl ToHash<32> for KeepRaw<'_, TransactionBody> {
    fn to_hash(&self) -> txkit_crypto::hash::Hash<32> {
        Hasher::<256>::hash(self.raw_cbor())
    }
}

