use crate::ToHash;

use super::{Header, PlutusV2Script, TransactionBody, DatumOption};
use txkit_codec::utils::KeepRaw;
use txkit_crypto::hash::{Hash, Hasher};

impl ToHash<32> for Header {
    fn to_hash(&self) -> txkit_crypto::hash::Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

impl ToHash<28> for PlutusV2Script {
    fn to_hash(&self) -> Hash<28> {
        Hasher::<224>::hash_tagged_cbor(self, 1)
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

impl ToHash<32> for DatumOption {
    fn to_hash(&self) -> Hash<32> {
        match self {
            DatumOption::Hash(hash) => *hash,
            DatumOption::Data(data) => data.to_hash()
        }
    }
}

