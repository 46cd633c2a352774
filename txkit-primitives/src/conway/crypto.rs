use crate::ToHash;

use super::{Tx, TransactionBody};
use txkit_codec::utils::KeepRaw;
use txkit_crypto::hash::{Hash, Hasher};

impl ToHash<32> for TransactionBody<'_> {
    fn to_hash(&self) -> Hash<32> {
        Hasher::<256>::hash_cbor(self)
    }
}

/// Hashing a [`KeepRaw`] body reuses the bytes the body was decoded from
/// instead of re-encoding, so the id of a transaction built from
/// non-canonical input still matches what the chain hashed.
impl ToHash<32> for KeepRaw<'_, TransactionBody<'_>> {
    fn to_hash(&self) -> Hash<32> {
        Hasher::<256>::hash(self.raw_cbor())
    }
}

impl Tx<'_> {
    /// The transaction id: Blake2b-256 of the canonical encoding of the
    /// body alone (never the witness set or auxiliary data).
    pub fn id(&self) -> Hash<32> {
        self.transaction_body.to_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conway::TransactionInput;
    use crate::Set;
    use txkit_codec::minicbor;

    #[test]
    fn same_body_bytes_hash_identically_through_keepraw_and_fresh_encode() {
        let body = TransactionBody {
            inputs: Set::from(vec![TransactionInput {
                transaction_id: Hash::new([0u8; 32]),
                index: 0,
            }]),
            outputs: Vec::new(),
            fee: 10,
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

        let bytes = minicbor::to_vec(&body).unwrap();
        let kept: KeepRaw<TransactionBody> = minicbor::decode(&bytes).unwrap();

        assert_eq!(kept.to_hash(), body.to_hash());
    }

    fn minimal_body(input_index: u64) -> TransactionBody<'static> {
        TransactionBody {
            inputs: Set::from(vec![TransactionInput {
                transaction_id: Hash::new([0u8; 32]),
                index: input_index,
            }]),
            outputs: Vec::new(),
            fee: 10,
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
        }
    }

    #[test]
    fn changing_an_input_changes_the_transaction_id() {
        let a = minimal_body(0);
        let b = minimal_body(1);

        assert_ne!(a.to_hash(), b.to_hash());
    }

    #[test]
    fn id_is_stable_across_repeated_decode_of_the_same_bytes() {
        let body = minimal_body(0);
        let bytes = minicbor::to_vec(&body).unwrap();

        // Decoding the same canonical bytes twice (standing in for
        // "decode once for the witness set, once for the id") must yield
        // the same id each time: the id is a pure function of the body's
        // cached bytes, never of anything decoded alongside it.
        let first: KeepRaw<TransactionBody> = minicbor::decode(&bytes).unwrap();
        let second: KeepRaw<TransactionBody> = minicbor::decode(&bytes).unwrap();

        assert_eq!(first.to_hash(), second.to_hash());
        assert_eq!(first.to_hash(), body.to_hash());
    }

    fn minimal_witness_set() -> crate::conway::WitnessSet<'static> {
        crate::conway::WitnessSet {
            vkeywitness: None,
            native_script: None,
            bootstrap_witness: None,
            plutus_v1_script: None,
            plutus_data: None,
            plutus_v2_script: None,
            redeemer: None,
            plutus_v3_script: None,
        }
    }

    /// Encodes a full `Tx` fixture and returns its owned CBOR bytes, so the
    /// `KeepRaw` wrappers decoded along the way never outlive this call.
    fn tx_cbor_bytes(input_index: u64, auxiliary_data: Option<crate::alonzo::AuxiliaryData>) -> Vec<u8> {
        let body_bytes = minicbor::to_vec(&minimal_body(input_index)).unwrap();
        let transaction_body: KeepRaw<TransactionBody> = minicbor::decode(&body_bytes).unwrap();

        let witness_bytes = minicbor::to_vec(&minimal_witness_set()).unwrap();
        let transaction_witness_set = minicbor::decode(&witness_bytes).unwrap();

        let auxiliary_data = auxiliary_data.map(|data| {
            let aux_bytes = minicbor::to_vec(&data).unwrap();
            minicbor::decode(&aux_bytes).unwrap()
        });

        let tx = Tx {
            transaction_body,
            transaction_witness_set,
            success: true,
            auxiliary_data: auxiliary_data.into(),
        };

        minicbor::to_vec(&tx).unwrap()
    }

    /// Scenario: a fixture transaction's id survives a rewrite of its
    /// auxiliary metadata untouched, but not a rewrite of one of its
    /// inputs, because the id only ever hashes the transaction body.
    #[test]
    fn transaction_id_ignores_auxiliary_data_but_tracks_the_body() {
        let no_metadata_bytes = tx_cbor_bytes(0, None);
        let with_metadata_bytes = tx_cbor_bytes(
            0,
            Some(crate::alonzo::AuxiliaryData::Shelley(
                txkit_codec::utils::KeyValuePairs::from(Vec::new()),
            )),
        );
        let different_input_bytes = tx_cbor_bytes(1, None);

        let no_metadata: Tx = minicbor::decode(&no_metadata_bytes).unwrap();
        let with_metadata: Tx = minicbor::decode(&with_metadata_bytes).unwrap();
        let different_input: Tx = minicbor::decode(&different_input_bytes).unwrap();

        assert_eq!(no_metadata.id(), with_metadata.id());
        assert_ne!(no_metadata.id(), different_input.id());
    }
}
