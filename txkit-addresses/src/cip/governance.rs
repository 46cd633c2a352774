//! DRep IDs ([CIP-105](https://cips.cardano.org/cip/CIP-105)/[CIP-129](https://cips.cardano.org/cip/CIP-129))
//! and governance-action IDs (CIP-129), introduced by Conway-era on-chain
//! governance.
//!
//! CIP-105 is the legacy DRep ID form: a bare 28-byte credential hash
//! Bech32-encoded under `drep`/`drep_script`, with no type byte. CIP-129
//! superseded it with a single-byte header ahead of the hash so that a
//! DRep ID, a committee credential and a governance-action ID can all be
//! told apart by header alone. Decoders here accept either DRep form;
//! encoders always emit CIP-129.

use bech32::{FromBase32, ToBase32, Variant};

use crate::Error;

const DREP_HRP: &str = "drep";
const DREP_SCRIPT_HRP: &str = "drep_script";
const GOV_ACTION_HRP: &str = "gov_action";

/// Governance-key type nibble (high nibble of a CIP-129 header byte).
/// DReps are the only governance-key type this crate needs to encode.
const GOVERNANCE_KEY_TYPE_DREP: u8 = 0b0000;

/// Low-nibble offset applied to the credential-type bit so that a CIP-129
/// header byte never collides with a Shelley address header's network tag
/// (whose low nibbles 0 and 1 are reserved for testnet/mainnet).
const CREDENTIAL_TYPE_OFFSET: u8 = 2;

/// A DRep's underlying credential: either a key hash or a script hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DRepCredential {
    Key([u8; 28]),
    Script([u8; 28]),
}

impl DRepCredential {
    fn hash_bytes(&self) -> &[u8; 28] {
        match self {
            Self::Key(h) => h,
            Self::Script(h) => h,
        }
    }

    /// CIP-129 credential-type nibble, before the network-tag-avoiding
    /// offset: 0 for a key hash, 1 for a script hash.
    fn credential_type(&self) -> u8 {
        match self {
            Self::Key(_) => 0,
            Self::Script(_) => 1,
        }
    }

    /// Always emits the current CIP-129 form: a single header byte
    /// (high nibble = governance-key type, low nibble = credential type + 2)
    /// followed by the 28-byte hash.
    pub fn to_bech32(&self) -> Result<String, Error> {
        let header =
            (GOVERNANCE_KEY_TYPE_DREP << 4) | (self.credential_type() + CREDENTIAL_TYPE_OFFSET);
        let payload = [&[header][..], self.hash_bytes()].concat();
        bech32::encode(DREP_HRP, payload.to_base32(), Variant::Bech32).map_err(Error::BadBech32)
    }

    /// Accepts both the legacy CIP-105 form (`drep`/`drep_script`, bare
    /// 28-byte hash) and the current CIP-129 form (`drep`, 1-byte header
    /// + 28-byte hash).
    pub fn from_bech32(value: &str) -> Result<Self, Error> {
        let (hrp, data, _) = bech32::decode(value).map_err(Error::BadBech32)?;
        let bytes = Vec::<u8>::from_base32(&data).map_err(Error::BadBech32)?;

        match hrp.as_str() {
            DREP_HRP if bytes.len() == 28 => Ok(Self::Key(to_array(&bytes)?)),
            DREP_SCRIPT_HRP if bytes.len() == 28 => Ok(Self::Script(to_array(&bytes)?)),
            DREP_HRP if bytes.len() == 29 => {
                let header = bytes[0];
                if header >> 4 != GOVERNANCE_KEY_TYPE_DREP {
                    return Err(Error::InvalidCredentialType(header));
                }
                match (header & 0x0F).wrapping_sub(CREDENTIAL_TYPE_OFFSET) {
                    0 => Ok(Self::Key(to_array(&bytes[1..])?)),
                    1 => Ok(Self::Script(to_array(&bytes[1..])?)),
                    _ => Err(Error::InvalidCredentialType(header)),
                }
            }
            _ => Err(Error::UnknownStringFormat(value.to_owned())),
        }
    }
}

fn to_array(slice: &[u8]) -> Result<[u8; 28], Error> {
    slice
        .try_into()
        .map_err(|_| Error::InvalidHashSize(slice.len()))
}

/// A governance-action ID: the transaction hash that created the
/// proposal procedure, plus its index within that transaction's list of
/// proposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GovActionId {
    pub transaction_id: [u8; 32],
    pub action_index: u8,
}

impl GovActionId {
    pub fn new(transaction_id: [u8; 32], action_index: u64) -> Result<Self, Error> {
        if action_index >= 256 {
            return Err(Error::InvalidArgument(format!(
                "governance action index {action_index} does not fit in CIP-129's 1-byte field"
            )));
        }
        Ok(Self {
            transaction_id,
            action_index: action_index as u8,
        })
    }

    pub fn to_bech32(&self) -> Result<String, Error> {
        let payload = [&self.transaction_id[..], &[self.action_index]].concat();
        bech32::encode(GOV_ACTION_HRP, payload.to_base32(), Variant::Bech32)
            .map_err(Error::BadBech32)
    }

    pub fn from_bech32(value: &str) -> Result<Self, Error> {
        let (hrp, data, _) = bech32::decode(value).map_err(Error::BadBech32)?;
        if hrp != GOV_ACTION_HRP {
            return Err(Error::UnknownStringFormat(value.to_owned()));
        }
        let bytes = Vec::<u8>::from_base32(&data).map_err(Error::BadBech32)?;
        if bytes.len() != 33 {
            return Err(Error::InvalidHashSize(bytes.len()));
        }
        let transaction_id = to_array32(&bytes[..32])?;
        Ok(Self {
            transaction_id,
            action_index: bytes[32],
        })
    }
}

fn to_array32(slice: &[u8]) -> Result<[u8; 32], Error> {
    slice
        .try_into()
        .map_err(|_| Error::InvalidHashSize(slice.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drep_key_roundtrips_through_cip129() {
        let cred = DRepCredential::Key([7u8; 28]);
        let encoded = cred.to_bech32().unwrap();
        assert!(encoded.starts_with("drep1"));
        let decoded = DRepCredential::from_bech32(&encoded).unwrap();
        assert_eq!(cred, decoded);
    }

    #[test]
    fn drep_script_roundtrips_through_cip129() {
        let cred = DRepCredential::Script([9u8; 28]);
        let decoded = DRepCredential::from_bech32(&cred.to_bech32().unwrap()).unwrap();
        assert_eq!(cred, decoded);
    }

    #[test]
    fn legacy_cip105_key_form_decodes() {
        let legacy = bech32::encode(
            "drep",
            [3u8; 28].to_base32(),
            bech32::Variant::Bech32,
        )
        .unwrap();
        assert_eq!(
            DRepCredential::from_bech32(&legacy).unwrap(),
            DRepCredential::Key([3u8; 28])
        );
    }

    #[test]
    fn legacy_cip105_script_form_decodes() {
        let legacy = bech32::encode(
            "drep_script",
            [3u8; 28].to_base32(),
            bech32::Variant::Bech32,
        )
        .unwrap();
        assert_eq!(
            DRepCredential::from_bech32(&legacy).unwrap(),
            DRepCredential::Script([3u8; 28])
        );
    }

    #[test]
    fn gov_action_id_roundtrips() {
        let id = GovActionId::new([1u8; 32], 5).unwrap();
        let encoded = id.to_bech32().unwrap();
        assert!(encoded.starts_with("gov_action1"));
        assert_eq!(GovActionId::from_bech32(&encoded).unwrap(), id);
    }

    #[test]
    fn gov_action_id_rejects_index_out_of_range() {
        assert!(matches!(
            GovActionId::new([0u8; 32], 256),
            Err(Error::InvalidArgument(_))
        ));
    }
}
