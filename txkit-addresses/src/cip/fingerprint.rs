//! CIP-14 asset fingerprints: a Bech32-encoded Blake2b-160 digest of a
//! policy ID concatenated with an asset name, used to give multi-asset
//! tokens a human-friendly, collision-resistant identifier.

use bech32::{ToBase32, Variant};
use txkit_crypto::hash::Hasher;

use crate::Error;

const HRP: &str = "asset";

pub struct AssetFingerprint {
    hash: txkit_crypto::hash::Hash<20>,
}

impl AssetFingerprint {
    pub fn from_parts(policy_id: &[u8], asset_name: &[u8]) -> Self {
        let mut hasher = Hasher::<160>::new();
        hasher.input(policy_id);
        hasher.input(asset_name);
        Self {
            hash: hasher.finalize(),
        }
    }

    pub fn from_hex_parts(policy_id: &str, asset_name: &str) -> Result<Self, Error> {
        let policy_id = hex::decode(policy_id).map_err(|_| Error::BadHex)?;
        let asset_name = hex::decode(asset_name).map_err(|_| Error::BadHex)?;
        Ok(Self::from_parts(&policy_id, &asset_name))
    }

    pub fn finger_print(&self) -> Result<String, Error> {
        bech32::encode(HRP, self.hash.as_ref().to_base32(), Variant::Bech32).map_err(Error::BadBech32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_print_test1() {
        let af = AssetFingerprint::from_hex_parts(
            "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
            "",
        )
        .unwrap();
        let result = af.finger_print().unwrap();
        assert_eq!(result, "asset1rjklcrnsdzqp65wjgrg55sy9723kw09mlgvlc3");
    }

    #[test]
    fn finger_print_test2() {
        let af = AssetFingerprint::from_hex_parts(
            "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209",
            "504154415445",
        )
        .unwrap();
        let result = af.finger_print().unwrap();
        assert_eq!(result, "asset1hv4p5tv2a837mzqrst04d0dcptdjmluqvdx9k3");
    }
}
