//! Bech32 prefix tables and identifier formats defined outside CIP-19's
//! core address spec: the CIP-5 human-readable-part registry, CIP-14
//! asset fingerprints, and the CIP-105/CIP-129 DRep and governance-action
//! identifiers introduced for Conway-era governance.

pub mod fingerprint;
pub mod governance;
pub mod hrp;

pub use fingerprint::AssetFingerprint;
pub use governance::{DRepCredential, GovActionId};
