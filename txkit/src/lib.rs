//! Rust-native building blocks for constructing, signing and submitting
//! Cardano (Conway-era) transactions.
//!
//! `txkit` doesn't provide any particular application; it's meant to be
//! used as a base layer for wallets, dApp backends and operational
//! tooling that need to build, sign and serialize transactions without
//! trusting a third party with key material.

#![warn(missing_docs)]

pub mod ledger {
    //! The Cardano ledger object model and its CBOR round-trip.

    #[doc(inline)]
    pub use txkit_primitives as primitives;

    #[doc(inline)]
    pub use txkit_addresses as addresses;
}

#[doc(inline)]
pub use txkit_crypto as crypto;

#[doc(inline)]
pub use txkit_codec as codec;

#[cfg(feature = "wallet")]
pub mod wallet {
    //! BIP32/Ed25519 key derivation and the EMIP-3 secure-key-handler.

    #[doc(inline)]
    pub use txkit_wallet as keystore;
}

#[cfg(feature = "plugins")]
pub mod plugins {
    //! Provider, coin-selector and evaluator plug-in interfaces.

    #[doc(inline)]
    pub use txkit_plugins as interfaces;
}
