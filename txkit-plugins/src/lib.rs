//! Plug-in interfaces for building transactions against a live chain:
//! [`Provider`] fetches chain state and submits transactions,
//! [`CoinSelector`] picks inputs to cover a target value, and
//! [`Evaluator`] runs Plutus scripts to compute redeemer execution units.
//!
//! None of these traits talk to a network themselves; a concrete backend
//! (a node's local state query protocol, a hosted indexer's REST API, an
//! in-memory UTxO set for tests) implements [`Provider`], and the
//! [`ProviderBackedCoinSelector`]/[`ProviderBackedEvaluator`] adapters let
//! that single implementation satisfy all three traits where a caller
//! doesn't need a custom coin-selection or evaluation strategy.

use thiserror::Error;
use txkit_primitives::TransactionInput;

/// A UTxO entry: the input that spends it, and the raw CBOR of its output.
///
/// The output is kept as opaque, already-encoded bytes rather than a
/// lifetime-parameterized [`txkit_primitives::conway::TransactionOutput`] so
/// that `Provider` implementations can hand these across thread and task
/// boundaries without borrowing from the response that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    pub input: TransactionInput,
    pub output_cbor: Vec<u8>,
}

/// Current protocol parameters, kept as the raw CBOR of a
/// `ProtocolParamUpdate` map so that provider backends don't need to track
/// every field this crate's ledger model knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParameters {
    pub cbor: Vec<u8>,
}

/// The outcome of evaluating a transaction against the ledger: the
/// execution units assigned to each redeemer, in redeemer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub redeemers_cbor: Vec<u8>,
}

/// A selection of inputs chosen to cover a target value, plus the change
/// (if any) a caller should add as an extra output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub inputs: Vec<Utxo>,
    pub change: Option<u64>,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider backend rejected the request: {0}")]
    Backend(String),

    #[error("transaction submission was rejected by the network: {0}")]
    SubmissionRejected(String),

    #[error("requested utxo set could not be resolved")]
    UnresolvedUtxoSet,
}

#[derive(Error, Debug)]
pub enum CoinSelectionError {
    #[error("available utxos are insufficient to cover the requested target")]
    InsufficientFunds,

    #[error("coin selection strategy could not find a valid combination")]
    NoSolution,
}

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("script evaluation failed: {0}")]
    ScriptFailure(String),

    #[error("a redeemer referenced an input that isn't part of the transaction or the provided additional utxos")]
    MissingInput,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("operation not implemented by this backend")]
    NotImplemented,

    #[error("{0}")]
    Generic(String),
}

/// Chain-facing capability surface: query state, and submit transactions.
///
/// Implementations back this with whatever channel they have to a running
/// node or indexer; the trait itself carries no assumption about transport.
pub trait Provider {
    /// Run Plutus evaluation for `tx`, treating `additional_utxos` as
    /// available inputs alongside whatever the backend already knows about.
    fn evaluate_transaction(
        &self,
        tx_cbor: &[u8],
        additional_utxos: &[Utxo],
    ) -> Result<EvaluationResult, ProviderError>;

    /// Fetch the protocol parameters currently in effect.
    fn get_parameters(&self) -> Result<ProtocolParameters, ProviderError>;

    /// Fetch the unspent outputs controlled by `addresses`.
    fn get_utxos(&self, addresses: &[String]) -> Result<Vec<Utxo>, ProviderError>;

    /// Submit a signed transaction to the network.
    fn submit_transaction(&self, tx_cbor: &[u8]) -> Result<(), ProviderError>;
}

/// Picks which UTxOs to spend in order to cover a target output value.
pub trait CoinSelector {
    /// `pre_selected` is kept as-is and always included in the result;
    /// `available` is the pool to draw additional inputs from, and `target`
    /// is the minimum lovelace the selection (pre-selected + chosen) must
    /// cover.
    fn select(
        &self,
        pre_selected: &[Utxo],
        available: &[Utxo],
        target: u64,
    ) -> Result<(Selection, Vec<Utxo>), CoinSelectionError>;
}

/// Runs Plutus scripts against a transaction to compute redeemer execution
/// units, the way a node does before accepting it into the mempool.
pub trait Evaluator {
    fn evaluate(
        &self,
        tx_cbor: &[u8],
        additional_utxos: &[Utxo],
    ) -> Result<EvaluationResult, EvaluationError>;
}

/// An [`Evaluator`] that simply forwards to a [`Provider`]'s own evaluation
/// endpoint, for backends (local state query, hosted indexers) that already
/// expose Plutus evaluation alongside chain queries.
pub struct ProviderBackedEvaluator<'p, P: Provider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: Provider + ?Sized> ProviderBackedEvaluator<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }
}

impl<'p, P: Provider + ?Sized> Evaluator for ProviderBackedEvaluator<'p, P> {
    fn evaluate(
        &self,
        tx_cbor: &[u8],
        additional_utxos: &[Utxo],
    ) -> Result<EvaluationResult, EvaluationError> {
        self.provider
            .evaluate_transaction(tx_cbor, additional_utxos)
            .map_err(|e| EvaluationError::ScriptFailure(e.to_string()))
    }
}

/// A [`CoinSelector`] that applies a largest-first strategy: sort
/// `available` by lovelace value descending, and keep taking from the top
/// until `pre_selected` plus the chosen inputs cover `target`.
///
/// This adapter is named for the common case where the same type that
/// implements [`Provider`] is the caller's only source of candidate
/// UTxOs, but it doesn't actually call the provider itself — `select`
/// only draws from the `available` pool a caller already fetched (e.g.
/// via [`Provider::get_utxos`]), so the same selector works equally well
/// against a provider-backed pool or an in-memory one built for tests.
pub struct ProviderBackedCoinSelector<'p, P: Provider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: Provider + ?Sized> ProviderBackedCoinSelector<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// The access this selector's `Provider` gives a caller. Kept so the
    /// stored reference isn't dead weight now that `select` draws its
    /// candidates purely from the `available` argument.
    pub fn provider(&self) -> &'p P {
        self.provider
    }

    /// The lovelace (ADA-only) value locked in `utxo`'s output, decoded
    /// from its raw CBOR. Multi-asset outputs contribute only their coin
    /// component; native tokens don't count toward a lovelace target.
    /// Returns `None` if the output CBOR doesn't decode as a transaction
    /// output this crate understands.
    fn coin_value(utxo: &Utxo) -> Option<u64> {
        let output: txkit_primitives::conway::TransactionOutput<'_> =
            txkit_codec::minicbor::decode(&utxo.output_cbor).ok()?;

        let value = match output {
            txkit_primitives::conway::TransactionOutput::Legacy(out) => {
                match out.amount {
                    txkit_primitives::alonzo::Value::Coin(coin) => u64::from(coin),
                    txkit_primitives::alonzo::Value::Multiasset(coin, _) => u64::from(coin),
                }
            }
            txkit_primitives::conway::TransactionOutput::PostAlonzo(out) => match out.value {
                txkit_primitives::conway::Value::Coin(coin) => coin,
                txkit_primitives::conway::Value::Multiasset(coin, _) => coin,
            },
        };

        Some(value)
    }
}

impl<'p, P: Provider + ?Sized> CoinSelector for ProviderBackedCoinSelector<'p, P> {
    fn select(
        &self,
        pre_selected: &[Utxo],
        available: &[Utxo],
        target: u64,
    ) -> Result<(Selection, Vec<Utxo>), CoinSelectionError> {
        let mut covered: u64 = pre_selected.iter().filter_map(Self::coin_value).sum();

        if covered >= target {
            return Ok((
                Selection {
                    inputs: pre_selected.to_vec(),
                    change: None,
                },
                available.to_vec(),
            ));
        }

        let mut candidates: Vec<&Utxo> = available.iter().collect();
        candidates.sort_by_key(|utxo| std::cmp::Reverse(Self::coin_value(*utxo).unwrap_or(0)));

        let mut chosen = Vec::new();
        let mut remaining = available.to_vec();

        for utxo in candidates {
            if covered >= target {
                break;
            }
            let Some(value) = Self::coin_value(utxo) else {
                continue;
            };
            covered += value;
            chosen.push(utxo.clone());
            remaining.retain(|candidate| candidate != utxo);
        }

        if covered < target {
            return Err(CoinSelectionError::InsufficientFunds);
        }

        let change = covered.checked_sub(target).filter(|c| *c > 0);

        let mut inputs = pre_selected.to_vec();
        inputs.extend(chosen);

        Ok((Selection { inputs, change }, remaining))
    }
}

#[cfg(feature = "async")]
pub mod r#async {
    //! An async-friendly mirror of [`super::Provider`] for host runtimes
    //! that can't block the executor thread on chain I/O. Callers pick
    //! whichever trait suits their runtime; neither bundles an executor.

    use super::{EvaluationResult, ProtocolParameters, ProviderError, Utxo};
    use async_trait::async_trait;

    #[async_trait]
    pub trait AsyncProvider: Send + Sync {
        async fn evaluate_transaction(
            &self,
            tx_cbor: &[u8],
            additional_utxos: &[Utxo],
        ) -> Result<EvaluationResult, ProviderError>;

        async fn get_parameters(&self) -> Result<ProtocolParameters, ProviderError>;

        async fn get_utxos(&self, addresses: &[String]) -> Result<Vec<Utxo>, ProviderError>;

        async fn submit_transaction(&self, tx_cbor: &[u8]) -> Result<(), ProviderError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProvider {
        utxos: Vec<Utxo>,
    }

    impl Provider for StubProvider {
        fn evaluate_transaction(
            &self,
            _tx_cbor: &[u8],
            _additional_utxos: &[Utxo],
        ) -> Result<EvaluationResult, ProviderError> {
            Ok(EvaluationResult {
                redeemers_cbor: vec![0x80],
            })
        }

        fn get_parameters(&self) -> Result<ProtocolParameters, ProviderError> {
            Ok(ProtocolParameters { cbor: vec![0xa0] })
        }

        fn get_utxos(&self, _addresses: &[String]) -> Result<Vec<Utxo>, ProviderError> {
            Ok(self.utxos.clone())
        }

        fn submit_transaction(&self, _tx_cbor: &[u8]) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    fn sample_utxo(index: u64) -> Utxo {
        use txkit_crypto::hash::Hash;

        Utxo {
            input: TransactionInput {
                transaction_id: Hash::new([0u8; 32]),
                index,
            },
            output_cbor: vec![0x82, 0x00, 0x00],
        }
    }

    /// A UTxO whose output actually decodes, carrying `lovelace` as its
    /// coin value, for tests that exercise real coin selection.
    fn lovelace_utxo(index: u64, lovelace: u64) -> Utxo {
        use txkit_primitives::conway::{PostAlonzoTransactionOutput, TransactionOutput, Value};
        use txkit_primitives::{Bytes, Hash};

        let output = TransactionOutput::PostAlonzo(PostAlonzoTransactionOutput {
            address: Bytes::from(vec![0u8; 29]),
            value: Value::Coin(lovelace),
            datum_option: None,
            script_ref: None,
        });

        Utxo {
            input: TransactionInput {
                transaction_id: Hash::new([0u8; 32]),
                index,
            },
            output_cbor: txkit_codec::minicbor::to_vec(&output).unwrap(),
        }
    }

    #[test]
    fn provider_backed_evaluator_forwards_to_provider() {
        let provider = StubProvider { utxos: vec![] };
        let evaluator = ProviderBackedEvaluator::new(&provider);

        let result = evaluator.evaluate(&[0x80], &[]).unwrap();
        assert_eq!(result.redeemers_cbor, vec![0x80]);
    }

    #[test]
    fn pre_selected_utxos_short_circuit_when_target_is_zero() {
        let provider = StubProvider { utxos: vec![] };
        let selector = ProviderBackedCoinSelector::new(&provider);

        let pre_selected = vec![sample_utxo(0)];
        let (selection, remaining) = selector.select(&pre_selected, &[], 0).unwrap();

        assert_eq!(selection.inputs, pre_selected);
        assert!(remaining.is_empty());
    }

    #[test]
    fn selection_fails_when_nothing_is_pre_selected_and_target_is_positive() {
        let provider = StubProvider { utxos: vec![] };
        let selector = ProviderBackedCoinSelector::new(&provider);

        let err = selector.select(&[], &[], 1).unwrap_err();
        assert!(matches!(err, CoinSelectionError::InsufficientFunds));
    }

    #[test]
    fn largest_first_selection_prefers_biggest_utxos_and_reports_change() {
        let provider = StubProvider { utxos: vec![] };
        let selector = ProviderBackedCoinSelector::new(&provider);

        let small = lovelace_utxo(0, 1_000_000);
        let medium = lovelace_utxo(1, 3_000_000);
        let large = lovelace_utxo(2, 5_000_000);
        let available = vec![small.clone(), medium.clone(), large.clone()];

        let (selection, remaining) = selector.select(&[], &available, 6_000_000).unwrap();

        assert_eq!(selection.inputs, vec![large.clone(), medium.clone()]);
        assert_eq!(selection.change, Some(2_000_000));
        assert_eq!(remaining, vec![small]);
    }

    #[test]
    fn largest_first_selection_fails_when_pool_is_insufficient() {
        let provider = StubProvider { utxos: vec![] };
        let selector = ProviderBackedCoinSelector::new(&provider);

        let available = vec![lovelace_utxo(0, 1_000_000), lovelace_utxo(1, 2_000_000)];

        let err = selector.select(&[], &available, 10_000_000).unwrap_err();
        assert!(matches!(err, CoinSelectionError::InsufficientFunds));
    }
}
