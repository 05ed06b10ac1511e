multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// keccak256 of the (target, payload) pair.
pub type SourceId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Call payload: the command a source executes
// ============================================================

/// Endpoint name plus raw arguments, dispatched verbatim to the source
/// target. Kept as plain data so the registry never depends on which
/// endpoints exist on the other side.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CallPayload<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Source: a registered external call descriptor
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Source<M: ManagedTypeApi> {
    pub id: SourceId<M>,
    pub target: ManagedAddress<M>,
    /// EGLD attached to every invocation
    pub value: BigUint<M>,
    pub payload: CallPayload<M>,
    /// Soft-delete flag. Inactive sources stay readable and callable.
    pub active: bool,
}

// ============================================================
// Source call outcome: contained result of an untrusted call
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum SourceCallOutcome<M: ManagedTypeApi> {
    /// Dispatched, callback not yet received.
    Pending,
    Success,
    /// The target rejected the call. Recorded, never propagated.
    ContainedFailure {
        err_code: u32,
        reason: ManagedBuffer<M>,
    },
}

// ============================================================
// Destination: recipient with a parts-per-hundred share
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Destination<M: ManagedTypeApi> {
    pub recipient: ManagedAddress<M>,
    pub share: u64,
}
