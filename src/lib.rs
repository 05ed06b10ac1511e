#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod destinations;
pub mod distribution;
pub mod errors;
pub mod fee_mixer_proxy;
pub mod source_registry;
pub mod types;
pub mod upgrade_gateway;

use errors::ERR_INVALID_ADDRESS;
use types::{SourceCallOutcome, SourceId};
use upgrade_gateway::INITIAL_BEHAVIOR_VERSION;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FeeMixer:
    access_control::AccessControlModule
    + source_registry::SourceRegistryModule
    + destinations::DestinationsModule
    + distribution::DistributionModule
    + upgrade_gateway::UpgradeGatewayModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// One-time initialize: the protocol runs `init` at deploy only.
    #[init]
    fn init(&self, owner: ManagedAddress) {
        require!(!owner.is_zero(), ERR_INVALID_ADDRESS);

        self.owner().set(&owner);
        self.activate_behavior(INITIAL_BEHAVIOR_VERSION);
    }

    /// Behavior swap. `version` is the setup payload of the new code; every
    /// version may be set up only once, so re-running an upgrade with the
    /// same payload is rejected and storage stays as it was.
    #[upgrade]
    fn upgrade(&self, version: u32) {
        self.require_gateway_admin();
        self.activate_behavior(version);
    }

    // ========================================================
    // ENDPOINT: deposit
    // Plain value intake: EGLD or a single fungible ESDT.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        self.deposit_event(&caller, &token, &amount);
    }

    // ========================================================
    // ENDPOINT: callSource
    // Runs a stored call descriptor. The callee is untrusted: its
    // failure is recorded by the callback, never propagated.
    // ========================================================

    #[endpoint(callSource)]
    fn call_source(&self, id: SourceId<Self::Api>) {
        self.require_manager();

        // Removed sources stay callable.
        let source = self.require_source(&id);

        // Everything is written before control leaves the contract;
        // nothing runs after the handoff.
        self.last_call_outcome(&id).set(SourceCallOutcome::<Self::Api>::Pending);
        self.source_call_dispatched_event(&id, &source.target, &source.value);

        self.tx()
            .to(&source.target)
            .egld(&source.value)
            .raw_call(source.payload.endpoint)
            .arguments_raw(ManagedArgBuffer::from(source.payload.arguments))
            .callback(self.callbacks().source_call_callback(id))
            .async_call_and_exit();
    }

    #[callback]
    fn source_call_callback(
        &self,
        id: SourceId<Self::Api>,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(_) => {
                self.last_call_outcome(&id).set(SourceCallOutcome::<Self::Api>::Success);
                self.source_called_event(&id);
            }
            ManagedAsyncCallResult::Err(err) => {
                self.source_call_failed_event(&id, err.err_code, &err.err_msg);
                self.last_call_outcome(&id)
                    .set(SourceCallOutcome::ContainedFailure {
                        err_code: err.err_code,
                        reason: err.err_msg,
                    });
            }
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLastCallOutcome)]
    fn get_last_call_outcome(
        &self,
        id: SourceId<Self::Api>,
    ) -> OptionalValue<SourceCallOutcome<Self::Api>> {
        if self.last_call_outcome(&id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.last_call_outcome(&id).get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("sourceCallDispatched")]
    fn source_call_dispatched_event(
        &self,
        #[indexed] id: &SourceId<Self::Api>,
        #[indexed] target: &ManagedAddress,
        value: &BigUint,
    );

    #[event("sourceCalled")]
    fn source_called_event(&self, #[indexed] id: &SourceId<Self::Api>);

    #[event("sourceCallFailed")]
    fn source_call_failed_event(
        &self,
        #[indexed] id: &SourceId<Self::Api>,
        #[indexed] err_code: u32,
        reason: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("lastCallOutcome")]
    fn last_call_outcome(
        &self,
        id: &SourceId<Self::Api>,
    ) -> SingleValueMapper<SourceCallOutcome<Self::Api>>;
}
