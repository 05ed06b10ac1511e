multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_INITIALIZED_FOR_VERSION, ERR_UNAUTHORIZED};

pub const INITIAL_BEHAVIOR_VERSION: u32 = 1;

/// Version table for behavior swaps.
///
/// The contract address is the stable entry point and owns every storage
/// key; code upgrades replace the behavior behind it. Each version runs its
/// setup exactly once. Only the protocol-level owner of the contract (the
/// gateway admin, distinct from the mixer owner role) may swap behavior.
#[multiversx_sc::module]
pub trait UpgradeGatewayModule {
    fn activate_behavior(&self, version: u32) {
        require!(
            self.initialized_versions().insert(version),
            ERR_ALREADY_INITIALIZED_FOR_VERSION
        );
        self.behavior_version().set(version);

        self.upgraded_event(version);
    }

    fn require_gateway_admin(&self) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );
    }

    #[view(getBehaviorVersion)]
    fn get_behavior_version(&self) -> u32 {
        self.behavior_version().get()
    }

    #[view(isVersionInitialized)]
    fn is_version_initialized(&self, version: u32) -> bool {
        self.initialized_versions().contains(&version)
    }

    #[event("upgraded")]
    fn upgraded_event(&self, #[indexed] version: u32);

    #[storage_mapper("behaviorVersion")]
    fn behavior_version(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("initializedVersions")]
    fn initialized_versions(&self) -> UnorderedSetMapper<u32>;
}
