#![no_std]

multiversx_sc::imports!();

/// Replacement behavior for the fee mixer, used by the upgrade tests.
///
/// Reads the storage keys the mixer wrote and adds `getTheAnswer`, so a test
/// can tell that the code behind the address really changed.
#[multiversx_sc::contract]
pub trait FeeMixerV2 {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self, version: u32) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_owner_address(),
            "ERR_UNAUTHORIZED"
        );
        require!(
            self.initialized_versions().insert(version),
            "ERR_ALREADY_INITIALIZED_FOR_VERSION"
        );
        self.behavior_version().set(version);
    }

    #[view(getTheAnswer)]
    fn get_the_answer(&self) -> u32 {
        42
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getManagers)]
    fn get_managers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut managers = MultiValueEncoded::new();
        for manager in self.managers().iter() {
            managers.push(manager);
        }
        managers
    }

    #[view(getBehaviorVersion)]
    fn get_behavior_version(&self) -> u32 {
        self.behavior_version().get()
    }

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("managers")]
    fn managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("behaviorVersion")]
    fn behavior_version(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("initializedVersions")]
    fn initialized_versions(&self) -> UnorderedSetMapper<u32>;
}
