multiversx_sc::imports!();

use crate::errors::{
    ERR_DUPLICATE_MANAGER, ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED, ERR_UNKNOWN_MANAGER,
};

/// Owner and manager roles. The owner administers roles and registries;
/// managers operate sources and distributions.
#[multiversx_sc::module]
pub trait AccessControlModule {
    #[endpoint(addManager)]
    fn add_manager(&self, manager: ManagedAddress) {
        self.require_owner();
        require!(!manager.is_zero(), ERR_INVALID_ADDRESS);
        require!(self.managers().insert(manager.clone()), ERR_DUPLICATE_MANAGER);

        self.manager_added_event(&manager);
    }

    #[endpoint(removeManager)]
    fn remove_manager(&self, manager: ManagedAddress) {
        self.require_owner();
        require!(self.managers().swap_remove(&manager), ERR_UNKNOWN_MANAGER);

        self.manager_removed_event(&manager);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_INVALID_ADDRESS);

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);

        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getManagers)]
    fn get_managers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for manager in self.managers().iter() {
            result.push(manager);
        }
        result
    }

    #[view(getManagerCount)]
    fn get_manager_count(&self) -> usize {
        self.managers().len()
    }

    #[view(isManager)]
    fn is_manager(&self, address: ManagedAddress) -> bool {
        self.managers().contains(&address)
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.managers().contains(&caller), ERR_UNAUTHORIZED);
    }

    #[event("managerAdded")]
    fn manager_added_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("managerRemoved")]
    fn manager_removed_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("managers")]
    fn managers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
