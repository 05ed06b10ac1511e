multiversx_sc::imports!();

use crate::access_control;
use crate::errors::{ERR_EMPTY_LIST, ERR_INVALID_SHARE, ERR_INVALID_SHARE_SUM, ERR_LENGTH_MISMATCH};
use crate::types::Destination;

/// Shares are parts-per-hundred; a live list always sums to this.
pub const TOTAL_SHARES: u64 = 100;

#[multiversx_sc::module]
pub trait DestinationsModule: access_control::AccessControlModule {
    /// Replaces the whole destination list. There is no partial update.
    #[endpoint(setDestinations)]
    fn set_destinations(
        &self,
        recipients: ManagedVec<ManagedAddress>,
        shares: ManagedVec<u64>,
    ) {
        self.require_owner();
        require!(recipients.len() == shares.len(), ERR_LENGTH_MISMATCH);
        require!(!recipients.is_empty(), ERR_EMPTY_LIST);

        let mut share_sum = 0u64;
        for share in shares.iter() {
            require!(share > 0, ERR_INVALID_SHARE);
            share_sum = share_sum.saturating_add(share);
        }
        require!(share_sum == TOTAL_SHARES, ERR_INVALID_SHARE_SUM);

        self.destinations().clear();
        for (recipient, share) in recipients.iter().zip(shares.iter()) {
            self.destinations().push(&Destination {
                recipient: recipient.clone_value(),
                share,
            });
        }

        self.destinations_set_event(&recipients, &shares);
    }

    #[view(getDestinations)]
    fn get_destinations(&self) -> MultiValue2<ManagedVec<ManagedAddress>, ManagedVec<u64>> {
        let mut recipients = ManagedVec::new();
        let mut shares = ManagedVec::new();
        for destination in self.destinations().iter() {
            recipients.push(destination.recipient);
            shares.push(destination.share);
        }
        (recipients, shares).into()
    }

    #[view(getDestinationCount)]
    fn get_destination_count(&self) -> usize {
        self.destinations().len()
    }

    #[event("destinationsSet")]
    fn destinations_set_event(
        &self,
        #[indexed] recipients: &ManagedVec<ManagedAddress>,
        shares: &ManagedVec<u64>,
    );

    #[storage_mapper("destinations")]
    fn destinations(&self) -> VecMapper<Destination<Self::Api>>;
}
