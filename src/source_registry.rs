multiversx_sc::imports!();

use multiversx_sc::contract_base::ManagedSerializer;

use crate::access_control;
use crate::errors::{ERR_DUPLICATE_SOURCE, ERR_EMPTY_ENDPOINT, ERR_SOURCE_NOT_FOUND};
use crate::types::{CallPayload, Source, SourceId};

/// Registry of external call descriptors the mixer pulls value from.
///
/// Identity is derived from (target, payload) and is never handed out twice:
/// removing a source only clears its `active` flag and takes it out of the
/// enumeration indexes, so the record keeps answering `getSource` and the
/// identical pair cannot be registered again.
#[multiversx_sc::module]
pub trait SourceRegistryModule: access_control::AccessControlModule {
    #[endpoint(addSource)]
    fn add_source(
        &self,
        target: ManagedAddress,
        value: BigUint,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> SourceId<Self::Api> {
        self.require_owner();
        require!(!endpoint.is_empty(), ERR_EMPTY_ENDPOINT);

        let payload = CallPayload {
            endpoint,
            arguments: arguments.to_vec(),
        };
        let id = self.compute_source_id(&target, &payload);
        require!(self.sources(&id).is_empty(), ERR_DUPLICATE_SOURCE);

        let source = Source {
            id: id.clone(),
            target: target.clone(),
            value,
            payload,
            active: true,
        };
        self.sources(&id).set(&source);
        self.active_sources().insert(id.clone());
        self.sources_by_address(&target).insert(id.clone());

        self.source_added_event(&id, &target);

        id
    }

    #[endpoint(removeSource)]
    fn remove_source(&self, id: SourceId<Self::Api>) {
        self.require_owner();

        let mut source = self.require_source(&id);
        require!(source.active, ERR_SOURCE_NOT_FOUND);

        source.active = false;
        self.sources(&id).set(&source);
        self.active_sources().swap_remove(&id);
        self.sources_by_address(&source.target).swap_remove(&id);

        self.source_removed_event(&id);
    }

    #[view(getSource)]
    fn get_source(&self, id: SourceId<Self::Api>) -> Source<Self::Api> {
        self.require_source(&id)
    }

    #[view(getSources)]
    fn get_sources(&self) -> MultiValueEncoded<SourceId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for id in self.active_sources().iter() {
            result.push(id);
        }
        result
    }

    #[view(getSourceCount)]
    fn get_source_count(&self) -> usize {
        self.active_sources().len()
    }

    #[view(getSourcesByAddress)]
    fn get_sources_by_address(
        &self,
        target: ManagedAddress,
    ) -> MultiValueEncoded<SourceId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for id in self.sources_by_address(&target).iter() {
            result.push(id);
        }
        result
    }

    #[view(getSourcesByAddressCount)]
    fn get_sources_by_address_count(&self, target: ManagedAddress) -> usize {
        self.sources_by_address(&target).len()
    }

    fn require_source(&self, id: &SourceId<Self::Api>) -> Source<Self::Api> {
        require!(!self.sources(id).is_empty(), ERR_SOURCE_NOT_FOUND);
        self.sources(id).get()
    }

    fn compute_source_id(
        &self,
        target: &ManagedAddress,
        payload: &CallPayload<Self::Api>,
    ) -> SourceId<Self::Api> {
        // Nested encodings of both parts, back to back.
        let encoded =
            ManagedSerializer::<Self::Api>::new().top_encode_to_managed_buffer(&(target, payload));
        self.crypto().keccak256(&encoded)
    }

    #[event("sourceAdded")]
    fn source_added_event(
        &self,
        #[indexed] id: &SourceId<Self::Api>,
        #[indexed] target: &ManagedAddress,
    );

    #[event("sourceRemoved")]
    fn source_removed_event(&self, #[indexed] id: &SourceId<Self::Api>);

    #[storage_mapper("sources")]
    fn sources(&self, id: &SourceId<Self::Api>) -> SingleValueMapper<Source<Self::Api>>;

    #[storage_mapper("activeSources")]
    fn active_sources(&self) -> UnorderedSetMapper<SourceId<Self::Api>>;

    #[storage_mapper("sourcesByAddress")]
    fn sources_by_address(
        &self,
        target: &ManagedAddress,
    ) -> UnorderedSetMapper<SourceId<Self::Api>>;
}
