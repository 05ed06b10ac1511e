#![allow(dead_code)]

use multiversx_sc::proxy_imports::*;

use crate::types::{Source, SourceCallOutcome, SourceId};

pub struct FeeMixerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FeeMixerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FeeMixerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FeeMixerProxyMethods { wrapped_tx: tx }
    }
}

pub struct FeeMixerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FeeMixerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        owner: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&owner)
            .original_result()
    }
}

impl<Env, From, To, Gas> FeeMixerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade<Arg0: ProxyArg<u32>>(
        self,
        version: Arg0,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .argument(&version)
            .original_result()
    }
}

impl<Env, From, To, Gas> FeeMixerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Value intake and source invocation ──

    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn call_source<Arg0: ProxyArg<SourceId<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("callSource")
            .argument(&id)
            .original_result()
    }

    pub fn get_last_call_outcome<Arg0: ProxyArg<SourceId<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<SourceCallOutcome<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastCallOutcome")
            .argument(&id)
            .original_result()
    }

    // ── Access control ──

    pub fn add_manager<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addManager")
            .argument(&manager)
            .original_result()
    }

    pub fn remove_manager<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeManager")
            .argument(&manager)
            .original_result()
    }

    pub fn transfer_ownership<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn get_owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn get_managers(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getManagers")
            .original_result()
    }

    pub fn get_manager_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getManagerCount")
            .original_result()
    }

    pub fn is_manager<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isManager")
            .argument(&address)
            .original_result()
    }

    // ── Source registry ──

    pub fn add_source<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        endpoint: Arg2,
        arguments: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, SourceId<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addSource")
            .argument(&target)
            .argument(&value)
            .argument(&endpoint)
            .argument(&arguments)
            .original_result()
    }

    pub fn remove_source<Arg0: ProxyArg<SourceId<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeSource")
            .argument(&id)
            .original_result()
    }

    pub fn get_source<Arg0: ProxyArg<SourceId<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Source<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSource")
            .argument(&id)
            .original_result()
    }

    pub fn get_sources(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, SourceId<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSources")
            .original_result()
    }

    pub fn get_source_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSourceCount")
            .original_result()
    }

    pub fn get_sources_by_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        target: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, SourceId<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSourcesByAddress")
            .argument(&target)
            .original_result()
    }

    pub fn get_sources_by_address_count<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        target: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSourcesByAddressCount")
            .argument(&target)
            .original_result()
    }

    // ── Destinations ──

    pub fn set_destinations<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, u64>>,
    >(
        self,
        recipients: Arg0,
        shares: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDestinations")
            .argument(&recipients)
            .argument(&shares)
            .original_result()
    }

    pub fn get_destinations(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue2<ManagedVec<Env::Api, ManagedAddress<Env::Api>>, ManagedVec<Env::Api, u64>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDestinations")
            .original_result()
    }

    pub fn get_destination_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDestinationCount")
            .original_result()
    }

    // ── Distribution ──

    pub fn distribute_native<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("distributeNative")
            .argument(&amount)
            .original_result()
    }

    pub fn distribute_token<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("distributeToken")
            .argument(&token)
            .argument(&amount)
            .original_result()
    }

    // ── Upgrade gateway ──

    pub fn get_behavior_version(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBehaviorVersion")
            .original_result()
    }

    pub fn is_version_initialized<Arg0: ProxyArg<u32>>(
        self,
        version: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVersionInitialized")
            .argument(&version)
            .original_result()
    }
}
