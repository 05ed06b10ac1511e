#![allow(dead_code)]

use fee_mixer::fee_mixer_proxy::FeeMixerProxy;
use fee_mixer::types::{SourceCallOutcome, SourceId};
use multiversx_sc_scenario::imports::*;

pub const CODE_PATH: MxscPath = MxscPath::new("output/fee-mixer.mxsc.json");
pub const FEE_MIXER_ADDRESS: TestSCAddress = TestSCAddress::new("fee-mixer");

/// Deploys and upgrades the contract: the gateway admin.
pub const ADMIN: TestAddress = TestAddress::new("admin");
/// Mixer owner role, handed to `init`.
pub const OWNER: TestAddress = TestAddress::new("owner");
pub const MANAGER: TestAddress = TestAddress::new("manager");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const DAN: TestAddress = TestAddress::new("dan");

pub const FEE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("FEE-123456");
pub const FEE_TOKEN_ID: &str = "FEE-123456";

pub const OWNER_EGLD: u64 = 10_000;
pub const OWNER_FEE_TOKENS: u64 = 10_000;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, fee_mixer::ContractBuilder);
    blockchain
}

pub fn managed_address(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

pub fn fee_token() -> TokenIdentifier<StaticApi> {
    TokenIdentifier::from(FEE_TOKEN_ID)
}

pub struct FeeMixerState {
    pub world: ScenarioWorld,
}

impl FeeMixerState {
    /// Fresh world with the contract deployed by `ADMIN` and owned by `OWNER`.
    pub fn new() -> Self {
        let mut world = world();

        world.account(ADMIN).nonce(1);
        world
            .account(OWNER)
            .nonce(1)
            .balance(OWNER_EGLD)
            .esdt_balance(FEE_TOKEN, OWNER_FEE_TOKENS);
        world.account(MANAGER).nonce(1);
        world.account(OUTSIDER).nonce(1);
        for recipient in [ALICE, BOB, CAROL, DAN] {
            world.account(recipient).nonce(1);
        }

        world
            .tx()
            .from(ADMIN)
            .typed(FeeMixerProxy)
            .init(managed_address(OWNER))
            .code(CODE_PATH)
            .new_address(FEE_MIXER_ADDRESS)
            .run();

        Self { world }
    }

    /// Deployed, with `MANAGER` holding the manager role.
    pub fn with_manager() -> Self {
        let mut state = Self::new();
        state.add_manager(MANAGER);
        state
    }

    pub fn add_manager(&mut self, manager: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .add_manager(managed_address(manager))
            .run();
    }

    pub fn managers(&mut self) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .get_managers()
            .returns(ReturnsResult)
            .run()
            .to_vec()
    }

    pub fn add_source(
        &mut self,
        target: ManagedAddress<StaticApi>,
        value: u64,
        endpoint: &str,
        arguments: &[&[u8]],
    ) -> SourceId<StaticApi> {
        let mut encoded_arguments = MultiValueEncoded::<StaticApi, ManagedBuffer<StaticApi>>::new();
        for argument in arguments {
            encoded_arguments.push(ManagedBuffer::<StaticApi>::from(*argument));
        }

        self.world
            .tx()
            .from(OWNER)
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .add_source(target, BigUint::<StaticApi>::from(value), ManagedBuffer::<StaticApi>::from(endpoint), encoded_arguments)
            .returns(ReturnsResult)
            .run()
    }

    pub fn active_sources(&mut self) -> ManagedVec<StaticApi, SourceId<StaticApi>> {
        self.world
            .query()
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .get_sources()
            .returns(ReturnsResult)
            .run()
            .to_vec()
    }

    pub fn set_destinations(&mut self, destinations: &[(TestAddress, u64)]) {
        let (recipients, shares) = destination_lists(destinations);
        self.world
            .tx()
            .from(OWNER)
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .set_destinations(recipients, shares)
            .run();
    }

    pub fn deposit_egld(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .deposit()
            .egld(BigUint::<StaticApi>::from(amount))
            .run();
    }

    pub fn deposit_fee_tokens(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(FEE_MIXER_ADDRESS)
            .typed(FeeMixerProxy)
            .deposit()
            .single_esdt(&fee_token(), 0, &BigUint::<StaticApi>::from(amount))
            .run();
    }
}

pub fn destination_lists(
    destinations: &[(TestAddress, u64)],
) -> (
    ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
    ManagedVec<StaticApi, u64>,
) {
    let mut recipients = ManagedVec::new();
    let mut shares = ManagedVec::new();
    for (recipient, share) in destinations {
        recipients.push(managed_address(*recipient));
        shares.push(*share);
    }
    (recipients, shares)
}

pub fn mixer_address() -> ManagedAddress<StaticApi> {
    ManagedAddress::from(FEE_MIXER_ADDRESS.to_address())
}

pub fn last_call_outcome(
    state: &mut FeeMixerState,
    id: &SourceId<StaticApi>,
) -> Option<SourceCallOutcome<StaticApi>> {
    state
        .world
        .query()
        .to(FEE_MIXER_ADDRESS)
        .typed(FeeMixerProxy)
        .get_last_call_outcome(id.clone())
        .returns(ReturnsResult)
        .run()
        .into_option()
}
