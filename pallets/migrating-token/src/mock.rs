use crate as pallet_migrating_token;
use crate::{LegacyLedger, LegacyLedgerUnavailable, PauseSwitch, StoredRoles};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};
use std::{cell::RefCell, collections::BTreeMap};

type Block = frame_system::mocking::MockBlock<Test>;

pub const NULL: u64 = 0;
pub const OWNER: u64 = 1;
pub const ADMIN: u64 = 2;
pub const ALICE: u64 = 10;
pub const BOB: u64 = 11;
pub const CAROL: u64 = 12;
pub const DAVE: u64 = 13;
pub const SPENDER: u64 = 20;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        MigratingToken: pallet_migrating_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

thread_local! {
    static LEGACY_SUPPLY: RefCell<u128> = const { RefCell::new(0) };
    static LEGACY_BALANCES: RefCell<BTreeMap<u64, u128>> = const { RefCell::new(BTreeMap::new()) };
    static LEGACY_READS: RefCell<BTreeMap<u64, u32>> = const { RefCell::new(BTreeMap::new()) };
    static LEGACY_DOWN: RefCell<bool> = const { RefCell::new(false) };
}

/// Predecessor ledger backed by thread-local state.
///
/// Counts every successful `legacy_balance_of` per account so tests can assert how often the
/// pallet consulted it.
pub struct MockLegacyLedger;

impl MockLegacyLedger {
    pub fn set_total_supply(amount: u128) {
        LEGACY_SUPPLY.with(|s| *s.borrow_mut() = amount);
    }

    pub fn set_balance(who: u64, amount: u128) {
        LEGACY_BALANCES.with(|b| b.borrow_mut().insert(who, amount));
    }

    pub fn set_unavailable(down: bool) {
        LEGACY_DOWN.with(|d| *d.borrow_mut() = down);
    }

    pub fn reads(who: u64) -> u32 {
        LEGACY_READS.with(|r| r.borrow().get(&who).copied().unwrap_or(0))
    }

    pub fn reset_reads() {
        LEGACY_READS.with(|r| r.borrow_mut().clear());
    }

    fn reset() {
        Self::set_total_supply(0);
        Self::set_unavailable(false);
        Self::reset_reads();
        LEGACY_BALANCES.with(|b| b.borrow_mut().clear());
    }

    fn is_down() -> bool {
        LEGACY_DOWN.with(|d| *d.borrow())
    }
}

impl LegacyLedger<u64> for MockLegacyLedger {
    fn legacy_total_supply() -> Result<u128, LegacyLedgerUnavailable> {
        if Self::is_down() {
            return Err(LegacyLedgerUnavailable);
        }
        Ok(LEGACY_SUPPLY.with(|s| *s.borrow()))
    }

    fn legacy_balance_of(who: &u64) -> Result<u128, LegacyLedgerUnavailable> {
        if Self::is_down() {
            return Err(LegacyLedgerUnavailable);
        }
        LEGACY_READS.with(|r| *r.borrow_mut().entry(*who).or_insert(0) += 1);
        Ok(LEGACY_BALANCES.with(|b| b.borrow().get(who).copied().unwrap_or(0)))
    }
}

parameter_types! {
    pub const NullAccount: u64 = NULL;
}

impl pallet_migrating_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type LegacyLedger = MockLegacyLedger;
    type AccessGate = PauseSwitch<Test>;
    type Roles = StoredRoles<Test>;
    type NullAccount = NullAccount;
    type WeightInfo = ();
}

/// Builds test externalities with a predecessor ledger of 1_000 tokens: ALICE holds 200 and
/// DAVE 300; everyone else, the null account included, holds nothing.
pub struct ExtBuilder {
    legacy_supply: u128,
    legacy_balances: Vec<(u64, u128)>,
    legacy_unavailable: bool,
    owner: Option<u64>,
    admins: Vec<u64>,
    token_name: Vec<u8>,
    token_symbol: Vec<u8>,
    paused: bool,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            legacy_supply: 1_000,
            legacy_balances: vec![(ALICE, 200), (DAVE, 300)],
            legacy_unavailable: false,
            owner: Some(OWNER),
            admins: vec![ADMIN],
            token_name: b"Successor Token".to_vec(),
            token_symbol: b"SCT".to_vec(),
            paused: false,
        }
    }
}

impl ExtBuilder {
    pub fn legacy_supply(mut self, amount: u128) -> Self {
        self.legacy_supply = amount;
        self
    }

    pub fn legacy_balance(mut self, who: u64, amount: u128) -> Self {
        self.legacy_balances.retain(|(account, _)| *account != who);
        self.legacy_balances.push((who, amount));
        self
    }

    /// Take the predecessor down before the genesis build runs.
    pub fn legacy_unavailable(mut self, down: bool) -> Self {
        self.legacy_unavailable = down;
        self
    }

    pub fn owner(mut self, owner: Option<u64>) -> Self {
        self.owner = owner;
        self
    }

    pub fn admins(mut self, admins: Vec<u64>) -> Self {
        self.admins = admins;
        self
    }

    pub fn token_name(mut self, name: &[u8]) -> Self {
        self.token_name = name.to_vec();
        self
    }

    pub fn token_symbol(mut self, symbol: &[u8]) -> Self {
        self.token_symbol = symbol.to_vec();
        self
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        MockLegacyLedger::reset();
        MockLegacyLedger::set_total_supply(self.legacy_supply);
        for (who, amount) in &self.legacy_balances {
            MockLegacyLedger::set_balance(*who, *amount);
        }
        MockLegacyLedger::set_unavailable(self.legacy_unavailable);

        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_migrating_token::GenesisConfig::<Test> {
            owner: self.owner,
            admins: self.admins,
            token_name: self.token_name,
            token_symbol: self.token_symbol,
            decimals: 18,
            paused: self.paused,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}
