#![allow(dead_code)]

use community_governance::params::ParamsModule;
use community_governance::payment::PaymentRouterModule;
use community_governance::registry::ProposalRegistryModule;
use community_governance::resolver::TallyResolverModule;
use community_governance::tally::ResolutionRule;
use community_governance::types::{Asset, ProposalStatus, RefundPolicy, RevotePolicy, Vote};
use community_governance::voting::VotingLedgerModule;
use community_governance::CommunityGovernance;
use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, managed_token_id, rust_biguint,
    whitebox_legacy::*, DebugApi,
};

pub const WASM_PATH: &str = "output/community-governance.wasm";

pub const XPR: &[u8] = b"XPR-123456";
pub const OTHER_TOKEN: &[u8] = b"OTHER-abcdef";

/// 1.0000 XPR, four decimals.
pub const ONE_XPR: u64 = 10_000;
pub const MIN_BALANCE_TO_CREATE: u64 = 1_000 * ONE_XPR;
pub const PROPOSAL_COST: u64 = ONE_XPR;
pub const REQUESTED_AMOUNT: u64 = 500 * ONE_XPR;

pub const VOTE_THRESHOLD: u64 = 10;
pub const VOTING_DAYS: u64 = 1;
pub const DAY: u64 = 86_400;
pub const START: u64 = 1_700_000_000;

pub struct GovernanceSetup<GovernanceObjBuilder>
where
    GovernanceObjBuilder: 'static + Copy + Fn() -> community_governance::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub approver: Address,
    pub creator: Address,
    pub funder: Address,
    pub receiver: Address,
    pub voters: Vec<Address>,
    pub now: u64,
    pub gov_wrapper:
        ContractObjWrapper<community_governance::ContractObj<DebugApi>, GovernanceObjBuilder>,
}

impl<GovernanceObjBuilder> GovernanceSetup<GovernanceObjBuilder>
where
    GovernanceObjBuilder: 'static + Copy + Fn() -> community_governance::ContractObj<DebugApi>,
{
    pub fn new(gov_builder: GovernanceObjBuilder) -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();
        b_mock.set_block_timestamp(START);

        let owner = b_mock.create_user_account(&rust_zero);
        let approver = b_mock.create_user_account(&rust_zero);
        let creator = b_mock.create_user_account(&rust_zero);
        let funder = b_mock.create_user_account(&rust_zero);
        let receiver = b_mock.create_user_account(&rust_zero);
        let voters = (0..12)
            .map(|_| b_mock.create_user_account(&rust_zero))
            .collect::<Vec<_>>();

        b_mock.set_esdt_balance(&funder, XPR, &rust_biguint!(100 * ONE_XPR));
        b_mock.set_esdt_balance(&funder, OTHER_TOKEN, &rust_biguint!(100 * ONE_XPR));
        for voter in voters.iter() {
            b_mock.set_esdt_balance(voter, XPR, &rust_biguint!(ONE_XPR));
        }

        let gov_wrapper =
            b_mock.create_sc_account(&rust_zero, Some(&owner), gov_builder, WASM_PATH);

        b_mock
            .execute_tx(&owner, &gov_wrapper, &rust_zero, |sc| {
                sc.init(managed_token_id!(XPR));
            })
            .assert_ok();

        GovernanceSetup {
            b_mock,
            owner,
            approver,
            creator,
            funder,
            receiver,
            voters,
            now: START,
            gov_wrapper,
        }
    }

    pub fn governance_address(&self) -> Address {
        self.gov_wrapper.address_ref().clone()
    }

    pub fn set_params_as(
        &mut self,
        caller: &Address,
        min_balance_token: &[u8],
        proposal_cost_token: &[u8],
        voting_days: u64,
    ) -> TxResult {
        let funding_account = self.governance_address();
        let approver = self.approver.clone();
        self.b_mock
            .execute_tx(caller, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.set_params(
                    VOTE_THRESHOLD,
                    managed_address!(&funding_account),
                    voting_days,
                    Asset::new(
                        managed_token_id!(min_balance_token),
                        managed_biguint!(MIN_BALANCE_TO_CREATE),
                    ),
                    Asset::new(
                        managed_token_id!(proposal_cost_token),
                        managed_biguint!(PROPOSAL_COST),
                    ),
                    managed_address!(&approver),
                );
            })
    }

    pub fn set_default_params(&mut self) {
        let owner = self.owner.clone();
        self.set_params_as(&owner, XPR, XPR, VOTING_DAYS).assert_ok();
    }

    pub fn set_policies(
        &mut self,
        revote: RevotePolicy,
        refunding: RefundPolicy,
        resolution: ResolutionRule,
    ) {
        let owner = self.owner.clone();
        self.b_mock
            .execute_tx(&owner, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.set_policies(revote, refunding, resolution);
            })
            .assert_ok();
    }

    pub fn fund_creator(&mut self) {
        let creator = self.creator.clone();
        self.b_mock
            .set_esdt_balance(&creator, XPR, &rust_biguint!(MIN_BALANCE_TO_CREATE));
    }

    pub fn create_with_amount(&mut self, name: &[u8], amount_token: &[u8]) -> TxResult {
        let creator = self.creator.clone();
        let receiver = self.receiver.clone();
        self.b_mock
            .execute_tx(&creator, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.create(
                    managed_address!(&creator),
                    managed_address!(&receiver),
                    managed_buffer!(name),
                    managed_buffer!(b"Community garden"),
                    managed_buffer!(b"Seeds, soil and a fence"),
                    Asset::new(
                        managed_token_id!(amount_token),
                        managed_biguint!(REQUESTED_AMOUNT),
                    ),
                    managed_buffer!(b"https://forum.example/garden"),
                );
            })
    }

    pub fn create_proposal(&mut self, name: &[u8]) -> TxResult {
        self.create_with_amount(name, XPR)
    }

    pub fn transfer_with_memo(&mut self, token: &[u8], amount: u64, memo: &[u8]) -> TxResult {
        let funder = self.funder.clone();
        self.b_mock.execute_esdt_transfer(
            &funder,
            &self.gov_wrapper,
            token,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.on_transfer(managed_buffer!(memo));
            },
        )
    }

    pub fn pay_activation(&mut self, name: &[u8]) -> TxResult {
        let mut memo = b"payment:".to_vec();
        memo.extend_from_slice(name);
        self.transfer_with_memo(XPR, PROPOSAL_COST, &memo)
    }

    /// Params, funded creator, a DRAFT proposal and its activation payment.
    pub fn active_proposal(&mut self, name: &[u8]) {
        self.set_default_params();
        self.fund_creator();
        self.create_proposal(name).assert_ok();
        self.pay_activation(name).assert_ok();
    }

    pub fn vote(&mut self, voter: &Address, name: &[u8], is_for: bool) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                if is_for {
                    sc.vote_for(managed_address!(voter), managed_buffer!(name));
                } else {
                    sc.vote_against(managed_address!(voter), managed_buffer!(name));
                }
            })
    }

    pub fn count_votes(&mut self, name: &[u8]) -> TxResult {
        let anyone = self.funder.clone();
        self.b_mock
            .execute_tx(&anyone, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.count_votes(managed_buffer!(name));
            })
    }

    pub fn approve(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.approve(managed_buffer!(name));
            })
    }

    pub fn reject(&mut self, caller: &Address, name: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.gov_wrapper, &rust_biguint!(0u64), |sc| {
                sc.reject(managed_buffer!(name));
            })
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.b_mock.set_block_timestamp(self.now);
    }

    pub fn proposal_status(&mut self, name: &[u8]) -> ProposalStatus {
        let mut status = ProposalStatus::Draft;
        self.b_mock
            .execute_query(&self.gov_wrapper, |sc| {
                status = sc.get_proposal(managed_buffer!(name)).status;
            })
            .assert_ok();
        status
    }

    pub fn proposal_exists(&mut self, name: &[u8]) -> bool {
        let mut exists = false;
        self.b_mock
            .execute_query(&self.gov_wrapper, |sc| {
                exists = !sc.proposals(&managed_buffer!(name)).is_empty();
            })
            .assert_ok();
        exists
    }

    pub fn vote_of(&mut self, name: &[u8], voter: &Address) -> Option<Vote> {
        let mut vote = None;
        self.b_mock
            .execute_query(&self.gov_wrapper, |sc| {
                vote = sc.votes(&managed_buffer!(name)).get(&managed_address!(voter));
            })
            .assert_ok();
        vote
    }
}
