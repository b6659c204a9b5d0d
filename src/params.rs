multiversx_sc::imports!();

use crate::errors::*;
use crate::events;
use crate::types::{Asset, Params, Policies, RefundPolicy, RevotePolicy};
use crate::tally::ResolutionRule;

pub const SECONDS_PER_DAY: u64 = 86_400;
/// Longest voting window `setParams` accepts. Keeps the window in seconds
/// well inside `u64` once it is added to the activation timestamp.
pub const MAX_VOTING_DAYS: u64 = u8::MAX as u64;

/// Params that are known to have been set. Only [`ParamsModule::configured_params`]
/// can build one, so an operation that takes it cannot run before `setParams`.
pub struct ConfiguredParams<M: ManagedTypeApi> {
    params: Params<M>,
    supported_token: TokenIdentifier<M>,
}

impl<M: ManagedTypeApi> ConfiguredParams<M> {
    pub fn vote_threshold(&self) -> u64 {
        self.params.vote_threshold
    }

    pub fn funding_account(&self) -> &ManagedAddress<M> {
        &self.params.funding_account
    }

    pub fn voting_period_seconds(&self) -> u64 {
        self.params.voting_days * SECONDS_PER_DAY
    }

    pub fn minimum_balance_to_create_proposals(&self) -> &Asset<M> {
        &self.params.minimum_balance_to_create_proposals
    }

    pub fn proposal_cost(&self) -> &Asset<M> {
        &self.params.proposal_cost
    }

    pub fn approver(&self) -> &ManagedAddress<M> {
        &self.params.approver
    }

    pub fn supported_token(&self) -> &TokenIdentifier<M> {
        &self.supported_token
    }
}

#[multiversx_sc::module]
pub trait ParamsModule: events::EventsModule {
    // ========================================================
    // ENDPOINT: setParams
    // Replaces the whole parameter set. No partial update.
    // ========================================================

    #[endpoint(setParams)]
    fn set_params(
        &self,
        vote_threshold: u64,
        funding_account: ManagedAddress,
        voting_days: u64,
        minimum_balance_to_create_proposals: Asset<Self::Api>,
        proposal_cost: Asset<Self::Api>,
        approver: ManagedAddress,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_governance_authority(&caller);

        let supported_token = self.supported_token().get();
        require!(
            minimum_balance_to_create_proposals.is_denominated_in(&supported_token),
            ERR_INVALID_MIN_BALANCE_SYMBOL
        );
        require!(
            proposal_cost.is_denominated_in(&supported_token),
            ERR_INVALID_PROPOSAL_COST_SYMBOL
        );
        require!(
            (1..=MAX_VOTING_DAYS).contains(&voting_days),
            ERR_INVALID_VOTING_DAYS
        );

        let params = Params {
            vote_threshold,
            funding_account,
            voting_days,
            minimum_balance_to_create_proposals,
            proposal_cost,
            approver,
        };
        self.params().set(&params);

        self.params_updated_event(&caller, vote_threshold, voting_days, &params.approver);
    }

    // ========================================================
    // ENDPOINT: setPolicies
    // Selects re-voting, re-funding and resolution behavior.
    // ========================================================

    #[endpoint(setPolicies)]
    fn set_policies(
        &self,
        revote: RevotePolicy,
        refunding: RefundPolicy,
        resolution: ResolutionRule,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_governance_authority(&caller);

        let policies = Policies {
            revote,
            refunding,
            resolution,
        };
        self.policies().set(policies);

        self.policies_updated_event(&caller, &policies);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn configured_params(&self) -> ConfiguredParams<Self::Api> {
        require!(!self.params().is_empty(), ERR_PARAMS_NOT_INITIALIZED);
        ConfiguredParams {
            params: self.params().get(),
            supported_token: self.supported_token().get(),
        }
    }

    fn current_policies(&self) -> Policies {
        if self.policies().is_empty() {
            Policies::default()
        } else {
            self.policies().get()
        }
    }

    /// The owner can always configure. Once params exist, so can the approver.
    fn require_governance_authority(&self, caller: &ManagedAddress) {
        if caller == &self.blockchain().get_owner_address() {
            return;
        }
        require!(
            !self.params().is_empty() && caller == &self.params().get().approver,
            ERR_MISSING_AUTHORITY
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getParams)]
    fn get_params(&self) -> Params<Self::Api> {
        require!(!self.params().is_empty(), ERR_PARAMS_NOT_INITIALIZED);
        self.params().get()
    }

    #[view(getPolicies)]
    fn get_policies(&self) -> Policies {
        self.current_policies()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getSupportedToken)]
    #[storage_mapper("supportedToken")]
    fn supported_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<Params<Self::Api>>;

    #[storage_mapper("policies")]
    fn policies(&self) -> SingleValueMapper<Policies>;
}
