multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Asset — an amount tagged with the token it is denominated in
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Asset<M: ManagedTypeApi> {
    pub token_id: TokenIdentifier<M>,
    pub amount: BigUint<M>,
}

impl<M: ManagedTypeApi> Asset<M> {
    pub fn new(token_id: TokenIdentifier<M>, amount: BigUint<M>) -> Self {
        Asset { token_id, amount }
    }

    pub fn is_denominated_in(&self, token_id: &TokenIdentifier<M>) -> bool {
        &self.token_id == token_id
    }
}

// ============================================================
// Params — global governance parameters, replaced wholesale
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Params<M: ManagedTypeApi> {
    pub vote_threshold: u64,
    pub funding_account: ManagedAddress<M>,
    pub voting_days: u64,
    pub minimum_balance_to_create_proposals: Asset<M>,
    pub proposal_cost: Asset<M>,
    pub approver: ManagedAddress<M>,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Registered, waiting for the activation fee.
    Draft,
    /// Activation fee paid. Voting window is open.
    Active,
    /// Tally passed the resolution rule. Waiting for disbursement.
    Succeeded,
    /// Tally failed the resolution rule. Terminal state.
    Defeated,
    /// Rejected by the approver. Terminal state.
    Canceled,
    /// Funds sent to the receiver. Terminal state.
    Completed,
}

impl ProposalStatus {
    /// The only forward edges of the lifecycle. Nothing ever moves back.
    pub fn can_transition_to(self, next: ProposalStatus) -> bool {
        matches!(
            (self, next),
            (ProposalStatus::Draft, ProposalStatus::Active)
                | (ProposalStatus::Active, ProposalStatus::Succeeded)
                | (ProposalStatus::Active, ProposalStatus::Defeated)
                | (ProposalStatus::Active, ProposalStatus::Canceled)
                | (ProposalStatus::Succeeded, ProposalStatus::Completed)
                | (ProposalStatus::Succeeded, ProposalStatus::Canceled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ProposalStatus::Defeated | ProposalStatus::Canceled | ProposalStatus::Completed
        )
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub receiver: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub detail: ManagedBuffer<M>,
    pub amount: Asset<M>,
    pub url: ManagedBuffer<M>,
    pub status: ProposalStatus,
    pub created_at: u64,
    /// Set once, when the activation fee is accepted.
    pub activated_at: Option<u64>,
    /// Snapshot of `activated_at + voting_days` taken at activation.
    pub voting_ends_at: Option<u64>,
    /// Filled in by the tally.
    pub votes_for: u64,
    pub votes_against: u64,
}

// ============================================================
// Vote — one row per (proposal, voter)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct Vote {
    pub is_for: bool,
    pub cast_at: u64,
}

// ============================================================
// Policy points left open by the observed behavior
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RevotePolicy {
    /// A second vote from the same voter fails with "already voted".
    Reject,
    /// A second vote replaces the first one.
    Overwrite,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RefundPolicy {
    /// Paying for a proposal that is no longer a draft fails.
    Reject,
    /// The payment is kept as a plain deposit; the proposal is untouched.
    AcceptAsDeposit,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct Policies {
    pub revote: RevotePolicy,
    pub refunding: RefundPolicy,
    pub resolution: crate::tally::ResolutionRule,
}

impl Default for Policies {
    fn default() -> Self {
        Policies {
            revote: RevotePolicy::Reject,
            refunding: RefundPolicy::Reject,
            resolution: crate::tally::ResolutionRule::ThresholdAndMajority,
        }
    }
}
