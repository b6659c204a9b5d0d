//! Decoding of the memo attached to incoming transfers.
//!
//! The memo is decoded once, at the boundary, into a [`TransferRoute`]. The
//! router then branches over the variants instead of inspecting strings.

pub const PAYMENT_PREFIX: &[u8] = b"payment:";
pub const DONATION_PREFIX: &[u8] = b"donation";
pub const FUNDING_PREFIX: &[u8] = b"funding";
/// Older clients spell the funding memo this way.
pub const FOUNDING_PREFIX: &[u8] = b"founding";

/// Longest memo the router will look at. Anything longer is malformed.
pub const MAX_MEMO_LEN: usize = 256;

pub const MAX_PROPOSAL_NAME_LEN: usize = 12;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DepositKind {
    Donation,
    Funding,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TransferRoute<'a> {
    /// `payment:<name>` — pays the activation fee of `<name>`.
    Activation(&'a [u8]),
    /// A plain deposit into the treasury; no proposal is involved.
    Unrelated(DepositKind),
    /// Anything else.
    Malformed,
}

pub fn decode_memo(memo: &[u8]) -> TransferRoute<'_> {
    if memo.len() > MAX_MEMO_LEN {
        return TransferRoute::Malformed;
    }

    if let Some(name) = memo.strip_prefix(PAYMENT_PREFIX) {
        return if is_valid_proposal_name(name) {
            TransferRoute::Activation(name)
        } else {
            TransferRoute::Malformed
        };
    }

    if memo.starts_with(DONATION_PREFIX) {
        TransferRoute::Unrelated(DepositKind::Donation)
    } else if memo.starts_with(FUNDING_PREFIX) || memo.starts_with(FOUNDING_PREFIX) {
        TransferRoute::Unrelated(DepositKind::Funding)
    } else {
        TransferRoute::Malformed
    }
}

/// Proposal names are short ledger-safe identifiers: 1 to 12 bytes of
/// `a-z`, `1-5` and `.`, never ending in a dot.
pub fn is_valid_proposal_name(name: &[u8]) -> bool {
    if name.is_empty() || name.len() > MAX_PROPOSAL_NAME_LEN {
        return false;
    }
    if name.last() == Some(&b'.') {
        return false;
    }
    name.iter()
        .all(|&c| c.is_ascii_lowercase() || (b'1'..=b'5').contains(&c) || c == b'.')
}
