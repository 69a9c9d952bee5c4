use anchor_lang::prelude::*;

use crate::utils::OwnerResolution;

#[event]
pub struct SplitterFactoryInitialized {
    pub factory: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CharitySplitterCreated {
    pub splitter: Pubkey,
    pub owner: Pubkey,
    pub unique_id: Pubkey,
    /// Factory caller, or the payer of a direct creation
    pub creator: Pubkey,
    /// True when a zero owner was replaced by the creator
    pub owner_substituted: bool,
    pub timestamp: i64,
}

impl CharitySplitterCreated {
    /// Standalone splitter; the payer is reported as creator
    pub fn direct(splitter: Pubkey, owner: Pubkey, unique_id: Pubkey, payer: Pubkey, timestamp: i64) -> Self {
        Self { splitter, owner, unique_id, creator: payer, owner_substituted: false, timestamp }
    }

    pub fn via_factory(
        splitter: Pubkey,
        resolution: OwnerResolution,
        unique_id: Pubkey,
        creator: Pubkey,
        timestamp: i64,
    ) -> Self {
        Self {
            splitter,
            owner: resolution.owner(),
            unique_id,
            creator,
            owner_substituted: resolution.is_substituted(),
            timestamp,
        }
    }
}

#[event]
pub struct CharitySplitterRegistered {
    pub splitter: Pubkey,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CharityAdded {
    pub splitter: Pubkey,
    pub charity: Pubkey,
    pub index: u32,
    pub active_count: u32,
    pub timestamp: i64,
}

#[event]
pub struct CharityRemoved {
    pub splitter: Pubkey,
    pub index: u32,
    pub was_enabled: bool,
    pub active_count: u32,
    pub timestamp: i64,
}

#[event]
pub struct DonationDistributed {
    pub splitter: Pubkey,
    pub donor: Pubkey,
    /// Token mint, or default for native SOL
    pub mint: Pubkey,
    pub amount: u64,
    pub share: u64,
    pub recipients: u32,
    pub remainder: u64,
    pub timestamp: i64,
}
