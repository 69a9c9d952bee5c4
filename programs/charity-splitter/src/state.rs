use anchor_lang::prelude::*;

use crate::{constants::MAX_CHARITIES, errors::ErrorCode};

/// Global factory state (single instance)
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct SplitterFactory {
    /// Factory creations that fell back to the caller because the requested owner was zero
    pub error_count: u64,
    /// Splitters created through the factory
    pub splitter_count: u64,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
}

/// Per-caller factory record, keyed by the caller's address
#[account]
#[derive(InitSpace)]
pub struct FactoryEntry {
    /// Account this entry belongs to
    pub account: Pubkey,
    /// Splitter recorded for the account (default = none)
    pub splitter: Pubkey,
    pub bump: u8,
}

impl FactoryEntry {
    pub fn lookup(&self) -> Option<Pubkey> {
        (self.splitter != Pubkey::default()).then_some(self.splitter)
    }
}

/// Charity registry and distributor for one owner
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct CharitySplitter {
    /// Schema version for future upgrades
    pub version: u8,
    /// Only account allowed to add or remove charities (immutable)
    pub owner: Pubkey,
    /// PDA seed distinguishing splitters
    pub unique_id: Pubkey,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    /// Charities ever appended, including disabled ones
    pub total_count: u32,
    /// Charities currently enabled
    pub active_count: u32,
    /// Append-only slots; charity `i` lives at `charities[i - 1]`
    pub charities: [Charity; MAX_CHARITIES],
}

/// Charity slot in a splitter
#[zero_copy(unsafe)]
#[repr(C)]
#[derive(Default)]
pub struct Charity {
    /// Wallet receiving the charity's share
    pub address: Pubkey,
    pub enabled: bool,
}

impl CharitySplitter {
    /// Appends an enabled charity and returns its 1-based index
    pub fn add_charity(&mut self, address: Pubkey) -> Result<u32> {
        require!(address != Pubkey::default(), ErrorCode::ZeroAddress);

        let slot = self.total_count as usize;
        require!(slot < MAX_CHARITIES, ErrorCode::CharityLimitReached);

        let index = self.total_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        let active_count = self.active_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

        self.charities[slot] = Charity { address, enabled: true };
        self.total_count = index;
        self.active_count = active_count;

        Ok(index)
    }

    /// Disables a charity; returns whether it was enabled before the call
    pub fn remove_charity(&mut self, index: u32) -> Result<bool> {
        let slot = self.slot(index)?;

        if !self.charities[slot].enabled {
            return Ok(false);
        }

        self.charities[slot].enabled = false;
        self.active_count = self.active_count.checked_sub(1).ok_or(ErrorCode::MathOverflow)?;

        Ok(true)
    }

    pub fn charity(&self, index: u32) -> Result<&Charity> {
        let slot = self.slot(index)?;
        Ok(&self.charities[slot])
    }

    /// Enabled charities in ascending index order
    pub fn active_charities(&self) -> impl Iterator<Item = (u32, &Charity)> {
        self.charities[..self.total_count as usize]
            .iter()
            .zip(1u32..)
            .filter(|(charity, _)| charity.enabled)
            .map(|(charity, index)| (index, charity))
    }

    fn slot(&self, index: u32) -> Result<usize> {
        require!(
            index >= 1 && index <= self.total_count,
            ErrorCode::CharityNotFound
        );
        Ok(index as usize - 1)
    }
}

// Compile-time size assertions to catch accidental struct changes
// SplitterFactory: discriminator (8) + error_count (8) + splitter_count (8) + bump (1) + padding (7) = 32
const _: () = assert!(std::mem::size_of::<SplitterFactory>() == 24); // 32 - 8 (discriminator added by Anchor)

// CharitySplitter: See constants.rs for full breakdown = 744
const _: () = assert!(std::mem::size_of::<CharitySplitter>() == 736); // 744 - 8 (discriminator added by Anchor)
