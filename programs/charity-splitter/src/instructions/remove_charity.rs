use anchor_lang::prelude::*;

use crate::{
    constants::CHARITY_SPLITTER_SEED,
    errors::ErrorCode,
    events::CharityRemoved,
    state::CharitySplitter,
};

#[derive(Accounts)]
pub struct RemoveCharity<'info> {
    #[account(
        mut,
        seeds = [CHARITY_SPLITTER_SEED, charity_splitter.load()?.unique_id.as_ref()],
        bump = charity_splitter.load()?.bump,
        constraint = charity_splitter.load()?.owner == owner.key() @ ErrorCode::AccessDenied
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    pub owner: Signer<'info>,
}

/// Disables a charity; the index stays allocated
/// Removing an already disabled charity succeeds without changing active_count
pub fn handler(ctx: Context<RemoveCharity>, index: u32) -> Result<()> {
    let (was_enabled, active_count) = {
        let mut splitter = ctx.accounts.charity_splitter.load_mut()?;
        let was_enabled = splitter.remove_charity(index)?;
        (was_enabled, splitter.active_count)
    };

    emit!(CharityRemoved {
        splitter: ctx.accounts.charity_splitter.key(),
        index,
        was_enabled,
        active_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
