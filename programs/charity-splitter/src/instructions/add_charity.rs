use anchor_lang::prelude::*;

use crate::{
    constants::CHARITY_SPLITTER_SEED,
    errors::ErrorCode,
    events::CharityAdded,
    state::CharitySplitter,
};

#[derive(Accounts)]
pub struct AddCharity<'info> {
    #[account(
        mut,
        seeds = [CHARITY_SPLITTER_SEED, charity_splitter.load()?.unique_id.as_ref()],
        bump = charity_splitter.load()?.bump,
        constraint = charity_splitter.load()?.owner == owner.key() @ ErrorCode::AccessDenied
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    pub owner: Signer<'info>,
}

/// Appends a charity; its index is reported in the CharityAdded event
pub fn handler(ctx: Context<AddCharity>, charity: Pubkey) -> Result<()> {
    let (index, active_count) = {
        let mut splitter = ctx.accounts.charity_splitter.load_mut()?;
        let index = splitter.add_charity(charity)?;
        (index, splitter.active_count)
    };

    emit!(CharityAdded {
        splitter: ctx.accounts.charity_splitter.key(),
        charity,
        index,
        active_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
