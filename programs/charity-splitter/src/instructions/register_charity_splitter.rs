use anchor_lang::prelude::*;

use crate::{
    constants::{FACTORY_ENTRY_SEED, FACTORY_ENTRY_SIZE},
    errors::ErrorCode,
    events::CharitySplitterRegistered,
    state::{CharitySplitter, FactoryEntry},
};

#[derive(Accounts)]
pub struct RegisterCharitySplitter<'info> {
    #[account(
        init_if_needed,
        payer = creator,
        space = FACTORY_ENTRY_SIZE,
        seeds = [FACTORY_ENTRY_SEED, creator.key().as_ref()],
        bump
    )]
    pub factory_entry: Account<'info, FactoryEntry>,

    /// Existing splitter to record; ownership and discriminator checked by the loader
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Records an already created splitter under the caller's factory entry
pub fn handler(ctx: Context<RegisterCharitySplitter>) -> Result<()> {
    require!(
        ctx.accounts.factory_entry.lookup().is_none(),
        ErrorCode::DuplicateCharitySplitter
    );

    // Loading verifies the account really is a CharitySplitter
    ctx.accounts.charity_splitter.load()?;

    let splitter_key = ctx.accounts.charity_splitter.key();
    let creator = ctx.accounts.creator.key();

    let factory_entry = &mut ctx.accounts.factory_entry;
    factory_entry.account = creator;
    factory_entry.splitter = splitter_key;
    factory_entry.bump = ctx.bumps.factory_entry;

    emit!(CharitySplitterRegistered {
        splitter: splitter_key,
        creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
