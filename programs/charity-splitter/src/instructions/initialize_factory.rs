use anchor_lang::prelude::*;

use crate::{
    constants::{SPLITTER_FACTORY_SEED, SPLITTER_FACTORY_SIZE},
    events::SplitterFactoryInitialized,
    state::SplitterFactory,
};

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = payer,
        space = SPLITTER_FACTORY_SIZE,
        seeds = [SPLITTER_FACTORY_SEED],
        bump
    )]
    pub splitter_factory: AccountLoader<'info, SplitterFactory>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the singleton factory account
/// Permissionless; the fixed seed makes a second call fail
pub fn handler(ctx: Context<InitializeFactory>) -> Result<()> {
    let splitter_factory = &mut ctx.accounts.splitter_factory.load_init()?;

    splitter_factory.error_count = 0;
    splitter_factory.splitter_count = 0;
    splitter_factory.bump = ctx.bumps.splitter_factory;

    emit!(SplitterFactoryInitialized {
        factory: ctx.accounts.splitter_factory.key(),
        payer: ctx.accounts.payer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
