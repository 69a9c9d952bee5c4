use anchor_lang::prelude::*;

use crate::{
    constants::{
        CHARITY_SPLITTER_SEED, CHARITY_SPLITTER_SIZE, CHARITY_SPLITTER_VERSION, MAX_CHARITIES,
    },
    errors::ErrorCode,
    events::CharitySplitterCreated,
    state::{Charity, CharitySplitter},
};

#[derive(Accounts)]
pub struct CreateCharitySplitter<'info> {
    #[account(
        init,
        payer = payer,
        space = CHARITY_SPLITTER_SIZE,
        seeds = [CHARITY_SPLITTER_SEED, unique_id.key().as_ref()],
        bump
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    /// Must sign so nobody can claim an address reserved for a factory entry
    pub unique_id: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a standalone charity splitter owned by `owner`
pub fn handler(ctx: Context<CreateCharitySplitter>, owner: Pubkey) -> Result<()> {
    require!(owner != Pubkey::default(), ErrorCode::ZeroAddress);

    let unique_id = ctx.accounts.unique_id.key();
    {
        let mut splitter = ctx.accounts.charity_splitter.load_init()?;
        init_charity_splitter(&mut splitter, owner, unique_id, ctx.bumps.charity_splitter);
    }

    emit!(CharitySplitterCreated::direct(
        ctx.accounts.charity_splitter.key(),
        owner,
        unique_id,
        ctx.accounts.payer.key(),
        Clock::get()?.unix_timestamp,
    ));

    Ok(())
}

/// Writes the initial state of a freshly allocated splitter
pub(crate) fn init_charity_splitter(
    splitter: &mut CharitySplitter,
    owner: Pubkey,
    unique_id: Pubkey,
    bump: u8,
) {
    splitter.version = CHARITY_SPLITTER_VERSION;
    splitter.owner = owner;
    splitter.unique_id = unique_id;
    splitter.bump = bump;
    splitter.total_count = 0;
    splitter.active_count = 0;
    splitter.charities = [Charity::default(); MAX_CHARITIES];
}
