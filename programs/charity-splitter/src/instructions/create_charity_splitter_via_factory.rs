use anchor_lang::prelude::*;

use crate::{
    constants::{
        CHARITY_SPLITTER_SEED, CHARITY_SPLITTER_SIZE, FACTORY_ENTRY_SEED, FACTORY_ENTRY_SIZE,
        SPLITTER_FACTORY_SEED,
    },
    errors::ErrorCode,
    events::CharitySplitterCreated,
    state::{CharitySplitter, FactoryEntry, SplitterFactory},
    utils::OwnerResolution,
};

use super::create_charity_splitter::init_charity_splitter;

#[derive(Accounts)]
pub struct CreateCharitySplitterViaFactory<'info> {
    #[account(
        mut,
        seeds = [SPLITTER_FACTORY_SEED],
        bump = splitter_factory.load()?.bump
    )]
    pub splitter_factory: AccountLoader<'info, SplitterFactory>,

    // init_if_needed so an existing entry reaches the handler and fails with
    // DuplicateCharitySplitter instead of a system program error
    #[account(
        init_if_needed,
        payer = creator,
        space = FACTORY_ENTRY_SIZE,
        seeds = [FACTORY_ENTRY_SEED, creator.key().as_ref()],
        bump
    )]
    pub factory_entry: Account<'info, FactoryEntry>,

    #[account(
        init_if_needed,
        payer = creator,
        space = CHARITY_SPLITTER_SIZE,
        seeds = [CHARITY_SPLITTER_SEED, factory_entry.key().as_ref()],
        bump
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the caller's charity splitter (one per caller)
/// A zero `requested_owner` falls back to the caller and is counted in error_count
pub fn handler(ctx: Context<CreateCharitySplitterViaFactory>, requested_owner: Pubkey) -> Result<()> {
    // Read phase: reject duplicates before touching anything
    require!(
        ctx.accounts.factory_entry.lookup().is_none(),
        ErrorCode::DuplicateCharitySplitter
    );

    let creator = ctx.accounts.creator.key();
    let resolution = OwnerResolution::resolve(requested_owner, creator);

    {
        let mut splitter_factory = ctx.accounts.splitter_factory.load_mut()?;
        if resolution.is_substituted() {
            splitter_factory.error_count = splitter_factory
                .error_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;

            #[cfg(feature = "verbose")]
            msg!(
                "Zero owner requested by {}, substituting caller (error_count = {})",
                creator,
                splitter_factory.error_count
            );
        }
        splitter_factory.splitter_count = splitter_factory
            .splitter_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    let unique_id = ctx.accounts.factory_entry.key();
    {
        let mut splitter = ctx.accounts.charity_splitter.load_init()?;
        init_charity_splitter(
            &mut splitter,
            resolution.owner(),
            unique_id,
            ctx.bumps.charity_splitter,
        );
    }

    let splitter_key = ctx.accounts.charity_splitter.key();
    let factory_entry = &mut ctx.accounts.factory_entry;
    factory_entry.account = creator;
    factory_entry.splitter = splitter_key;
    factory_entry.bump = ctx.bumps.factory_entry;

    emit!(CharitySplitterCreated::via_factory(
        splitter_key,
        resolution,
        unique_id,
        creator,
        Clock::get()?.unix_timestamp,
    ));

    Ok(())
}
