use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("Dqp62pcVMDGMmTJidjQbUWGgq5UPPKVT4KPuZxnvdLQF");

#[program]
pub mod charity_splitter {
    use super::*;

    /// Creates the singleton splitter factory
    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        instructions::initialize_factory::handler(ctx)
    }

    /// Creates a standalone charity splitter for `owner`
    pub fn create_charity_splitter(ctx: Context<CreateCharitySplitter>, owner: Pubkey) -> Result<()> {
        instructions::create_charity_splitter::handler(ctx, owner)
    }

    /// Creates the caller's charity splitter through the factory (one per caller)
    /// A zero owner is replaced by the caller and counted in the factory error_count
    pub fn create_charity_splitter_via_factory(
        ctx: Context<CreateCharitySplitterViaFactory>,
        requested_owner: Pubkey,
    ) -> Result<()> {
        instructions::create_charity_splitter_via_factory::handler(ctx, requested_owner)
    }

    /// Records an existing charity splitter under the caller's factory entry
    pub fn register_charity_splitter(ctx: Context<RegisterCharitySplitter>) -> Result<()> {
        instructions::register_charity_splitter::handler(ctx)
    }

    /// Appends a charity
    /// Only callable by the splitter owner
    pub fn add_charity(ctx: Context<AddCharity>, charity: Pubkey) -> Result<()> {
        instructions::add_charity::handler(ctx, charity)
    }

    /// Disables the charity at `index`
    /// Only callable by the splitter owner
    pub fn remove_charity(ctx: Context<RemoveCharity>, index: u32) -> Result<()> {
        instructions::remove_charity::handler(ctx, index)
    }

    /// Splits a SOL donation equally between active charities
    /// Permissionless - anyone can donate
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        instructions::donate::handler(ctx, amount)
    }

    /// Splits a token donation equally between active charities
    /// Permissionless - anyone can donate
    pub fn donate_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, DonateTokens<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::donate_tokens::handler(ctx, amount)
    }
}
