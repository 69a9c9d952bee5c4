use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::CHARITY_SPLITTER_SEED,
    errors::ErrorCode,
    events::DonationDistributed,
    state::CharitySplitter,
    utils::{calculate_share, send_lamports},
};

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(
        mut,
        seeds = [CHARITY_SPLITTER_SEED, charity_splitter.load()?.unique_id.as_ref()],
        bump = charity_splitter.load()?.bump
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    #[account(mut)]
    pub donor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Receives `amount` lamports and pays an equal share to every active charity
/// remaining_accounts: active charity wallets (writable) in ascending index order
pub fn handler(ctx: Context<Donate>, amount: u64) -> Result<()> {
    // Phase 1: validate everything before moving any value
    let (share, charities) = {
        let splitter = ctx.accounts.charity_splitter.load()?;
        let share = calculate_share(amount, splitter.active_count)?;
        let charities: Vec<Pubkey> = splitter
            .active_charities()
            .map(|(_, charity)| charity.address)
            .collect();
        (share, charities)
    }; // ← Borrow DROPPED here

    require!(
        ctx.remaining_accounts.len() >= charities.len(),
        ErrorCode::InsufficientRemainingAccounts
    );
    for (wallet, address) in ctx.remaining_accounts.iter().zip(&charities) {
        require!(wallet.key() == *address, ErrorCode::CharityAccountMismatch);
    }

    let recipients = charities.len() as u64;
    let distributed = share
        .checked_mul(recipients)
        .ok_or(ErrorCode::MathOverflow)?;
    let remainder = amount
        .checked_sub(distributed)
        .ok_or(ErrorCode::MathOverflow)?;

    // Phase 2: donor → splitter
    let splitter_info = ctx.accounts.charity_splitter.to_account_info();
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.donor.to_account_info(),
                to: splitter_info.clone(),
            },
        ),
        amount,
    )?;

    // Phase 3: splitter → charities; the remainder stays on the splitter
    for wallet in ctx.remaining_accounts.iter().take(charities.len()) {
        send_lamports(&splitter_info, wallet, share)?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {} lamports to {} charities, {} retained",
        distributed,
        recipients,
        remainder
    );

    emit!(DonationDistributed {
        splitter: ctx.accounts.charity_splitter.key(),
        donor: ctx.accounts.donor.key(),
        mint: Pubkey::default(),
        amount,
        share,
        recipients: charities.len() as u32,
        remainder,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
