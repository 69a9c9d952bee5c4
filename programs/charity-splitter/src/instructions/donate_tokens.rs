use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    constants::CHARITY_SPLITTER_SEED,
    errors::ErrorCode,
    events::DonationDistributed,
    state::CharitySplitter,
    utils::{calculate_share, validate_and_send_to_charity},
};

#[derive(Accounts)]
pub struct DonateTokens<'info> {
    #[account(
        seeds = [CHARITY_SPLITTER_SEED, charity_splitter.load()?.unique_id.as_ref()],
        bump = charity_splitter.load()?.bump
    )]
    pub charity_splitter: AccountLoader<'info, CharitySplitter>,

    pub donor: Signer<'info>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = donor,
        token::token_program = token_program,
    )]
    pub donor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Splitter's ATA for the mint; keeps the undistributed remainder
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = charity_splitter,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Receives `amount` tokens into the vault and pays an equal share to every active charity
/// remaining_accounts: active charity ATAs (writable) in ascending index order
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DonateTokens<'info>>,
    amount: u64,
) -> Result<()> {
    // Phase 1: Read all needed data and DROP borrow before CPIs
    let (share, charities, unique_id, bump) = {
        let splitter = ctx.accounts.charity_splitter.load()?;
        let share = calculate_share(amount, splitter.active_count)?;
        let charities: Vec<Pubkey> = splitter
            .active_charities()
            .map(|(_, charity)| charity.address)
            .collect();
        (share, charities, splitter.unique_id, splitter.bump)
    }; // ← Borrow DROPPED here

    require!(
        ctx.remaining_accounts.len() >= charities.len(),
        ErrorCode::InsufficientRemainingAccounts
    );

    let recipients = charities.len() as u64;
    let distributed = share
        .checked_mul(recipients)
        .ok_or(ErrorCode::MathOverflow)?;
    let remainder = amount
        .checked_sub(distributed)
        .ok_or(ErrorCode::MathOverflow)?;

    // Phase 2: donor → vault
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.donor_token_account.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.donor.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    // Phase 3: vault → charities, signed by the splitter PDA
    let seeds = &[CHARITY_SPLITTER_SEED, unique_id.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];
    let splitter_info = ctx.accounts.charity_splitter.to_account_info();

    for (charity_ata, address) in ctx.remaining_accounts.iter().zip(&charities) {
        validate_and_send_to_charity(
            charity_ata,
            address,
            share,
            &ctx.accounts.mint,
            &ctx.accounts.vault,
            &splitter_info,
            &ctx.accounts.token_program,
            signer_seeds,
        )?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {} tokens to {} charities, {} retained in vault",
        distributed,
        recipients,
        remainder
    );

    emit!(DonationDistributed {
        splitter: ctx.accounts.charity_splitter.key(),
        donor: ctx.accounts.donor.key(),
        mint: ctx.accounts.mint.key(),
        amount,
        share,
        recipients: charities.len() as u32,
        remainder,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
