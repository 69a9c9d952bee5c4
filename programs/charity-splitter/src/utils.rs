use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token, token_2022,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::ErrorCode;

/// Equal per-charity share of a donation (floor division)
/// The remainder `amount - share * active_count` stays with the splitter
pub fn calculate_share(amount: u64, active_count: u32) -> Result<u64> {
    require!(active_count > 0, ErrorCode::NoActiveCharities);

    let share = amount / active_count as u64;
    require!(share > 0, ErrorCode::DonationTooSmall);

    Ok(share)
}

/// Outcome of resolving the owner requested from the factory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerResolution {
    /// Requested owner used as-is
    Requested(Pubkey),
    /// Requested owner was zero; the caller owns the splitter instead
    Substituted(Pubkey),
}

impl OwnerResolution {
    pub fn resolve(requested: Pubkey, caller: Pubkey) -> Self {
        if requested == Pubkey::default() {
            OwnerResolution::Substituted(caller)
        } else {
            OwnerResolution::Requested(requested)
        }
    }

    pub fn owner(&self) -> Pubkey {
        match *self {
            OwnerResolution::Requested(owner) | OwnerResolution::Substituted(owner) => owner,
        }
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self, OwnerResolution::Substituted(_))
    }
}

/// Moves lamports out of a program-owned account
/// Caller guarantees `from` keeps enough to stay rent-exempt
pub fn send_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}

/// Validates a charity's ATA and pays it `amount` from the splitter vault
/// Called once per active charity from donate_tokens, signed by the splitter PDA
#[allow(clippy::too_many_arguments)]
pub fn validate_and_send_to_charity<'info>(
    charity_ata_info: &'info AccountInfo<'info>,
    charity_address: &Pubkey,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    splitter_info: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    // Charity must have created its token account beforehand
    require!(!charity_ata_info.data_is_empty(), ErrorCode::CharityATADoesNotExist);

    // Derive and validate canonical ATA address
    let expected_ata = get_associated_token_address_with_program_id(
        charity_address,
        &mint.key(),
        &token_program.key(),
    );
    require!(
        charity_ata_info.key() == expected_ata,
        ErrorCode::CharityATAInvalid
    );

    // Account must belong to a token program (SPL Token or Token-2022)
    let valid_owner = charity_ata_info.owner == &token::ID
        || charity_ata_info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenProgram);

    // Deserialize as token account
    let charity_ata = InterfaceAccount::<'info, TokenAccount>::try_from(charity_ata_info)
        .map_err(|_| ErrorCode::CharityATAInvalid)?;

    // Wallet and mint must match the registered charity and this donation
    require!(charity_ata.owner == *charity_address, ErrorCode::CharityATAWrongOwner);
    require!(charity_ata.mint == mint.key(), ErrorCode::CharityATAWrongMint);

    // Vault → charity
    let cpi_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: charity_ata.to_account_info(),
        authority: splitter_info.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)?;

    Ok(())
}
