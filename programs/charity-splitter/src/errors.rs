use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("charity-splitter-access-denied")]
    AccessDenied,

    #[msg("Charity index does not exist")]
    CharityNotFound,

    #[msg("no-charities-to-distribute-value-to")]
    NoActiveCharities,

    #[msg("donation-too-low-to-distribute")]
    DonationTooSmall,

    #[msg("owner-has-existing-charity-splitter")]
    DuplicateCharitySplitter,

    #[msg("Charity capacity reached (max 20)")]
    CharityLimitReached,

    #[msg("Address cannot be zero")]
    ZeroAddress,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Remaining account does not match the charity wallet")]
    CharityAccountMismatch,

    #[msg("Charity ATA does not exist")]
    CharityATADoesNotExist,

    #[msg("Charity ATA is invalid")]
    CharityATAInvalid,

    #[msg("Charity ATA has wrong owner")]
    CharityATAWrongOwner,

    #[msg("Charity ATA has wrong mint")]
    CharityATAWrongMint,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Math overflow")]
    MathOverflow,
}
