//! Instruction builders for Mollusk tests
//! Accounts are listed in the order the program declares them

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Dqp62pcVMDGMmTJidjQbUWGgq5UPPKVT4KPuZxnvdLQF");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
pub const DISCRIMINATOR_INITIALIZE_FACTORY: [u8; 8] = [0xb3, 0x40, 0x4b, 0xfa, 0x27, 0xfe, 0xf0, 0xb2];
pub const DISCRIMINATOR_CREATE_CHARITY_SPLITTER: [u8; 8] = [0xbd, 0xff, 0xcd, 0x27, 0x90, 0x7f, 0x3e, 0x3e];
pub const DISCRIMINATOR_CREATE_CHARITY_SPLITTER_VIA_FACTORY: [u8; 8] = [0x3b, 0xed, 0x80, 0xe9, 0xb7, 0x05, 0xd9, 0x6d];
pub const DISCRIMINATOR_REGISTER_CHARITY_SPLITTER: [u8; 8] = [0x5f, 0xe8, 0x7e, 0xd1, 0x8f, 0xf6, 0xee, 0xa8];
pub const DISCRIMINATOR_ADD_CHARITY: [u8; 8] = [0xaf, 0x3e, 0x4b, 0x72, 0x31, 0x04, 0x13, 0x35];
pub const DISCRIMINATOR_REMOVE_CHARITY: [u8; 8] = [0xea, 0xc4, 0x5a, 0x6d, 0xd8, 0xa1, 0x8e, 0x40];
pub const DISCRIMINATOR_DONATE: [u8; 8] = [0x79, 0xba, 0xda, 0xd3, 0x49, 0x46, 0xc4, 0xb4];
pub const DISCRIMINATOR_DONATE_TOKENS: [u8; 8] = [0xf6, 0x4e, 0xbb, 0xc6, 0x16, 0xb7, 0x00, 0x85];

/// Derive splitter factory PDA
pub fn derive_splitter_factory() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"splitter_factory"], &PROGRAM_ID)
}

/// Derive the factory entry PDA of `account`
pub fn derive_factory_entry(account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"factory_entry", account.as_ref()], &PROGRAM_ID)
}

/// Derive charity splitter PDA
///
/// Standalone splitters use a signing unique_id; factory splitters use the
/// creator's factory entry address.
pub fn derive_charity_splitter(unique_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"charity_splitter", unique_id.as_ref()], &PROGRAM_ID)
}

/// Derive vault address (ATA owned by the charity splitter)
pub fn derive_vault(charity_splitter: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(charity_splitter, mint)
}

/// Build initialize_factory instruction
///
/// Accounts:
/// 0. splitter_factory (writable) - PDA to initialize
/// 1. payer (writable, signer)
/// 2. system_program
pub fn build_initialize_factory(splitter_factory: Pubkey, payer: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(splitter_factory, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_INITIALIZE_FACTORY.to_vec(),
    }
}

/// Build create_charity_splitter instruction
///
/// Accounts:
/// 0. charity_splitter (writable) - PDA to initialize
/// 1. unique_id (signer)
/// 2. payer (writable, signer)
/// 3. system_program
pub fn build_create_charity_splitter(
    charity_splitter: Pubkey,
    unique_id: Pubkey,
    payer: Pubkey,
    owner: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_CREATE_CHARITY_SPLITTER);
    data.extend_from_slice(&owner.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(charity_splitter, false),
            AccountMeta::new_readonly(unique_id, true),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build create_charity_splitter_via_factory instruction
///
/// Accounts:
/// 0. splitter_factory (writable)
/// 1. factory_entry (writable) - created if needed
/// 2. charity_splitter (writable) - created if needed
/// 3. creator (writable, signer)
/// 4. system_program
pub fn build_create_charity_splitter_via_factory(
    creator: Pubkey,
    requested_owner: Pubkey,
) -> Instruction {
    let (splitter_factory, _) = derive_splitter_factory();
    let (factory_entry, _) = derive_factory_entry(&creator);
    let (charity_splitter, _) = derive_charity_splitter(&factory_entry);

    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_CREATE_CHARITY_SPLITTER_VIA_FACTORY);
    data.extend_from_slice(&requested_owner.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(splitter_factory, false),
            AccountMeta::new(factory_entry, false),
            AccountMeta::new(charity_splitter, false),
            AccountMeta::new(creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build register_charity_splitter instruction
///
/// Accounts:
/// 0. factory_entry (writable) - created if needed
/// 1. charity_splitter (readonly)
/// 2. creator (writable, signer)
/// 3. system_program
pub fn build_register_charity_splitter(creator: Pubkey, charity_splitter: Pubkey) -> Instruction {
    let (factory_entry, _) = derive_factory_entry(&creator);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_entry, false),
            AccountMeta::new_readonly(charity_splitter, false),
            AccountMeta::new(creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_REGISTER_CHARITY_SPLITTER.to_vec(),
    }
}

/// Build add_charity instruction
///
/// Accounts:
/// 0. charity_splitter (writable)
/// 1. owner (signer)
pub fn build_add_charity(charity_splitter: Pubkey, owner: Pubkey, charity: Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_ADD_CHARITY);
    data.extend_from_slice(&charity.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(charity_splitter, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build remove_charity instruction
///
/// Accounts:
/// 0. charity_splitter (writable)
/// 1. owner (signer)
pub fn build_remove_charity(charity_splitter: Pubkey, owner: Pubkey, index: u32) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4);
    data.extend_from_slice(&DISCRIMINATOR_REMOVE_CHARITY);
    data.extend_from_slice(&index.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(charity_splitter, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build donate instruction
///
/// Accounts:
/// 0. charity_splitter (writable)
/// 1. donor (writable, signer)
/// 2. system_program
/// remaining_accounts: active charity wallets in index order
pub fn build_donate(
    charity_splitter: Pubkey,
    donor: Pubkey,
    charity_wallets: &[Pubkey],
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_DONATE);
    data.extend_from_slice(&amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new(charity_splitter, false),
        AccountMeta::new(donor, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    for wallet in charity_wallets {
        accounts.push(AccountMeta::new(*wallet, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build donate_tokens instruction
///
/// Accounts:
/// 0. charity_splitter
/// 1. donor (signer)
/// 2. donor_token_account (writable)
/// 3. mint
/// 4. vault (writable)
/// 5. token_program
/// remaining_accounts: active charity ATAs in index order
pub fn build_donate_tokens(
    charity_splitter: Pubkey,
    donor: Pubkey,
    donor_token_account: Pubkey,
    mint: Pubkey,
    charity_atas: &[Pubkey],
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_DONATE_TOKENS);
    data.extend_from_slice(&amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(charity_splitter, false),
        AccountMeta::new_readonly(donor, true),
        AccountMeta::new(donor_token_account, false),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new(derive_vault(&charity_splitter, &mint), false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];
    for ata in charity_atas {
        accounts.push(AccountMeta::new(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}
