// PDA seeds
pub const SPLITTER_FACTORY_SEED: &[u8] = b"splitter_factory";
pub const FACTORY_ENTRY_SEED: &[u8] = b"factory_entry";
pub const CHARITY_SPLITTER_SEED: &[u8] = b"charity_splitter";

// Schema version written into every new CharitySplitter
pub const CHARITY_SPLITTER_VERSION: u8 = 1;

// Charity slots per splitter (indices are never reused, so this caps lifetime additions)
pub const MAX_CHARITIES: usize = 20;

// Account sizes for zero-copy structs
// SplitterFactory: discriminator (8) + error_count (8) + splitter_count (8) + bump (1)
// + padding for 8-byte alignment (7)
pub const SPLITTER_FACTORY_SIZE: usize = 8 + 8 + 8 + 1 + 7; // 32 bytes

// CharitySplitter size calculation:
// - discriminator: 8
// - version: 1
// - owner: 32
// - unique_id: 32
// - bump: 1
// - padding for 4-byte alignment: 2
// - total_count: 4
// - active_count: 4
// - charities: [Charity; 20] = (32 + 1) * 20 = 660
// Total: 8 + 1 + 32 + 32 + 1 + 2 + 4 + 4 + 660 = 744
pub const CHARITY_SPLITTER_SIZE: usize = 744;

// FactoryEntry (borsh): discriminator (8) + account (32) + splitter (32) + bump (1)
pub const FACTORY_ENTRY_SIZE: usize = 8 + 32 + 32 + 1; // 73 bytes
