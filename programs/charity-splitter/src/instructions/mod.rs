#![allow(ambiguous_glob_reexports)]

pub mod add_charity;
pub mod create_charity_splitter;
pub mod create_charity_splitter_via_factory;
pub mod donate;
pub mod donate_tokens;
pub mod initialize_factory;
pub mod register_charity_splitter;
pub mod remove_charity;

pub use add_charity::*;
pub use create_charity_splitter::*;
pub use create_charity_splitter_via_factory::*;
pub use donate::*;
pub use donate_tokens::*;
pub use initialize_factory::*;
pub use register_charity_splitter::*;
pub use remove_charity::*;
