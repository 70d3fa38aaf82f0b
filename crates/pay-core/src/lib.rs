//! # pay-core
//!
//! Core model for the Apple Pay mock server:
//! - Merchant directory with Apple Pay support flags
//! - Card wallet with default-card resolution
//! - Append-only transaction ledger with spending aggregation
//! - The six tool operations composing them into text responses
//!
//! All data is in-memory mock data for demonstration purposes. Tool
//! operations return human-readable strings for both success and failure;
//! there is no typed error channel at that boundary.

pub mod cards;
pub mod error;
pub mod ledger;
pub mod merchant;
mod tools;
mod wallet;

pub use cards::{Card, CardWallet};
pub use error::{PayError, Result};
pub use ledger::{Ledger, Transaction, TransactionStatus};
pub use merchant::{normalize_key, MerchantDirectory, MerchantEntry};
pub use wallet::PayWallet;
