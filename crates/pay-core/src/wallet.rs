//! Wallet context composing the merchant directory, cards, and ledger

use chrono::Local;
use uuid::Uuid;

use crate::cards::CardWallet;
use crate::ledger::Ledger;
use crate::merchant::MerchantDirectory;

/// Process-wide wallet state, owned by the entry point and passed by
/// reference into each tool operation. Holding it in a struct (rather than
/// globals) allows independent instances side by side, which the tests use.
#[derive(Debug, Clone, Default)]
pub struct PayWallet {
    pub merchants: MerchantDirectory,
    pub cards: CardWallet,
    pub ledger: Ledger,
}

impl PayWallet {
    /// A wallet with the seeded merchant directory, no cards, and an empty
    /// ledger
    pub fn new() -> Self {
        Self {
            merchants: MerchantDirectory::with_mock_data(),
            cards: CardWallet::new(),
            ledger: Ledger::new(),
        }
    }

    /// A wallet additionally seeded with the two demo cards
    pub fn with_mock_data() -> Self {
        Self {
            merchants: MerchantDirectory::with_mock_data(),
            cards: CardWallet::with_mock_data(),
            ledger: Ledger::new(),
        }
    }

    /// Generate a unique transaction id, distinct from card ids by prefix
    pub(crate) fn generate_transaction_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("txn_{}", &uuid[..8])
    }

    /// Current local time in the ledger's timestamp format
    pub(crate) fn current_timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
