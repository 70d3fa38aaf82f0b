//! The six tool operations exposed to the MCP layer.
//!
//! Every operation returns a human-readable `String`, for failures as well
//! as successes. The calling transport passes the text through unchanged;
//! there is no separate error channel at this boundary.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::ledger::{Transaction, TransactionStatus};
use crate::wallet::PayWallet;

/// Render a transaction as the multi-line block used in payment receipts
/// and history listings.
fn format_transaction(txn: &Transaction) -> String {
    format!(
        "\nTransaction ID: {}\nMerchant: {}\nAmount: ${:.2}\nDate: {}\nStatus: {}\nCard Used: {}\n",
        txn.id, txn.merchant, txn.amount, txn.date, txn.status, txn.card_info
    )
}

impl PayWallet {
    /// Check whether a merchant supports Apple Pay.
    ///
    /// An unknown merchant is not a failure; most merchants do support
    /// Apple Pay, so the response says so.
    pub fn check_merchant_support(&self, merchant_name: &str) -> String {
        match self.merchants.lookup(merchant_name) {
            Some(merchant) => {
                let support_status = if merchant.supported {
                    "✅ Supported"
                } else {
                    "❌ Not Supported"
                };
                format!(
                    "\nMerchant: {}\nCategory: {}\nApple Pay Support: {}\n",
                    merchant.name, merchant.category, support_status
                )
            }
            None => format!(
                "Merchant '{}' not found in our database. Most major retailers support Apple Pay.",
                merchant_name
            ),
        }
    }

    /// List the payment cards in the wallet.
    pub fn get_payment_cards(&self) -> String {
        if self.cards.is_empty() {
            return "No payment cards found in Apple Wallet.".to_string();
        }

        let cards_info: Vec<String> = self
            .cards
            .cards()
            .iter()
            .map(|card| {
                let default_indicator = if card.is_default { " (Default)" } else { "" };
                format!(
                    "\n{} {}{}\nCard ending in: ****{}\nExpires: {}\n",
                    card.brand, card.card_type, default_indicator, card.last_four, card.expires
                )
            })
            .collect();

        format!("Available Payment Cards:\n{}", cards_info.join("\n---"))
    }

    /// Simulate an Apple Pay transaction.
    ///
    /// Rejections (bad amount, unknown card id, empty wallet, merchant
    /// explicitly flagged unsupported) leave the ledger untouched. A
    /// merchant absent from the directory is assumed to accept Apple Pay.
    pub fn simulate_payment(&mut self, merchant: &str, amount: f64, card_id: Option<&str>) -> String {
        if amount <= 0.0 {
            return "❌ Payment failed: Invalid amount".to_string();
        }

        let selected_card = match card_id {
            Some(id) => match self.cards.find(id) {
                Some(card) => card,
                None => {
                    return format!("❌ Payment failed: Card with ID '{}' not found", id);
                }
            },
            None => match self.cards.default_card() {
                Some(card) => card,
                None => {
                    return "❌ Payment failed: No payment cards available".to_string();
                }
            },
        };
        let card_info = selected_card.display_info();

        if let Some(entry) = self.merchants.lookup(merchant) {
            if !entry.supported {
                return format!("❌ Payment failed: {} does not support Apple Pay", merchant);
            }
        }

        let transaction = Transaction {
            id: Self::generate_transaction_id(),
            merchant: merchant.to_string(),
            amount,
            date: Self::current_timestamp(),
            status: TransactionStatus::Completed,
            card_info,
        };

        info!(
            id = %transaction.id,
            merchant = %transaction.merchant,
            amount = transaction.amount,
            "payment completed"
        );

        let receipt = format_transaction(&transaction);
        self.ledger.record(transaction);

        format!(
            "\n✅ Payment Successful!\n\n{}\n\nTouch ID/Face ID authentication completed.\nReceipt sent to your email.\n",
            receipt
        )
    }

    /// List recent transactions, most recent first.
    pub fn get_transaction_history(&self, limit: usize) -> String {
        if self.ledger.is_empty() {
            return "No transaction history found.".to_string();
        }

        let transactions_text: Vec<String> = self
            .ledger
            .recent(limit)
            .into_iter()
            .map(format_transaction)
            .collect();

        if transactions_text.is_empty() {
            // limit of zero selects nothing from a non-empty ledger
            return "No transaction history found.".to_string();
        }

        format!(
            "Recent Apple Pay Transactions:\n{}",
            transactions_text.join("---")
        )
    }

    /// Add a payment card to the wallet. Fields are stored as given.
    pub fn add_payment_card(
        &mut self,
        card_type: &str,
        brand: &str,
        last_four: &str,
        expiry: &str,
    ) -> String {
        let card = self.cards.add(card_type, brand, last_four, expiry);

        debug!(id = %card.id, brand = %card.brand, "card added");

        let default_text = if card.is_default { " (Set as default)" } else { "" };

        format!(
            "\n✅ Card Added Successfully!\n\n{} {}{}\nCard ending in: ****{}\nExpires: {}\n\nYour card is now ready for Apple Pay transactions.\n",
            brand, card_type, default_text, last_four, expiry
        )
    }

    /// Summarize spending: total, transaction count, and a per-category
    /// breakdown sorted by descending amount. Equal totals keep the order
    /// in which their category first appeared in the ledger.
    pub fn get_spending_summary(&self) -> String {
        if self.ledger.is_empty() {
            return "No transactions found for spending summary.".to_string();
        }

        let total_spent = self.ledger.total_spent();
        let transaction_count = self.ledger.len();

        let mut categories: Vec<(String, f64)> = self
            .ledger
            .spending_by_category(&self.merchants)
            .into_iter()
            .collect();
        categories.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut summary = format!(
            "\nApple Pay Spending Summary:\n\nTotal Spent: ${:.2}\nTotal Transactions: {}\n\nSpending by Category:\n",
            total_spent, transaction_count
        );

        for (category, amount) in categories {
            summary.push_str(&format!("• {}: ${:.2}\n", category, amount));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_merchant_support_found() {
        let wallet = PayWallet::new();

        let result = wallet.check_merchant_support("Starbucks");
        assert!(result.contains("Merchant: Starbucks"));
        assert!(result.contains("Category: Coffee & Food"));
        assert!(result.contains("✅ Supported"));

        let result = wallet.check_merchant_support("gas_station");
        assert!(result.contains("❌ Not Supported"));
    }

    #[test]
    fn test_check_merchant_support_not_found_is_informational() {
        let wallet = PayWallet::new();

        let result = wallet.check_merchant_support("Corner Deli");
        assert!(result.contains("'Corner Deli' not found in our database"));
        assert!(result.contains("Most major retailers support Apple Pay"));
        assert!(!result.contains("❌"));
    }

    #[test]
    fn test_get_payment_cards_empty() {
        let wallet = PayWallet::new();
        assert_eq!(wallet.get_payment_cards(), "No payment cards found in Apple Wallet.");
    }

    #[test]
    fn test_get_payment_cards_annotates_default() {
        let wallet = PayWallet::with_mock_data();

        let result = wallet.get_payment_cards();
        assert!(result.contains("Visa Credit Card (Default)"));
        assert!(result.contains("Mastercard Debit Card\n"));
        assert!(result.contains("Card ending in: ****5678"));
        assert!(result.contains("---"));
    }

    #[test]
    fn test_simulate_payment_success_uses_default_card() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Starbucks", 5.50, None);
        assert!(result.contains("✅ Payment Successful!"));
        assert!(result.contains("Card Used: Visa ****1234"));
        assert!(result.contains("Amount: $5.50"));
        assert!(result.contains("Status: Completed"));
        assert_eq!(wallet.ledger.len(), 1);
    }

    #[test]
    fn test_simulate_payment_with_explicit_card() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Amazon", 19.99, Some("card_2"));
        assert!(result.contains("Card Used: Mastercard ****5678"));
    }

    #[test]
    fn test_simulate_payment_invalid_amount_has_no_side_effect() {
        let mut wallet = PayWallet::with_mock_data();

        assert_eq!(wallet.simulate_payment("Starbucks", 0.0, None), "❌ Payment failed: Invalid amount");
        assert_eq!(wallet.simulate_payment("Starbucks", -5.0, None), "❌ Payment failed: Invalid amount");
        assert!(wallet.ledger.is_empty());
    }

    #[test]
    fn test_simulate_payment_unknown_card_has_no_side_effect() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Starbucks", 5.50, Some("card_99"));
        assert_eq!(result, "❌ Payment failed: Card with ID 'card_99' not found");
        assert!(wallet.ledger.is_empty());
    }

    #[test]
    fn test_simulate_payment_empty_wallet() {
        let mut wallet = PayWallet::new();

        let result = wallet.simulate_payment("Starbucks", 5.50, None);
        assert_eq!(result, "❌ Payment failed: No payment cards available");
        assert!(wallet.ledger.is_empty());
    }

    #[test]
    fn test_simulate_payment_unsupported_merchant_has_no_side_effect() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Gas Station", 40.00, None);
        assert_eq!(result, "❌ Payment failed: Gas Station does not support Apple Pay");
        assert!(wallet.ledger.is_empty());
    }

    #[test]
    fn test_simulate_payment_unknown_merchant_is_allowed() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Corner Deli", 8.25, None);
        assert!(result.contains("✅ Payment Successful!"));
        assert_eq!(wallet.ledger.len(), 1);
    }

    #[test]
    fn test_transaction_history_ordering_and_limit() {
        let mut wallet = PayWallet::with_mock_data();
        wallet.simulate_payment("Starbucks", 5.50, None);
        wallet.simulate_payment("Amazon", 29.99, None);
        wallet.simulate_payment("Uber", 12.00, None);

        let result = wallet.get_transaction_history(2);
        assert!(result.starts_with("Recent Apple Pay Transactions:"));
        let uber_pos = result.find("Merchant: Uber").unwrap();
        let amazon_pos = result.find("Merchant: Amazon").unwrap();
        assert!(uber_pos < amazon_pos);
        assert!(!result.contains("Merchant: Starbucks"));

        // Limit past the ledger size returns everything
        let result = wallet.get_transaction_history(10);
        assert!(result.contains("Merchant: Starbucks"));
    }

    #[test]
    fn test_transaction_history_first_entry_is_latest() {
        let mut wallet = PayWallet::with_mock_data();
        for i in 1..=3 {
            wallet.simulate_payment("Starbucks", f64::from(i), None);
        }

        let latest_id = wallet.ledger.recent(1)[0].id.clone();
        let result = wallet.get_transaction_history(10);
        let first_listed = result.find("Transaction ID: ").map(|pos| {
            let rest = &result[pos + "Transaction ID: ".len()..];
            rest.lines().next().unwrap().to_string()
        });
        assert_eq!(first_listed.as_deref(), Some(latest_id.as_str()));
    }

    #[test]
    fn test_transaction_history_empty() {
        let wallet = PayWallet::with_mock_data();
        assert_eq!(wallet.get_transaction_history(10), "No transaction history found.");
    }

    #[test]
    fn test_transaction_history_zero_limit() {
        let mut wallet = PayWallet::with_mock_data();
        wallet.simulate_payment("Starbucks", 5.50, None);

        assert_eq!(wallet.get_transaction_history(0), "No transaction history found.");
    }

    #[test]
    fn test_add_payment_card_reports_default() {
        let mut wallet = PayWallet::new();

        let result = wallet.add_payment_card("Credit Card", "Amex", "0005", "01/2027");
        assert!(result.contains("✅ Card Added Successfully!"));
        assert!(result.contains("Amex Credit Card (Set as default)"));

        let result = wallet.add_payment_card("Debit Card", "Visa", "4242", "06/2028");
        assert!(!result.contains("(Set as default)"));
        assert!(result.contains("Card ending in: ****4242"));
    }

    #[test]
    fn test_spending_summary_empty() {
        let wallet = PayWallet::with_mock_data();
        assert_eq!(wallet.get_spending_summary(), "No transactions found for spending summary.");
    }

    #[test]
    fn test_spending_summary_totals_and_categories() {
        let mut wallet = PayWallet::with_mock_data();
        wallet.simulate_payment("Starbucks", 5.50, None);
        wallet.simulate_payment("Walmart", 30.00, None);
        wallet.simulate_payment("Corner Deli", 4.50, None);

        let result = wallet.get_spending_summary();
        // Unknown merchant counts toward the total but not the breakdown
        assert!(result.contains("Total Spent: $40.00"));
        assert!(result.contains("Total Transactions: 3"));
        assert!(result.contains("• Retail: $30.00"));
        assert!(result.contains("• Coffee & Food: $5.50"));
        assert!(!result.contains("Corner Deli"));
    }

    #[test]
    fn test_spending_summary_sorted_descending() {
        let mut wallet = PayWallet::with_mock_data();
        wallet.simulate_payment("Starbucks", 5.50, None);
        wallet.simulate_payment("Walmart", 30.00, None);

        let result = wallet.get_spending_summary();
        let retail_pos = result.find("• Retail").unwrap();
        let coffee_pos = result.find("• Coffee & Food").unwrap();
        assert!(retail_pos < coffee_pos);
    }

    #[test]
    fn test_spending_summary_ties_keep_first_occurrence_order() {
        let mut wallet = PayWallet::with_mock_data();
        wallet.simulate_payment("Uber", 10.00, None);
        wallet.simulate_payment("Starbucks", 10.00, None);

        let result = wallet.get_spending_summary();
        let uber_pos = result.find("• Transportation").unwrap();
        let coffee_pos = result.find("• Coffee & Food").unwrap();
        assert!(uber_pos < coffee_pos);
    }

    // End-to-end scenario: supported purchase succeeds, unsupported
    // merchant is rejected without touching the ledger.
    #[test]
    fn test_payment_flow_scenario() {
        let mut wallet = PayWallet::with_mock_data();

        let result = wallet.simulate_payment("Starbucks", 5.50, None);
        assert!(result.contains("Card Used: Visa ****1234"));
        assert_eq!(wallet.ledger.len(), 1);

        let result = wallet.simulate_payment("gas_station", 40.00, None);
        assert!(result.starts_with("❌ Payment failed"));
        assert_eq!(wallet.ledger.len(), 1);

        let result = wallet.get_spending_summary();
        assert!(result.contains("Total Spent: $5.50"));
        assert!(result.contains("• Coffee & Food: $5.50"));
    }
}
