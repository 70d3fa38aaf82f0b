//! Card wallet with default-card resolution

use serde::{Deserialize, Serialize};

/// A payment card stored in the wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, `card_1`, `card_2`, ...
    pub id: String,
    /// Card type, e.g. "Credit Card" or "Debit Card"
    #[serde(rename = "type")]
    pub card_type: String,
    /// Card brand, e.g. "Visa" or "Mastercard"
    pub brand: String,
    /// Last four digits
    pub last_four: String,
    /// Whether this card is used when no card id is given
    pub is_default: bool,
    /// Expiry in "MM/YYYY" form
    pub expires: String,
}

impl Card {
    /// Masked display form used on transactions: `"Visa ****1234"`
    pub fn display_info(&self) -> String {
        format!("{} ****{}", self.brand, self.last_four)
    }
}

/// Ordered collection of payment cards.
///
/// Cards are kept in insertion order and never removed. Card fields are
/// stored as given; no validation of `last_four` or `expires` is performed.
#[derive(Debug, Clone, Default)]
pub struct CardWallet {
    cards: Vec<Card>,
}

impl CardWallet {
    /// Create an empty wallet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet seeded with the two demo cards
    pub fn with_mock_data() -> Self {
        Self {
            cards: vec![
                Card {
                    id: "card_1".to_string(),
                    card_type: "Credit Card".to_string(),
                    brand: "Visa".to_string(),
                    last_four: "1234".to_string(),
                    is_default: true,
                    expires: "12/2026".to_string(),
                },
                Card {
                    id: "card_2".to_string(),
                    card_type: "Debit Card".to_string(),
                    brand: "Mastercard".to_string(),
                    last_four: "5678".to_string(),
                    is_default: false,
                    expires: "08/2025".to_string(),
                },
            ],
        }
    }

    /// All cards in insertion order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id
    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// The card used when no id is given: the first card flagged default,
    /// falling back to the first card in insertion order. `None` only when
    /// the wallet is empty.
    pub fn default_card(&self) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.is_default)
            .or_else(|| self.cards.first())
    }

    /// Append a new card. The first card added to an empty wallet becomes
    /// the default; every later card does not, regardless of existing flags.
    pub fn add(
        &mut self,
        card_type: impl Into<String>,
        brand: impl Into<String>,
        last_four: impl Into<String>,
        expires: impl Into<String>,
    ) -> &Card {
        let card = Card {
            id: format!("card_{}", self.cards.len() + 1),
            card_type: card_type.into(),
            brand: brand.into(),
            last_four: last_four.into(),
            is_default: self.cards.is_empty(),
            expires: expires.into(),
        };
        self.cards.push(card);
        self.cards.last().unwrap()
    }

    /// Number of stored cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the wallet has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_card_becomes_default() {
        let mut wallet = CardWallet::new();

        let card = wallet.add("Credit Card", "Amex", "0005", "01/2027");
        assert_eq!(card.id, "card_1");
        assert!(card.is_default);

        let card = wallet.add("Debit Card", "Visa", "4242", "06/2028");
        assert_eq!(card.id, "card_2");
        assert!(!card.is_default);

        // The first card keeps its flag
        assert!(wallet.find("card_1").unwrap().is_default);
    }

    #[test]
    fn test_default_card_prefers_flagged() {
        let wallet = CardWallet::with_mock_data();
        assert_eq!(wallet.default_card().unwrap().brand, "Visa");
    }

    #[test]
    fn test_default_card_falls_back_to_first() {
        let mut wallet = CardWallet::with_mock_data();
        // Manually clear the flag; the fallback is the first card, not None
        wallet.cards[0].is_default = false;
        assert_eq!(wallet.default_card().unwrap().id, "card_1");
    }

    #[test]
    fn test_default_card_empty_wallet() {
        let wallet = CardWallet::new();
        assert!(wallet.default_card().is_none());
    }

    #[test]
    fn test_find_unknown_id() {
        let wallet = CardWallet::with_mock_data();
        assert!(wallet.find("card_99").is_none());
    }

    #[test]
    fn test_add_stores_fields_as_given() {
        let mut wallet = CardWallet::new();
        // No validation: malformed digits and expiry are stored as-is
        let card = wallet.add("Mystery Card", "Acme", "12", "soon");
        assert_eq!(card.last_four, "12");
        assert_eq!(card.expires, "soon");
    }

    #[test]
    fn test_display_info() {
        let wallet = CardWallet::with_mock_data();
        assert_eq!(wallet.find("card_2").unwrap().display_info(), "Mastercard ****5678");
    }
}
