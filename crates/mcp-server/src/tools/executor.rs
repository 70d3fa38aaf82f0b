//! Execute wallet tools against the shared wallet state

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::protocol::ToolCallResult;
use pay_core::{PayError, PayWallet};

/// Default history length when `get_transaction_history` gets no limit
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Dispatches `tools/call` requests onto the wallet operations.
///
/// Business failures (invalid amount, unknown card, unsupported merchant)
/// come back from the wallet as plain text and are returned as regular
/// results; only a malformed invocation produces a `PayError`.
pub struct ToolExecutor {
    wallet: Arc<RwLock<PayWallet>>,
}

impl ToolExecutor {
    /// Create a new tool executor over the shared wallet
    pub fn new(wallet: Arc<RwLock<PayWallet>>) -> Self {
        Self { wallet }
    }

    /// Execute a tool by name
    pub async fn execute(
        &self,
        tool_name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolCallResult, PayError> {
        let args = arguments.unwrap_or(Value::Object(Map::new()));
        let args = args.as_object().ok_or_else(|| {
            PayError::invalid_argument("arguments", "must be a JSON object")
        })?;

        debug!(tool = tool_name, "executing tool");

        let text = match tool_name {
            "check_merchant_support" => {
                let merchant_name = require_str(args, "merchant_name")?;
                self.wallet.read().await.check_merchant_support(merchant_name)
            }
            "get_payment_cards" => self.wallet.read().await.get_payment_cards(),
            "simulate_payment" => {
                let merchant = require_str(args, "merchant")?;
                let amount = require_number(args, "amount")?;
                let card_id = optional_str(args, "card_id")?;
                // Single write lock covers the card lookup and the ledger
                // append, so the read-then-write sequence cannot interleave.
                self.wallet
                    .write()
                    .await
                    .simulate_payment(merchant, amount, card_id)
            }
            "get_transaction_history" => {
                let limit = optional_limit(args, "limit", DEFAULT_HISTORY_LIMIT)?;
                self.wallet.read().await.get_transaction_history(limit)
            }
            "add_payment_card" => {
                let card_type = require_str(args, "card_type")?;
                let brand = require_str(args, "brand")?;
                let last_four = require_str(args, "last_four")?;
                let expiry = require_str(args, "expiry")?;
                self.wallet
                    .write()
                    .await
                    .add_payment_card(card_type, brand, last_four, expiry)
            }
            "get_spending_summary" => self.wallet.read().await.get_spending_summary(),
            other => return Err(PayError::UnknownTool(other.to_string())),
        };

        Ok(ToolCallResult::text(text))
    }
}

fn require_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, PayError> {
    args.get(name)
        .ok_or_else(|| PayError::MissingArgument(name.to_string()))?
        .as_str()
        .ok_or_else(|| PayError::invalid_argument(name, "must be a string"))
}

fn optional_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<Option<&'a str>, PayError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| PayError::invalid_argument(name, "must be a string")),
    }
}

fn require_number(args: &Map<String, Value>, name: &str) -> Result<f64, PayError> {
    args.get(name)
        .ok_or_else(|| PayError::MissingArgument(name.to_string()))?
        .as_f64()
        .ok_or_else(|| PayError::invalid_argument(name, "must be a number"))
}

/// Integer argument with a default. Negative values clamp to zero, which
/// the history operation reports as an empty history.
fn optional_limit(
    args: &Map<String, Value>,
    name: &str,
    default: usize,
) -> Result<usize, PayError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => {
            let limit = value
                .as_i64()
                .ok_or_else(|| PayError::invalid_argument(name, "must be an integer"))?;
            Ok(usize::try_from(limit).unwrap_or(0))
        }
    }
}
