//! Static MCP tool definitions for the six wallet operations

use serde_json::{json, Map, Value};

use crate::protocol::{McpInputSchema, McpTool};

fn schema(properties: Value, required: &[&str]) -> McpInputSchema {
    let properties = match properties {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    McpInputSchema {
        schema_type: "object".to_string(),
        properties: if properties.is_empty() { None } else { Some(properties) },
        required: if required.is_empty() {
            None
        } else {
            Some(required.iter().map(|name| name.to_string()).collect())
        },
    }
}

fn tool(name: &str, description: &str, input_schema: McpInputSchema) -> McpTool {
    McpTool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema,
    }
}

/// The fixed set of tools this server advertises on `tools/list`.
pub fn tool_definitions() -> Vec<McpTool> {
    vec![
        tool(
            "check_merchant_support",
            "Check if a merchant supports Apple Pay.",
            schema(
                json!({
                    "merchant_name": {
                        "type": "string",
                        "description": "Name of the merchant to check"
                    }
                }),
                &["merchant_name"],
            ),
        ),
        tool(
            "get_payment_cards",
            "Get list of available payment cards in Apple Wallet.",
            schema(json!({}), &[]),
        ),
        tool(
            "simulate_payment",
            "Simulate an Apple Pay transaction.",
            schema(
                json!({
                    "merchant": {
                        "type": "string",
                        "description": "Name of the merchant"
                    },
                    "amount": {
                        "type": "number",
                        "description": "Payment amount in USD"
                    },
                    "card_id": {
                        "type": "string",
                        "description": "Optional card ID to use (uses default if not specified)"
                    }
                }),
                &["merchant", "amount"],
            ),
        ),
        tool(
            "get_transaction_history",
            "Get recent Apple Pay transaction history.",
            schema(
                json!({
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of transactions to return (default: 10)"
                    }
                }),
                &[],
            ),
        ),
        tool(
            "add_payment_card",
            "Add a new payment card to Apple Wallet.",
            schema(
                json!({
                    "card_type": {
                        "type": "string",
                        "description": "Type of card (Credit Card, Debit Card, etc.)"
                    },
                    "brand": {
                        "type": "string",
                        "description": "Card brand (Visa, Mastercard, Amex, etc.)"
                    },
                    "last_four": {
                        "type": "string",
                        "description": "Last four digits of the card"
                    },
                    "expiry": {
                        "type": "string",
                        "description": "Expiry date in MM/YY format"
                    }
                }),
                &["card_type", "brand", "last_four", "expiry"],
            ),
        ),
        tool(
            "get_spending_summary",
            "Get spending summary from Apple Pay transactions.",
            schema(json!({}), &[]),
        ),
    ]
}
