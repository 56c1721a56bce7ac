//! Token Registry
//!
//! The in-memory token list behind the "Token Registry" page. Records live
//! only in view state and are lost on reload.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid address pattern"));

/// Simulated round trip before a validation result is shown
pub const VALIDATION_DELAY_MS: u32 = 1500;

/// A token tracked in the registry
#[derive(Clone, Debug, PartialEq)]
pub struct TokenRecord {
    pub id: u32,
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub market_cap: String,
    pub price: String,
    pub change_24h: String,
}

impl TokenRecord {
    /// Whether the 24h change is non-negative
    pub fn is_gain(&self) -> bool {
        !self.change_24h.starts_with('-')
    }

    pub fn short_address(&self) -> String {
        shorten_address(&self.address)
    }
}

/// Format check only: `0x` followed by exactly 40 hex characters
pub fn is_valid_token_address(address: &str) -> bool {
    TOKEN_ADDRESS.is_match(address)
}

/// First 6 characters, `...`, last 4 characters
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Result of checking a candidate address
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationStatus {
    #[default]
    Unchecked,
    Checking,
    Valid,
    Invalid,
}

impl ValidationStatus {
    pub fn from_address(address: &str) -> Self {
        if is_valid_token_address(address) {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }

    /// Only a validated address may be submitted
    pub fn can_submit(self) -> bool {
        self == ValidationStatus::Valid
    }
}

/// Ordered list of tracked tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TokenRegistry {
    tokens: Vec<TokenRecord>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TokenRegistry {
    /// Registry preloaded with the Base L2 ETH and USDC contracts
    pub fn seeded() -> Self {
        Self {
            tokens: vec![
                TokenRecord {
                    id: 1,
                    name: "Ethereum".to_string(),
                    symbol: "ETH".to_string(),
                    address: "0x4200000000000000000000000000000000000006".to_string(),
                    market_cap: "$258.2B".to_string(),
                    price: "$2,150.45".to_string(),
                    change_24h: "+2.4%".to_string(),
                },
                TokenRecord {
                    id: 2,
                    name: "USD Coin".to_string(),
                    symbol: "USDC".to_string(),
                    address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string(),
                    market_cap: "$31.5B".to_string(),
                    price: "$1.00".to_string(),
                    change_24h: "+0.01%".to_string(),
                },
            ],
        }
    }

    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.tokens.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append a placeholder record for a well-formed address.
    ///
    /// Returns the new id, or `None` when the address fails the format check.
    /// The other fields are fixed placeholders unrelated to the address.
    pub fn add(&mut self, address: &str) -> Option<u32> {
        if !is_valid_token_address(address) {
            return None;
        }

        let id = self.next_id();
        self.tokens.push(TokenRecord {
            id,
            name: "New Token".to_string(),
            symbol: "NEW".to_string(),
            address: address.to_string(),
            market_cap: "$10.5M".to_string(),
            price: "$0.45".to_string(),
            change_24h: "+5.7%".to_string(),
        });

        Some(id)
    }

    /// Remove by id; returns whether a record was removed
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t.id != id);
        self.tokens.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_format() {
        assert!(!is_valid_token_address("0x123"));
        assert!(is_valid_token_address(&format!("0x{}", "a".repeat(40))));
        assert!(is_valid_token_address("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"));

        assert!(!is_valid_token_address(""));
        assert!(!is_valid_token_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_valid_token_address(&format!("0X{}", "a".repeat(40))));
        assert!(!is_valid_token_address(&format!("0x{}g", "a".repeat(39))));
        assert!(!is_valid_token_address(&format!(" 0x{}", "a".repeat(40))));
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x4200000000000000000000000000000000000006"),
            "0x4200...0006"
        );
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_seeded_registry() {
        let registry = TokenRegistry::seeded();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tokens()[0].symbol, "ETH");
        assert_eq!(registry.tokens()[1].symbol, "USDC");
        assert!(registry.tokens().iter().all(|t| t.is_gain()));
    }

    #[test]
    fn test_add_valid_address() {
        let mut registry = TokenRegistry::seeded();
        let address = format!("0x{}", "b".repeat(40));

        let id = registry.add(&address);

        assert_eq!(id, Some(3));
        let added = &registry.tokens()[2];
        assert_eq!(added.name, "New Token");
        assert_eq!(added.symbol, "NEW");
        assert_eq!(added.price, "$0.45");
        assert_eq!(added.address, address);
    }

    #[test]
    fn test_add_rejects_malformed_address() {
        let mut registry = TokenRegistry::seeded();

        assert_eq!(registry.add("0x123"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut registry = TokenRegistry::seeded();
        let address = format!("0x{}", "c".repeat(40));

        assert!(registry.remove(1));
        assert_eq!(registry.add(&address), Some(3));
        assert_eq!(registry.add(&address), Some(4));

        let ids: Vec<u32> = registry.tokens().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut registry = TokenRegistry::seeded();

        assert!(!registry.remove(42));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry_starts_at_one() {
        let mut registry = TokenRegistry::empty();

        assert!(registry.is_empty());
        assert_eq!(registry.add(&format!("0x{}", "d".repeat(40))), Some(1));
    }

    #[test]
    fn test_validation_status() {
        assert_eq!(ValidationStatus::from_address("0x123"), ValidationStatus::Invalid);
        assert!(ValidationStatus::from_address(&format!("0x{}", "e".repeat(40))).can_submit());
        assert!(!ValidationStatus::Checking.can_submit());
        assert!(!ValidationStatus::default().can_submit());
    }
}
