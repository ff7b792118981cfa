//! Defines the coin records shown on the dashboard and the fixed seed set.

use serde::Deserialize;
use serde::Serialize;

/// One fixed, in-memory snapshot of a cryptocurrency's display data.
///
/// Records are created once when the seed set is served and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Price in USD. Never negative.
    pub price: f64,
    /// Signed percent change over the last 24 hours.
    pub change_24h: f64,
    /// A single-character glyph rendered next to the name.
    pub icon: char,
}

impl CoinRecord {
    pub fn new(id: &str, name: &str, symbol: &str, price: f64, change_24h: f64, icon: char) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: price.max(0.0),
            change_24h,
            icon,
        }
    }

    /// Returns true when `term` is contained in the name or symbol, ignoring case.
    ///
    /// An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }

    /// Whether the 24h change should be rendered as a gain.
    pub fn is_gain(&self) -> bool {
        self.rounded_change() >= 0.0
    }

    /// The change at display precision. Adding `0.0` turns `-0.0` into `0.0`.
    fn rounded_change(&self) -> f64 {
        (self.change_24h * 100.0).round() / 100.0 + 0.0
    }

    /// Formats the price in USD, e.g. `$67,234.12`.
    ///
    /// Sub-dollar prices keep four decimals so that small coins remain legible.
    pub fn formatted_price(&self) -> String {
        // Decide on the rounded value so 0.99999 renders as $1.00.
        let fine = format!("{:.4}", self.price);
        let fixed = if fine.starts_with("0.") {
            fine
        } else {
            format!("{:.2}", self.price)
        };
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        format!("${}.{}", group_thousands(whole), fraction)
    }

    /// Formats the 24h change as a signed percentage, e.g. `+2.35%`.
    pub fn formatted_change(&self) -> String {
        format!("{:+.2}%", self.rounded_change())
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// The fixed set of coins the dashboard is seeded with.
pub fn seed_coins() -> Vec<CoinRecord> {
    vec![
        CoinRecord::new("bitcoin", "Bitcoin", "BTC", 67234.12, 2.35, '₿'),
        CoinRecord::new("ethereum", "Ethereum", "ETH", 3512.48, -1.10, 'Ξ'),
        CoinRecord::new("solana", "Solana", "SOL", 172.36, 5.42, '◎'),
        CoinRecord::new("cardano", "Cardano", "ADA", 0.4587, -0.85, '₳'),
        CoinRecord::new("ripple", "XRP", "XRP", 0.5231, 0.62, '✕'),
        CoinRecord::new("dogecoin", "Dogecoin", "DOGE", 0.1587, 8.14, 'Ð'),
        CoinRecord::new("litecoin", "Litecoin", "LTC", 84.19, -2.07, 'Ł'),
        CoinRecord::new("chainlink", "Chainlink", "LINK", 14.73, 1.26, '⬡'),
    ]
}
