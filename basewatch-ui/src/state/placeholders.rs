//! Placeholder Data
//!
//! Fixed and pseudo-random display values for the dashboard pages. Nothing
//! here comes from a chain or market feed. Random generators take the RNG
//! so pages can seed one per mount while tests use a fixed seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// RNG seeded from the current time; pages call this once per mount
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now() as u64)
}

// ============ Token choices ============

/// Tokens offered by the Analytics and Insights selectors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenChoice {
    #[default]
    Eth,
    Usdc,
    New,
}

/// Headline figures on the "Key Metrics" tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMetrics {
    pub market_cap: &'static str,
    pub volume_24h: &'static str,
    pub circulating_supply: &'static str,
    pub holders: &'static str,
}

/// One price forecast card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forecast {
    pub horizon: &'static str,
    pub price: &'static str,
    pub change: &'static str,
}

const FORECAST_HORIZONS: [&str; 3] = ["24 Hour Forecast", "7 Day Forecast", "30 Day Forecast"];
const FORECAST_CHANGES: [&str; 3] = ["+2.6%", "+9.3%", "+20.0%"];

fn forecasts_from(prices: [&'static str; 3]) -> [Forecast; 3] {
    std::array::from_fn(|i| Forecast {
        horizon: FORECAST_HORIZONS[i],
        price: prices[i],
        change: FORECAST_CHANGES[i],
    })
}

impl TokenChoice {
    pub const ALL: [TokenChoice; 3] = [TokenChoice::Eth, TokenChoice::Usdc, TokenChoice::New];

    /// Ticker, also the `<select>` value
    pub fn symbol(self) -> &'static str {
        match self {
            TokenChoice::Eth => "ETH",
            TokenChoice::Usdc => "USDC",
            TokenChoice::New => "NEW",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenChoice::Eth => "Ethereum",
            TokenChoice::Usdc => "USD Coin",
            TokenChoice::New => "New Token",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    pub fn key_metrics(self) -> KeyMetrics {
        match self {
            TokenChoice::Eth => KeyMetrics {
                market_cap: "$258.2B",
                volume_24h: "$12.4B",
                circulating_supply: "120.3M",
                holders: "2.4M",
            },
            TokenChoice::Usdc => KeyMetrics {
                market_cap: "$31.5B",
                volume_24h: "$4.2B",
                circulating_supply: "31.5B",
                holders: "1.2M",
            },
            TokenChoice::New => KeyMetrics {
                market_cap: "$10.5M",
                volume_24h: "$850K",
                circulating_supply: "100M",
                holders: "8.5K",
            },
        }
    }

    pub fn forecasts(self) -> [Forecast; 3] {
        match self {
            TokenChoice::Eth => forecasts_from(["$2,205.78", "$2,350.12", "$2,580.45"]),
            TokenChoice::Usdc => forecasts_from(["$1.00", "$1.00", "$1.00"]),
            TokenChoice::New => forecasts_from(["$0.48", "$0.52", "$0.64"]),
        }
    }
}

/// Forecasts shown by the standalone analyzer, whatever the address
pub fn analyzer_forecasts() -> [Forecast; 3] {
    forecasts_from(["$2.45", "$2.78", "$3.12"])
}

/// Historical accuracy figures on the predictions tab
pub const PREDICTION_ACCURACY: [(&str, &str); 3] = [
    ("24h Accuracy", "82%"),
    ("7d Accuracy", "75%"),
    ("30d Accuracy", "63%"),
];

// ============ Timeframes ============

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    Day,
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Day,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Year,
        Timeframe::All,
    ];

    /// `<select>` value
    pub fn key(self) -> &'static str {
        match self {
            Timeframe::Day => "1d",
            Timeframe::Week => "1w",
            Timeframe::Month => "1m",
            Timeframe::Year => "1y",
            Timeframe::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Day => "24H",
            Timeframe::Week => "1W",
            Timeframe::Month => "1M",
            Timeframe::Year => "1Y",
            Timeframe::All => "All",
        }
    }

    /// Phrase used in "price over ..." captions
    pub fn description(self) -> &'static str {
        match self {
            Timeframe::Day => "the last 24 hours",
            Timeframe::Week => "the last week",
            Timeframe::Month => "the last month",
            Timeframe::Year => "the last year",
            Timeframe::All => "all time",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

// ============ Overview ============

/// A stat card on the overview page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewStat {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const OVERVIEW_STATS: [OverviewStat; 4] = [
    OverviewStat {
        title: "Total Tokens",
        value: "7",
        note: "+2 from last week",
    },
    OverviewStat {
        title: "Portfolio Value",
        value: "$24,582.23",
        note: "+5.2% from last month",
    },
    OverviewStat {
        title: "24h Volume",
        value: "$128.5M",
        note: "+12% from yesterday",
    },
    OverviewStat {
        title: "Active Alerts",
        value: "3",
        note: "2 price, 1 volume",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Price,
    Volume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub const RECENT_ALERTS: [Alert; 2] = [
    Alert {
        kind: AlertKind::Price,
        message: "Price Alert: Token 2 exceeded threshold of $30",
        time: "Today, 10:45 AM",
    },
    Alert {
        kind: AlertKind::Volume,
        message: "Volume Alert: Token 5 trading volume spike detected",
        time: "Yesterday, 4:20 PM",
    },
];

/// Row in the "Trending Tokens" tab
#[derive(Clone, Debug, PartialEq)]
pub struct TrendingToken {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    /// Percent, in `-20.0..20.0`
    pub change: f64,
}

impl TrendingToken {
    pub fn is_gain(&self) -> bool {
        self.change >= 0.0
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn change_label(&self) -> String {
        format!("{:+.2}%", self.change)
    }
}

pub fn trending_tokens(rng: &mut impl Rng, count: usize) -> Vec<TrendingToken> {
    (1..=count)
        .map(|i| TrendingToken {
            name: format!("Token {}", i),
            symbol: format!("TKN{}", i),
            price: rng.gen_range(0.0..100.0),
            change: rng.gen_range(-20.0..20.0),
        })
        .collect()
}

// ============ Analytics ============

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub hash: String,
    pub kind: &'static str,
    pub time: String,
    /// Token amount, 4 decimal places
    pub amount: String,
    /// USD value, 2 decimal places
    pub value: String,
}

/// Pseudo-random transfers stamped with `time`
pub fn recent_transactions(rng: &mut impl Rng, count: usize, time: &str) -> Vec<Transaction> {
    (0..count)
        .map(|i| Transaction {
            hash: format!("0x8fe{}2a...{}f3e", i, i),
            kind: if rng.gen_bool(0.5) { "Transfer" } else { "Swap" },
            time: time.to_string(),
            amount: format!("{:.4}", rng.gen_range(0.0..10.0)),
            value: format!("{:.2}", rng.gen_range(0.0..1000.0)),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Holder {
    pub rank: usize,
    pub address: String,
    pub amount: String,
    pub share: String,
}

/// Deterministic holder list; amounts fall off as `100000 / rank`
pub fn top_holders(count: usize) -> Vec<Holder> {
    (0..count)
        .map(|i| Holder {
            rank: i + 1,
            address: format!("0x3b{}8c...{}e9a", i, i),
            amount: format!("{:.2}", 100_000.0 / (i + 1) as f64),
            share: format!("{:.2}%", 10.0 - i as f64),
        })
        .collect()
}

// ============ Insights ============

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentimentSource {
    pub platform: &'static str,
    pub mood: &'static str,
    pub positive: bool,
    pub score: &'static str,
    pub activity: &'static str,
}

pub const SENTIMENT_SOURCES: [SentimentSource; 3] = [
    SentimentSource {
        platform: "Twitter",
        mood: "Positive",
        positive: true,
        score: "7.2/10",
        activity: "3,240 mentions in the last 24 hours",
    },
    SentimentSource {
        platform: "Reddit",
        mood: "Positive",
        positive: true,
        score: "6.8/10",
        activity: "450 posts in the last 24 hours",
    },
    SentimentSource {
        platform: "News Articles",
        mood: "Neutral",
        positive: false,
        score: "5.5/10",
        activity: "24 articles in the last 24 hours",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Anomaly {
    pub title: &'static str,
    pub description: String,
    pub category: &'static str,
    pub priority: Priority,
    pub age: &'static str,
}

/// The fixed anomaly list; `symbol` only appears in the whale description
pub fn anomalies(symbol: &str) -> Vec<Anomaly> {
    vec![
        Anomaly {
            title: "Unusual Trading Volume",
            description: "Trading volume spiked to 250% above the 30-day average at 2:45 AM UTC."
                .to_string(),
            category: "Volume",
            priority: Priority::Medium,
            age: "12 hours ago",
        },
        Anomaly {
            title: "Large Whale Movement",
            description: format!(
                "A wallet holding 2.5% of total supply transferred 50,000 {} to an exchange.",
                symbol
            ),
            category: "Wallet",
            priority: Priority::High,
            age: "3 hours ago",
        },
        Anomaly {
            title: "Social Media Spike",
            description:
                "Detected 5x increase in social media mentions with strongly positive sentiment."
                    .to_string(),
            category: "Social",
            priority: Priority::Low,
            age: "1 day ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_token_choice_lookup() {
        assert_eq!(TokenChoice::from_symbol("USDC"), Some(TokenChoice::Usdc));
        assert_eq!(TokenChoice::from_symbol("BTC"), None);
        assert_eq!(TokenChoice::default().symbol(), "ETH");
    }

    #[test]
    fn test_key_metrics_per_token() {
        assert_eq!(TokenChoice::Eth.key_metrics().market_cap, "$258.2B");
        assert_eq!(TokenChoice::Usdc.key_metrics().circulating_supply, "31.5B");
        assert_eq!(TokenChoice::New.key_metrics().holders, "8.5K");
    }

    #[test]
    fn test_forecasts() {
        let eth = TokenChoice::Eth.forecasts();
        assert_eq!(eth[0].price, "$2,205.78");
        assert_eq!(eth[2].horizon, "30 Day Forecast");
        assert_eq!(eth[2].change, "+20.0%");

        assert!(TokenChoice::Usdc.forecasts().iter().all(|f| f.price == "$1.00"));
        assert_eq!(analyzer_forecasts()[1].price, "$2.78");
    }

    #[test]
    fn test_timeframe_keys() {
        assert_eq!(Timeframe::default(), Timeframe::Week);
        assert_eq!(Timeframe::from_key("1y"), Some(Timeframe::Year));
        assert_eq!(Timeframe::from_key("all").map(|t| t.label()), Some("All"));
        assert_eq!(Timeframe::Day.description(), "the last 24 hours");
        assert_eq!(Timeframe::from_key("5m"), None);
    }

    #[test]
    fn test_trending_tokens_in_range() {
        let tokens = trending_tokens(&mut test_rng(), 5);

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].name, "Token 1");
        assert_eq!(tokens[4].symbol, "TKN5");
        for token in &tokens {
            assert!((0.0..100.0).contains(&token.price));
            assert!((-20.0..20.0).contains(&token.change));
            assert_eq!(token.is_gain(), token.change_label().starts_with('+'));
        }
    }

    #[test]
    fn test_same_seed_same_rows() {
        assert_eq!(
            trending_tokens(&mut test_rng(), 5),
            trending_tokens(&mut test_rng(), 5)
        );
    }

    #[test]
    fn test_recent_transactions() {
        let txs = recent_transactions(&mut test_rng(), 5, "10:00:00");

        assert_eq!(txs.len(), 5);
        assert_eq!(txs[3].hash, "0x8fe32a...3f3e");
        for tx in &txs {
            assert!(tx.kind == "Transfer" || tx.kind == "Swap");
            assert_eq!(tx.time, "10:00:00");
            assert_eq!(tx.amount.split('.').nth(1).map(str::len), Some(4));
            assert_eq!(tx.value.split('.').nth(1).map(str::len), Some(2));
        }
    }

    #[test]
    fn test_top_holders() {
        let holders = top_holders(5);

        assert_eq!(holders[0].amount, "100000.00");
        assert_eq!(holders[0].share, "10.00%");
        assert_eq!(holders[2].amount, "33333.33");
        assert_eq!(holders[4].address, "0x3b48c...4e9a");
        assert_eq!(holders[4].share, "6.00%");
    }

    #[test]
    fn test_anomalies_embed_symbol() {
        let list = anomalies("USDC");

        assert_eq!(list.len(), 3);
        assert!(list[1].description.contains("50,000 USDC"));
        assert_eq!(list[1].priority.label(), "High Priority");
        assert_eq!(list[2].priority, Priority::Low);
    }

    #[test]
    fn test_overview_constants() {
        assert_eq!(OVERVIEW_STATS[1].value, "$24,582.23");
        assert_eq!(OVERVIEW_STATS[3].note, "2 price, 1 volume");
        assert_eq!(RECENT_ALERTS[0].kind, AlertKind::Price);
    }
}
