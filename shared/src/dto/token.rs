use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tradeable assets offered by the widget's token selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetToken {
    Zrx,
    Weth,
    Bat,
    Dai,
    Mkr,
}

impl AssetToken {
    /// All tokens in selector order
    pub fn all() -> &'static [AssetToken] {
        &[
            AssetToken::Zrx,
            AssetToken::Weth,
            AssetToken::Bat,
            AssetToken::Dai,
            AssetToken::Mkr,
        ]
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            AssetToken::Zrx => "ZRX",
            AssetToken::Weth => "WETH",
            AssetToken::Bat => "BAT",
            AssetToken::Dai => "DAI",
            AssetToken::Mkr => "MKR",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            AssetToken::Zrx => "0x Protocol Token",
            AssetToken::Weth => "Wrapped Ether",
            AssetToken::Bat => "Basic Attention Token",
            AssetToken::Dai => "Dai Stablecoin",
            AssetToken::Mkr => "Maker",
        }
    }

    /// Number of decimals between the display unit and the base unit.
    ///
    /// Every listed token follows the 18-decimal wei convention.
    pub fn decimals(&self) -> u8 {
        18
    }
}

impl fmt::Display for AssetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a ticker is not one of [`AssetToken::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token symbol: {}", self.0)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for AssetToken {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetToken::all()
            .iter()
            .copied()
            .find(|token| token.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// A trading pair: `base` is the asset being bought, `quote` the asset paid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub base: AssetToken,
    pub quote: AssetToken,
}

impl TokenPair {
    pub fn new(base: AssetToken, quote: AssetToken) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
