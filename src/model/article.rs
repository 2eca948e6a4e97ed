/// Things a customer can buy, and what they cost.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A purchasable article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Article {
    Espresso,
    Cappuccino,
}

impl Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Article::Espresso => f.write_str("espresso"),
            Article::Cappuccino => f.write_str("cappuccino"),
        }
    }
}

/// Article prices in minor currency units (cents).
///
/// Prices are resolved by the register, never supplied by whoever asks for a
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList(BTreeMap<Article, u64>);

impl PriceList {
    /// An empty list. Every article is unpriced until [`with_price`](Self::with_price).
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_price(mut self, article: Article, price: u64) -> Self {
        self.0.insert(article, price);
        self
    }

    pub fn price_of(&self, article: Article) -> Option<u64> {
        self.0.get(&article).copied()
    }
}

impl Default for PriceList {
    /// Espresso 150, cappuccino 250.
    fn default() -> Self {
        Self::empty()
            .with_price(Article::Espresso, 150)
            .with_price(Article::Cappuccino, 250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let prices = PriceList::default();
        assert_eq!(prices.price_of(Article::Espresso), Some(150));
        assert_eq!(prices.price_of(Article::Cappuccino), Some(250));
    }

    #[test]
    fn test_custom_list_can_leave_articles_unpriced() {
        let prices = PriceList::empty().with_price(Article::Espresso, 120);
        assert_eq!(prices.price_of(Article::Espresso), Some(120));
        assert_eq!(prices.price_of(Article::Cappuccino), None);
    }
}
