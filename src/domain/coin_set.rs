use {
    super::Coin,
    anyhow::{Result, bail},
    std::collections::HashSet,
};

/// The allow-list of coins read from the reference table.
/// Loaded once at startup, never mutated afterwards. Keeps the table's row order.
#[derive(Debug, Clone)]
pub struct CoinSet {
    coins: Vec<Coin>,
}

impl CoinSet {
    pub fn new(coins: Vec<Coin>) -> Result<Self> {
        if coins.is_empty() {
            bail!("The coins reference table is empty");
        }
        {
            let mut seen = HashSet::new();
            if let Some(dup) = coins.iter().find(|c| !seen.insert(*c)) {
                bail!("Coin {} is listed more than once", dup);
            }
        }
        Ok(Self { coins })
    }

    /// First coin in reference-table order
    pub fn first(&self) -> &Coin {
        &self.coins[0]
    }

    pub fn get(&self, name: &str) -> Result<&Coin> {
        match self.coins.iter().find(|c| c.as_str() == name) {
            Some(coin) => Ok(coin),
            None => bail!("Unknown coin {:?}", name),
        }
    }

    /// The configured default when given (must be a known coin), else the first coin.
    pub fn resolve_default(&self, configured: Option<&str>) -> Result<Coin> {
        match configured {
            Some(name) => Ok(self.get(name)?.clone()),
            None => Ok(self.first().clone()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> Result<CoinSet> {
        CoinSet::new(names.iter().map(|n| Coin::parse(n).unwrap()).collect())
    }

    #[test]
    fn default_is_first_in_table_order_unless_configured() {
        let coins = set(&["ETH", "BTC", "SOL"]).unwrap();
        assert_eq!(coins.resolve_default(None).unwrap().as_str(), "ETH");
        assert_eq!(coins.resolve_default(Some("SOL")).unwrap().as_str(), "SOL");
        assert!(coins.resolve_default(Some("DOGE")).is_err());
    }

    #[test]
    fn empty_and_duplicate_sets_are_rejected() {
        assert!(set(&[]).is_err());
        assert!(set(&["BTC", "ETH", "BTC"]).is_err());
    }

    #[test]
    fn lookup_is_exact() {
        let coins = set(&["BTC"]).unwrap();
        assert!(coins.get("BTC").is_ok());
        assert!(coins.get("btc").is_err());
        assert_eq!(coins.iter().count(), 1);
    }
}
