use {
    anyhow::{Result, bail},
    serde::Serialize,
};

/// A coin identifier as listed in the `coins` reference table (e.g. `BTC`).
///
/// Restricted to `[A-Za-z0-9_]` so it can only ever form a plain SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Coin(String);

impl Coin {
    /// Taken exactly as stored; whitespace would change the table name, so it is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            bail!("Empty coin identifier");
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            bail!(
                "Coin identifier {:?} contains characters outside [A-Za-z0-9_]",
                raw
            );
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
