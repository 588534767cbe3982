use {
    crate::models::FORECAST_DAYS,
    anyhow::{Result, bail},
    serde::{Deserialize, Serialize},
};

/// How many days ahead a prediction targets (1..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Horizon(u8);

impl Horizon {
    pub const MIN_DAYS: u8 = 1;
    pub const MAX_DAYS: u8 = FORECAST_DAYS as u8;
    pub const DEFAULT: Self = Self(Self::MIN_DAYS);

    pub fn new(days: u8) -> Result<Self> {
        if !(Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days) {
            bail!(
                "Horizon of {} days is outside {}..={}",
                days,
                Self::MIN_DAYS,
                Self::MAX_DAYS
            );
        }
        Ok(Self(days))
    }

    #[inline]
    pub fn days(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN_DAYS..=Self::MAX_DAYS).map(Self)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Horizon {
    type Error = anyhow::Error;

    fn try_from(days: u8) -> Result<Self> {
        Self::new(days)
    }
}

impl From<Horizon> for u8 {
    fn from(h: Horizon) -> Self {
        h.0
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Day", self.0)
    }
}
