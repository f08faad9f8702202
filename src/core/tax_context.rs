use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageContext {
    #[serde(alias = "ownUse", alias = "own_use")]
    OwnUse,
    Renting,
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageContext::OwnUse => write!(f, "Own usage"),
            UsageContext::Renting => write!(f, "Renting"),
        }
    }
}

/// Decides whether a position's yearly value reaches the taxable profit.
///
/// Cash effects are never gated; only the `profit_before_taxes` aggregate is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaxContext {
    /// Counted only when the property is rented out.
    UsageGated(UsageContext),
    /// Counted in every usage mode.
    AlwaysAccounted(UsageContext),
}

impl TaxContext {
    pub fn usage(self) -> UsageContext {
        match self {
            TaxContext::UsageGated(usage) | TaxContext::AlwaysAccounted(usage) => usage,
        }
    }

    pub fn is_accounted(self) -> bool {
        match self {
            TaxContext::UsageGated(usage) => usage == UsageContext::Renting,
            TaxContext::AlwaysAccounted(_) => true,
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        if self.is_accounted() { value } else { 0.0 }
    }
}
