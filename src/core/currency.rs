use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Reference currency through which all cross-currency conversions are routed.
pub const PIVOT_CURRENCY: &str = "CNY";

/// Selects which of the two stored exchange rates a calculation run uses.
///
/// One run uses a single mode consistently for every conversion it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateMode {
    /// Contractually fixed rate
    Fixed,
    /// Current floating market rate
    Floating,
}

impl fmt::Display for RateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateMode::Fixed => write!(f, "fixed"),
            RateMode::Floating => write!(f, "floating"),
        }
    }
}

impl std::str::FromStr for RateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(RateMode::Fixed),
            "floating" => Ok(RateMode::Floating),
            _ => Err(format!("Invalid rate mode: {}", s)),
        }
    }
}

/// Exchange rates for one currency, expressed as units of this currency per
/// 1 unit of the pivot currency (CNY). The pivot itself has both rates at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub fixed: Decimal,
    pub floating: Decimal,
}

impl CurrencyRate {
    pub fn new(fixed: Decimal, floating: Decimal) -> Self {
        Self { fixed, floating }
    }

    fn for_mode(&self, mode: RateMode) -> Decimal {
        match mode {
            RateMode::Fixed => self.fixed,
            RateMode::Floating => self.floating,
        }
    }
}

/// Exchange-rate table keyed by currency code.
///
/// Unknown codes resolve to rate 1 (treated as already in pivot currency).
/// This is a lenient-default policy: callers needing strict validation must
/// check currency existence before starting a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<String, CurrencyRate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: CurrencyRate) {
        self.rates.insert(code.into(), rate);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Rate for a currency code under the given mode, defaulting to 1 for
    /// unknown codes and for non-positive stored rates (a zero rate would
    /// divide by zero during conversion; same lenient policy as a missing
    /// code).
    pub fn rate_of(&self, code: &str, mode: RateMode) -> Decimal {
        match self.rates.get(code) {
            Some(rate) => {
                let value = rate.for_mode(mode);
                if value <= Decimal::ZERO {
                    warn!(currency = code, %value, "non-positive exchange rate, defaulting to 1");
                    return Decimal::ONE;
                }
                value
            }
            None => {
                warn!(currency = code, "currency missing from rate table, defaulting rate to 1");
                Decimal::ONE
            }
        }
    }

    /// Converts an amount between two currency codes via the pivot currency.
    ///
    /// Identity conversions return the amount untouched so that no
    /// floating round-trip error can be introduced. No rounding is performed
    /// here; rounding to 2 decimal places happens only at presentation
    /// boundaries to avoid compounding error across chained conversions.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str, mode: RateMode) -> Decimal {
        if from == to {
            return amount;
        }
        let from_rate = self.rate_of(from, mode);
        let to_rate = self.rate_of(to, mode);
        // rate = units of the currency per 1 CNY, so divide into pivot first
        let amount_in_pivot = amount / from_rate;
        amount_in_pivot * to_rate
    }
}

impl FromIterator<(String, CurrencyRate)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (String, CurrencyRate)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
