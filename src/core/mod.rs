pub mod currency;
pub mod error;
pub mod period;

pub use currency::{CurrencyRate, RateMode, RateTable, PIVOT_CURRENCY};
pub use error::{EngineError, Result};
pub use period::Month;
