use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("invalid tuning constant {name}: {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("entry {index} rounds to a non-positive period ({value})")]
    NonPositivePeriod { index: usize, value: f64 },

    /// The emitted literal pads every period to four hex digits.
    #[error("entry {index} has period {value}, which does not fit in a u16")]
    PeriodOverflow { index: usize, value: f64 },
}
