use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a percentage that lands exactly halfway between two integers is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Rounding {
    /// Ties go to the even neighbor (12.5% shows as 12%, 13.5% as 14%).
    #[default]
    HalfEven,

    /// Ties go up (12.5% shows as 13%).
    HalfAwayFromZero,
}

/// Step counter backing a progress display.
///
/// `completed` never leaves `0..=total`; out-of-range input is clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    total: u64,
    completed: u64,
}

impl ProgressState {
    /// Start a new sequence of `total_steps` steps with nothing completed.
    ///
    /// Negative totals are treated as zero.
    pub fn initialize(&mut self, total_steps: i64) {
        self.total = u64::try_from(total_steps).unwrap_or(0);
        self.completed = 0;
    }

    /// Record how many steps are done, clamped into `0..=total`.
    pub fn update(&mut self, completed_steps: i64) {
        self.completed = u64::try_from(completed_steps).map_or(0, |c| c.min(self.total));
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Completed share of the total in `[0.0, 1.0]`; zero when there are no steps.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "step counts are far below 2^52")]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.completed as f64 / self.total as f64
    }

    /// Percentage in `0..=100`, rounded to the nearest integer.
    ///
    /// Computed on the exact ratio so ties are detected precisely instead of through
    /// floating-point noise.
    #[must_use]
    pub fn percent(&self, rounding: Rounding) -> u8 {
        if self.total == 0 {
            return 0;
        }

        let numerator = u128::from(self.completed) * 100;
        let denominator = u128::from(self.total);
        let quotient = numerator / denominator;
        let twice_remainder = (numerator % denominator) * 2;

        let rounded = match twice_remainder.cmp(&denominator) {
            core::cmp::Ordering::Less => quotient,
            core::cmp::Ordering::Greater => quotient + 1,
            core::cmp::Ordering::Equal => match rounding {
                Rounding::HalfEven => quotient + (quotient % 2),
                Rounding::HalfAwayFromZero => quotient + 1,
            },
        };

        // completed <= total keeps this within 0..=100
        u8::try_from(rounded).unwrap_or(100)
    }
}
