//! Contrast stretching with percentile trimming.

use super::downsample::AveragedGrid;

/// Share of values trimmed at each end, as `n / TRIM_DIVISOR`.
const TRIM_DIVISOR: usize = 10;

/// Robust brightness bounds of a grid, `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastRange {
    pub low: u8,
    pub high: u8,
}

impl ContrastRange {
    /// Bounds after dropping the darkest and brightest 10% of `values`.
    ///
    /// With `k = n / 10`, `low` is the value at sorted rank `k` and `high`
    /// the value at sorted rank `n - k - 1`. The two are swapped if they
    /// come out reversed. An empty slice gives `{0, 0}`.
    pub fn from_values(values: &[u8]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self { low: 0, high: 0 };
        }

        let k = n / TRIM_DIVISOR;
        let mut scratch = values.to_vec();
        let low = *scratch.select_nth_unstable(k).1;
        let high = *scratch.select_nth_unstable(n - k - 1).1;

        if low > high {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }

    /// True when trimming left a single brightness level.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Gradient index for one value, given a gradient of `levels` characters.
    ///
    /// The value is clamped into `[low, high]`, stretched to `0..=255` and
    /// scaled onto `0..levels`. A degenerate range maps everything to 0.
    #[inline]
    pub fn gradient_index(&self, value: u8, levels: usize) -> usize {
        if self.is_degenerate() || levels <= 1 {
            return 0;
        }

        let span = (self.high - self.low) as usize;
        let delta = (value.saturating_sub(self.low) as usize).min(span);
        let normalized = delta * 255 / span;
        normalized * (levels - 1) / 255
    }
}

/// Map every cell of `grid` to an index into a gradient of `levels` characters.
///
/// Output order matches the grid (row-major).
pub fn normalize(grid: &AveragedGrid, levels: usize) -> Vec<usize> {
    let range = ContrastRange::from_values(grid.values());
    if range.is_degenerate() {
        log::debug!(
            "Degenerate contrast range at {}, rendering all cells darkest",
            range.low
        );
    } else {
        log::debug!("Contrast range {}..={}", range.low, range.high);
    }

    grid.values()
        .iter()
        .map(|&v| range.gradient_index(v, levels))
        .collect()
}
