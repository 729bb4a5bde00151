//! Band and linear scales.
//!
//! The arithmetic follows d3-scale so charts look identical to their D3
//! counterparts: same band step/offset math, same 1-2-5 tick increments,
//! same nice-bound extension.

/// Thresholds for choosing 10, 5, or 2 as the tick factor (sqrt(50),
/// sqrt(10), sqrt(2)).
const E10: f64 = 7.071067811865476;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

/// Tick increment for a domain and target count, 1-2-5 style.
///
/// Returns the increment directly when it is >= 1, or the negated
/// reciprocal when it is < 1, so callers can round to tick boundaries
/// without accumulating floating point error on fractional steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Maps a discrete categorical domain (years) to contiguous slots of equal
/// width along a continuous range, with inner and outer padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<i32>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Build a band scale over `[0, width]` with equal inner and outer
    /// padding, centered (align = 0.5).
    pub fn new(domain: Vec<i32>, width: f64, padding: f64) -> Self {
        let n = domain.len() as f64;
        let step = width / (n - padding + padding * 2.0).max(1.0);
        let start = (width - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self {
            domain,
            step,
            bandwidth,
            start,
        }
    }

    /// Left edge of the band for `key`, or `None` if it is not in the domain.
    pub fn position(&self, key: i32) -> Option<f64> {
        self.domain
            .iter()
            .position(|&d| d == key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Center of the band for `key`.
    pub fn center(&self, key: i32) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[i32] {
        &self.domain
    }
}

/// Maps a continuous numeric domain onto a continuous range. The range may
/// be inverted (screen y grows downward, so charts pass `(height, 0)`).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Extend the domain outward to tick-increment boundaries so the axis
    /// ends on readable values.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = (self.d0, self.d1);
        if stop <= start {
            return self;
        }
        let mut prestep = 0.0;
        loop {
            let step = tick_increment(start, stop, count);
            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            prestep = step;
        }
        self.d0 = start;
        self.d1 = stop;
        self
    }

    /// Map a domain value into the range. A degenerate domain maps
    /// everything to the range midpoint.
    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (value - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }

    /// Evenly spaced tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = (self.d0.min(self.d1), self.d0.max(self.d1));
        if start == stop {
            return vec![start];
        }
        let step = tick_increment(start, stop, count);
        if step == 0.0 || !step.is_finite() {
            return vec![start];
        }

        let mut ticks = Vec::new();
        if step > 0.0 {
            let i0 = (start / step).ceil() as i64;
            let i1 = (stop / step).floor() as i64;
            for i in i0..=i1 {
                ticks.push(i as f64 * step);
            }
        } else {
            let inv = -step;
            let i0 = (start * inv).ceil() as i64;
            let i1 = (stop * inv).floor() as i64;
            for i in i0..=i1 {
                ticks.push(i as f64 / inv);
            }
        }
        ticks
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_matches_d3_arithmetic() {
        // width 310, padding 0.1, 3 bands:
        // step = 310 / (3 + 0.1) = 100, outer offset = 0.1 * step = 10
        let x = BandScale::new(vec![1965, 1966, 1967], 310.0, 0.1);
        assert!((x.step() - 100.0).abs() < 1e-9);
        assert!((x.bandwidth() - 90.0).abs() < 1e-9);
        assert!((x.position(1965).unwrap() - 10.0).abs() < 1e-9);
        assert!((x.position(1966).unwrap() - 110.0).abs() < 1e-9);
        assert!((x.position(1967).unwrap() - 210.0).abs() < 1e-9);
        assert!((x.center(1965).unwrap() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn band_scale_unknown_key_has_no_position() {
        let x = BandScale::new(vec![1965], 100.0, 0.1);
        assert_eq!(x.position(1970), None);
    }

    #[test]
    fn band_scale_empty_domain_does_not_divide_by_zero() {
        let x = BandScale::new(Vec::new(), 500.0, 0.1);
        assert!(x.bandwidth().is_finite());
        assert_eq!(x.position(1965), None);
    }

    #[test]
    fn linear_scale_inverted_range() {
        let y = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(y.scale(0.0), 300.0);
        assert_eq!(y.scale(100.0), 0.0);
        assert_eq!(y.scale(50.0), 150.0);
    }

    #[test]
    fn nice_rounds_the_rainfall_maximum_up() {
        let y = LinearScale::new((0.0, 7489.07), (300.0, 0.0)).nice(10);
        let (lo, hi) = y.domain();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 8000.0);
    }

    #[test]
    fn ticks_cover_the_nice_domain() {
        let y = LinearScale::new((0.0, 7489.07), (300.0, 0.0)).nice(10);
        let ticks = y.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&8000.0));
        assert_eq!(ticks.len(), 9); // 0, 1000, ..., 8000
    }

    #[test]
    fn fractional_increments_use_the_reciprocal_path() {
        let y = LinearScale::new((0.0, 1.0), (300.0, 0.0));
        let ticks = y.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[1], 0.1);
        assert_eq!(ticks[10], 1.0);
    }

    #[test]
    fn degenerate_domain_is_safe() {
        let y = LinearScale::new((0.0, 0.0), (300.0, 0.0)).nice(10);
        assert_eq!(y.scale(0.0), 150.0);
        assert_eq!(y.ticks(10), vec![0.0]);
    }
}
