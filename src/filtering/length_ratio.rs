//! Length ratio outlier filter.
use super::filter::FilterMut;
use super::Filter;

/// Keeps track of the mean and standard deviation of the prior/post length ratios it is fed.
///
/// Detects ratios that lie within `factor` standard deviations of the mean (bounds included).
/// Non-finite ratios are never detected, nor accounted for.
///
/// Implements both [super::Filter] and [super::FilterMut]
pub struct LengthRatio {
    nb_measures: u64,
    mean: f64,
    /// sum of squared differences to the mean
    m2: f64,
    factor: f64,
}

impl LengthRatio {
    pub fn with_factor(factor: f64) -> Self {
        Self {
            nb_measures: 0,
            mean: 0.0,
            m2: 0.0,
            factor,
        }
    }

    /// Welford's online update.
    fn update(&mut self, ratio: f64) {
        self.nb_measures += 1;
        let delta = ratio - self.mean;
        self.mean += delta / self.nb_measures as f64;
        self.m2 += delta * (ratio - self.mean);
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation.
    pub fn std(&self) -> f64 {
        if self.nb_measures == 0 {
            0.0
        } else {
            (self.m2 / self.nb_measures as f64).sqrt()
        }
    }

    pub fn nb_measures(&self) -> u64 {
        self.nb_measures
    }

    /// `(lower, upper)` accepted bounds.
    pub fn bounds(&self) -> (f64, f64) {
        let spread = self.factor * self.std();
        (self.mean - spread, self.mean + spread)
    }
}

impl Default for LengthRatio {
    fn default() -> Self {
        Self::with_factor(2.0)
    }
}

impl FilterMut<f64> for LengthRatio {
    fn detect_mut(&mut self, ratio: f64) -> bool {
        if !ratio.is_finite() {
            return false;
        }
        self.update(ratio);
        self.detect(ratio)
    }
}

impl Filter<f64> for LengthRatio {
    fn detect(&self, ratio: f64) -> bool {
        let (lower, upper) = self.bounds();
        ratio.is_finite() && lower <= ratio && ratio <= upper
    }
}
