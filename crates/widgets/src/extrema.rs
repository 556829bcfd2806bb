/// Running minimum and maximum of a metric since construction.
///
/// Starts as `min = +∞`, `max = 0`; the range only ever widens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    min: f64,
    max: f64,
}

impl Extrema {
    pub const fn new() -> Self {
        Self { min: f64::INFINITY, max: 0.0 }
    }

    pub fn record(&mut self, sample: f64) {
        self.min = self.min.min(sample);
        self.max = self.max.max(sample);
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `"(<min>-<max>)"` with both bounds rounded to whole numbers.
    pub fn label(&self) -> String {
        format!("({}-{})", self.min.round(), self.max.round())
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_every_sample_and_never_shrink() {
        let samples = [16.0, 17.0, 3.0, 250.0, 16.0, 0.0, 99.5];
        let mut ext = Extrema::new();
        let mut seen = Vec::new();
        let (mut prev_min, mut prev_max) = (ext.min(), ext.max());

        for s in samples {
            ext.record(s);
            seen.push(s);

            assert!(seen.iter().all(|&v| ext.min() <= v && v <= ext.max()));
            assert!(ext.min() <= prev_min);
            assert!(ext.max() >= prev_max);
            prev_min = ext.min();
            prev_max = ext.max();
        }

        assert_eq!(ext.min(), 0.0);
        assert_eq!(ext.max(), 250.0);
    }

    #[test]
    fn label_rounds_bounds() {
        let mut ext = Extrema::new();
        ext.record(12.4);
        ext.record(80.5);
        assert_eq!(ext.label(), "(12-81)");
    }

    #[test]
    fn max_sentinel_is_zero() {
        let mut ext = Extrema::new();
        ext.record(-5.0);
        assert_eq!(ext.min(), -5.0);
        assert_eq!(ext.max(), 0.0);
    }
}
