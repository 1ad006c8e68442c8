/// Running min, max, mean and deviation of timing samples.
#[derive(Clone, Debug, Default)]
pub struct SampleStatistics {
    max: f64,
    min: f64,
    samples: u32,
    sum: f64,
    sum_of_squares: f64,
}

impl SampleStatistics {
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    pub fn put(&mut self, v: f64) {
        if self.is_empty() {
            self.min = v;
            self.max = v;
        } else if self.min > v {
            self.min = v;
        } else if self.max < v {
            self.max = v;
        }
        self.samples += 1;
        self.sum += v;
        self.sum_of_squares += v * v;
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    /// NaN without samples; clamped to [min, max] against rounding
    pub fn mean(&self) -> f64 {
        if self.samples < 1 {
            return f64::NAN;
        }
        let r = self.sum / self.samples as f64;
        r.clamp(self.min, self.max)
    }

    /// sample variance, NaN with less than two samples
    pub fn variance(&self) -> f64 {
        if self.samples < 2 {
            return f64::NAN;
        }
        if self.min == self.max {
            return 0.;
        }
        let n = self.samples as f64;
        let r = (self.sum_of_squares - self.sum * self.sum / n) / (n - 1.);
        r.max(0.)
    }

    pub fn deviation(&self) -> f64 {
        let r = self.variance().sqrt();
        if r.is_nan() {
            r
        } else {
            r.min(self.max - self.min)
        }
    }
}
