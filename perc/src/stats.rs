use log::{debug, info};
use rand::Rng;

use crate::{
    error::{Error, Result},
    percolation::Percolation,
};

////////////////////////////////////////////////////////////////////////////////

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean of a sample. Returns NaN for an empty one.
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample standard deviation (denominator `len - 1`).
///
/// # Errors
///
/// `UndefinedStatistic` if the sample has fewer than two values.
pub fn stddev(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::UndefinedStatistic {
            trials: sample.len(),
        });
    }
    let mu = mean(sample);
    let sum_sq = sample.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>();
    Ok((sum_sq / (sample.len() - 1) as f64).sqrt())
}

////////////////////////////////////////////////////////////////////////////////

/// Monte Carlo estimate of the percolation threshold of an N-by-N grid.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent experiments on an `n` by `n` grid using the
    /// thread-local generator.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Same as [`PercolationStats::new`], drawing sites from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` or `trials` is zero.
    pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if trials == 0 {
            return Err(Error::InvalidArgument {
                name: "trial count",
                value: trials,
            });
        }
        if n == 0 {
            return Err(Error::InvalidArgument {
                name: "grid size",
                value: n,
            });
        }

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(Percolation::new(n)?, rng)?;
            debug!("trial {}/{trials}: threshold {threshold}", trial + 1);
            thresholds.push(threshold);
        }
        info!("finished {trials} trials on a {n}x{n} grid");

        Ok(Self { thresholds })
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Fraction of open sites at the moment each trial first percolated,
    /// in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// # Errors
    ///
    /// `UndefinedStatistic` if only one trial was run.
    pub fn stddev(&self) -> Result<f64> {
        stddev(&self.thresholds)
    }

    fn half_width(&self) -> Result<f64> {
        Ok(CONFIDENCE_95 * self.stddev()? / (self.trials() as f64).sqrt())
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_lo(&self) -> Result<f64> {
        Ok(self.mean() - self.half_width()?)
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_hi(&self) -> Result<f64> {
        Ok(self.mean() + self.half_width()?)
    }

    pub fn confidence_interval(&self) -> Result<(f64, f64)> {
        let (mu, hw) = (self.mean(), self.half_width()?);
        Ok((mu - hw, mu + hw))
    }
}

// Opens uniformly random blocked sites until the system percolates, then
// returns the fraction of sites opened. Terminates after at most N^2 opens.
fn run_trial<R: Rng + ?Sized>(mut system: Percolation, rng: &mut R) -> Result<f64> {
    let n = system.size();
    let mut opened = 0usize;
    while !system.percolates() {
        let row = rng.gen_range(0..n) + 1;
        let col = rng.gen_range(0..n) + 1;
        if !system.is_open(row, col)? {
            system.open(row, col)?;
            opened += 1;
        }
    }
    Ok(opened as f64 / (n * n) as f64)
}

////////////////////////////////////////////////////////////////////////////////
