//! Descriptive statistics over batches of outcomes.

use std::fmt;

use crate::variable::Outcome;

/// Summary statistics on a batch of outcomes.
///
/// Every method returns `None` on an empty batch.
///
/// # Examples
/// ```
/// use randvar_core::stats::SampleStatistics;
/// use randvar_core::variable::Outcome;
///
/// let batch = [Outcome::Integer(3), Outcome::Real(1.0), Outcome::Integer(2), Outcome::Real(10.0)];
/// assert_eq!(batch.min(), Some(1.0));
/// assert_eq!(batch.max(), Some(10.0));
/// assert_eq!(batch.mean(), Some(4.0));
/// assert_eq!(batch.median(), Some(2.5));
///
/// let empty: [Outcome; 0] = [];
/// assert_eq!(empty.mean(), None);
/// ```
pub trait SampleStatistics {
    /// Smallest outcome.
    fn min(&self) -> Option<f64>;

    /// Largest outcome.
    fn max(&self) -> Option<f64>;

    /// Arithmetic mean.
    fn mean(&self) -> Option<f64>;

    /// Middle value; the mean of the two middle values for even lengths.
    fn median(&self) -> Option<f64>;
}

impl SampleStatistics for [Outcome] {
    fn min(&self) -> Option<f64> {
        self.iter().map(Outcome::as_f64).reduce(f64::min)
    }

    fn max(&self) -> Option<f64> {
        self.iter().map(Outcome::as_f64).reduce(f64::max)
    }

    fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().map(Outcome::as_f64).sum::<f64>() / self.len() as f64)
    }

    fn median(&self) -> Option<f64> {
        median_of_sorted(&sorted_values(self))
    }
}

fn sorted_values(outcomes: &[Outcome]) -> Vec<f64> {
    let mut values: Vec<f64> = outcomes.iter().map(Outcome::as_f64).collect();
    values.sort_by(f64::total_cmp);
    values
}

fn median_of_sorted(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Statistics gathered from one batch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of outcomes.
    pub count: usize,
    /// Smallest outcome.
    pub min: f64,
    /// Largest outcome.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Unbiased sample variance; zero for a single outcome.
    pub variance: f64,
}

impl Summary {
    /// Computes the summary of `outcomes`, or `None` if the batch is empty.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Option<Self> {
        let values = sorted_values(outcomes);
        let count = values.len();
        let median = median_of_sorted(&values)?;
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = if count > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64
        } else {
            0.0
        };

        Some(Self {
            count,
            min: values[0],
            max: values[count - 1],
            mean,
            median,
            variance,
        })
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count    {}", self.count)?;
        writeln!(f, "min      {}", self.min)?;
        writeln!(f, "max      {}", self.max)?;
        writeln!(f, "mean     {}", self.mean)?;
        writeln!(f, "median   {}", self.median)?;
        writeln!(f, "variance {}", self.variance)?;
        write!(f, "std dev  {}", self.std_dev())
    }
}
