//! Closed-form descriptive statistics over samples.

use itertools::Itertools;

use crate::error::StatsError;

pub fn total(samples: &[f32]) -> f32 {
    samples.iter().sum()
}

pub fn mean(samples: &[f32]) -> Option<f32> {
    if samples.is_empty() {
        return None;
    }
    Some(total(samples) / samples.len() as f32)
}

/// Sample standard deviation (divides by `n - 1`). Needs two samples.
pub fn sample_std_dev(samples: &[f32]) -> Option<f32> {
    if samples.len() < 2 {
        return None;
    }
    let mean = mean(samples)?;
    let squares: f32 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    Some((squares / (samples.len() - 1) as f32).sqrt())
}

pub fn mean_absolute_deviation(samples: &[f32]) -> Option<f32> {
    let mean = mean(samples)?;
    let deviations: f32 = samples.iter().map(|x| (x - mean).abs()).sum();
    Some(deviations / samples.len() as f32)
}

/// Sample Pearson correlation coefficient of paired samples.
///
/// Zero when either side has no variance, including when both are empty.
pub fn pearson(xs: &[f32], ys: &[f32]) -> Result<f32, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let (Some(mean_x), Some(mean_y)) = (mean(xs), mean(ys)) else {
        return Ok(0.0);
    };

    let (sum_xy, sum_x2, sum_y2) = xs.iter().zip_eq(ys).fold(
        (0.0f32, 0.0f32, 0.0f32),
        |(xy, x2, y2), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (xy + dx * dy, x2 + dx * dx, y2 + dy * dy)
        },
    );

    let denominator = sum_x2.sqrt() * sum_y2.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok(sum_xy / denominator)
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    use super::{mean, mean_absolute_deviation, pearson, sample_std_dev, total};
    use crate::error::StatsError;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn known_values() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(total(&xs), 40.0);
        assert_eq!(mean(&xs), Some(5.0));
        // population sd is 2, sample sd is sqrt(32 / 7)
        assert!(close(sample_std_dev(&xs).unwrap(), (32.0f32 / 7.0).sqrt()));
        assert_eq!(mean_absolute_deviation(&xs), Some(1.5));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(total(&[]), 0.0);
        assert_eq!(mean(&[]), None);
        assert_eq!(mean_absolute_deviation(&[]), None);
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[3.0]), None);
        assert_eq!(sample_std_dev(&[3.0, 3.0]), Some(0.0));
    }

    #[test]
    fn correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!(close(pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap(), 1.0));
        assert!(close(pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap(), -1.0));
        assert!(close(pearson(&xs, &[1.0, 3.0, 2.0, 4.0]).unwrap(), 0.8));
        assert_eq!(pearson(&xs, &[5.0, 5.0, 5.0, 5.0]), Ok(0.0));
        assert_eq!(pearson(&[], &[]), Ok(0.0));
        assert_eq!(
            pearson(&xs, &[1.0]),
            Err(StatsError::LengthMismatch { left: 4, right: 1 })
        );
    }

    #[test]
    fn sampled_normal_recovers_parameters() {
        let mut rng = StdRng::seed_from_u64(7);
        let normal = Normal::new(20.0f32, 3.0).unwrap();
        let samples: Vec<f32> = normal.sample_iter(&mut rng).take(20_000).collect();

        assert!((mean(&samples).unwrap() - 20.0).abs() < 0.1);
        assert!((sample_std_dev(&samples).unwrap() - 3.0).abs() < 0.1);
        // for a normal distribution MAD is sd * sqrt(2 / pi)
        let expected_mad = 3.0 * (2.0f32 / std::f32::consts::PI).sqrt();
        assert!((mean_absolute_deviation(&samples).unwrap() - expected_mad).abs() < 0.1);

        let shifted: Vec<f32> = samples.iter().map(|x| 2.0 * x + 1.0).collect();
        assert!((pearson(&samples, &shifted).unwrap() - 1.0).abs() < 1e-3);
    }
}
