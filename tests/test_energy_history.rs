//! Energy history and plot normalization tests

use approx::assert_relative_eq;
use pendsim::prelude::*;
use pendsim::try_normalize;

#[test]
fn test_overflow_keeps_capacity_in_fifo_order() {
    let capacity = 50;
    let mut history = EnergyHistory::new(capacity);

    // Zig-zag so the extremes land early and get evicted
    let samples: Vec<f64> = (0..137)
        .map(|i| {
            let i = i as f64;
            (i * 0.37).sin() * (200.0 - i)
        })
        .collect();
    for &s in &samples {
        history.push(s);
    }

    assert_eq!(history.len(), capacity);
    assert_eq!(history.snapshot(), samples[samples.len() - capacity..].to_vec());

    let true_min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let true_max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(history.min_seen(), Some(true_min));
    assert_eq!(history.max_seen(), Some(true_max));

    let window_max = history.iter().fold(f64::NEG_INFINITY, f64::max);
    assert!(window_max < true_max);
}

#[test]
fn test_range_only_widens() {
    let mut history = EnergyHistory::new(2);
    let mut last_range = None;
    for v in [3.0, 5.0, 4.0, 4.5, 1.0, 2.0, 2.0, 6.0] {
        history.push(v);
        let (lo, hi) = history.range().unwrap();
        if let Some((prev_lo, prev_hi)) = last_range {
            assert!(lo <= prev_lo);
            assert!(hi >= prev_hi);
        }
        last_range = Some((lo, hi));
    }
    assert_eq!(last_range, Some((1.0, 6.0)));
}

#[test]
fn test_normalize_is_affine() {
    let (a, b, c, d) = (-3.0, 5.0, 10.0, 290.0);
    assert_eq!(normalize(a, a, b, c, d), c);
    assert_eq!(normalize(b, a, b, c, d), d);

    // Equal increments in x give equal increments in the result
    let xs: Vec<f64> = (0..=8).map(|k| a + k as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| normalize(x, a, b, c, d)).collect();
    for w in ys.windows(2) {
        assert_relative_eq!(w[1] - w[0], 35.0, epsilon = 1e-9);
    }
}

#[test]
fn test_degenerate_normalization_is_recovered() {
    assert!(try_normalize(1.0, 2.0, 2.0, 0.0, 10.0).is_err());
    let y = normalize(1.0, 2.0, 2.0, 0.0, 10.0);
    assert!(!y.is_nan());
    assert_eq!(y, 5.0);
}

#[test]
fn test_normalized_samples_fill_plot_band() {
    let params = PendulumParameters::free(1.0, 1.0, 30.0).with_damping(0.2);
    let mut pendulum = Integrator::new(params, 0.01).unwrap();
    let mut history = EnergyHistory::new(300);

    for _ in 0..600 {
        pendulum.step();
        history.push(display_sample(pendulum.energy().total, 300.0, 50.0));
    }

    let band = history.normalized(10.0, 290.0);
    assert_eq!(band.len(), 300);
    for y in &band {
        assert!(*y >= 10.0 - 1e-9 && *y <= 290.0 + 1e-9);
    }
}

#[test]
fn test_display_sample_inverts_energy_axis() {
    // Higher energy plots closer to the top (smaller y)
    let low = display_sample(10.0, 300.0, 50.0);
    let high = display_sample(100.0, 300.0, 50.0);
    assert!(high < low);
    assert_relative_eq!(low - high, 1.8, epsilon = 1e-12);
}
