//! Elementwise evaluation
//!
//! When the `parallel` feature is enabled, evaluation runs on rayon's
//! thread pool. Output order is preserved either way, so a pure `f` gives
//! identical results in both builds.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `f` at every `x` in `xs`.
///
/// `f` should be pure: with the `parallel` feature, elements are evaluated
/// concurrently and in no particular order.
pub fn map_each<F>(f: F, xs: &[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    #[cfg(feature = "parallel")]
    let ys: Vec<f64> = xs.par_iter().map(|&x| f(x)).collect();

    #[cfg(not(feature = "parallel"))]
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

    ys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_each_values() {
        let ys = map_each(|x| x * x, &[1.0, -2.0, 3.0]);
        assert_eq!(ys, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_map_each_empty() {
        assert!(map_each(f64::sqrt, &[]).is_empty());
    }

    #[test]
    fn test_map_each_is_repeatable() {
        let xs: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.001).collect();
        let f = |x: f64| (x * 3.0).sin() * x.exp();
        let first = map_each(f, &xs);
        let second = map_each(f, &xs);
        assert_eq!(first.len(), xs.len());
        assert_eq!(first, second);
    }
}
