/// argmax returns the index of the maximum value in the array x. If several entries share the
/// maximum, the first one wins. Panics on an empty slice.
pub fn argmax<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> usize {
    let mut idx_max = 0;
    let mut val_max = x[0];

    for (i, &val) in x.iter().enumerate().skip(1) {
        if val > val_max {
            val_max = val;
            idx_max = i;
        }
    }

    idx_max
}

/// argmin returns the index of the minimum value in the array x (first one on ties).
pub fn argmin<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> usize {
    let mut idx_min = 0;
    let mut val_min = x[0];

    for (i, &val) in x.iter().enumerate().skip(1) {
        if val < val_min {
            val_min = val;
            idx_min = i;
        }
    }

    idx_min
}

/// lerp linearly interpolates between a and b, t = 0 returns a and t = 1 returns b.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[5u32]), 0);
    }

    #[test]
    fn argmin_finds_smallest() {
        assert_eq!(argmin(&[4.5, 2.0, 7.1, 2.0]), 1);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_relative_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }
}
