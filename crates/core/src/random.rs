//! Random number and validation helpers
//!
//! Each sampler has a `*_with` form taking any [`Rng`] so callers can seed
//! it, and a short form that uses the thread-local generator.

use std::thread;
use std::time::Duration;

use log::trace;
use rand::Rng;

use crate::constants::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use crate::error::{BuildError, GeometryViolation, Result};

fn check_range<T: PartialOrd + std::fmt::Display>(lower: T, upper: T) -> Result<()> {
    if upper > lower {
        Ok(())
    } else {
        Err(BuildError::invalid_argument(
            "upper_bound",
            format!(
                "the upper bound ({}) must be greater than the lower bound ({})",
                upper, lower
            ),
        ))
    }
}

/// Uniform integer in `[lower, upper)`
pub fn random_int_between_with<R: Rng + ?Sized>(rng: &mut R, lower: i32, upper: i32) -> Result<i32> {
    check_range(lower, upper)?;
    Ok(rng.gen_range(lower..upper))
}

/// Uniform integer in `[lower, upper)`
pub fn random_int_between(lower: i32, upper: i32) -> Result<i32> {
    random_int_between_with(&mut rand::thread_rng(), lower, upper)
}

/// Uniform integer in `[0, upper)`
pub fn random_int_below(upper: i32) -> Result<i32> {
    random_int_between(DEFAULT_LOWER_BOUND, upper)
}

/// Uniform integer in `[0, 1000)`
pub fn random_int() -> i32 {
    rand::thread_rng().gen_range(DEFAULT_LOWER_BOUND..DEFAULT_UPPER_BOUND)
}

/// Uniform integer in `[0, 1000)` that differs from `avoid`
pub fn random_int_except_with<R: Rng + ?Sized>(rng: &mut R, avoid: i32) -> i32 {
    loop {
        let candidate = rng.gen_range(DEFAULT_LOWER_BOUND..DEFAULT_UPPER_BOUND);
        if candidate != avoid {
            return candidate;
        }
    }
}

/// Uniform integer in `[0, 1000)` that differs from `avoid`
pub fn random_int_except(avoid: i32) -> i32 {
    random_int_except_with(&mut rand::thread_rng(), avoid)
}

/// Uniform float in `[lower, upper)`
pub fn random_float_with<R: Rng + ?Sized>(rng: &mut R, lower: f32, upper: f32) -> Result<f32> {
    // Rejects NaN bounds as well as empty ranges.
    if !(upper > lower) {
        return Err(BuildError::invalid_argument(
            "upper_bound",
            format!(
                "the upper bound ({}) must be greater than the lower bound ({})",
                upper, lower
            ),
        ));
    }
    Ok(rng.gen_range(lower..upper))
}

/// Uniform float in `[lower, upper)`
pub fn random_float(lower: f32, upper: f32) -> Result<f32> {
    random_float_with(&mut rand::thread_rng(), lower, upper)
}

/// Fail with `InvalidGeometry` naming the first value that is not positive
pub fn require_positive(values: &[(&'static str, i32)]) -> Result<()> {
    match values.iter().find(|(_, value)| *value <= 0) {
        Some(&(name, value)) => Err(BuildError::invalid_geometry(
            name,
            value,
            GeometryViolation::NotPositive,
        )),
        None => Ok(()),
    }
}

/// Block the current thread for `millis` milliseconds.
///
/// Never call this on the UI thread: the interface freezes while it sleeps.
pub fn pause_for_millis(millis: u64) {
    trace!("Pausing for {} ms", millis);
    thread::sleep(Duration::from_millis(millis));
}

/// Block the current thread for a random duration in `[lower, upper)` ms.
///
/// Same UI-thread caveat as [`pause_for_millis`].
pub fn pause_for_random_millis(lower: u64, upper: u64) -> Result<()> {
    check_range(lower, upper)?;
    let millis = rand::thread_rng().gen_range(lower..upper);
    pause_for_millis(millis);
    Ok(())
}
