// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Contract shared by the base accumulator and every capability layer.
///
/// A layer does its own bookkeeping in `record` and `reset` and then forwards
/// the call to the layer directly beneath it. Only the base accumulator counts
/// values, so any layer that reads `count()` before delegating observes the
/// pre-increment count.
pub trait DataLayer<V> {
    /// Incorporate one value.
    fn record(&mut self, value: &V);

    /// Clear derived state for a new epoch.
    fn reset(&mut self);

    /// Number of values recorded since the last reset.
    fn count(&self) -> usize;

    /// Values produced by the last pull that have not been recorded.
    fn pending(&self) -> &[V];

    fn pending_mut(&mut self) -> &mut Vec<V>;
}

/// Value types the range statistics layer can aggregate.
///
/// Statistics are kept as `f64`, so wide integers lose precision past 2^53.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
