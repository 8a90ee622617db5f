use std::fmt::Debug;
use num_traits::Zero;


/// Edge and path cost used by the search algorithms
/// Integers saturate at their maximum instead of overflowing, so a heuristic of `u32::MAX`
/// for a dead end only pushes that node to the back of the open list
pub trait PathCost: Zero + PartialOrd + Copy + Debug {
    /// `self + other`, clamped to the largest representable cost
    fn add_cost(self, other: Self) -> Self;
}

// Integer costs clamp on overflow
macro_rules! impl_saturating_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                fn add_cost(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

// Floats already go to infinity on overflow
macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                fn add_cost(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_saturating_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_cost!(f32, f64);
