use std::ops::{Add, Mul};

/// A 128-bit register of four lanes, as used by the 4-wide kernels.
///
/// Arithmetic goes through the `Add` and `Mul` operators; the kernels never
/// ask for a fused multiply-add so that each lane rounds exactly like the
/// portable reference code.
pub trait SimdVec<T>: Copy + Add<Output = Self> + Mul<Output = Self> {
    const LANES: usize;

    /// Broadcasts `value` to every lane.
    ///
    /// # Safety
    ///
    /// The running processor must support the instruction set behind `Self`.
    unsafe fn splat(value: T) -> Self;

    /// Loads `LANES` values; `ptr` need not be aligned.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `LANES` consecutive values.
    unsafe fn load(ptr: *const T) -> Self;

    /// Stores every lane; `ptr` need not be aligned.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `LANES` consecutive values.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Horizontal sum `((l0 + l1) + l2) + l3`.
    ///
    /// # Safety
    ///
    /// The running processor must support the instruction set behind `Self`.
    unsafe fn sum_in_order(&self) -> T;
}
