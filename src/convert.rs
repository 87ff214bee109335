use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

// Integer to float conversions for uniform variates.
//
// An integer of width W is mapped to an odd multiple of 2^-(W+1) (unsigned)
// or 2^-W (signed), so the result is never exactly zero. Let M be the number
// of significand bits of the float type. When W > M the extreme inputs round
// to exactly 1.0 (and -1.0); when W <= M every result lies strictly inside.

/// Fixed-width integer usable as a source of uniform bits.
/// The scale constants are evaluated at compile time, one set per
/// (float, integer width) pair.
pub trait Bits: Copy {
    /// Width W in bits.
    const BITS: u32;
    /// 2^-W.
    const SCALE_F32: f32;
    /// 2^-W.
    const SCALE_F64: f64;
    /// 2^-(W+1).
    const HALF_SCALE_F32: f32;
    /// 2^-(W+1).
    const HALF_SCALE_F64: f64;
    /// 2^-(W-1).
    const SIGNED_SCALE_F32: f32;
    /// 2^-(W-1).
    const SIGNED_SCALE_F64: f64;
    /// 2^-W.
    const SIGNED_HALF_SCALE_F32: f32;
    /// 2^-W.
    const SIGNED_HALF_SCALE_F64: f64;

    /// Bit pattern read as an unsigned integer, rounded to f32.
    fn unsigned_f32(self) -> f32;
    /// Bit pattern read as an unsigned integer, rounded to f64.
    fn unsigned_f64(self) -> f64;
    /// Bit pattern read as a two's complement integer, rounded to f32.
    fn signed_f32(self) -> f32;
    /// Bit pattern read as a two's complement integer, rounded to f64.
    fn signed_f64(self) -> f64;
}

macro_rules! impl_bits {
    (@impl $t:ty, $u:ty, $s:ty) => {
        impl Bits for $t {
            const BITS: u32 = <$u>::BITS;
            const SCALE_F32: f32 = 1.0 / (1u128 << <$u>::BITS) as f32;
            const SCALE_F64: f64 = 1.0 / (1u128 << <$u>::BITS) as f64;
            const HALF_SCALE_F32: f32 = 0.5 * Self::SCALE_F32;
            const HALF_SCALE_F64: f64 = 0.5 * Self::SCALE_F64;
            const SIGNED_SCALE_F32: f32 = 1.0 / (1u128 << (<$u>::BITS - 1)) as f32;
            const SIGNED_SCALE_F64: f64 = 1.0 / (1u128 << (<$u>::BITS - 1)) as f64;
            const SIGNED_HALF_SCALE_F32: f32 = 0.5 * Self::SIGNED_SCALE_F32;
            const SIGNED_HALF_SCALE_F64: f64 = 0.5 * Self::SIGNED_SCALE_F64;

            #[inline] fn unsigned_f32(self) -> f32 {
                self as $u as f32
            }

            #[inline] fn unsigned_f64(self) -> f64 {
                self as $u as f64
            }

            #[inline] fn signed_f32(self) -> f32 {
                self as $s as f32
            }

            #[inline] fn signed_f64(self) -> f64 {
                self as $s as f64
            }
        }
    };
    ($u:ty, $s:ty) => {
        impl_bits!(@impl $u, $u, $s);
        impl_bits!(@impl $s, $u, $s);
    };
}

impl_bits!(u8, i8);
impl_bits!(u16, i16);
impl_bits!(u32, i32);
impl_bits!(u64, i64);

/// Rounds a product to nominal width before it takes part in an addition.
/// Rust never fuses a multiply and an add on its own and evaluates at
/// nominal width everywhere except on x87-only targets, where the value
/// has to make a trip through memory.
#[cfg(all(target_arch = "x86", not(target_feature = "sse2")))]
#[inline(always)]
fn nominal<T: Copy>(x: T) -> T {
    // SAFETY: `x` is a live, aligned local.
    unsafe { core::ptr::read_volatile(&x) }
}

#[cfg(not(all(target_arch = "x86", not(target_feature = "sse2"))))]
#[inline(always)]
fn nominal<T: Copy>(x: T) -> T {
    x
}

/// Floating point type that uniform variates are produced in.
pub trait Real: Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> {
    /// Maps a W-bit pattern to (0, 1]. See [`uniform01`].
    fn uniform01<I: Bits>(x: I) -> Self;
    /// Maps a W-bit pattern to [-1, 1]. See [`uniform11`].
    fn uniform11<I: Bits>(x: I) -> Self;
}

impl Real for f32 {
    #[inline] fn uniform01<I: Bits>(x: I) -> f32 {
        nominal(x.unsigned_f32() * I::SCALE_F32) + I::HALF_SCALE_F32
    }

    #[inline] fn uniform11<I: Bits>(x: I) -> f32 {
        nominal(x.signed_f32() * I::SIGNED_SCALE_F32) + I::SIGNED_HALF_SCALE_F32
    }
}

impl Real for f64 {
    #[inline] fn uniform01<I: Bits>(x: I) -> f64 {
        nominal(x.unsigned_f64() * I::SCALE_F64) + I::HALF_SCALE_F64
    }

    #[inline] fn uniform11<I: Bits>(x: I) -> f64 {
        nominal(x.signed_f64() * I::SIGNED_SCALE_F64) + I::SIGNED_HALF_SCALE_F64
    }
}

/// Converts a W-bit integer, read as unsigned, to a uniform float:
/// `x * 2^-W + 2^-(W+1)`.
///
/// If `x` is uniformly distributed then so is the result, in (0, 1].
/// The result is never 0.0; the smallest value returned is 2^-(W+1).
/// If W exceeds the significand width of `F` the largest value returned is 1.0,
/// otherwise it is the largest `F` below 1.0.
#[inline]
pub fn uniform01<F: Real, I: Bits>(x: I) -> F {
    F::uniform01(x)
}

/// Converts a W-bit integer, read as two's complement, to a uniform float:
/// `x * 2^-(W-1) + 2^-W`.
///
/// If `x` is uniformly distributed then so is the result, in [-1, 1].
/// The result is never 0.0; the smallest absolute value returned is 2^-W.
/// If W exceeds the significand width of `F` the extremes are -1.0 and 1.0,
/// otherwise they are the nearest values of `F` strictly inside.
#[inline]
pub fn uniform11<F: Real, I: Bits>(x: I) -> F {
    F::uniform11(x)
}

#[cfg(test)] mod tests {
    use super::*;

    fn pow2(e: i32) -> f64 {
        f64::from_bits(((1023 + e) as u64) << 52)
    }

    fn pow2f(e: i32) -> f32 {
        f32::from_bits(((127 + e) as u32) << 23)
    }

    #[test] fn constants() {
        assert_eq!(u32::SCALE_F64, 1.0 / 4294967296.0);
        assert_eq!(u32::HALF_SCALE_F64, 1.0 / 8589934592.0);
        assert_eq!(i32::SIGNED_SCALE_F64, 1.0 / 2147483648.0);
        assert_eq!(i32::SIGNED_HALF_SCALE_F64, 1.0 / 4294967296.0);
        assert_eq!(u64::SCALE_F32, 1.0 / 18446744073709551616.0);
        assert_eq!(<i8 as Bits>::BITS, 8);
        assert_eq!(i8::SCALE_F32, 1.0 / 256.0);
    }

    #[test] fn unsigned_extremes() {
        // W > M: the top rounds up to exactly 1.
        assert_eq!(uniform01::<f64, u64>(0), pow2(-65));
        assert_eq!(uniform01::<f64, u64>(u64::MAX), 1.0);
        assert_eq!(uniform01::<f32, u32>(u32::MAX), 1.0);
        assert_eq!(uniform01::<f32, u64>(u64::MAX), 1.0);
        assert_eq!(uniform01::<f32, u32>(0), pow2f(-33));

        // W <= M: the top stays below 1.
        assert_eq!(uniform01::<f64, u32>(0), pow2(-33));
        assert_eq!(uniform01::<f64, u32>(u32::MAX), 1.0 - pow2(-33));
        assert_eq!(uniform01::<f32, u16>(u16::MAX), 1.0 - pow2f(-17));
        assert!(uniform01::<f32, u16>(u16::MAX) < 1.0);
        assert!(uniform01::<f64, u32>(u32::MAX) < 1.0);
    }

    #[test] fn signed_input_is_reinterpreted() {
        assert_eq!(uniform01::<f64, i32>(-1), uniform01::<f64, u32>(u32::MAX));
        assert_eq!(uniform01::<f64, i64>(i64::MIN), uniform01::<f64, u64>(1 << 63));
        assert_eq!(uniform11::<f64, u32>(u32::MAX), uniform11::<f64, i32>(-1));
    }

    #[test] fn signed_extremes() {
        assert_eq!(uniform11::<f64, i32>(0), pow2(-32));
        assert_eq!(uniform11::<f64, i32>(-1), -pow2(-32));
        assert_eq!(uniform11::<f64, i32>(i32::MIN), -1.0 + pow2(-32));
        assert_eq!(uniform11::<f64, i32>(i32::MAX), 1.0 - pow2(-32));

        assert_eq!(uniform11::<f64, i64>(i64::MIN), -1.0);
        assert_eq!(uniform11::<f64, i64>(i64::MAX), 1.0);
        assert_eq!(uniform11::<f32, i32>(i32::MIN), -1.0);
        assert_eq!(uniform11::<f32, i32>(i32::MAX), 1.0);
    }

    #[test] fn eight_bits_exhaustive() {
        let mut previous = 0.0f32;
        for x in 0 ..= u8::MAX {
            let u = uniform01::<f32, u8>(x);
            assert!(u > previous && u < 1.0);
            previous = u;
        }
        let mut previous = -1.0f32;
        for x in i8::MIN ..= i8::MAX {
            let u = uniform11::<f32, i8>(x);
            assert!(u > previous && u < 1.0 && u != 0.0);
            previous = u;
        }
    }

    #[test] fn never_zero() {
        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff); r };

        for _ in 0 .. 1 << 16 {
            let x = rnd();
            // Small magnitudes are where a zero could sneak in.
            let small = x >> (x & 63);

            for &v in &[x, small] {
                let u = uniform01::<f64, u64>(v);
                assert!(u > 0.0 && u <= 1.0);
                let u = uniform01::<f32, u64>(v);
                assert!(u > 0.0 && u <= 1.0);
                let u = uniform01::<f64, u32>(v as u32);
                assert!(u > 0.0 && u < 1.0);
                let u = uniform01::<f32, u16>(v as u16);
                assert!(u > 0.0 && u < 1.0);

                let s = uniform11::<f64, u64>(v);
                assert!(s != 0.0 && (-1.0 ..= 1.0).contains(&s));
                let s = uniform11::<f32, i64>(v as i64);
                assert!(s != 0.0 && (-1.0 ..= 1.0).contains(&s));
                let s = uniform11::<f64, i32>(v as i32);
                assert!(s != 0.0 && s > -1.0 && s < 1.0);
            }
        }
    }
}
