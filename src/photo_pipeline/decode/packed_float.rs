//! Unsigned and signed small-float unpacking for GPU render target formats.

/// IEEE 754 binary16 to f32.
pub(crate) fn half_to_f32(bits: u16) -> f32 {
    let sign = if bits & 0x8000 != 0 { -1.0 } else { 1.0 };
    sign * unsigned_float_to_f32(((bits >> 10) & 0x1f) as u32, (bits & 0x3ff) as u32, 10)
}

/// 11-bit unsigned float (5-bit exponent, 6-bit mantissa).
pub(crate) fn uf11_to_f32(bits: u32) -> f32 {
    unsigned_float_to_f32((bits >> 6) & 0x1f, bits & 0x3f, 6)
}

/// 10-bit unsigned float (5-bit exponent, 5-bit mantissa).
pub(crate) fn uf10_to_f32(bits: u32) -> f32 {
    unsigned_float_to_f32((bits >> 5) & 0x1f, bits & 0x1f, 5)
}

// All three formats share the 5-bit exponent with bias 15.
fn unsigned_float_to_f32(exponent: u32, mantissa: u32, mantissa_bits: u32) -> f32 {
    let scale = (1u32 << mantissa_bits) as f32;
    match exponent {
        0 => (mantissa as f32 / scale) * 2f32.powi(-14),
        31 if mantissa == 0 => f32::INFINITY,
        31 => f32::NAN,
        e => (1.0 + mantissa as f32 / scale) * 2f32.powi(e as i32 - 15),
    }
}

/// Clamp to `[0, 1]`, scale by 255 and truncate. NaN maps to 0.
pub(crate) fn unit_float_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_known_values() {
        assert_eq!(half_to_f32(0x0000), 0.0);
        assert_eq!(half_to_f32(0x3c00), 1.0);
        assert_eq!(half_to_f32(0x3800), 0.5);
        assert_eq!(half_to_f32(0xbc00), -1.0);
        assert_eq!(half_to_f32(0x4000), 2.0);
        assert!(half_to_f32(0x7c00).is_infinite());
        assert!(half_to_f32(0x7e00).is_nan());
    }

    #[test]
    fn test_half_subnormal() {
        // smallest positive subnormal is 2^-24
        assert_eq!(half_to_f32(0x0001), 2f32.powi(-24));
    }

    #[test]
    fn test_small_floats_one() {
        // exponent 15, mantissa 0 is exactly 1.0 in both layouts
        assert_eq!(uf11_to_f32(15 << 6), 1.0);
        assert_eq!(uf10_to_f32(15 << 5), 1.0);
        assert_eq!(uf11_to_f32((14 << 6) | 32), 0.75);
        assert_eq!(uf10_to_f32((14 << 5) | 16), 0.75);
    }

    #[test]
    fn test_unit_float_to_u8_truncates_and_clamps() {
        assert_eq!(unit_float_to_u8(0.5), 127);
        assert_eq!(unit_float_to_u8(1.0), 255);
        assert_eq!(unit_float_to_u8(7.0), 255);
        assert_eq!(unit_float_to_u8(-3.0), 0);
        assert_eq!(unit_float_to_u8(f32::NAN), 0);
        assert_eq!(unit_float_to_u8(f32::INFINITY), 255);
    }
}
