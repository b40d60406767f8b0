use crate::coordinate::Dms;

/// Tolerance for comparing values that went through floating-point conversion
pub const TOLERANCE: f64 = 1e-9;

/// Asserts that two values agree within [`TOLERANCE`]
pub fn assert_close(actual: f64, expected: f64) {
    std::assert!((actual - expected).abs() <= TOLERANCE,
                 "expected {} to be within {} of {}", actual, TOLERANCE, expected);
}

/// Decimal degrees reconstructed from a DMS tuple
pub fn dms_to_decimal(dms: &Dms) -> f64 {
    let sign = if dms.hemisphere.is_negative() { -1.0 } else { 1.0 };
    sign * (dms.degrees + dms.minutes / 60.0 + dms.seconds / 3600.0)
}

/// (US-CA) Mount Diablo, Eagle Peak, locator CM97AV76UA
pub const EAGLE_PEAK: (f64, f64) = (37.901687598628186, -121.93842262029649);

/// (US-CA) Mount Diablo, Bald Knob, locator CM97AV84BJ
pub const BALD_KNOB: (f64, f64) = (37.89244968464312, -121.9255114719272);
