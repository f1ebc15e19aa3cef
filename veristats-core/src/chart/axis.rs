/// Round a data maximum up to a visually clean axis ceiling.
///
/// Returns the nearest multiple of the input's leading order of magnitude
/// at or above the input: `734 -> 800`, `12 -> 20`, `5 -> 5`.
///
/// `0 -> 0` by convention (an empty chart has no natural ceiling; renderers
/// pick their own floor for an empty axis). Integer arithmetic throughout,
/// so no floating-point domain error or NaN can enter the computation.
/// Saturates at `u64::MAX` for inputs above `10^19`.
#[must_use]
pub fn rounded_ceiling(data_max: u64) -> u64 {
    if data_max == 0 {
        return 0;
    }
    let magnitude = 10u64.pow(data_max.ilog10());
    data_max.div_ceil(magnitude).saturating_mul(magnitude)
}
