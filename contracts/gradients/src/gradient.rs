use crate::color::Color;

/// Derives the 24-bit deduplication fingerprint of an ordered color pair.
///
/// Each of the six channel bytes keeps only its high nibble, so every
/// channel is bucketed into one of sixteen 16-value bands. The six nibbles
/// are packed big-endian with `color_a` first; pairs that only differ by
/// small per-channel perturbations land in the same buckets and collide.
///
/// The fingerprint is ordered: swapping the two colors produces a
/// different value.
pub fn fingerprint(color_a: Color, color_b: Color) -> u32 {
    (quantize(color_a) << 12) | quantize(color_b)
}

/// Compresses a 24-bit color into three 4-bit channel buckets.
fn quantize(color: Color) -> u32 {
    let r = (color >> 20) & 0xF;
    let g = (color >> 12) & 0xF;
    let b = (color >> 4) & 0xF;

    (r << 8) | (g << 4) | b
}
