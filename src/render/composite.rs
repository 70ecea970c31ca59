use crate::{
    chart::options::BlendMode,
    foundation::{
        error::{ChartResult, DataClockError},
        math::mul_unorm8,
    },
};

pub type PremulRgba8 = [u8; 4];

/// Composite premultiplied `src` onto `dst`.
///
/// Both modes add the source to a scaled destination and saturate: `Normal` keeps
/// `1 - src.a` of the destination (source-over), `Add` keeps all of it.
pub fn blend(dst: PremulRgba8, src: PremulRgba8, mode: BlendMode) -> PremulRgba8 {
    let keep = match mode {
        BlendMode::Normal => 255 - src[3],
        BlendMode::Add => 255,
    };
    std::array::from_fn(|c| src[c].saturating_add(mul_unorm8(dst[c], keep)))
}

/// Composite a whole premultiplied layer onto `dst`, pixel by pixel.
pub fn composite_layer(dst: &mut [u8], src: &[u8], mode: BlendMode) -> ChartResult<()> {
    if dst.len() != src.len() {
        return Err(DataClockError::length_mismatch(
            "layers must cover the same pixels",
            dst.len(),
            src.len(),
        ));
    }
    if dst.len() % 4 != 0 {
        return Err(DataClockError::validation("layer is not a whole number of RGBA8 pixels"));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let under = [d[0], d[1], d[2], d[3]];
        d.copy_from_slice(&blend(under, [s[0], s[1], s[2], s[3]], mode));
    }
    Ok(())
}

/// Straight-alpha colour of one premultiplied pixel. Fully transparent pixels become
/// transparent black.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let alpha = u32::from(px[3]);
    if alpha == 0 {
        return [0; 4];
    }
    let straight = |c: u8| ((u32::from(c) * 255 + alpha / 2) / alpha).min(255) as u8;
    [straight(px[0]), straight(px[1]), straight(px[2]), px[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
