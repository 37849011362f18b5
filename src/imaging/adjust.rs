//! Brightness adjustment on decoded images.
//!
//! The shift is a percentage of full scale: 0.1% is 0.255 levels for 8-bit
//! samples and 65.535 levels for 16-bit samples. Integer samples cannot move
//! by a fraction, so the remainder is carried from pixel to pixel per colour
//! channel in row-major order. Each channel rounds away from zero first, so the
//! first sample of every channel moves even in a one-pixel image; later samples
//! pay that back. The mean shift over the image is exact, and no single sample
//! moves by more than the rounded-up level delta.
//!
//! Alpha channels are never touched.

use image::DynamicImage;

/// Integer sample types the shift operates on.
trait Level: Copy {
    const MAX: f32;
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl Level for u8 {
    const MAX: f32 = u8::MAX as f32;
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
    fn from_f32(value: f32) -> Self {
        value as u8
    }
}

impl Level for u16 {
    const MAX: f32 = u16::MAX as f32;
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
    fn from_f32(value: f32) -> Self {
        value as u16
    }
}

/// Interleaved sample layout: total channels per pixel and how many of them
/// carry colour (the rest is a trailing alpha channel).
#[derive(Debug, Clone, Copy)]
struct Layout {
    channels: usize,
    color: usize,
}

impl Layout {
    fn of(img: &DynamicImage) -> Self {
        let color = img.color();
        let channels = usize::from(color.channel_count());
        let alpha = usize::from(color.has_alpha());
        Self {
            channels,
            color: channels - alpha,
        }
    }
}

/// Shift every colour sample of `img` by `percent` of full scale.
///
/// Positive values brighten, negative values darken. Samples saturate at the
/// ends of their range.
pub fn adjust_brightness(img: &mut DynamicImage, percent: f32) {
    let layout = Layout::of(img);
    match img {
        DynamicImage::ImageLuma8(buf) => shift_levels::<u8>(buf, layout, percent),
        DynamicImage::ImageLumaA8(buf) => shift_levels::<u8>(buf, layout, percent),
        DynamicImage::ImageRgb8(buf) => shift_levels::<u8>(buf, layout, percent),
        DynamicImage::ImageRgba8(buf) => shift_levels::<u8>(buf, layout, percent),
        DynamicImage::ImageLuma16(buf) => shift_levels::<u16>(buf, layout, percent),
        DynamicImage::ImageLumaA16(buf) => shift_levels::<u16>(buf, layout, percent),
        DynamicImage::ImageRgb16(buf) => shift_levels::<u16>(buf, layout, percent),
        DynamicImage::ImageRgba16(buf) => shift_levels::<u16>(buf, layout, percent),
        DynamicImage::ImageRgb32F(buf) => shift_float(buf, layout, percent),
        DynamicImage::ImageRgba32F(buf) => shift_float(buf, layout, percent),
        other => {
            tracing::debug!(color = ?other.color(), "no brightness shift for color type");
        }
    }
}

fn shift_levels<S: Level>(samples: &mut [S], layout: Layout, percent: f32) {
    let delta = S::MAX * percent / 100.0;
    let round: fn(f32) -> f32 = if delta >= 0.0 { f32::ceil } else { f32::floor };
    let mut carry = vec![0.0f32; layout.color];

    for pixel in samples.chunks_exact_mut(layout.channels) {
        for (sample, carry) in pixel[..layout.color].iter_mut().zip(carry.iter_mut()) {
            *carry += delta;
            let whole = round(*carry);
            *carry -= whole;
            *sample = S::from_f32((sample.to_f32() + whole).clamp(0.0, S::MAX));
        }
    }
}

fn shift_float(samples: &mut [f32], layout: Layout, percent: f32) {
    let delta = percent / 100.0;
    for pixel in samples.chunks_exact_mut(layout.channels) {
        for sample in &mut pixel[..layout.color] {
            *sample = (*sample + delta).clamp(0.0, 1.0);
        }
    }
}
