//! Per-pixel background and subject classification.

use image::Rgba;

use crate::imageops_cutout::pixel_mask::PixelMask;
use crate::Image;

/// 背景候補（白っぽい）ピクセルかどうかを判定する
///
/// R・G・B のすべてが `threshold` より大きい場合に `true` を返す。
/// アルファチャンネルは判定に使わない（透明ピクセルも RGB で判定される）。
///
/// # 引数
///
/// * `pixel` - 判定対象のピクセル
/// * `threshold` - チャンネルのしきい値 (0-255)
#[inline]
pub fn is_background_candidate(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let Rgba([red, green, blue, _]) = *pixel;
    red > threshold && green > threshold && blue > threshold
}

/// 被写体ピクセルかどうかを判定する
///
/// R・G・B のいずれかが `threshold` 未満の場合に `true` を返す。
/// 最小チャンネルがちょうど `threshold` のピクセルは背景候補でも被写体でもない。
#[inline]
pub fn is_subject(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let Rgba([red, green, blue, _]) = *pixel;
    red < threshold || green < threshold || blue < threshold
}

/// 画像全体をピクセル単位で分類するトレイト
pub trait ClassifyPixels {
    /// 背景候補ピクセルの集合を返す
    fn background_candidates(&self, threshold: u8) -> PixelMask;

    /// 被写体ピクセルの集合を返す
    fn subject_pixels(&self, threshold: u8) -> PixelMask;
}

impl ClassifyPixels for Image<Rgba<u8>> {
    fn background_candidates(&self, threshold: u8) -> PixelMask {
        PixelMask::from_fn(self.width(), self.height(), |x, y| {
            is_background_candidate(self.get_pixel(x, y), threshold)
        })
    }

    fn subject_pixels(&self, threshold: u8) -> PixelMask {
        PixelMask::from_fn(self.width(), self.height(), |x, y| {
            is_subject(self.get_pixel(x, y), threshold)
        })
    }
}
