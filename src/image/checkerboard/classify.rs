use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Maximum pairwise channel difference (exclusive) for a pixel to count as gray.
pub const GRAYSCALE_TOLERANCE: u8 = 5;
/// Red channel must be strictly above this for a pixel to count as bright.
pub const BRIGHTNESS_THRESHOLD: u8 = 200;
/// Replacement written over every matched pixel.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// All three color channels lie within [`GRAYSCALE_TOLERANCE`] of each other.
#[inline]
pub fn is_grayscale(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r.abs_diff(g) < GRAYSCALE_TOLERANCE
        && g.abs_diff(b) < GRAYSCALE_TOLERANCE
        && r.abs_diff(b) < GRAYSCALE_TOLERANCE
}

/// Brightness is judged on the red channel alone.
#[inline]
pub fn is_bright(pixel: Rgba<u8>) -> bool {
    pixel[0] > BRIGHTNESS_THRESHOLD
}

/// Whether a pixel looks like part of a light, neutral checkerboard tile.
///
/// Alpha is not consulted. A white or light-gray foreground subject matches
/// just as well as the placeholder tiles do.
#[inline]
pub fn is_checkerboard(pixel: Rgba<u8>) -> bool {
    is_grayscale(pixel) && is_bright(pixel)
}

/// Map a single pixel: matched pixels become [`TRANSPARENT_WHITE`], others pass through.
#[inline]
pub fn classify(pixel: Rgba<u8>) -> Rgba<u8> {
    if is_checkerboard(pixel) {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Rewrite one raw 4-byte RGBA chunk in place. Returns whether it matched.
#[inline]
fn rewrite_chunk(chunk: &mut [u8]) -> bool {
    let pixel = Rgba([chunk[0], chunk[1], chunk[2], chunk[3]]);
    if !is_checkerboard(pixel) {
        return false;
    }
    chunk.copy_from_slice(&TRANSPARENT_WHITE.0);
    true
}

/// Apply [`classify`] to every pixel of `img` and return how many matched.
///
/// Large buffers are split across the rayon pool; each worker owns a
/// disjoint chunk so the result is identical to the sequential pass.
pub(super) fn apply_checkerboard_mask(img: &mut RgbaImage) -> usize {
    let len = img.width() as usize * img.height() as usize;
    if len >= PARALLEL_PIXEL_THRESHOLD {
        apply_parallel(img)
    } else {
        apply_sequential(img)
    }
}

fn apply_sequential(img: &mut RgbaImage) -> usize {
    img.chunks_exact_mut(4)
        .map(|chunk| usize::from(rewrite_chunk(chunk)))
        .sum()
}

fn apply_parallel(img: &mut RgbaImage) -> usize {
    img.par_chunks_exact_mut(4)
        .map(|chunk| usize::from(rewrite_chunk(chunk)))
        .sum()
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn white_and_light_gray_match() {
        assert!(is_checkerboard(Rgba([255, 255, 255, 255])));
        assert!(is_checkerboard(Rgba([204, 204, 204, 255])));
        assert!(is_checkerboard(Rgba([201, 200, 199, 255])));
    }

    #[test]
    fn dark_gray_is_not_bright() {
        let px = Rgba([150, 150, 150, 255]);
        assert!(is_grayscale(px));
        assert!(!is_bright(px));
        assert_eq!(classify(px), px);
    }

    #[test]
    fn brightness_threshold_is_exclusive() {
        assert!(!is_checkerboard(Rgba([200, 200, 200, 255])));
        assert!(is_checkerboard(Rgba([201, 201, 201, 255])));
    }

    #[test]
    fn grayscale_tolerance_is_exclusive() {
        // Every pair differs by exactly 4.
        assert!(is_grayscale(Rgba([240, 244, 242, 255])));
        // R and B differ by 5.
        assert!(!is_grayscale(Rgba([240, 242, 245, 255])));
        // R and G differ by 5.
        assert!(!is_grayscale(Rgba([245, 240, 241, 255])));
    }

    #[test]
    fn colored_pixel_passes_through() {
        let px = Rgba([10, 20, 200, 255]);
        assert_eq!(classify(px), px);
    }

    #[test]
    fn alpha_is_ignored_for_decision_and_discarded_on_match() {
        assert_eq!(classify(Rgba([230, 230, 230, 17])), TRANSPARENT_WHITE);
        let translucent = Rgba([12, 200, 90, 17]);
        assert_eq!(classify(translucent), translucent);
    }

    #[test]
    fn transparent_white_maps_to_itself() {
        assert!(is_checkerboard(TRANSPARENT_WHITE));
        assert_eq!(classify(TRANSPARENT_WHITE), TRANSPARENT_WHITE);
    }

    #[test]
    fn sequential_and_parallel_agree() {
        // Above PARALLEL_PIXEL_THRESHOLD so apply_checkerboard_mask takes the rayon path.
        let (width, height) = (256_u32, 160_u32);
        let mut rng = Lcg::new(0x5eed);
        let mut img = RgbaImage::new(width, height);
        for pixel in img.pixels_mut() {
            let base = (rng.next_u32() & 0xFF) as u8;
            let jitter = (rng.next_u32() % 8) as u8;
            *pixel = if rng.next_u32() % 2 == 0 {
                Rgba([base, base.saturating_add(jitter), base, (rng.next_u32() & 0xFF) as u8])
            } else {
                Rgba([
                    (rng.next_u32() & 0xFF) as u8,
                    (rng.next_u32() & 0xFF) as u8,
                    (rng.next_u32() & 0xFF) as u8,
                    255,
                ])
            };
        }

        let expected = img.pixels().filter(|p| is_checkerboard(**p)).count();
        let mut seq = img.clone();
        let mut par = img.clone();

        assert_eq!(apply_sequential(&mut seq), expected);
        assert_eq!(apply_checkerboard_mask(&mut par), expected);
        assert_eq!(seq, par);
    }

    struct Lcg {
        state: u64,
    }

    impl Lcg {
        fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        fn next_u32(&mut self) -> u32 {
            self.state = self
                .state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            (self.state >> 32) as u32
        }
    }
}
