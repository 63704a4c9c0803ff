use image::RgbImage;

/// Scalar features of a photo that the classifier
/// bases its decision on.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ImageFeatures {
    /// Mean luma
    pub brightness  : f64,
    /// Standard deviation of luma
    pub turbidity   : f64,
    pub red_mean    : f64,
    pub green_mean  : f64,
    pub blue_mean   : f64,
    /// Fraction of sediment colored pixels
    pub brown_ratio : f64,
}

// ITU-R BT.601 weights of the grayscale conversion
const LUMA_RED: f64 = 0.299;
const LUMA_GREEN: f64 = 0.587;
const LUMA_BLUE: f64 = 0.114;

fn luma([r, g, b]: [u8; 3]) -> u8 {
    (LUMA_RED * f64::from(r) + LUMA_GREEN * f64::from(g) + LUMA_BLUE * f64::from(b)).round() as u8
}

const fn is_brown([r, g, b]: [u8; 3]) -> bool {
    r > 100 && g > 80 && b < 80
}

impl ImageFeatures {
    pub fn extract(img: &RgbImage) -> Self {
        let pixel_count = u64::from(img.width()) * u64::from(img.height());
        if pixel_count == 0 {
            return Self::default();
        }
        let n = pixel_count as f64;

        let mut channel_sums = [0u64; 3];
        let mut luma_sum = 0u64;
        let mut luma_square_sum = 0u64;
        let mut brown_count = 0u64;
        for pixel in img.pixels() {
            let rgb = pixel.0;
            for (sum, value) in channel_sums.iter_mut().zip(rgb) {
                *sum += u64::from(value);
            }
            let y = u64::from(luma(rgb));
            luma_sum += y;
            luma_square_sum += y * y;
            if is_brown(rgb) {
                brown_count += 1;
            }
        }

        let brightness = luma_sum as f64 / n;
        // Population variance, clamped against rounding below zero
        let variance = (luma_square_sum as f64 / n - brightness * brightness).max(0.0);
        let [red_sum, green_sum, blue_sum] = channel_sums;
        Self {
            brightness,
            turbidity: variance.sqrt(),
            red_mean: red_sum as f64 / n,
            green_mean: green_sum as f64 / n,
            blue_mean: blue_sum as f64 / n,
            brown_ratio: brown_count as f64 / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::photo::tests::uniform_image;
    use image::Rgb;

    #[test]
    fn single_pixel_image() {
        let features = ImageFeatures::extract(&uniform_image(1, 1, [120, 90, 40]));
        assert_eq!(120.0, features.red_mean);
        assert_eq!(90.0, features.green_mean);
        assert_eq!(40.0, features.blue_mean);
        assert_eq!(1.0, features.brown_ratio);
        assert_eq!(0.0, features.turbidity);
        // 0.299 * 120 + 0.587 * 90 + 0.114 * 40 = 93.27
        assert_eq!(93.0, features.brightness);
    }

    #[test]
    fn uniform_image_has_no_turbidity() {
        let features = ImageFeatures::extract(&uniform_image(7, 3, [30, 60, 200]));
        assert_eq!(0.0, features.turbidity);
        assert_eq!(0.0, features.brown_ratio);
        assert_eq!(200.0, features.blue_mean);
    }

    #[test]
    fn black_and_white_halves() {
        let mut img = uniform_image(2, 1, [0, 0, 0]);
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        let features = ImageFeatures::extract(&img);
        assert_eq!(127.5, features.brightness);
        assert_eq!(127.5, features.turbidity);
        assert_eq!(127.5, features.red_mean);
        assert_eq!(0.0, features.brown_ratio);
    }

    #[test]
    fn brown_ratio_counts_sediment_pixels() {
        let mut img = uniform_image(4, 1, [50, 50, 200]);
        img.put_pixel(0, 0, Rgb([150, 100, 50]));
        // Boundary values do not count as brown
        img.put_pixel(1, 0, Rgb([100, 100, 50]));
        img.put_pixel(2, 0, Rgb([150, 100, 80]));
        let features = ImageFeatures::extract(&img);
        assert_eq!(0.25, features.brown_ratio);
    }

    #[test]
    fn arbitrary_aspect_ratios() {
        for (w, h) in [(1, 100), (100, 1), (13, 17)] {
            let features = ImageFeatures::extract(&uniform_image(w, h, [1, 2, 3]));
            assert_eq!(1.0, features.red_mean);
        }
    }
}
