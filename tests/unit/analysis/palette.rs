//! Tests for color values and palette id assignment

#[cfg(test)]
mod tests {
    use image::Rgba;
    use pixel_collapse::analysis::palette::{Color, Palette};

    // Tests palette ids follow sorted color order regardless of input order
    // Verified by removing the sort in from_colors
    #[test]
    fn test_palette_sorted_and_deduplicated() {
        let red = Color::rgba(255, 0, 0, 255);
        let blue = Color::rgba(0, 0, 255, 255);
        let palette = Palette::from_colors([red, blue, red, red]);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colors(), &[blue, red]);
        assert_eq!(palette.id_of(blue), Some(0));
        assert_eq!(palette.id_of(red), Some(1));
        assert_eq!(palette.color(1), Some(red));
    }

    // Tests lookups for colors and ids that are absent
    // Verified by returning a default id for unknown colors
    #[test]
    fn test_palette_missing_entries() {
        let palette = Palette::from_colors([Color::rgba(1, 2, 3, 4)]);
        assert_eq!(palette.id_of(Color::TRANSPARENT), None);
        assert_eq!(palette.color(5), None);
        assert!(Palette::from_colors([]).is_empty());
    }

    // Tests conversions to and from image pixels
    // Verified by reversing the channel order in From<Rgba<u8>>
    #[test]
    fn test_color_pixel_conversion() {
        let color = Color::from(Rgba([9, 8, 7, 6]));
        assert_eq!(color, Color::rgba(9, 8, 7, 6));
        assert_eq!(Rgba::from(color), Rgba([9, 8, 7, 6]));
    }

    // Tests hexadecimal display
    // Verified by dropping the alpha channel from Display
    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgba(255, 0, 16, 128).to_string(), "#ff001080");
    }
}
