//! Plain-text PPM (`P3`) encoding.

use lumen_math::MAX_CHANNEL;

use crate::canvas::Canvas;

/// Longest line the encoder emits, header excluded.
pub const MAX_LINE_LENGTH: usize = 70;

/// Encode a canvas as `P3` text.
///
/// Each canvas row starts on a new line. Long rows are wrapped between
/// values so that no line exceeds [`MAX_LINE_LENGTH`]. The output always
/// ends with a newline.
pub fn encode(canvas: &Canvas) -> String {
    let mut out = format!(
        "P3\n{} {}\n{}\n",
        canvas.width(),
        canvas.height(),
        MAX_CHANNEL
    );
    if canvas.width() == 0 {
        return out;
    }

    let mut line = String::with_capacity(MAX_LINE_LENGTH);
    for row in canvas.rows() {
        for value in row.iter().flat_map(|c| c.to_rgb8()) {
            let value = value.to_string();
            if !line.is_empty() && line.len() + 1 + value.len() > MAX_LINE_LENGTH {
                out.push_str(&line);
                out.push('\n');
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&value);
        }
        out.push_str(&line);
        out.push('\n');
        line.clear();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    #[test]
    fn test_header() {
        let ppm = encode(&Canvas::new(5, 3));
        assert!(ppm.starts_with("P3\n5 3\n255\n"));
    }

    #[test]
    fn test_pixel_data_is_scaled_and_clamped() {
        let mut c = Canvas::new(5, 3);
        c.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0)).unwrap();
        c.write_pixel(2, 1, Color::new(0.0, 0.5, 0.0)).unwrap();
        c.write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0)).unwrap();
        assert_eq!(
            encode(&c),
            "P3\n5 3\n255\n\
             255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n"
        );
    }

    #[test]
    fn test_long_rows_are_split() {
        let mut c = Canvas::new(10, 2);
        c.fill(Color::new(1.0, 0.8, 0.6));
        let expected = "P3\n10 2\n255\n\
            255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
            153 255 204 153 255 204 153 255 204 153 255 204 153\n\
            255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
            153 255 204 153 255 204 153 255 204 153 255 204 153\n";
        let ppm = encode(&c);
        assert_eq!(ppm, expected);
        assert!(ppm.lines().all(|l| l.len() <= MAX_LINE_LENGTH));
    }

    #[test]
    fn test_wide_canvas_never_exceeds_line_limit() {
        let mut c = Canvas::new(57, 1);
        c.fill(Color::new(1.0, 1.0, 1.0));
        let ppm = encode(&c);
        assert!(ppm.lines().all(|l| l.len() <= MAX_LINE_LENGTH));
        let values = ppm.lines().skip(3).flat_map(str::split_whitespace).count();
        assert_eq!(values, 57 * 3);
    }

    #[test]
    fn test_ends_with_newline() {
        assert!(encode(&Canvas::new(5, 3)).ends_with('\n'));
    }

    #[test]
    fn test_empty_canvas_is_header_only() {
        assert_eq!(encode(&Canvas::new(0, 0)), "P3\n0 0\n255\n");
    }
}
