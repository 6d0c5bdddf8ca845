use lumen_canvas::Canvas;
use lumen_math::Color;

/// Paint the pixel nearest to `(x, y)`. Returns `false`, painting nothing,
/// when that pixel is off the canvas.
pub fn plot(canvas: &mut Canvas, x: f64, y: f64, color: Color) -> bool {
    let (x, y) = (x.round(), y.round());
    if !(x >= 0.0 && y >= 0.0) {
        return false;
    }
    canvas.write_pixel(x as usize, y as usize, color).is_ok()
}
