use smart_leds::RGB8;

/// Color of an unlit pixel.
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Colors for the digits `'0'..='9'`, indexed by digit value.
pub const DIGIT_COLORS: [RGB8; 10] = [
    RGB8 { r: 128, g: 128, b: 128 }, // grey
    RGB8 { r: 255, g: 0, b: 0 },     // red
    RGB8 { r: 0, g: 255, b: 0 },     // green
    RGB8 { r: 255, g: 255, b: 0 },   // yellow
    RGB8 { r: 0, g: 0, b: 255 },     // blue
    RGB8 { r: 255, g: 0, b: 255 },   // magenta
    RGB8 { r: 0, g: 255, b: 255 },   // cyan
    RGB8 { r: 255, g: 255, b: 255 }, // white
    RGB8 { r: 255, g: 165, b: 0 },   // orange
    RGB8 { r: 165, g: 42, b: 42 },   // brown
];

/// Resolve a frame character to its pixel color.
///
/// Only ASCII digits light up; everything else, including the off
/// placeholder and unmapped placeholder letters, is [`BLACK`].
pub fn color_for(c: char) -> RGB8 {
    c.to_digit(10)
        .map(|digit| DIGIT_COLORS[digit as usize])
        .unwrap_or(BLACK)
}

/// Scale `color` by `brightness` in `0.0..=1.0`, for drivers without a
/// separate global brightness register.
pub fn scale(color: RGB8, brightness: f32) -> RGB8 {
    let brightness = brightness.clamp(0.0, 1.0);
    let channel = |v: u8| (f32::from(v) * brightness).round() as u8;
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}
