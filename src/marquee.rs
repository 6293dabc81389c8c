use std::fmt;

/// Number of pixels on the strip, and characters in every frame.
pub const FRAME_WIDTH: usize = 8;

/// Longest input that still fits the placeholder alphabet.
pub const MAX_INPUT_LEN: usize = PLACEHOLDERS.len();

/// Number of template rows: blank lead-in, full scroll, and exit.
pub const TEMPLATE_ROWS: usize = MAX_INPUT_LEN + FRAME_WIDTH;

/// Placeholder for a pixel that stays dark.
pub const OFF: char = '-';

/// Letters standing in for input positions 0..30, in order.
const PLACEHOLDERS: [char; 30] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D',
];

/// Input characters to scroll, truncated to [`MAX_INPUT_LEN`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitString(String);

impl DigitString {
    /// Keep the leftmost [`MAX_INPUT_LEN`] characters of `raw`.
    pub fn new(raw: &str) -> Self {
        let truncated: String = raw.chars().take(MAX_INPUT_LEN).collect();
        if truncated.len() < raw.len() {
            log::warn!(
                "input has {} characters, keeping the leftmost {MAX_INPUT_LEN}",
                raw.chars().count()
            );
        }
        Self(truncated)
    }

    /// Decimal form of `value`, e.g. a randomly drawn number.
    pub fn from_number(value: u64) -> Self {
        Self::new(&value.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One display snapshot: character `i` is the `i`-th pixel from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([char; FRAME_WIDTH]);

impl Frame {
    /// All pixels off.
    pub const BLANK: Self = Self([OFF; FRAME_WIDTH]);

    #[inline]
    pub const fn new(chars: [char; FRAME_WIDTH]) -> Self {
        Self(chars)
    }

    #[inline]
    pub fn chars(&self) -> &[char; FRAME_WIDTH] {
        &self.0
    }

    /// Character for display pixel `col`, counting from the right-hand end
    /// of the frame (pixel 0 shows the last character).
    #[inline]
    pub fn pixel(&self, col: usize) -> char {
        self.0[FRAME_WIDTH - 1 - col]
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&c| c == OFF)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Template row `row` of the scroll table.
///
/// Column `c` shows placeholder `row - 8 + c` while that index falls inside
/// the alphabet, otherwise [`OFF`]. Row 0 is blank, rows 1..=8 bring letters
/// in from the right, rows 9..=30 slide a full window, rows 31..=37 let the
/// tail leave on the left.
pub fn template_row(row: usize) -> Frame {
    debug_assert!(row < TEMPLATE_ROWS);
    let mut chars = [OFF; FRAME_WIDTH];
    for (col, slot) in chars.iter_mut().enumerate() {
        if let Some(index) = (row + col).checked_sub(FRAME_WIDTH) {
            if let Some(&letter) = PLACEHOLDERS.get(index) {
                *slot = letter;
            }
        }
    }
    Frame(chars)
}

/// All [`TEMPLATE_ROWS`] template rows in scroll order.
pub fn templates() -> impl Iterator<Item = Frame> {
    (0..TEMPLATE_ROWS).map(template_row)
}

/// Substitution from placeholder letters to input characters.
///
/// The `i`-th placeholder maps to the `i`-th input character. Placeholders
/// past the end of the input have no entry and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    targets: Vec<char>,
}

impl PositionMap {
    pub fn new(digits: &DigitString) -> Self {
        Self {
            targets: digits.as_str().chars().take(MAX_INPUT_LEN).collect(),
        }
    }

    /// Translate one character. Single pass: a substituted character is
    /// never looked up again.
    pub fn translate(&self, c: char) -> char {
        PLACEHOLDERS
            .iter()
            .position(|&p| p == c)
            .and_then(|index| self.targets.get(index))
            .copied()
            .unwrap_or(c)
    }

    pub fn apply(&self, frame: &Frame) -> Frame {
        Frame(frame.0.map(|c| self.translate(c)))
    }
}

/// The frames for one input, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marquee {
    frames: Vec<Frame>,
}

impl Marquee {
    /// Substitute `digits` into the template table and keep the first
    /// `min(len + 8, 38)` rows, dropping trailing blank rows.
    pub fn new(digits: &DigitString) -> Self {
        let map = PositionMap::new(digits);
        let count = frame_count(digits.len());
        let frames = templates()
            .take(count)
            .map(|row| map.apply(&row))
            .collect();
        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<'a> IntoIterator for &'a Marquee {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Frames needed to scroll `len` characters through the window.
#[inline]
pub fn frame_count(len: usize) -> usize {
    (len + FRAME_WIDTH).min(TEMPLATE_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use proptest::prelude::*;
    use test_case::test_case;

    fn frames_of(input: &str) -> Vec<String> {
        Marquee::new(&DigitString::new(input))
            .frames()
            .iter()
            .map(Frame::to_string)
            .collect()
    }

    #[test_case(0, "--------"; "blank lead in")]
    #[test_case(1, "-------a"; "first letter enters")]
    #[test_case(7, "-abcdefg"; "almost full")]
    #[test_case(8, "abcdefgh"; "window full")]
    #[test_case(9, "bcdefghi"; "first slide")]
    #[test_case(26, "stuvwxyz"; "end of lowercase")]
    #[test_case(27, "tuvwxyzA"; "uppercase enters")]
    #[test_case(30, "wxyzABCD"; "last full window")]
    #[test_case(31, "xyzABCD-"; "tail starts leaving")]
    #[test_case(36, "CD------"; "two left")]
    #[test_case(37, "D-------"; "last letter")]
    fn template_rows_match_scroll_table(row: usize, expected: &str) {
        assert_eq!(template_row(row).to_string(), expected);
    }

    #[test]
    fn template_table_has_every_row() {
        assert_eq!(templates().count(), TEMPLATE_ROWS);
        assert_eq!(TEMPLATE_ROWS, 38);
    }

    #[test]
    fn template_window_slides_one_letter_per_row() {
        for row in 9..=30 {
            let prev = template_row(row - 1).to_string();
            let next = template_row(row).to_string();
            assert_eq!(
                prev[1..],
                next[..FRAME_WIDTH - 1],
                "row {row} should shift row {} left by one",
                row - 1
            );
        }
    }

    #[test]
    fn single_digit_scrolls_in_nine_frames() {
        let frames = frames_of("5");

        assert_eq!(frames.len(), 9);
        assert_eq!(frames[0], "--------");
        assert_eq!(frames[1], "-------5");
        assert_eq!(frames[2], "------5b");
        assert_eq!(frames[8], "5bcdefgh");
    }

    #[test]
    fn unmapped_letters_stay_in_the_frame() {
        let frames = frames_of("33457");

        assert_eq!(frames.len(), 13);
        assert_eq!(frames[7], "-33457fg");
        assert_eq!(frames[8], "33457fgh");
    }

    #[test]
    fn full_length_input_uses_whole_table() {
        let input = "123456789012345678901234567890";
        let frames = frames_of(input);

        assert_eq!(frames.len(), TEMPLATE_ROWS);
        assert_eq!(frames[8], "12345678");
        assert_eq!(frames[30], "34567890");
        assert_eq!(frames[37], "0-------");
    }

    #[test]
    fn long_input_windows_are_contiguous_substrings() {
        let input = "9876543210123456789012";
        let frames = frames_of(input);

        for row in 9..frames.len().min(31) {
            let start = row - FRAME_WIDTH;
            if start + FRAME_WIDTH <= input.len() {
                assert_eq!(frames[row], input[start..start + FRAME_WIDTH]);
            }
        }
    }

    #[test]
    fn input_longer_than_alphabet_is_truncated() {
        let digits = DigitString::new("1234567890123456789012345678901234567890");

        assert_eq!(digits.len(), MAX_INPUT_LEN);
        assert_eq!(digits.as_str(), "123456789012345678901234567890");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let raw: String = "é".repeat(40);
        let digits = DigitString::new(&raw);

        assert_eq!(digits.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn empty_input_yields_dark_frames() {
        let marquee = Marquee::new(&DigitString::new(""));
        let frames = frames_of("");

        assert_eq!(marquee.len(), FRAME_WIDTH);
        assert_eq!(frames[0], "--------");
        assert_eq!(frames[1], "-------a", "unmapped letters stay in the frame");
        assert_eq!(frames[7], "-abcdefg");
        let dark = |frame: &Frame| {
            frame
                .chars()
                .iter()
                .all(|&c| palette::color_for(c) == palette::BLACK)
        };
        assert!(
            marquee.frames().iter().all(dark),
            "no frame should light a pixel"
        );
    }

    #[test]
    fn substitution_is_single_pass() {
        // 'a' -> 'b' must not be followed by 'b' -> 'a'
        let map = PositionMap::new(&DigitString::new("ba"));

        assert_eq!(map.apply(&template_row(2)).to_string(), "------ba");
    }

    #[test]
    fn off_placeholder_is_never_substituted() {
        let map = PositionMap::new(&DigitString::new("-"));

        assert_eq!(map.translate(OFF), OFF);
        assert_eq!(map.translate('a'), '-');
        assert_eq!(map.translate('b'), 'b');
    }

    #[test]
    fn pixel_reads_frame_right_to_left() {
        let frame = Frame::new(['0', '1', '2', '3', '4', '5', '6', '7']);

        assert_eq!(frame.pixel(0), '7');
        assert_eq!(frame.pixel(7), '0');
    }

    #[test]
    fn from_number_renders_decimal() {
        assert_eq!(DigitString::from_number(0).as_str(), "0");
        assert_eq!(DigitString::from_number(999_999_999).as_str(), "999999999");
    }

    proptest! {
        #[test]
        fn frame_count_follows_input_length(input in "[0-9]{1,30}") {
            let marquee = Marquee::new(&DigitString::new(&input));
            prop_assert_eq!(marquee.len(), (input.len() + FRAME_WIDTH).min(TEMPLATE_ROWS));
        }

        #[test]
        fn first_frame_is_always_blank(input in "[0-9]{1,30}") {
            let marquee = Marquee::new(&DigitString::new(&input));
            prop_assert!(marquee.frames()[0].is_blank());
        }

        #[test]
        fn reapplying_the_map_changes_nothing(input in "[0-9]{1,30}") {
            let digits = DigitString::new(&input);
            let map = PositionMap::new(&digits);
            for row in templates() {
                let once = map.apply(&row);
                prop_assert_eq!(map.apply(&once), once);
            }
        }

        #[test]
        fn characters_past_thirty_are_ignored(head in "[0-9]{30}", tail in "[0-9]{1,20}") {
            let full = format!("{head}{tail}");
            prop_assert_eq!(
                Marquee::new(&DigitString::new(&full)),
                Marquee::new(&DigitString::new(&head))
            );
        }

        #[test]
        fn every_input_character_appears_in_order(input in "[0-9]{1,30}") {
            // Pixel 0 (rightmost) shows input character `row - 1` as it enters.
            let marquee = Marquee::new(&DigitString::new(&input));
            for (i, expected) in input.chars().enumerate() {
                prop_assert_eq!(marquee.frames()[i + 1].pixel(0), expected);
            }
        }
    }
}
