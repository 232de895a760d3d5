use std::fmt::Write as _;

/// An RGB color used to tag chat-line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Attacker role color, also used for negative point deltas.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Defender role color.
    pub const LIGHT_BLUE: Self = Self::new(173, 216, 230);
    /// Collector role color.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Healer role color, also used for positive point deltas.
    pub const DARK_GREEN: Self = Self::new(0, 100, 0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Builds a host chat line out of plain and colored segments.
///
/// Colored segments use the host's inline markup, `<col=rrggbb>text</col>`
/// with lowercase hex channels. The builder never emits markup for plain
/// segments, so a line built without colors is a plain string.
#[derive(Debug, Clone, Default)]
pub struct LineBuilder {
    line: String,
}

impl LineBuilder {
    /// Creates an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain segment.
    pub fn append(&mut self, segment: &str) -> &mut Self {
        self.line.push_str(segment);
        self
    }

    /// Appends a segment wrapped in the host's color markup.
    pub fn append_colored(&mut self, color: Color, segment: &str) -> &mut Self {
        // write! to a String cannot fail
        let _ = write!(
            self.line,
            "<col={:02x}{:02x}{:02x}>{segment}</col>",
            color.r, color.g, color.b
        );
        self
    }

    /// Consumes the builder and returns the finished line.
    #[must_use]
    pub fn build(self) -> String {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segments_concatenate() {
        let mut line = LineBuilder::new();
        line.append("Eggs: ").append("10");
        assert_eq!(line.build(), "Eggs: 10");
    }

    #[test]
    fn test_colored_segment_markup() {
        let mut line = LineBuilder::new();
        line.append("Healer: ").append_colored(Color::DARK_GREEN, "74");
        assert_eq!(line.build(), "Healer: <col=006400>74</col>");
    }

    #[test]
    fn test_color_channels_render_lowercase_hex() {
        let mut line = LineBuilder::new();
        line.append_colored(Color::LIGHT_BLUE, "x");
        assert_eq!(line.build(), "<col=add8e6>x</col>");
    }
}
