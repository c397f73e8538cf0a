//! Thread colors

/// A thread color as a plain RGB triple with a free-text label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Manufacturer code, thread name or `"random"`
    pub description: String,
}

impl Color {
    /// Create a color from its channels and label
    pub fn new(r: u8, g: u8, b: u8, description: impl Into<String>) -> Self {
        Self {
            r,
            g,
            b,
            description: description.into(),
        }
    }

    /// Channels as `[r, g, b]`
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
