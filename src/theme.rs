use iced::Color;

/// Dark palette used by every view
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
    pub hover: Color,
    pub selected: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x1a, 0x1a, 0x1a),    // #1a1a1a
            surface: Color::from_rgb8(0x25, 0x25, 0x26),       // #252526
            accent: Color::from_rgb8(0x00, 0x78, 0xd4),        // #0078d4
            text_primary: Color::from_rgb8(0xe0, 0xe0, 0xe0),  // #e0e0e0
            text_secondary: Color::from_rgb8(0xa0, 0xa0, 0xa0), // #a0a0a0
            text_muted: Color::from_rgb8(0x70, 0x70, 0x70),    // #707070
            border: Color::from_rgb8(0x3c, 0x3c, 0x3c),        // #3c3c3c
            hover: Color::from_rgb8(0x2a, 0x2a, 0x2a),         // #2a2a2a
            selected: Color::from_rgb8(0x09, 0x45, 0x71),      // #094571
            success: Color::from_rgb8(0x4c, 0xaf, 0x50),       // #4caf50
            error: Color::from_rgb8(0xf4, 0x43, 0x36),         // #f44336
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Border radius for UI elements
pub const BORDER_RADIUS: f32 = 4.0;
