use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub alive: Color,
    pub dead: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub selected_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    // Web palette (#333333 alive on #fafafa) inverted for the dark background
    alive: Color::Rgb(250, 250, 250),
    dead: Color::Rgb(51, 51, 51),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    selected_bg: Color::Rgb(69, 71, 90),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_use_inverted_web_palette() {
        assert_eq!(DEFAULT_THEME.alive, Color::Rgb(0xfa, 0xfa, 0xfa));
        assert_eq!(DEFAULT_THEME.dead, Color::Rgb(0x33, 0x33, 0x33));
    }
}
