use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub direct: Color,  // Blue for direct calls
    pub dynamic: Color, // Pink for calls through trait objects
    pub cycle: Color,   // Cyan for the recursive chain
    pub number: Color,
    pub bar: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    direct: Color::Rgb(137, 180, 250),
    dynamic: Color::Rgb(245, 194, 231),
    cycle: Color::Rgb(148, 226, 213),
    number: Color::Rgb(250, 179, 135),
    bar: Color::Rgb(166, 227, 161),
};
