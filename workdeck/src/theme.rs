use iced::theme::Palette;
use iced::{Color, Theme};

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub foreground: String,
    pub background: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub bright_black: String,
    pub dim_black: String,
    pub dim_white: String,
    pub dim_foreground: String,
    pub overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            bright_black: String::from("#4F5666"),
            // DIM COLORS
            dim_black: String::from("#0F1115"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#232530"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IcedColorPalette {
    pub foreground: Color,
    pub background: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub bright_black: Color,
    pub dim_black: Color,
    pub dim_white: Color,
    pub dim_foreground: Color,
    pub overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            bright_black: parse_hex_color(&p.bright_black),
            dim_black: parse_hex_color(&p.dim_black),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse a hex color, falling back to black for malformed input.
fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or(Color::BLACK)
}

/// Global application theme.
#[derive(Debug, Clone)]
pub struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();
        let iced_palette = IcedColorPalette::from(&raw_palette);

        Self {
            id: String::from("default"),
            iced_palette,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub struct ThemeProps<'a> {
    pub theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current global theme.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub fn current(&self) -> &AppTheme {
        &self.current
    }

    pub fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_hex_with_hash_when_parsed_then_channels_match() {
        let color = parse_hex_color("#4FA6ED");

        assert_eq!(color, Color::from_rgb8(0x4F, 0xA6, 0xED));
    }

    #[test]
    fn given_short_hex_without_hash_when_parsed_then_channels_expand() {
        assert_eq!(parse_hex_color("fff"), Color::WHITE);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_falls_back_to_black() {
        assert_eq!(parse_hex_color("#12345"), Color::BLACK);
        assert_eq!(parse_hex_color("#GGGGGG"), Color::BLACK);
        assert_eq!(parse_hex_color(""), Color::BLACK);
    }

    #[test]
    fn given_default_palette_when_converted_then_every_entry_is_parsed() {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(palette.background, Color::from_rgb8(0x16, 0x18, 0x22));
        assert_eq!(palette.red, Color::from_rgb8(0xE0, 0x6C, 0x75));
        assert_ne!(palette.dim_black, Color::BLACK);
    }
}
