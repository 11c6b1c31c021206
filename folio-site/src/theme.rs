use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Black background, white primary actions, sky-blue headings.
#[derive(Debug, Clone, Copy)]
pub struct FolioTheme;

impl FolioTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const SURFACE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.05);
    pub const SURFACE_HOVER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.10);
    pub const BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.12);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.82, 0.84, 0.86); // gray-300
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.61, 0.64, 0.69); // gray-400

    pub const ACCENT: Color = Color::from_rgb(0.22, 0.74, 0.97); // sky-400
    pub const EMERALD: Color = Color::from_rgb(0.20, 0.83, 0.60);
    pub const ORANGE: Color = Color::from_rgb(0.98, 0.57, 0.24);
    pub const ERROR: Color = Color::from_rgb(0.97, 0.44, 0.44);
    pub const SUCCESS: Color = Color::from_rgb(0.20, 0.83, 0.60);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Folio Dark".to_string(), palette)
    }
}

fn glass(radius: f32) -> container::Style {
    container::Style {
        text_color: Some(FolioTheme::TEXT_PRIMARY),
        background: Some(Background::Color(FolioTheme::SURFACE)),
        border: Border {
            color: FolioTheme::BORDER,
            width: 1.0,
            radius: radius.into(),
        },
        shadow: Shadow::default(),
    }
}

fn tinted(color: Color) -> container::Style {
    container::Style {
        text_color: Some(FolioTheme::TEXT_PRIMARY),
        background: Some(Background::Color(Color { a: 0.10, ..color })),
        border: Border {
            color: Color { a: 0.30, ..color },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Header,
    Card,
    ActiveCard,
    Chip,
    Badge,
    Stat(Color),
    Notice,
    /// White tile behind a skill glyph.
    Glyph,
}

impl Container {
    pub fn style(self) -> impl Fn(&Theme) -> container::Style {
        move |_| match self {
            Container::Header => container::Style {
                text_color: Some(FolioTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.85))),
                border: Border {
                    color: FolioTheme::BORDER,
                    width: 0.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Card => glass(12.0),
            Container::ActiveCard => container::Style {
                shadow: Shadow {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.10),
                    offset: Vector::new(0.0, 8.0),
                    blur_radius: 24.0,
                },
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.30),
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..glass(12.0)
            },
            Container::Chip => glass(999.0),
            Container::Badge => container::Style {
                background: Some(Background::Color(FolioTheme::SURFACE_HOVER)),
                ..glass(999.0)
            },
            Container::Stat(color) => tinted(color),
            Container::Notice => tinted(FolioTheme::SUCCESS),
            Container::Glyph => container::Style {
                text_color: Some(Color::BLACK),
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: Color::WHITE,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// White fill, black label.
    Primary,
    /// Glass fill, white label.
    Secondary,
    Tab { active: bool },
    Nav { active: bool },
    Card,
    Link,
}

impl Button {
    pub fn style(self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |_, status| {
            let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            let disabled = matches!(status, button::Status::Disabled);
            let radius = match self {
                Button::Card => 12.0,
                Button::Nav { .. } | Button::Link => 4.0,
                _ => 8.0,
            };

            let (background, text_color, border_color) = match self {
                Button::Primary | Button::Tab { active: true } => (
                    if hovered {
                        Color::from_rgb(0.90, 0.91, 0.92)
                    } else {
                        Color::WHITE
                    },
                    Color::BLACK,
                    Color::TRANSPARENT,
                ),
                Button::Secondary | Button::Card => (
                    if hovered {
                        FolioTheme::SURFACE_HOVER
                    } else {
                        FolioTheme::SURFACE
                    },
                    FolioTheme::TEXT_PRIMARY,
                    FolioTheme::BORDER,
                ),
                Button::Tab { active: false } | Button::Nav { active: false } => (
                    Color::TRANSPARENT,
                    if hovered {
                        FolioTheme::TEXT_PRIMARY
                    } else {
                        FolioTheme::TEXT_SECONDARY
                    },
                    Color::TRANSPARENT,
                ),
                Button::Nav { active: true } => {
                    (Color::TRANSPARENT, FolioTheme::ACCENT, Color::TRANSPARENT)
                }
                Button::Link => (
                    Color::TRANSPARENT,
                    if hovered {
                        FolioTheme::TEXT_PRIMARY
                    } else {
                        FolioTheme::ACCENT
                    },
                    Color::TRANSPARENT,
                ),
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: if disabled {
                    FolioTheme::TEXT_DIMMED
                } else {
                    text_color
                },
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: radius.into(),
                },
                shadow: Shadow::default(),
            }
        }
    }
}

pub fn input_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);
    let focused = matches!(status, text_input::Status::Focused);
    text_input::Style {
        background: Background::Color(FolioTheme::SURFACE),
        border: Border {
            color: if focused {
                FolioTheme::ACCENT
            } else {
                FolioTheme::BORDER
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        value: FolioTheme::TEXT_PRIMARY,
        placeholder: FolioTheme::TEXT_DIMMED,
        ..base
    }
}
