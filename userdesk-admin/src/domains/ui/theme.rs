use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Dark slate theme with a green accent shared by buttons and odd rows
#[derive(Debug, Clone, Copy)]
pub struct AdminTheme;

impl AdminTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const CARD_BG: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
    pub const BORDER_COLOR: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563

    pub const ACCENT: Color = Color::from_rgb(0.0, 0.651, 0.49); // #00A67D
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.0, 0.741, 0.561);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.0, 0.541, 0.408);

    // Alternating table rows
    pub const ROW_EVEN: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const ROW_ODD: Color = Self::ACCENT;

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.82, 0.835, 0.859); // #D1D5DB
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF

    pub const ERROR: Color = Color::from_rgb(0.973, 0.443, 0.443); // #F87171
    pub const DESTRUCTIVE: Color = Color::from_rgb(0.863, 0.149, 0.149); // #DC2626
    pub const DESTRUCTIVE_HOVER: Color = Color::from_rgb(0.937, 0.267, 0.267);

    pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::ACCENT;
        palette.danger = Self::DESTRUCTIVE;

        Theme::custom("Userdesk Dark", palette)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Card,
    Header,
    RowEven,
    RowOdd,
    ErrorBox,
    Modal,
    ModalOverlay,
}

impl Container {
    /// Row style for the zero-based table position.
    pub fn row(index: usize) -> Self {
        if index % 2 == 0 {
            Container::RowEven
        } else {
            Container::RowOdd
        }
    }

    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(AdminTheme::TEXT_PRIMARY),
                background: Some(Background::Color(AdminTheme::CARD_BG)),
                border: Border {
                    color: AdminTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Header => |_| container::Style {
                text_color: Some(AdminTheme::TEXT_SECONDARY),
                background: Some(Background::Color(AdminTheme::BACKGROUND)),
                border: Border {
                    color: AdminTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::RowEven => |_| container::Style {
                text_color: Some(AdminTheme::TEXT_PRIMARY),
                background: Some(Background::Color(AdminTheme::ROW_EVEN)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::RowOdd => |_| container::Style {
                text_color: Some(AdminTheme::TEXT_PRIMARY),
                background: Some(Background::Color(AdminTheme::ROW_ODD)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(AdminTheme::ERROR),
                background: Some(Background::Color(Color::from_rgba(
                    0.973, 0.443, 0.443, 0.1,
                ))),
                border: Border {
                    color: AdminTheme::ERROR,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Modal => |_| container::Style {
                text_color: Some(AdminTheme::TEXT_PRIMARY),
                background: Some(Background::Color(AdminTheme::CARD_BG)),
                border: Border {
                    color: AdminTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: Vector::new(0.0, 8.0),
                    blur_radius: 24.0,
                },
                snap: false,
            },
            Container::ModalOverlay => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(AdminTheme::OVERLAY)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Destructive,
    // Borderless, used for row actions
    Link,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered => AdminTheme::ACCENT_HOVER,
                    button::Status::Pressed => AdminTheme::ACCENT_PRESSED,
                    button::Status::Disabled => AdminTheme::BORDER_COLOR,
                    button::Status::Active => AdminTheme::ACCENT,
                };

                button::Style {
                    text_color: AdminTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Secondary => |_, status| {
                let (background, border) = match status {
                    button::Status::Hovered => {
                        (AdminTheme::ROW_EVEN, AdminTheme::TEXT_DIMMED)
                    }
                    button::Status::Pressed => {
                        (AdminTheme::BACKGROUND, AdminTheme::BORDER_COLOR)
                    }
                    _ => (AdminTheme::CARD_BG, AdminTheme::BORDER_COLOR),
                };

                button::Style {
                    text_color: AdminTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Destructive => |_, status| {
                let background = match status {
                    button::Status::Hovered => AdminTheme::DESTRUCTIVE_HOVER,
                    _ => AdminTheme::DESTRUCTIVE,
                };

                button::Style {
                    text_color: AdminTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Link => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => AdminTheme::TEXT_SECONDARY,
                    _ => AdminTheme::TEXT_PRIMARY,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextInput;

impl TextInput {
    pub fn style() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_, status| {
            let (border_color, border_width) = match status {
                text_input::Status::Hovered => (AdminTheme::TEXT_DIMMED, 1.0),
                text_input::Status::Focused { .. } => (AdminTheme::ACCENT, 2.0),
                _ => (AdminTheme::BORDER_COLOR, 1.0),
            };

            text_input::Style {
                background: Background::Color(AdminTheme::BACKGROUND),
                border: Border {
                    color: border_color,
                    width: border_width,
                    radius: 6.0.into(),
                },
                icon: AdminTheme::TEXT_SECONDARY,
                placeholder: AdminTheme::TEXT_DIMMED,
                value: AdminTheme::TEXT_PRIMARY,
                selection: AdminTheme::ACCENT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_by_position() {
        assert!(matches!(Container::row(0), Container::RowEven));
        assert!(matches!(Container::row(1), Container::RowOdd));
        assert!(matches!(Container::row(2), Container::RowEven));
    }
}
