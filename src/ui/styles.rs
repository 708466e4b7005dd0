use crate::domain::TimerMode;
use ratatui::style::{Color, Modifier, Style};

const SLATE_50: Color = Color::Rgb(248, 250, 252);
const SLATE_100: Color = Color::Rgb(241, 245, 249);
const SLATE_200: Color = Color::Rgb(226, 232, 240);
const SLATE_400: Color = Color::Rgb(148, 163, 184);
const SLATE_500: Color = Color::Rgb(100, 116, 139);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_950: Color = Color::Rgb(2, 6, 23);
const INDIGO_500: Color = Color::Rgb(99, 102, 241);
const INDIGO_600: Color = Color::Rgb(79, 70, 229);
const EMERALD_500: Color = Color::Rgb(16, 185, 129);
const EMERALD_600: Color = Color::Rgb(5, 150, 105);
const WHITE: Color = Color::Rgb(255, 255, 255);

/// One of the two fixed colour schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub surface: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: SLATE_950,
            text: SLATE_100,
            muted: SLATE_500,
            border: SLATE_800,
            surface: SLATE_900,
        }
    }

    pub fn light() -> Self {
        Self {
            background: SLATE_50,
            text: SLATE_900,
            muted: SLATE_500,
            border: SLATE_200,
            surface: WHITE,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Screen background and default text
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Panel border
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Title style for panes
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Brand mark in the header
    pub fn brand_style(&self) -> Style {
        Style::default().fg(INDIGO_500).add_modifier(Modifier::BOLD)
    }

    /// Keybinding hints, footer, quotes, placeholders
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn quote_style(&self) -> Style {
        self.hint_style().add_modifier(Modifier::ITALIC)
    }

    /// The big clock
    pub fn clock_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Mode selector pill: filled accent when selected, muted otherwise
    pub fn mode_pill_style(&self, mode: TimerMode, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(WHITE)
                .bg(mode_accent(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Play/pause control: accent when idle, light surface when running
    pub fn play_button_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default()
                .fg(SLATE_900)
                .bg(SLATE_200)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(WHITE)
                .bg(INDIGO_600)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Reset control
    pub fn reset_button_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Countdown progress gauge, tinted by mode
    pub fn gauge_style(&self, mode: TimerMode) -> Style {
        Style::default().fg(mode_accent(mode)).bg(self.border)
    }

    /// Checkbox glyph colour
    pub fn task_glyph_style(&self, completed: bool) -> Style {
        if completed {
            Style::default().fg(EMERALD_500)
        } else {
            Style::default().fg(SLATE_400)
        }
    }

    /// Task text: struck through and dimmed when done
    pub fn task_text_style(&self, completed: bool) -> Style {
        if completed {
            Style::default()
                .fg(self.muted)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.surface).add_modifier(Modifier::BOLD)
    }

    /// Task input frame, accented while focused
    pub fn input_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(INDIGO_500)
        } else {
            self.border_style()
        }
    }
}

/// Accent colour for a timer mode
pub fn mode_accent(mode: TimerMode) -> Color {
    match mode {
        TimerMode::Work => INDIGO_600,
        TimerMode::Break => EMERALD_600,
    }
}
