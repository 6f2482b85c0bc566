// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming: chart chrome colors and the series palette.

use crate::types::Color;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub separator: Color,
    pub axis_label: Color,
    pub axis_name: Color,
    /// Series colors, cycled by series index when a series sets none.
    pub palette: Vec<Color>,
    /// Alpha applied to a series color for its area fill.
    pub fill_alpha: u8,
    pub geometry_fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            separator: Color::from_argb(255, 40, 40, 45),
            axis_label: Color::from_argb(255, 235, 235, 245),
            axis_name: Color::from_argb(255, 180, 180, 190),
            palette: vec![
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 193, 7),
                Color::from_argb(255, 171, 71, 188),
                Color::from_argb(255, 0, 188, 212),
            ],
            fill_alpha: 96,
            geometry_fill: Color::from_argb(255, 18, 18, 20),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            separator: Color::from_argb(255, 230, 230, 235),
            axis_label: Color::from_argb(255, 20, 20, 30),
            axis_name: Color::from_argb(255, 60, 60, 70),
            palette: vec![
                Color::from_argb(255, 32, 120, 200),
                Color::from_argb(255, 20, 160, 90),
                Color::from_argb(255, 200, 60, 60),
                Color::from_argb(255, 230, 150, 0),
                Color::from_argb(255, 120, 60, 160),
                Color::from_argb(255, 0, 150, 170),
            ],
            fill_alpha: 80,
            geometry_fill: Color::from_argb(255, 250, 250, 252),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            separator: Color::from_argb(255, 0x07, 0x36, 0x42),  // base02
            axis_label: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            axis_name: Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            palette: solarized_accents(),
            fill_alpha: 96,
            geometry_fill: Color::from_argb(255, 0x00, 0x2b, 0x36),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            separator: Color::from_argb(255, 0xee, 0xe8, 0xd5),  // base2
            axis_label: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axis_name: Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            palette: solarized_accents(),
            fill_alpha: 80,
            geometry_fill: Color::from_argb(255, 0xfd, 0xf6, 0xe3),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            separator: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_name: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: vec![
                Color::from_argb(255, 0x00, 0xff, 0xff),
                Color::from_argb(255, 0x00, 0xff, 0x00),
                Color::from_argb(255, 0xff, 0x00, 0xff),
                Color::from_argb(255, 0xff, 0xff, 0x00),
            ],
            fill_alpha: 120,
            geometry_fill: Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }

    /// Palette color for the series at `index`.
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() { return self.axis_label; }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

fn solarized_accents() -> Vec<Color> {
    vec![
        Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
        Color::from_argb(255, 0x85, 0x99, 0x00), // green
        Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
        Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
        Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
        Color::from_argb(255, 0xd3, 0x36, 0x82), // magenta
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
