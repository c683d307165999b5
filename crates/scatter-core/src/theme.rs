// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark colour tables shared by the SVG and raster adapters.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha dropped (emitted separately as opacity).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub marker_fill: Rgba,
    pub marker_stroke: Rgba,
    pub marker_text: Rgba,
    pub label_active: Rgba,
    pub label_inactive: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            tick_label: Rgba::rgb(0, 0, 0),
            marker_fill: Rgba::rgb(0x89, 0xbd, 0xd3),
            marker_stroke: Rgba::rgb(0xe3, 0xe3, 0xe3),
            marker_text: Rgba::rgb(255, 255, 255),
            label_active: Rgba::rgb(0, 0, 0),
            label_inactive: Rgba::rgb(0xaa, 0xaa, 0xaa),
            tooltip_background: Rgba::rgb(0, 0, 0).with_alpha(200),
            tooltip_text: Rgba::rgb(255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(150, 150, 160),
            marker_fill: Rgba::rgb(64, 160, 255),
            marker_stroke: Rgba::rgb(40, 40, 45),
            marker_text: Rgba::rgb(235, 235, 245),
            label_active: Rgba::rgb(235, 235, 245),
            label_inactive: Rgba::rgb(100, 100, 110),
            tooltip_background: Rgba::rgb(235, 235, 245).with_alpha(220),
            tooltip_text: Rgba::rgb(18, 18, 20),
        }
    }

    pub fn label_color(&self, active: bool) -> Rgba {
        if active { self.label_active } else { self.label_inactive }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
