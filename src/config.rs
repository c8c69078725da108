// Tunables for the particle backdrop and the page wiring around it.
// Defaults reproduce the portfolio page the effects were written for.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Pairs closer than this get a connecting line
    pub link_distance: f64,
    // Upper bound on |vx| and |vy|, in pixels per frame
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub particle_color: Color,
    pub particle_alpha: f64,
    pub link_color: Color,
    // Line alpha at zero distance
    pub link_alpha_scale: f64,
    // Wrap every tick in a console.time label
    pub profile_frames: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 40,
            link_distance: 120.0,
            max_speed: 0.125,
            min_radius: 1.0,
            max_radius: 2.6,
            particle_color: Color::from_u32(0x3399ffff),
            particle_alpha: 0.75,
            link_color: Color::from_u32(0x3399ffff),
            link_alpha_scale: 0.6,
            profile_frames: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub canvas_id: String,
    pub cursor_id: String,
    pub nav_anchor_selector: String,
    pub resize_debounce_ms: i32,
    pub scroll_settle_ms: i32,
    pub field: FieldConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            canvas_id: "bgCanvas".to_owned(),
            cursor_id: "customCursor".to_owned(),
            nav_anchor_selector: r##"nav a[href^="#"]"##.to_owned(),
            resize_debounce_ms: 100,
            scroll_settle_ms: 100,
            field: FieldConfig::default(),
        }
    }
}
