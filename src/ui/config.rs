//! Configuration for property input behavior and styling.

use bevy::prelude::*;
use bevy::ui::Val;

use crate::numeric::widget::DEFAULT_PRECISION;
use crate::numeric::{Bounds, CompositeProps};

/// Configuration for spawned property inputs.
#[derive(Resource, Clone)]
pub struct PropertyInputConfig {
    // Behavior
    /// Multiplier applied to every drag-derived change.
    pub drag_factor: f64,
    /// Decimals shown in facet text.
    pub precision: usize,
    /// Whether drags ask for the infinite-drag lock.
    pub infinite_drag: bool,

    // Layout
    /// Minimum width of one facet.
    pub facet_min_width: Val,
    /// Padding inside a facet.
    pub facet_padding: UiRect,
    /// Gap between facets and their labels.
    pub facet_gap: Val,

    // Typography
    pub font_size: f32,

    // Colors
    pub border_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    /// Text color while a facet is in edit mode.
    pub editing_text_color: Color,
    pub disabled_text_color: Color,
}

impl PropertyInputConfig {
    /// Widget props seeded from this configuration.
    pub fn props(&self, value: f64, bounds: Bounds) -> CompositeProps {
        CompositeProps {
            value,
            bounds,
            drag_factor: self.drag_factor,
            precision: self.precision,
            infinite_drag: self.infinite_drag,
            ..Default::default()
        }
    }
}

impl Default for PropertyInputConfig {
    fn default() -> Self {
        Self {
            // Behavior
            drag_factor: 1.0,
            precision: DEFAULT_PRECISION,
            infinite_drag: true,

            // Layout
            facet_min_width: Val::Px(48.0),
            facet_padding: UiRect::horizontal(Val::Px(4.0)),
            facet_gap: Val::Px(2.0),

            // Typography
            font_size: 11.0,

            // Colors
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            background_color: Color::srgba(0.15, 0.15, 0.15, 1.0),
            text_color: Color::srgba(0.9, 0.9, 0.6, 1.0),
            editing_text_color: Color::srgba(1.0, 1.0, 1.0, 1.0),
            disabled_text_color: Color::srgba(0.6, 0.6, 0.6, 1.0),
        }
    }
}
