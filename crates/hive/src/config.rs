//! Configuration types for hive plot rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML; every field is optional and falls back to the documented default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Axis geometry: spacing, angles, axis duplication, curve shape.
//! - [`StyleConfig`] - Colors, widths, opacities and optional decorations.
//!
//! # Example
//!
//! ```
//! # use hive::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     scale = 12.0
//!
//!     [style]
//!     default_color = "gray"
//!     directed_edges = true
//! "#).unwrap();
//!
//! assert_eq!(config.layout().scale(), 12.0);
//! assert!(config.style().directed_edges());
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use std::f32::consts::TAU;

use serde::Deserialize;

use hive_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle},
    geometry::degrees_to_radians,
};

use crate::HiveError;

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Axis geometry settings.
///
/// Angles are given in degrees here and converted to radians when the
/// configuration is resolved against a group count.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring ranks on an axis.
    scale: f32,
    /// Radius of rank 0; defaults to `scale²`.
    internal_radius: Option<f32>,
    /// Angle of the first group's axis, clockwise from 12 o'clock.
    start_angle: f32,
    /// Half-separation of a duplicated axis; defaults to `360° / (6 × groups)`.
    minor_angle: Option<f32>,
    /// Duplicate the axis of any group that has intra-group edges.
    duplicate_axes: bool,
    /// Outward bow of same-axis edges per unit of radial distance.
    same_axis_bow: f32,
    /// Number of segments each edge curve is interpolated with.
    curve_samples: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            internal_radius: None,
            start_angle: 0.0,
            minor_angle: None,
            duplicate_axes: true,
            same_axis_bow: 0.25,
            curve_samples: 32,
        }
    }
}

impl LayoutConfig {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn duplicate_axes(&self) -> bool {
        self.duplicate_axes
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_internal_radius(mut self, radius: f32) -> Self {
        self.internal_radius = Some(radius);
        self
    }

    pub fn with_start_angle(mut self, degrees: f32) -> Self {
        self.start_angle = degrees;
        self
    }

    pub fn with_minor_angle(mut self, degrees: f32) -> Self {
        self.minor_angle = Some(degrees);
        self
    }

    pub fn with_duplicate_axes(mut self, duplicate: bool) -> Self {
        self.duplicate_axes = duplicate;
        self
    }

    pub fn with_same_axis_bow(mut self, bow: f32) -> Self {
        self.same_axis_bow = bow;
        self
    }

    pub fn with_curve_samples(mut self, samples: usize) -> Self {
        self.curve_samples = samples;
        self
    }

    /// Resolves this configuration for a plot with `group_count` axes.
    ///
    /// # Errors
    ///
    /// Returns [`HiveError::Config`] if the scale or radius is not a positive
    /// finite number, if the bow is not positive, if the curve has no
    /// segments, or if the minor angle is not strictly between zero and the
    /// major angle.
    pub fn resolve(&self, group_count: usize) -> Result<LayoutParams, HiveError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(HiveError::config(format!(
                "layout scale must be a positive number, got {}",
                self.scale
            )));
        }

        let internal_radius = self.internal_radius.unwrap_or(self.scale * self.scale);
        if !(internal_radius.is_finite() && internal_radius > 0.0) {
            return Err(HiveError::config(format!(
                "internal radius must be a positive number, got {internal_radius}"
            )));
        }

        if !(self.same_axis_bow.is_finite() && self.same_axis_bow > 0.0) {
            return Err(HiveError::config(format!(
                "same-axis bow must be a positive number, got {}",
                self.same_axis_bow
            )));
        }

        if self.curve_samples == 0 {
            return Err(HiveError::config("curve samples must be at least 1"));
        }

        let groups = group_count.max(1);
        let major_angle = crate::layout::major_angle(groups);
        let minor_angle = self
            .minor_angle
            .map(degrees_to_radians)
            .unwrap_or_else(|| crate::layout::default_minor_angle(groups));

        if !(minor_angle > 0.0 && minor_angle < major_angle) {
            return Err(HiveError::config(format!(
                "minor angle ({:.2}°) must be greater than 0° and smaller than the major angle ({:.2}°)",
                minor_angle.to_degrees(),
                major_angle.to_degrees()
            )));
        }

        Ok(LayoutParams {
            scale: self.scale,
            internal_radius,
            start_angle: degrees_to_radians(self.start_angle).rem_euclid(TAU),
            major_angle,
            minor_angle,
            duplicate_axes: self.duplicate_axes,
            same_axis_bow: self.same_axis_bow,
            curve_samples: self.curve_samples,
        })
    }
}

/// Layout settings resolved for a concrete group count, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub scale: f32,
    pub internal_radius: f32,
    pub start_angle: f32,
    pub major_angle: f32,
    pub minor_angle: f32,
    pub duplicate_axes: bool,
    pub same_axis_bow: f32,
    pub curve_samples: usize,
}

impl LayoutParams {
    /// Radius of the node at `rank` on any axis.
    pub fn rank_radius(&self, rank: usize) -> f32 {
        self.internal_radius + rank as f32 * self.scale
    }

    /// Radius of the square viewport: the longest axis plus the inner hole.
    pub fn plot_radius(&self, longest_axis: usize) -> f32 {
        longest_axis as f32 * self.scale + self.internal_radius
    }
}

/// Visual styling configuration.
///
/// Colors are kept as strings until a plot is built, so a bad color string is
/// reported as a configuration error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    default_color: String,
    node_radius: Option<f32>,
    edge_width: f32,
    edge_opacity: f32,
    edge_style: StrokeStyle,
    axis_color: String,
    axis_width: f32,
    axis_opacity: f32,
    padding: f32,
    show_labels: bool,
    directed_edges: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            default_color: "black".to_string(),
            node_radius: None,
            edge_width: 0.5,
            edge_opacity: 0.3,
            edge_style: StrokeStyle::Solid,
            axis_color: "black".to_string(),
            axis_width: 1.0,
            axis_opacity: 0.3,
            padding: 10.0,
            show_labels: false,
            directed_edges: false,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Color used for any node or edge group without an explicit color.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn default_color(&self) -> Result<Color, String> {
        Color::new(&self.default_color)
            .map_err(|err| format!("Invalid default color in config: {err}"))
    }

    /// Stroke for axis lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured axis color cannot be parsed.
    pub fn axis_stroke(&self) -> Result<StrokeDefinition, String> {
        let color = Color::new(&self.axis_color)
            .map_err(|err| format!("Invalid axis color in config: {err}"))?;
        Ok(StrokeDefinition::new(color.with_alpha(self.axis_opacity), self.axis_width)
            .with_cap(StrokeCap::Round))
    }

    /// Stroke for an edge drawn in `color`.
    pub fn edge_stroke(&self, color: Color) -> StrokeDefinition {
        StrokeDefinition::new(color.with_alpha(self.edge_opacity), self.edge_width)
            .with_style(self.edge_style.clone())
    }

    /// Checks the numeric style settings.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first setting that is negative or not
    /// finite, or the first opacity outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        let lengths = [
            ("padding", Some(self.padding)),
            ("edge_width", Some(self.edge_width)),
            ("axis_width", Some(self.axis_width)),
            ("node_radius", self.node_radius),
        ];
        for (name, value) in lengths {
            let Some(value) = value else { continue };
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("style {name} must be a non-negative number, got {value}"));
            }
        }

        for (name, value) in [("edge_opacity", self.edge_opacity), ("axis_opacity", self.axis_opacity)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("style {name} must be between 0 and 1, got {value}"));
            }
        }
        Ok(())
    }

    /// Marker radius; defaults to a quarter of the layout scale.
    pub fn node_radius(&self, scale: f32) -> f32 {
        self.node_radius.unwrap_or(scale / 4.0)
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn directed_edges(&self) -> bool {
        self.directed_edges
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.edge_width = width;
        self
    }

    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn with_directed_edges(mut self, directed: bool) -> Self {
        self.directed_edges = directed;
        self
    }
}
