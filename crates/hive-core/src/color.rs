//! Colors for nodes, edges and axes.
//!
//! [`Color`] is a parsed CSS color. [`ColorMap`] assigns one color per group
//! label; nodes are looked up by their own group and edges by the edge group.

use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ParseColorError {
    input: String,
    reason: String,
}

/// A CSS color, with alpha.
///
/// Displays in CSS syntax so it can be written straight into SVG attributes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses any CSS color: names, hex, `rgb()`, `hsl()` and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use hive_core::color::Color;
    ///
    /// assert!(Color::new("#1f77b4").is_ok());
    /// assert!(Color::new("steelblue").is_ok());
    /// assert!(Color::new("blurple").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ParseColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ParseColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// The color spelled with only ASCII alphanumerics and `_`, for use in
    /// SVG element ids such as one arrowhead marker per edge color.
    ///
    /// ```
    /// use hive_core::color::Color;
    ///
    /// let id = Color::new("rgb(31 119 180 / 0.5)").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let id: String = self
            .to_string()
            .replace('#', "hex")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        match id.chars().next() {
            Some(first) if first.is_ascii_alphabetic() => id,
            _ => format!("c_{id}"),
        }
    }

    /// Same color with opacity `alpha`. Edges are drawn this way so that
    /// dense bundles show through each other.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// Mapping from a group label to the color used for everything in that group.
///
/// Lookups never fail: [`ColorMap::resolve`] returns the supplied fallback for
/// labels the map does not know about.
///
/// # Examples
///
/// ```
/// use hive_core::color::{Color, ColorMap};
///
/// let mut colors = ColorMap::new();
/// colors.insert("A", Color::new("red").unwrap());
///
/// assert_eq!(colors.get("A"), Some(Color::new("red").unwrap()));
/// assert_eq!(colors.resolve("C", Color::default()), Color::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, Color>,
}

impl ColorMap {
    /// Creates an empty color map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `color` to `group`, replacing any previous assignment.
    pub fn insert(&mut self, group: impl Into<String>, color: Color) {
        self.colors.insert(group.into(), color);
    }

    /// Builder-style variant of [`ColorMap::insert`].
    pub fn with(mut self, group: impl Into<String>, color: Color) -> Self {
        self.insert(group, color);
        self
    }

    /// Returns the color assigned to `group`, if any.
    pub fn get(&self, group: &str) -> Option<Color> {
        self.colors.get(group).copied()
    }

    /// Returns the color assigned to `group`, or `fallback` when unmapped.
    pub fn resolve(&self, group: &str, fallback: Color) -> Color {
        self.get(group).unwrap_or(fallback)
    }

    /// Returns the number of mapped groups.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no group has a color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Parses every `(group, color string)` pair into a color map.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseColorError`] encountered.
    pub fn from_strings<I, G, C>(pairs: I) -> Result<Self, ParseColorError>
    where
        I: IntoIterator<Item = (G, C)>,
        G: Into<String>,
        C: AsRef<str>,
    {
        let mut map = Self::new();
        for (group, color) in pairs {
            map.insert(group, Color::new(color.as_ref())?);
        }
        Ok(map)
    }
}

impl<G: Into<String>> FromIterator<(G, Color)> for ColorMap {
    fn from_iter<T: IntoIterator<Item = (G, Color)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (group, color) in iter {
            map.insert(group, color);
        }
        map
    }
}
