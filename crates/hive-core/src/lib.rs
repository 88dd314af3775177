//! Hive Core Types and Definitions
//!
//! This crate provides the foundational types shared by the hive plot
//! layout engine and its rendering backends. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, bounds and polar conversion ([`geometry`] module)
//! - **Draw**: Strokes, Bezier curves and render layers ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
