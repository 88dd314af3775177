//! Example: Building a hive plot in code
//!
//! Ranks three groups of a small service graph by degree and writes the plot
//! to an SVG file.

use hive::{
    HivePlot,
    color::{Color, ColorMap},
    config::{AppConfig, LayoutConfig, StyleConfig},
    model::{Edge, HiveData, NodeId},
    rank::{ByKey, Descending},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building hive plot...\n");

    let edges = [
        ("web", "api", "frontend"),
        ("mobile", "api", "frontend"),
        ("api", "auth", "backend"),
        ("api", "orders", "backend"),
        ("orders", "postgres", "backend"),
        ("auth", "redis", "backend"),
        ("orders", "auth", "backend"),
    ];

    // Degree is the ranking: busier nodes sit nearer the center
    let degree = |id: &NodeId| {
        edges
            .iter()
            .filter(|(s, t, _)| *s == id.as_str() || *t == id.as_str())
            .count()
    };
    let ranking = Descending(ByKey(degree));

    let mut data = HiveData::new()
        .with_ranked_group("frontend", ["web", "mobile"], &ranking)
        .with_ranked_group("backend", ["api", "auth", "orders"], &ranking)
        .with_ranked_group("storage", ["postgres", "redis"], &ranking);
    for (source, target, group) in edges {
        data.add_edge(Edge::new(source, target, group).with_attribute("kind", "call"));
    }

    let node_colors = ColorMap::new()
        .with("frontend", Color::new("#1f77b4")?)
        .with("backend", Color::new("#ff7f0e")?)
        .with("storage", Color::new("#2ca02c")?);
    let edge_colors = ColorMap::new()
        .with("frontend", Color::new("#1f77b4")?)
        .with("backend", Color::new("#d62728")?);

    let config = AppConfig::new(
        LayoutConfig::default().with_scale(12.0),
        StyleConfig::default()
            .with_background_color("white")
            .with_show_labels(true)
            .with_directed_edges(true),
    );

    let plot = HivePlot::new(data, node_colors, Some(edge_colors), config)?;
    for axis in plot.placement().axes() {
        println!(
            "  {:<10} {:>5.1}°  {} node(s){}",
            axis.group(),
            axis.angle().to_degrees(),
            axis.len(),
            if axis.is_duplicated() { ", duplicated" } else { "" }
        );
    }

    let svg = plot.render_svg()?;
    let output_path = "programmatic_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("\n✓ SVG written to: {output_path}");

    Ok(())
}
