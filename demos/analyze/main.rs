//! Prints articulation points, bridges and blocks of a graph in `.in` adjacency format.
//! I use it with `RUST_LOG=debug cargo run --example analyze -- assets/two_triangles.in`

use biconnectivity::{Config, analyze, from_file};

fn main() -> biconnectivity::Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/two_triangles.in".to_string());

    let mut graph = from_file(&path)?;
    let result = analyze(&mut graph, &Config::default())?;

    println!("Articulation points: {:?}", result.articulation_points);
    println!("Bridges: {:?}", result.bridges);
    for (i, block) in result.biconnected_components.iter().enumerate() {
        println!("Block {}: {:?}", i, block);
    }
    for component in &result.components {
        println!("Component rooted at {}: {:?}", component.root, component.verdict);
    }
    Ok(())
}
