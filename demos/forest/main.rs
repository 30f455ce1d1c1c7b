//! I use it with `cargo run --example forest | dot -Tsvg > forest.svg`

use biconnectivity::output::draw_forest;
use biconnectivity::{Config, analyze, from_file};

fn main() -> biconnectivity::Result<()> {
    env_logger::init();
    let mut graph = from_file("assets/two_triangles.in")?;
    analyze(&mut graph, &Config::default())?;

    print!("{}", draw_forest(&graph)?);
    Ok(())
}
