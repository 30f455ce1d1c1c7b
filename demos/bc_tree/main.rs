/// Example of drawing a block-cut tree from a graph input file.
/// I use it with `cargo run --example bc_tree | neato -Tsvg > bc.svg`

use biconnectivity::output::draw_block_cut_tree;
use biconnectivity::{Config, analyze, from_edge_list_file, get_block_cut_tree};

fn main() -> biconnectivity::Result<()> {
    env_logger::init();
    let mut graph = from_edge_list_file("assets/bc.graph")?;
    let result = analyze(&mut graph, &Config::default())?;

    let bc_tree = get_block_cut_tree(&graph, &result)?;
    print!("{}", draw_block_cut_tree(&bc_tree));
    Ok(())
}
