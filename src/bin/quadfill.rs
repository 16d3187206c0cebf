//! Render the default grid scene, drag its center vertex, and save
//! before and after images
//!
//! ```text
//! RUST_LOG=quadfill=debug quadfill [output-dir]
//! ```

use quadfill::{Editor, EditorConfig, RenderingBase, Scene};

use std::path::PathBuf;

const WIDTH: usize = 600;
const HEIGHT: usize = 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let mut ren = RenderingBase::with_size(WIDTH, HEIGHT)?;
    let config = EditorConfig { show_edges: true, ..EditorConfig::default() };
    let mut editor = Editor::new(Scene::grid(WIDTH as f64, HEIGHT as f64), config);

    editor.render(&mut ren);
    ren.to_file(dir.join("quadfill_before.png"))?;

    // Pull the shared center vertex toward the upper left, past the
    // surface edge at the end; the last move is ignored
    let (x0, y0) = (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);
    if !editor.pointer_down(x0, y0) {
        anyhow::bail!("no vertex at ({}, {})", x0, y0);
    }
    for step in 1 ..= 10 {
        let d = 20.0 * step as f64;
        editor.pointer_move(&mut ren, x0 - d, y0 - d / 2.0);
    }
    editor.pointer_move(&mut ren, -10.0, y0);
    editor.pointer_up();

    ren.to_file(dir.join("quadfill_after.png"))?;
    log::info!("wrote images to {}", dir.display());
    Ok(())
}
