
extern crate quadfill;

use quadfill::*;

use std::path::PathBuf;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("quadfill_{}_{}", std::process::id(), name));
    p
}

fn grid(w: usize, h: usize) -> (RenderingBase, Editor) {
    let mut ren = RenderingBase::with_size(w, h).unwrap();
    let config = EditorConfig { radius: 3.0, show_edges: true, ..EditorConfig::default() };
    let mut ed = Editor::new(Scene::grid(w as f64, h as f64), config);
    ed.render(&mut ren);
    (ren, ed)
}

#[test]
fn png_round_trip() {
    let (ren, _) = grid(60, 40);
    let f = tmp("round_trip.png");
    ren.to_file(&f).unwrap();
    let (data, w, h) = read_file(&f).unwrap();
    assert_eq!((w, h), (60, 40));
    assert_eq!(&data[..], ren.as_bytes());
    std::fs::remove_file(&f).unwrap();
}

#[test]
fn diff_detects_edit() {
    let (mut ren, mut ed) = grid(60, 60);
    let before = tmp("before.png");
    let same = tmp("same.png");
    let after = tmp("after.png");
    ren.to_file(&before).unwrap();
    ren.to_file(&same).unwrap();

    assert!(ed.pointer_down(30.0, 30.0));
    assert!(ed.pointer_move(&mut ren, 20.0, 25.0));
    ren.to_file(&after).unwrap();

    assert!(img_diff(&before, &same).unwrap());
    assert!(!img_diff(&before, &after).unwrap());
    for f in &[before, same, after] {
        std::fs::remove_file(f).unwrap();
    }
}

#[test]
fn missing_file_is_an_error() {
    match read_file(tmp("does_not_exist.png")) {
        Err(Error::Image(_)) | Err(Error::Io(_)) => {}
        Ok(_) => panic!("read a file that does not exist"),
        Err(e) => panic!("unexpected error {}", e),
    }
}
