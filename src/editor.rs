//! Interactive vertex editing
//!
//! Pointer events move the corners of a [Scene]; every accepted move
//! redraws the whole scene in one call on the target surface.
//!
//!     use quadfill::{Editor, EditorConfig, DragState, Scene, RenderingBase};
//!
//!     let mut ren = RenderingBase::with_size(600, 600).unwrap();
//!     let mut editor = Editor::new(Scene::grid(600.0, 600.0), EditorConfig::default());
//!     editor.render(&mut ren);
//!
//!     assert!(editor.pointer_down(300.0, 300.0));   // center vertex
//!     assert_eq!(editor.state(), DragState::Dragging(4));
//!     assert!(editor.pointer_move(&mut ren, 320.0, 280.0));
//!     editor.pointer_up();
//!     assert_eq!(editor.state(), DragState::Idle);
//!
//! [Scene]: ../scene/struct.Scene.html

use crate::color::Rgb8;
use crate::geometry::{distance, Point};
use crate::raster::RasterizerQuad;
use crate::render::{draw_outline, draw_vertex_handle};
use crate::scene::Scene;
use crate::Surface;

/// Drawing and hit-testing settings
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct EditorConfig {
    /// Radius of vertex handles and of the hit-test around each vertex
    pub radius: f64,
    pub handle_fill: Rgb8,
    pub handle_outline: Rgb8,
    pub background: Rgb8,
    pub edge_color: Rgb8,
    /// Stroke quad edges over the fill
    pub show_edges: bool,
    pub show_handles: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            radius: 10.0,
            handle_fill: Rgb8::red(),
            handle_outline: Rgb8::black(),
            background: Rgb8::white(),
            edge_color: Rgb8::black(),
            show_edges: false,
            show_handles: true,
        }
    }
}

/// Pointer drag state
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum DragState {
    Idle,
    /// Index of the vertex following the pointer
    Dragging(usize),
}

impl Default for DragState {
    fn default() -> DragState {
        DragState::Idle
    }
}

/// Owns a scene and moves its vertices in response to pointer events
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    config: EditorConfig,
    state: DragState,
    editing_enabled: bool,
    ras: RasterizerQuad,
}

impl Editor {
    pub fn new(scene: Scene, config: EditorConfig) -> Self {
        Editor { scene, config, state: DragState::Idle,
                 editing_enabled: true, ras: RasterizerQuad::new() }
    }
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
    pub fn state(&self) -> DragState {
        self.state
    }
    /// Vertex being dragged, if any
    pub fn dragging(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(i) => Some(i),
            DragState::Idle => None,
        }
    }
    pub fn editing_enabled(&self) -> bool {
        self.editing_enabled
    }
    /// Gate for pointer down and move; cleared while the host runs its
    /// own transform mode
    pub fn set_editing_enabled(&mut self, enabled: bool) {
        self.editing_enabled = enabled;
    }
    /// First vertex within the handle radius of (`x`,`y`)
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let p = Point::new(x, y);
        self.scene.vertices().iter()
            .position(|&v| distance(v, p) < self.config.radius)
    }
    /// Start dragging the vertex under the pointer
    ///
    /// A press that misses every vertex ends any drag still in progress.
    /// Returns true if a vertex was picked up
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if !self.editing_enabled {
            return false;
        }
        match self.hit_test(x, y) {
            Some(i) => {
                let n = self.scene.quads().iter().filter(|(q, _)| q.contains(i)).count();
                log::debug!("drag start: vertex {} at ({}, {}), used by {} quads", i, x, y, n);
                self.state = DragState::Dragging(i);
                true
            }
            None => {
                if let DragState::Dragging(i) = self.state {
                    log::debug!("drag end: vertex {}, press at ({}, {}) missed", i, x, y);
                }
                self.state = DragState::Idle;
                false
            }
        }
    }
    /// Move the dragged vertex to (`x`,`y`) and redraw `surface`
    ///
    /// Positions outside `[0, width] x [0, height]` are ignored without
    /// ending the drag; the far edges themselves are accepted.
    /// Returns true if the scene changed.
    pub fn pointer_move<S: Surface>(&mut self, surface: &mut S, x: f64, y: f64) -> bool {
        if !self.editing_enabled {
            return false;
        }
        let i = match self.state {
            DragState::Dragging(i) => i,
            DragState::Idle => return false,
        };
        let (w, h) = (surface.width() as f64, surface.height() as f64);
        if !(x >= 0.0 && x <= w && y >= 0.0 && y <= h) {
            log::debug!("drag: ({}, {}) outside {}x{}, ignored", x, y, w, h);
            return false;
        }
        self.scene.move_vertex(i, Point::new(x, y));
        self.render(surface);
        true
    }
    /// Stop dragging
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging(i) = self.state {
            log::debug!("drag end: vertex {}", i);
        }
        self.state = DragState::Idle;
    }
    /// Fill every quad of the scene, in scene order
    pub fn fill_all_polygons<S: Surface>(&mut self, surface: &mut S) {
        let vertices = self.scene.vertices();
        for (quad, color) in self.scene.quads() {
            self.ras.fill(surface, quad, vertices, *color);
        }
    }
    /// Clear `surface` and draw the whole scene: fills, edges, handles
    pub fn render<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.config.background);
        self.fill_all_polygons(surface);
        let vertices = self.scene.vertices();
        if self.config.show_edges {
            for (quad, _) in self.scene.quads() {
                if let Some(pts) = quad.points(vertices) {
                    draw_outline(surface, &pts, self.config.edge_color);
                }
            }
        }
        if self.config.show_handles {
            for v in vertices.iter() {
                draw_vertex_handle(surface, v.x, v.y, self.config.radius,
                                   self.config.handle_fill, self.config.handle_outline);
            }
        }
    }
}
