//! Vertex storage and the quads that reference it

use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Vertex positions shared by every quad of a scene
///
/// Positions are added while setting up; once the store is owned by a
/// [Scene] only the editor moves them.
///
/// [Scene]: struct.Scene.html
#[derive(Debug,Default,Clone,PartialEq)]
pub struct VertexStore {
    pos: Vec<Point>,
}

impl VertexStore {
    pub fn new() -> Self {
        VertexStore { pos: vec![] }
    }
    /// Add a vertex, returning its index
    pub fn push(&mut self, p: Point) -> usize {
        self.pos.push(p);
        self.pos.len() - 1
    }
    pub fn len(&self) -> usize {
        self.pos.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }
    pub fn get(&self, i: usize) -> Option<Point> {
        self.pos.get(i).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item=&Point> {
        self.pos.iter()
    }
    pub(crate) fn set(&mut self, i: usize, p: Point) {
        self.pos[i] = p;
    }
}

impl From<Vec<Point>> for VertexStore {
    fn from(pos: Vec<Point>) -> Self {
        VertexStore { pos }
    }
}

impl std::ops::Index<usize> for VertexStore {
    type Output = Point;
    fn index(&self, i: usize) -> &Point {
        &self.pos[i]
    }
}

/// Closed loop of four vertex indices; index `i` connects to `(i+1) % 4`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Quad {
    idx: [usize; 4],
}

impl Quad {
    pub fn new(idx: [usize; 4]) -> Self {
        Quad { idx }
    }
    pub fn indices(&self) -> [usize; 4] {
        self.idx
    }
    /// Does the quad use vertex `i`
    pub fn contains(&self, i: usize) -> bool {
        self.idx.contains(&i)
    }
    /// Current corner positions, `None` if an index is outside `store`
    pub fn points(&self, store: &VertexStore) -> Option<[Point; 4]> {
        Some([store.get(self.idx[0])?, store.get(self.idx[1])?,
              store.get(self.idx[2])?, store.get(self.idx[3])?])
    }
}

/// Vertices plus the colored quads drawn from them
#[derive(Debug,Clone)]
pub struct Scene {
    vertices: VertexStore,
    quads: Vec<(Quad, Rgb8)>,
}

impl Scene {
    /// Create a scene, checking every quad against the vertex store
    pub fn new(vertices: VertexStore, quads: Vec<(Quad, Rgb8)>) -> Result<Self> {
        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteVertex { index });
        }
        let len = vertices.len();
        for (n, (quad, _)) in quads.iter().enumerate() {
            let idx = quad.indices();
            for (k, &index) in idx.iter().enumerate() {
                if index >= len {
                    return Err(Error::InvalidVertexIndex { quad: n, index, len });
                }
                if idx[..k].contains(&index) {
                    return Err(Error::DuplicateVertexIndex { quad: n, index });
                }
            }
        }
        log::debug!("scene: {} vertices, {} quads", len, quads.len());
        Ok(Scene { vertices, quads })
    }
    /// Three by three grid of vertices forming four quads that share
    /// their inner corners, centered on a `width` x `height` surface
    ///
    ///     use quadfill::Scene;
    ///     let scene = Scene::grid(600.0, 600.0);
    ///     assert_eq!(scene.vertices().len(), 9);
    ///     assert_eq!(scene.quads().len(), 4);
    pub fn grid(width: f64, height: f64) -> Self {
        let mut vertices = VertexStore::new();
        for j in 0..3 {
            for i in 0..3 {
                let x = width * (1.0 + 2.0 * i as f64) / 6.0;
                let y = height * (1.0 + 2.0 * j as f64) / 6.0;
                vertices.push(Point::new(x.round(), y.round()));
            }
        }
        let quads = vec![
            (Quad::new([0, 1, 4, 3]), Rgb8::new(0, 150, 255)),
            (Quad::new([1, 2, 5, 4]), Rgb8::new(100, 200, 0)),
            (Quad::new([3, 4, 7, 6]), Rgb8::new(250, 200, 0)),
            (Quad::new([4, 5, 8, 7]), Rgb8::new(150, 0, 200)),
        ];
        Scene { vertices, quads }
    }
    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }
    pub fn quads(&self) -> &[(Quad, Rgb8)] {
        &self.quads
    }
    pub(crate) fn move_vertex(&mut self, i: usize, p: Point) {
        self.vertices.set(i, p);
    }
}
