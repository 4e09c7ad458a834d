// Host-side tests for avatar geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use fnv::FnvHashSet;
use mesh::*;

fn length(p: [f32; 3]) -> f32 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

#[test]
fn sphere_counts_match_segments() {
    let m = uv_sphere(1.0, 8, 6);
    assert_eq!(m.vertices.len(), 9 * 7);
    // pole rows contribute one triangle per segment instead of two
    assert_eq!(m.indices.len(), 6 * 8 * 5);
    assert_eq!(m.triangle_count(), 2 * 8 * 5);
}

#[test]
fn sphere_vertices_lie_on_surface() {
    let m = uv_sphere(2.0, 16, 12);
    for v in &m.vertices {
        assert!((length(v.position) - 2.0).abs() < 1e-4);
        assert!((length(v.normal) - 1.0).abs() < 1e-4);
    }
}

#[test]
fn head_sphere_indices_are_in_bounds() {
    let m = uv_sphere(1.0, 64, 64);
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
    assert_eq!(m.indices.len() % 3, 0);
}

#[test]
fn torus_counts_match_segments() {
    let m = torus(1.2, 0.01, 16, 100);
    assert_eq!(m.vertices.len(), 17 * 101);
    assert_eq!(m.indices.len(), 6 * 16 * 100);
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
}

#[test]
fn torus_vertices_stay_within_tube() {
    let m = torus(1.2, 0.01, 16, 100);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        let ring = (x * x + y * y).sqrt();
        let d = ((ring - 1.2).powi(2) + z * z).sqrt();
        assert!((d - 0.01).abs() < 1e-4);
    }
}

#[test]
fn wireframe_lists_each_edge_once() {
    let m = uv_sphere(1.0, 8, 6);
    let lines = m.wireframe_indices();
    assert_eq!(lines.len() % 2, 0);

    let mut seen = FnvHashSet::default();
    for pair in lines.chunks_exact(2) {
        let edge = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        assert!(seen.insert(edge), "edge {:?} repeated", edge);
    }

    // every triangle edge is present
    for tri in m.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            assert!(seen.contains(&(a.min(b), a.max(b))));
        }
    }
}

#[test]
fn tiny_segment_counts_are_raised() {
    let m = uv_sphere(1.0, 1, 1);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert!(m.triangle_count() > 0);
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let m = torus(1.0, 0.1, 3, 3);
    let bytes: &[u8] = bytemuck::cast_slice(&m.vertices);
    assert_eq!(bytes.len(), m.vertices.len() * 24);
}
