//! Procedural icosphere geometry
//!
//! Planets are drawn as the edge set of a low-subdivision icosphere, with a
//! matching triangle mesh used as the click target.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Unit icosphere: vertices on the unit sphere plus triangle indices.
#[derive(Clone, Debug)]
pub struct IcoSphere {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Build a unit icosphere. Each subdivision level quadruples the triangle count.
pub fn icosphere(subdivisions: u32) -> IcoSphere {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut vertices = vec![
        Vec3::new(-1.0, phi, 0.0).normalize(),
        Vec3::new(1.0, phi, 0.0).normalize(),
        Vec3::new(-1.0, -phi, 0.0).normalize(),
        Vec3::new(1.0, -phi, 0.0).normalize(),
        Vec3::new(0.0, -1.0, phi).normalize(),
        Vec3::new(0.0, 1.0, phi).normalize(),
        Vec3::new(0.0, -1.0, -phi).normalize(),
        Vec3::new(0.0, 1.0, -phi).normalize(),
        Vec3::new(phi, 0.0, -1.0).normalize(),
        Vec3::new(phi, 0.0, 1.0).normalize(),
        Vec3::new(-phi, 0.0, -1.0).normalize(),
        Vec3::new(-phi, 0.0, 1.0).normalize(),
    ];

    let mut indices = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, 1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7,
        1, 8, 3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, 4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9,
        8, 1,
    ];

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    for _ in 0..subdivisions {
        let mut next = Vec::with_capacity(indices.len() * 4);
        midpoints.clear();

        for tri in indices.chunks(3) {
            let (v1, v2, v3) = (tri[0], tri[1], tri[2]);
            let a = midpoint(&mut vertices, &mut midpoints, v1, v2);
            let b = midpoint(&mut vertices, &mut midpoints, v2, v3);
            let c = midpoint(&mut vertices, &mut midpoints, v3, v1);

            next.extend_from_slice(&[v1, a, c]);
            next.extend_from_slice(&[v2, b, a]);
            next.extend_from_slice(&[v3, c, b]);
            next.extend_from_slice(&[a, b, c]);
        }

        indices = next;
    }

    IcoSphere { vertices, indices }
}

fn midpoint(
    vertices: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    v1: u32,
    v2: u32,
) -> u32 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let mid = ((vertices[v1 as usize] + vertices[v2 as usize]) / 2.0).normalize();
    vertices.push(mid);
    let index = vertices.len() as u32 - 1;
    cache.insert(key, index);
    index
}

impl IcoSphere {
    /// Unique undirected edges, smaller index first.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut edges = BTreeSet::new();
        for tri in self.indices.chunks(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                edges.insert(if a < b { [a, b] } else { [b, a] });
            }
        }
        edges.into_iter().collect()
    }

    fn scaled(&self, radius: f32) -> (Vec<Vec3>, Vec<Vec3>) {
        let positions = self.vertices.iter().map(|v| *v * radius).collect();
        let normals = self.vertices.clone();
        (positions, normals)
    }

    /// Solid triangle mesh (used for picking).
    pub fn triangle_mesh(&self, radius: f32) -> Mesh {
        let (positions, normals) = self.scaled(radius);
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_indices(Indices::U32(self.indices.clone()));
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh
    }

    /// Line mesh of every edge, lit with the vertex normals.
    pub fn wireframe_mesh(&self, radius: f32) -> Mesh {
        let (positions, normals) = self.scaled(radius);
        let indices = self.edges().into_iter().flatten().collect();
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        mesh.insert_indices(Indices::U32(indices));
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh
    }
}
