//! Static terrain collision world: triangle-mesh colliders and nearest-hit
//! raycasts through the Rapier query pipeline.

use engine_core::{Transform, Vec3};
use rapier3d::prelude::*;

/// Result of a raycast query against the terrain.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    /// The collider that was hit.
    pub collider: ColliderHandle,
    /// Distance along the ray to the hit point.
    pub distance: f32,
    /// World position of the hit.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
}

/// Static collision world for the loaded terrain.
///
/// Every sub-mesh of the terrain model becomes its own trimesh collider in
/// the same set, so a single raycast considers all nested geometry. There is
/// no dynamics stepping; the world exists purely for ray queries.
pub struct TerrainCollision {
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    query_pipeline: QueryPipeline,
}

impl Default for TerrainCollision {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainCollision {
    /// Create an empty terrain collision world.
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Insert one triangle mesh, applying the placement transform (scale,
    /// then rotation, then translation) to every vertex.
    pub fn insert_trimesh(
        &mut self,
        vertices: &[Vec3],
        indices: &[[u32; 3]],
        placement: &Transform,
    ) -> ColliderHandle {
        let points: Vec<_> = vertices
            .iter()
            .map(|v| {
                let p = placement.rotation * (*v * placement.scale) + placement.position;
                point![p.x, p.y, p.z]
            })
            .collect();
        let collider = ColliderBuilder::trimesh(points, indices.to_vec()).build();
        let handle = self.collider_set.insert(collider);
        self.query_pipeline.update(&self.collider_set);
        log::debug!("Inserted terrain collider with {} triangle(s)", indices.len());
        handle
    }

    /// Number of colliders in the terrain set.
    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    /// True when no geometry has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.collider_set.len() == 0
    }

    /// Cast a ray and return the nearest hit within `max_distance`.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let filter = QueryFilter::default();

        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                filter,
            )
            .map(|(collider, intersection)| {
                let point = ray.point_at(intersection.time_of_impact);
                RaycastHit {
                    collider,
                    distance: intersection.time_of_impact,
                    point: Vec3::new(point.x, point.y, point.z),
                    normal: Vec3::new(
                        intersection.normal.x,
                        intersection.normal.y,
                        intersection.normal.z,
                    ),
                }
            })
    }
}
