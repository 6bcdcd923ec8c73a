//! Thin facade over the rapier3d rigid-body pipeline.
//!
//! The simulation only needs a gravity world it can add bodies to, step
//! once per tick, read transforms back from and push velocity commands
//! into. Everything else about rapier stays behind this module.

use rapier3d::prelude::*;

use cyberstrike_core::constants::{DT, GRAVITY_Y};
use cyberstrike_core::types::{Position, Velocity};

/// ECS component pairing an entity with its rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsBody(pub RigidBodyHandle);

/// Collision shape of a new body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    /// Upright capsule: half length of the cylindrical part, radius.
    Capsule { half_height: f32, radius: f32 },
    /// Box given by half extents.
    Cuboid { hx: f32, hy: f32, hz: f32 },
    Ball { radius: f32 },
}

/// Description of a body to insert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub shape: BodyShape,
    pub position: Position,
    /// `None` inserts a fixed (immovable) body.
    pub mass: Option<f32>,
    pub velocity: Velocity,
    /// Only spin about the vertical axis.
    pub upright: bool,
    /// Overlap-only collider: moves under gravity but never pushes anything.
    pub sensor: bool,
}

impl BodyDesc {
    pub fn fixed(shape: BodyShape, position: Position) -> Self {
        Self {
            shape,
            position,
            mass: None,
            velocity: Velocity::default(),
            upright: false,
            sensor: false,
        }
    }

    pub fn dynamic(shape: BodyShape, position: Position, mass: f32) -> Self {
        Self {
            shape,
            position,
            mass: Some(mass),
            velocity: Velocity::default(),
            upright: false,
            sensor: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn upright(mut self) -> Self {
        self.upright = true;
        self
    }

    pub fn sensor(mut self) -> Self {
        self.sensor = true;
        self
    }
}

/// Gravity world holding every rigid body of the level.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let integration_parameters = IntegrationParameters {
            dt: DT,
            ..IntegrationParameters::default()
        };

        Self {
            gravity: vector![0.0, GRAVITY_Y, 0.0],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Insert a body with a single attached collider.
    pub fn add_body(&mut self, desc: BodyDesc) -> RigidBodyHandle {
        let translation = vector![desc.position.x, desc.position.y, desc.position.z];

        let builder = match desc.mass {
            None => RigidBodyBuilder::fixed(),
            Some(_) => RigidBodyBuilder::dynamic()
                .linvel(vector![desc.velocity.x, desc.velocity.y, desc.velocity.z])
                .can_sleep(false),
        };
        let mut builder = builder.translation(translation);
        if desc.upright {
            builder = builder.enabled_rotations(false, true, false);
        }

        let collider = match desc.shape {
            BodyShape::Capsule {
                half_height,
                radius,
            } => ColliderBuilder::capsule_y(half_height, radius),
            BodyShape::Cuboid { hx, hy, hz } => ColliderBuilder::cuboid(hx, hy, hz),
            BodyShape::Ball { radius } => ColliderBuilder::ball(radius),
        };
        let mut collider = collider.sensor(desc.sensor);
        match desc.mass {
            // Sensor colliders carry no mass; put it on the body instead
            Some(mass) if desc.sensor => {
                builder = builder.additional_mass(mass);
                collider = collider.density(0.0);
            }
            Some(mass) => collider = collider.mass(mass),
            None => {}
        }
        let handle = self.bodies.insert(builder.build());
        self.colliders
            .insert_with_parent(collider.build(), handle, &mut self.bodies);

        handle
    }

    /// Remove a body and its colliders. Returns false if it was already gone.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Advance the dynamics world by one tick.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Current world translation of a body.
    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Position> {
        self.bodies.get(handle).map(|body| {
            let t = body.translation();
            Position::new(t.x, t.y, t.z)
        })
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Velocity> {
        self.bodies.get(handle).map(|body| {
            let v = body.linvel();
            Velocity::new(v.x, v.y, v.z)
        })
    }

    pub fn set_velocity(&mut self, handle: RigidBodyHandle, velocity: Velocity) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    /// Teleport a body, zeroing its velocity.
    pub fn set_translation(&mut self, handle: RigidBodyHandle, position: Position) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(vector![position.x, position.y, position.z], true);
            body.set_linvel(vector![0.0, 0.0, 0.0], true);
        }
    }

    pub fn contains(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_body_falls_under_gravity() {
        let mut physics = PhysicsWorld::new();
        let h = physics.add_body(BodyDesc::dynamic(
            BodyShape::Ball { radius: 0.5 },
            Position::new(0.0, 50.0, 0.0),
            1.0,
        ));
        for _ in 0..30 {
            physics.step();
        }
        let pos = physics.translation(h).unwrap();
        let vel = physics.velocity(h).unwrap();
        assert!(pos.y < 50.0);
        assert!(vel.y < 0.0);
    }

    #[test]
    fn test_fixed_body_does_not_move() {
        let mut physics = PhysicsWorld::new();
        let h = physics.add_body(BodyDesc::fixed(
            BodyShape::Cuboid {
                hx: 1.0,
                hy: 1.0,
                hz: 1.0,
            },
            Position::new(3.0, 1.0, 3.0),
        ));
        physics.step();
        assert_eq!(physics.translation(h), Some(Position::new(3.0, 1.0, 3.0)));
    }

    #[test]
    fn test_ground_supports_box() {
        let mut physics = PhysicsWorld::new();
        physics.add_body(BodyDesc::fixed(
            BodyShape::Cuboid {
                hx: 100.0,
                hy: 0.5,
                hz: 100.0,
            },
            Position::new(0.0, -0.5, 0.0),
        ));
        let h = physics.add_body(BodyDesc::dynamic(
            BodyShape::Cuboid {
                hx: 0.5,
                hy: 0.5,
                hz: 0.5,
            },
            Position::new(0.0, 3.0, 0.0),
            1.0,
        ));
        for _ in 0..240 {
            physics.step();
        }
        let pos = physics.translation(h).unwrap();
        assert!(pos.y > 0.3 && pos.y < 0.8, "box should rest on ground, y={}", pos.y);
    }

    #[test]
    fn test_set_velocity_and_remove() {
        let mut physics = PhysicsWorld::new();
        let h = physics.add_body(BodyDesc::dynamic(
            BodyShape::Ball { radius: 0.1 },
            Position::new(0.0, 10.0, 0.0),
            0.1,
        ));
        physics.set_velocity(h, Velocity::new(5.0, 0.0, 0.0));
        assert_eq!(physics.velocity(h).unwrap().x, 5.0);

        assert_eq!(physics.body_count(), 1);
        assert!(physics.remove_body(h));
        assert!(!physics.remove_body(h));
        assert_eq!(physics.body_count(), 0);
        assert!(physics.translation(h).is_none());
    }
}
