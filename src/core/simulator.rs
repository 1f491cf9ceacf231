use tracing::{debug, trace};

use crate::bodies::Object;
use crate::collision::{detect_collisions, resolve_elastic_collision, CollisionPair};
use crate::core::SimulatorConfig;
use crate::error::PhysicsError;
use crate::math::Vector;
use crate::units::{Energy, Length, Momentum, Time};
use crate::Result;

/// An N-body simulator over point masses.
///
/// The simulator owns its objects by value. Their order matters: gravity and
/// collisions visit pairs `(i, j)` with `i < j` in ascending order, so the
/// same objects in the same order always produce the same trajectories.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    /// All objects in the simulation
    objects: Vec<Object>,

    /// Configuration for the simulation
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates an empty simulator with default settings
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Creates an empty simulator with the given configuration
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            objects: Vec::new(),
            config,
        }
    }

    /// Creates an empty simulator that treats objects within `collision_distance` as colliding
    pub fn with_collision_distance(collision_distance: Length) -> Self {
        Self::with_config(SimulatorConfig::with_collision_distance(collision_distance))
    }

    /// Creates a simulator owning `objects`
    pub fn with_objects(objects: Vec<Object>, collision_distance: Length) -> Self {
        Self {
            objects,
            config: SimulatorConfig::with_collision_distance(collision_distance),
        }
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Turns pairwise gravity on or off
    pub fn enable_gravity(&mut self, enabled: bool) {
        self.config.gravity_enabled = enabled;
    }

    /// Returns whether pairwise gravity is applied
    pub fn gravity_enabled(&self) -> bool {
        self.config.gravity_enabled
    }

    /// Returns the collision distance
    pub fn get_collision_distance(&self) -> Length {
        self.config.collision_distance
    }

    /// Sets the collision distance
    pub fn set_collision_distance(&mut self, collision_distance: Length) {
        self.config.collision_distance = collision_distance;
    }

    /// Returns the objects in simulation order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Returns the object collection for in-place edits
    pub fn objects_mut(&mut self) -> &mut Vec<Object> {
        &mut self.objects
    }

    /// Appends an object and returns its index
    pub fn add_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Removes the object at `index`, shifting later objects down by one
    pub fn remove_object(&mut self, index: usize) -> Result<Object> {
        self.check_index(index)?;
        Ok(self.objects.remove(index))
    }

    /// Gets a reference to an object by its index
    pub fn get_object(&self, index: usize) -> Result<&Object> {
        self.objects.get(index).ok_or_else(|| missing_object(index))
    }

    /// Gets a mutable reference to an object by its index
    pub fn get_object_mut(&mut self, index: usize) -> Result<&mut Object> {
        self.objects.get_mut(index).ok_or_else(|| missing_object(index))
    }

    /// Returns the number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Removes all objects
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Advances the simulation by `dt`.
    ///
    /// The step runs in a fixed order:
    /// 1. zero every acceleration
    /// 2. accumulate pairwise gravity, if enabled
    /// 3. integrate every object
    /// 4. resolve collisions pair by pair
    pub fn step(&mut self, dt: Time) {
        self.reset_accelerations();

        if self.config.gravity_enabled {
            self.apply_gravity();
        }

        for object in &mut self.objects {
            object.update(dt);
        }

        let resolved = self.handle_collisions();

        debug!(
            dt = dt.value,
            objects = self.objects.len(),
            collisions = resolved,
            "simulation step"
        );
    }

    /// Resolves a collision between the objects at `i` and `j` right away,
    /// regardless of their distance. Returns the applied impulse, if any.
    pub fn handle_collision(&mut self, i: usize, j: usize) -> Result<Option<Momentum>> {
        self.check_index(i)?;
        self.check_index(j)?;

        if i == j {
            return Ok(None);
        }

        let collision_distance = self.config.collision_distance;
        let impulse = if i < j {
            let (a, b) = pair_mut(&mut self.objects, i, j);
            resolve_elastic_collision(a, b, collision_distance)
        } else {
            let (b, a) = pair_mut(&mut self.objects, j, i);
            resolve_elastic_collision(a, b, collision_distance)
        };

        Ok(impulse)
    }

    /// Returns every pair currently within the collision distance
    pub fn colliding_pairs(&self) -> Vec<CollisionPair> {
        detect_collisions(&self.objects, self.config.collision_distance)
    }

    /// Total kinetic energy of all objects
    pub fn total_kinetic_energy(&self) -> Energy {
        self.objects.iter().map(Object::kinetic_energy).sum()
    }

    /// Total linear momentum of all objects
    pub fn total_momentum(&self) -> Vector<Momentum, 3> {
        self.objects
            .iter()
            .fold(Vector::zero(), |total, object| total + object.momentum())
    }

    fn reset_accelerations(&mut self) {
        for object in &mut self.objects {
            object.reset_acceleration();
        }
    }

    /// Applies gravity once per pair: the force `j` exerts on `i` goes to `i`,
    /// its negation to `j`
    fn apply_gravity(&mut self) {
        let n = self.objects.len();
        if n < 2 {
            return;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let force = self.objects[i].gravitational_force_vector(&self.objects[j]);

                self.objects[i].apply_force(force);
                self.objects[j].apply_force(-force);
            }
        }
    }

    /// Later pairs see the velocities and positions left by earlier ones
    fn handle_collisions(&mut self) -> usize {
        let collision_distance = self.config.collision_distance;
        let mut resolved = 0;

        for i in 0..self.objects.len() {
            for j in (i + 1)..self.objects.len() {
                let (a, b) = pair_mut(&mut self.objects, i, j);

                if a.distance_to(b) <= collision_distance {
                    trace!(a = i, b = j, "objects in contact");

                    if resolve_elastic_collision(a, b, collision_distance).is_some() {
                        resolved += 1;
                    }
                }
            }
        }

        resolved
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.objects.len() {
            Ok(())
        } else {
            Err(missing_object(index))
        }
    }
}

fn missing_object(index: usize) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("object {}", index))
}

/// Borrows two distinct objects mutably; requires `i < j`
fn pair_mut(objects: &mut [Object], i: usize, j: usize) -> (&mut Object, &mut Object) {
    let (head, tail) = objects.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
