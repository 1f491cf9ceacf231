use point_mechanics::{
    Object, Simulator, SimulatorConfig, Vector,
    collision::{detect_collisions, resolve_elastic_collision, CollisionPair},
    constants::G,
    error::PhysicsError,
    math::{dot, AccelerationVector, Position, Velocity},
    units::{Acceleration, Length, Mass, Speed, Time},
};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn position(x: f64, y: f64, z: f64) -> Position {
    Vector::new([Length::new(x), Length::new(y), Length::new(z)])
}

fn velocity(x: f64, y: f64, z: f64) -> Velocity {
    Vector::new([Speed::new(x), Speed::new(y), Speed::new(z)])
}

fn body(mass: f64, at: Position, moving: Velocity) -> Object {
    Object::new(Mass::new(mass)).with_position(at).with_velocity(moving)
}

fn kinetic_energy(objects: &[Object]) -> f64 {
    objects.iter().map(|o| o.kinetic_energy().value).sum()
}

#[test]
fn test_simulator_construction() {
    let sim = Simulator::new();
    assert_eq!(sim.object_count(), 0);
    assert!(sim.gravity_enabled());
    assert_eq!(sim.get_collision_distance(), Length::ZERO);

    let mut sim = Simulator::with_objects(
        vec![Object::default(), Object::default()],
        Length::new(0.5),
    );
    assert_eq!(sim.object_count(), 2);
    assert_eq!(sim.get_collision_distance(), Length::new(0.5));

    let index = sim.add_object(Object::new(Mass::new(3.0)));
    assert_eq!(index, 2);
    assert_eq!(sim.get_object(2).unwrap().get_mass(), Mass::new(3.0));

    sim.enable_gravity(false);
    assert!(!sim.gravity_enabled());
    assert_eq!(
        sim.get_config(),
        &SimulatorConfig {
            gravity_enabled: false,
            collision_distance: Length::new(0.5),
        }
    );

    sim.objects_mut().pop();
    assert_eq!(sim.object_count(), 2);

    let removed = sim.remove_object(0).unwrap();
    assert_eq!(removed, Object::default());
    assert!(matches!(sim.remove_object(5), Err(PhysicsError::ResourceNotFound(_))));

    sim.clear();
    assert!(sim.objects().is_empty());
}

#[test]
fn test_head_on_equal_masses_swap_velocities() {
    let mut sim = Simulator::with_collision_distance(Length::new(1.0));
    sim.add_object(body(1.0, position(0.0, 0.0, 0.0), velocity(1.0, 0.0, 0.0)));
    sim.add_object(body(1.0, position(1.0, 0.0, 0.0), velocity(-1.0, 0.0, 0.0)));

    let impulse = sim.handle_collision(0, 1).unwrap();
    assert!(impulse.is_some());

    assert_abs_diff_eq!(sim.objects()[0].get_velocity()[0].value, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sim.objects()[1].get_velocity()[0].value, 1.0, epsilon = 1e-12);
}

#[test]
fn test_momentum_conserved() {
    let mut sim = Simulator::with_collision_distance(Length::new(1.0));
    sim.add_object(body(2.0, position(0.0, 0.0, 0.0), velocity(3.0, 0.0, 0.0)));
    sim.add_object(body(1.0, position(1.0, 0.0, 0.0), velocity(0.0, 0.0, 0.0)));

    let p_before = 2.0 * 3.0 + 1.0 * 0.0;
    sim.handle_collision(0, 1).unwrap();

    let v1 = sim.objects()[0].get_velocity()[0].value;
    let v2 = sim.objects()[1].get_velocity()[0].value;
    assert_abs_diff_eq!(p_before, 2.0 * v1 + 1.0 * v2, epsilon = 1e-12);

    // 1D elastic result for masses 2 and 1
    assert_abs_diff_eq!(v1, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v2, 4.0, epsilon = 1e-12);
}

#[test]
fn test_kinetic_energy_conserved() {
    let mut sim = Simulator::with_collision_distance(Length::new(1.0));
    sim.add_object(body(2.0, position(0.0, 0.0, 0.0), velocity(3.0, 0.0, 0.0)));
    sim.add_object(body(1.0, position(1.0, 0.0, 0.0), velocity(-1.0, 0.0, 0.0)));

    let e_before = kinetic_energy(sim.objects());
    sim.handle_collision(0, 1).unwrap();
    let e_after = kinetic_energy(sim.objects());

    assert_abs_diff_eq!(e_before, e_after, epsilon = 1e-12);
    assert_abs_diff_eq!(sim.total_kinetic_energy().value, e_before, epsilon = 1e-12);
}

#[test]
fn test_tangential_component_unchanged() {
    let mut sim = Simulator::with_collision_distance(Length::new(0.1));
    sim.add_object(body(1.0, position(0.0, 0.0, 0.0), velocity(1.0, 1.0, 0.0)));
    sim.add_object(body(1.0, position(1.0, 0.0, 0.0), velocity(0.0, 0.0, 0.0)));

    sim.handle_collision(0, 1).unwrap();

    let a = sim.objects()[0].get_velocity();
    assert_abs_diff_eq!(a[0].value, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a[1].value, 1.0, epsilon = 1e-12);

    // Far apart: no overlap correction
    assert_eq!(sim.objects()[0].get_position(), position(0.0, 0.0, 0.0));
    assert_eq!(sim.objects()[1].get_position(), position(1.0, 0.0, 0.0));
}

#[test]
fn test_random_collisions_conserve_momentum_and_energy() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let mut random_vector = |scale: f64| -> [f64; 3] {
            [
                rng.gen_range(-scale..scale),
                rng.gen_range(-scale..scale),
                rng.gen_range(-scale..scale),
            ]
        };

        let [px, py, pz] = random_vector(1.0);
        let [ax, ay, az] = random_vector(5.0);
        let [bx, by, bz] = random_vector(5.0);

        let mut a = body(rng.gen_range(0.1..10.0), position(0.0, 0.0, 0.0), velocity(ax, ay, az));
        let mut b = body(rng.gen_range(0.1..10.0), position(px, py, pz), velocity(bx, by, bz));

        let normal = a.direction_to(&b);
        let tangential = |o: &Object| {
            let v = o.get_velocity();
            v - normal.scaled_by(dot(&v, &normal))
        };

        let momentum_before = a.momentum() + b.momentum();
        let energy_before = a.kinetic_energy() + b.kinetic_energy();
        let tangential_before = (tangential(&a), tangential(&b));

        let closing = dot(&(b.get_velocity() - a.get_velocity()), &normal);
        let impulse = resolve_elastic_collision(&mut a, &mut b, Length::ZERO);
        assert_eq!(impulse.is_some(), closing.value < 0.0);

        assert_relative_eq!(a.momentum() + b.momentum(), momentum_before, epsilon = 1e-9);
        assert_relative_eq!(
            a.kinetic_energy() + b.kinetic_energy(),
            energy_before,
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_relative_eq!(tangential(&a), tangential_before.0, epsilon = 1e-9);
        assert_relative_eq!(tangential(&b), tangential_before.1, epsilon = 1e-9);
    }
}

#[test]
fn test_separating_objects_are_left_alone() {
    let mut a = body(1.0, position(0.0, 0.0, 0.0), velocity(-1.0, 0.0, 0.0));
    let mut b = body(1.0, position(0.2, 0.0, 0.0), velocity(1.0, 0.0, 0.0));
    let (a0, b0) = (a, b);

    assert!(resolve_elastic_collision(&mut a, &mut b, Length::new(1.0)).is_none());
    assert_eq!((a, b), (a0, b0));
}

#[test]
fn test_overlap_separated_by_mass_share() {
    let mut a = body(3.0, position(0.0, 0.0, 0.0), velocity(1.0, 0.0, 0.0));
    let mut b = body(1.0, position(0.5, 0.0, 0.0), velocity(0.0, 0.0, 0.0));

    let center_before = (3.0 * 0.0 + 1.0 * 0.5) / 4.0;
    resolve_elastic_collision(&mut a, &mut b, Length::new(1.0)).unwrap();

    // The heavier object moves a quarter of the overlap, the lighter one the rest
    assert_relative_eq!(a.get_position()[0].value, -0.125);
    assert_relative_eq!(b.get_position()[0].value, 0.875);

    let center_after = (3.0 * a.get_position()[0].value + b.get_position()[0].value) / 4.0;
    assert_relative_eq!(center_before, center_after);
}

#[test]
fn test_coincident_objects_do_not_produce_nan() {
    let mut a = body(1.0, position(1.0, 1.0, 1.0), velocity(1.0, 0.0, 0.0));
    let mut b = body(1.0, position(1.0, 1.0, 1.0), velocity(-1.0, 0.0, 0.0));

    assert!(resolve_elastic_collision(&mut a, &mut b, Length::new(1.0)).is_none());
    assert!(a.get_position().iter().all(|x| x.is_finite()));
    assert!(b.get_velocity().iter().all(|x| x.is_finite()));
}

#[test]
fn test_step_resets_acceleration() {
    let mut sim = Simulator::new();
    let object = Object::new(Mass::new(1.0)).with_acceleration(Vector::new([
        Acceleration::new(5.0),
        Acceleration::ZERO,
        Acceleration::ZERO,
    ]));
    sim.add_object(object);

    sim.step(Time::new(1.0));

    let object = &sim.objects()[0];
    assert_eq!(object.get_acceleration(), AccelerationVector::zero());
    assert!(object.get_velocity().is_zero());
    assert!(object.get_position().is_zero());
}

#[test]
fn test_step_applies_pairwise_gravity() {
    let mass = 1.0e10;
    let mut sim = Simulator::with_objects(
        vec![
            Object::new(Mass::new(mass)),
            Object::new(Mass::new(mass)).with_position(position(10.0, 0.0, 0.0)),
        ],
        Length::ZERO,
    );

    sim.step(Time::new(1.0));

    let expected = G.value * mass / 100.0;
    let [a, b] = [&sim.objects()[0], &sim.objects()[1]];

    assert_relative_eq!(a.get_acceleration()[0].value, expected, max_relative = 1e-12);
    assert_relative_eq!(b.get_acceleration()[0].value, -expected, max_relative = 1e-12);

    // Gravity is baked in before integration
    assert_relative_eq!(a.get_velocity()[0].value, expected, max_relative = 1e-12);
    assert_relative_eq!(a.get_position()[0].value, expected, max_relative = 1e-12);
    assert_relative_eq!(b.get_position()[0].value, 10.0 - expected, max_relative = 1e-12);

    let total = sim.total_momentum();
    assert_abs_diff_eq!(total[0].value, 0.0, epsilon = 1e-9);
}

#[test]
fn test_gravity_can_be_disabled() {
    let mut sim = Simulator::with_objects(
        vec![
            Object::new(Mass::new(1.0e12)),
            Object::new(Mass::new(1.0e12)).with_position(position(1.0, 0.0, 0.0)),
        ],
        Length::ZERO,
    );
    sim.enable_gravity(false);

    sim.step(Time::new(1.0));

    assert!(sim.objects()[0].get_velocity().is_zero());
    assert_eq!(sim.objects()[1].get_position(), position(1.0, 0.0, 0.0));
}

#[test]
fn test_three_body_contact_resolves_in_index_order() {
    let mut sim = Simulator::with_objects(
        vec![
            body(1.0, position(0.0, 0.0, 0.0), velocity(1.0, 0.0, 0.0)),
            body(1.0, position(1.0, 0.0, 0.0), velocity(0.0, 0.0, 0.0)),
            body(1.0, position(2.0, 0.0, 0.0), velocity(0.0, 0.0, 0.0)),
        ],
        Length::new(1.0),
    );
    sim.enable_gravity(false);

    sim.step(Time::new(0.01));

    // (0, 1) hands the velocity to 1, which (1, 2) then hands to 2
    let speeds: Vec<f64> = sim.objects().iter().map(|o| o.get_velocity()[0].value).collect();
    assert_abs_diff_eq!(speeds[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(speeds[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(speeds[2], 1.0, epsilon = 1e-12);

    // Overlaps were pushed back out to the collision distance
    let x: Vec<f64> = sim.objects().iter().map(|o| o.get_position()[0].value).collect();
    assert_relative_eq!(x[0], 0.005, max_relative = 1e-9);
    assert_relative_eq!(x[1], 1.0025, max_relative = 1e-9);
    assert_relative_eq!(x[2], 2.0025, max_relative = 1e-9);
}

#[test]
fn test_steps_are_deterministic() {
    let objects = vec![
        body(5.0e11, position(0.0, 0.0, 0.0), velocity(0.0, 0.1, 0.0)),
        body(2.0e11, position(30.0, 5.0, 0.0), velocity(-0.2, 0.0, 0.1)),
        body(1.0e11, position(-20.0, 10.0, 3.0), velocity(0.3, -0.1, 0.0)),
    ];

    let mut first = Simulator::with_objects(objects.clone(), Length::new(2.0));
    let mut second = Simulator::with_objects(objects, Length::new(2.0));

    for _ in 0..500 {
        first.step(Time::new(0.1));
        second.step(Time::new(0.1));
    }

    assert_eq!(first.objects(), second.objects());
}

#[test]
fn test_handle_collision_validates_indices() {
    let mut sim = Simulator::with_collision_distance(Length::new(1.0));
    sim.add_object(body(1.0, position(0.0, 0.0, 0.0), velocity(1.0, 0.0, 0.0)));
    sim.add_object(body(1.0, position(1.0, 0.0, 0.0), velocity(-1.0, 0.0, 0.0)));

    assert!(matches!(sim.handle_collision(0, 2), Err(PhysicsError::ResourceNotFound(_))));
    assert_eq!(sim.handle_collision(1, 1), Ok(None));

    // Reversed indices resolve the same pair
    assert!(sim.handle_collision(1, 0).unwrap().is_some());
    assert_abs_diff_eq!(sim.objects()[0].get_velocity()[0].value, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sim.objects()[1].get_velocity()[0].value, 1.0, epsilon = 1e-12);
}

#[test]
fn test_colliding_pairs() {
    let sim = Simulator::with_objects(
        vec![
            Object::new(Mass::new(1.0)),
            Object::new(Mass::new(1.0)).with_position(position(0.5, 0.0, 0.0)),
            Object::new(Mass::new(1.0)).with_position(position(5.0, 0.0, 0.0)),
            Object::new(Mass::new(1.0)).with_position(position(5.0, 1.0, 0.0)),
        ],
        Length::new(1.0),
    );

    let expected = vec![CollisionPair::new(0, 1), CollisionPair::new(2, 3)];
    assert_eq!(sim.colliding_pairs(), expected);
    assert_eq!(detect_collisions(sim.objects(), Length::new(0.1)), vec![]);
}

#[test]
fn test_step_collides_at_exact_collision_distance() {
    let approaching = || {
        vec![
            body(1.0, position(0.0, 0.0, 0.0), velocity(1.0, 0.0, 0.0)),
            body(1.0, position(2.0, 0.0, 0.0), velocity(-1.0, 0.0, 0.0)),
        ]
    };

    // After integration the centers are exactly 1 m apart
    let mut sim = Simulator::with_objects(approaching(), Length::new(1.0));
    sim.enable_gravity(false);
    sim.step(Time::new(0.5));

    let speeds: Vec<f64> = sim.objects().iter().map(|o| o.get_velocity()[0].value).collect();
    assert_eq!(speeds, vec![-1.0, 1.0]);
    assert_eq!(sim.objects()[0].get_position(), position(0.5, 0.0, 0.0));
    assert_eq!(sim.objects()[1].get_position(), position(1.5, 0.0, 0.0));

    // Just outside the threshold nothing happens
    let mut sim = Simulator::with_objects(approaching(), Length::new(0.999));
    sim.enable_gravity(false);
    sim.step(Time::new(0.5));

    let speeds: Vec<f64> = sim.objects().iter().map(|o| o.get_velocity()[0].value).collect();
    assert_eq!(speeds, vec![1.0, -1.0]);
}
