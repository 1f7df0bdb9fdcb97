//! Determinism verification tests
//!
//! Tests to ensure every rule and the driver produce identical results given
//! the same seed.

use exemplar_core::{
    CompetitiveUpdate, EntrenchmentSampler, ExemplarPool, ExternalUpdate, InitialPoolPolicy,
    SimulationDriver, SimulationParameters,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn params(iterations: u64) -> SimulationParameters {
    SimulationParameters {
        iterations,
        ..Default::default()
    }
}

/// Test that initial draws are identical with the same seed
#[test]
fn test_initial_draw_determinism() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);

    let pool1 = ExemplarPool::from_normal(100, 75.0, 15.0, &mut rng1);
    let pool2 = ExemplarPool::from_normal(100, 75.0, 15.0, &mut rng2);

    assert_eq!(pool1.values(), pool2.values(), "Initial draws should be identical with same seed");
}

/// Test that the sampler produces the same candidate sequence
#[test]
fn test_sampler_determinism() {
    let sampler = EntrenchmentSampler::new(3, 25.0).unwrap();
    let pool = ExemplarPool::from_normal(100, 75.0, 15.0, &mut SmallRng::seed_from_u64(1));

    let mut rng1 = SmallRng::seed_from_u64(777);
    let mut rng2 = SmallRng::seed_from_u64(777);
    let run1: Vec<f64> = (0..100).map(|_| sampler.produce(&pool, &mut rng1).unwrap()).collect();
    let run2: Vec<f64> = (0..100).map(|_| sampler.produce(&pool, &mut rng2).unwrap()).collect();

    assert_eq!(run1, run2);
}

/// Test that the external rule is bit-identical across runs
#[test]
fn test_external_rule_determinism() {
    let update = ExternalUpdate::from_parameters(&params(2000)).unwrap();
    let start = ExemplarPool::from_normal(100, 100.0, 15.0, &mut SmallRng::seed_from_u64(5));

    let out1 = update.run(start.clone(), &mut SmallRng::seed_from_u64(12345)).unwrap();
    let out2 = update.run(start, &mut SmallRng::seed_from_u64(12345)).unwrap();

    let bits1: Vec<u64> = out1.values().iter().map(|v| v.to_bits()).collect();
    let bits2: Vec<u64> = out2.values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits1, bits2, "External updates should be bit-identical with same seed");
}

/// Test that the competitive rule is bit-identical across runs
#[test]
fn test_competitive_rule_determinism() {
    let update = CompetitiveUpdate::from_parameters(&params(2000)).unwrap();
    let mut init = SmallRng::seed_from_u64(5);
    let a = ExemplarPool::from_normal(100, 75.0, 15.0, &mut init);
    let b = ExemplarPool::from_normal(100, 100.0, 15.0, &mut init);

    let (a1, b1, tally1) = update
        .run_tallied(a.clone(), b.clone(), &mut SmallRng::seed_from_u64(999))
        .unwrap();
    let (a2, b2, tally2) = update.run_tallied(a, b, &mut SmallRng::seed_from_u64(999)).unwrap();

    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
    assert_eq!(tally1, tally2);
}

/// Test that whole simulations repeat exactly
#[test]
fn test_driver_determinism() {
    for policy in [InitialPoolPolicy::Independent, InitialPoolPolicy::Shared] {
        let mut driver1 = SimulationDriver::from_seed(params(1000), policy, 42).unwrap();
        let mut driver2 = SimulationDriver::from_seed(params(1000), policy, 42).unwrap();

        assert_eq!(driver1.run().unwrap(), driver2.run().unwrap());
    }
}

/// Test that different seeds produce different outcomes
#[test]
fn test_different_seeds() {
    let mut driver1 =
        SimulationDriver::from_seed(params(100), InitialPoolPolicy::Independent, 42).unwrap();
    let mut driver2 =
        SimulationDriver::from_seed(params(100), InitialPoolPolicy::Independent, 43).unwrap();

    let outcome1 = driver1.run().unwrap();
    let outcome2 = driver2.run().unwrap();

    assert_ne!(outcome1.initial_singleton, outcome2.initial_singleton);
    assert_ne!(outcome1.competitive_geminate, outcome2.competitive_geminate);
}

/// With zero iterations the external rule hands back the initial draw
#[test]
fn test_zero_iterations_reproduce_initial_draw() {
    let p = SimulationParameters {
        pool_size: 100,
        sample_size: 3,
        iterations: 0,
        noise_half_width: 25.0,
        singleton_mean: 75.0,
        std_dev: 15.0,
        ..Default::default()
    };
    let seed = 2024;

    let initial = ExemplarPool::from_normal(
        p.pool_size,
        p.singleton_mean,
        p.std_dev,
        &mut SmallRng::seed_from_u64(seed),
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let drawn = ExemplarPool::from_normal(p.pool_size, p.singleton_mean, p.std_dev, &mut rng);
    let updated = ExternalUpdate::from_parameters(&p).unwrap().run(drawn, &mut rng).unwrap();

    assert_eq!(updated.values(), initial.values());
}
