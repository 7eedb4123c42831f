//! End-to-end tests for the classroom capacity model
//!
//! Drives the simulation the way a UI would: slider writes in, results,
//! rates and trend out.

use classroom_capacity::{
    aggregate_fail_rate, predicted_fail_rate, recompute, DemandModel, Population, Simulation,
    SimulationConfig, SliderUpdate,
};
use classroom_common::{Parameter, ParameterSet, SpeedDistribution, PASS_SHARPNESS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_slider_session() {
    let mut sim = Simulation::new(&config(21)).unwrap();
    let initial_demand = sim.effective_demand();

    // Halving teacher skill doubles demand
    sim.adjust(SliderUpdate {
        parameter: Parameter::TeacherSkill,
        value: 0.425,
    })
    .unwrap();
    assert!((sim.effective_demand() - 2.0 * initial_demand).abs() < 1e-9);

    // Dragging class size past the end of the slider clamps to 40
    let outcome = sim
        .adjust(SliderUpdate {
            parameter: Parameter::ClassSize,
            value: 55.0,
        })
        .unwrap();
    assert!(outcome.regenerated);
    assert_eq!(outcome.clamped.len(), 1);
    assert_eq!(sim.current_results().len(), 40);

    assert_eq!(sim.trend_snapshot().len(), 3);
}

#[test]
fn test_empirical_rate_tracks_prediction_for_large_class() {
    let dist = SpeedDistribution::default();
    let mut rng = StdRng::seed_from_u64(5);
    let pop = Population::generate(&mut rng, 20_000, &dist).unwrap();

    // Cut-off at the mean: about half fail
    let demand = 1.1;
    let results = recompute(pop.speeds(), demand, 1.0, PASS_SHARPNESS);
    let empirical = aggregate_fail_rate(&results);
    let predicted = predicted_fail_rate(demand, dist.mean, dist.std_dev, 1.0);
    assert!((empirical - predicted).abs() < 0.02, "{empirical} vs {predicted}");
}

#[test]
fn test_rates_stay_in_unit_interval_across_grid() {
    let mut sim = Simulation::new(&config(8)).unwrap();
    for class_size in [5.0, 20.0, 40.0] {
        for skill in [0.1, 0.55, 1.0] {
            for time in [30.0, 75.0, 120.0] {
                let params = ParameterSet::default()
                    .with(Parameter::ClassSize, class_size)
                    .with(Parameter::TeacherSkill, skill)
                    .with(Parameter::TimeAllotted, time);
                let outcome = sim.set_parameters(params).unwrap();
                assert!(outcome.demand > 0.0);
                assert!((0.0..=1.0).contains(&outcome.fail_rate));
                assert!((0.0..=1.0).contains(&outcome.predicted_fail_rate));
                assert_eq!(
                    outcome.demand,
                    DemandModel::effective_demand(sim.parameters()).unwrap()
                );
            }
        }
    }
    assert!(sim.trend_snapshot().len() <= 50);
}
