//! Simulation state
//!
//! Owns the accepted parameters, the drawn population, the random source,
//! the latest results and the fail-rate trend. A UI drives it through
//! [`Simulation::set_parameters`] (or [`Simulation::adjust`] for a single
//! slider) and reads the results back; nothing recomputes implicitly.

use classroom_common::{
    Parameter, ParameterInput, ParameterSet, RangeError, Result, SpeedDistribution,
    HISTOGRAM_BINS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::demand::DemandModel;
use crate::estimator::predicted_fail_rate;
use crate::population::{
    aggregate_fail_rate, histogram, mean_ratio, passing_count, HistogramBin, Population,
    StudentResult,
};
use crate::trend::{TrendSample, TrendTracker};
use crate::SimulationConfig;

/// A single slider write
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderUpdate {
    pub parameter: Parameter,
    pub value: f64,
}

/// What one accepted parameter change produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeOutcome {
    pub demand: f64,
    pub fail_rate: f64,
    pub predicted_fail_rate: f64,
    /// Population was redrawn because the class size changed
    pub regenerated: bool,
    /// Fields that were clamped into range
    pub clamped: Vec<RangeError>,
}

/// Figures for an info panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatus {
    pub students: u32,
    pub teacher_skill: f64,
    pub curriculum_content: f64,
    pub time_allotted: f64,
    pub passing_threshold: f64,
    pub demand: f64,
    pub fail_rate: f64,
    pub predicted_fail_rate: f64,
    pub mean_ratio: f64,
    pub passing: usize,
    pub generation: u64,
    pub steps: u64,
}

pub struct Simulation {
    params: ParameterSet,
    distribution: SpeedDistribution,
    sharpness: f64,
    rng: StdRng,
    population: Population,
    results: Vec<StudentResult>,
    demand: f64,
    trend: TrendTracker,
    generation: u64,
    steps: u64,
}

impl Simulation {
    /// Build the initial state: clamp the configured parameters, draw a
    /// population and run the first recompute.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.distribution.validate()?;

        let (params, corrections) = config.parameters.clamped();
        if !corrections.is_empty() {
            warn!(count = corrections.len(), "Initial parameters clamped");
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population = Population::generate(&mut rng, params.class_size, &config.distribution)?;
        let demand = DemandModel::effective_demand(&params)?;

        let mut sim = Self {
            params,
            distribution: config.distribution,
            sharpness: config.pass_sharpness,
            rng,
            population,
            results: Vec::new(),
            demand,
            trend: TrendTracker::new(config.trend_capacity),
            generation: 1,
            steps: 0,
        };
        sim.refresh();

        info!(
            class_size = params.class_size,
            demand,
            fail_rate = sim.current_fail_rate(),
            seeded = config.seed.is_some(),
            "Simulation initialized"
        );
        Ok(sim)
    }

    /// Accept externally supplied parameters: clamp, then recompute.
    pub fn set_parameters(&mut self, params: impl Into<ParameterInput>) -> Result<RecomputeOutcome> {
        self.accept(params.into())
    }

    /// Apply a single slider write on top of the current parameters.
    ///
    /// A NaN write is ignored: nothing is recomputed or recorded and the
    /// current outcome is returned.
    pub fn adjust(&mut self, update: SliderUpdate) -> Result<RecomputeOutcome> {
        if update.value.is_nan() {
            debug!(parameter = %update.parameter, "Ignoring NaN slider write");
            return Ok(self.current_outcome(false));
        }
        self.accept(ParameterInput::from(self.params).with(update.parameter, update.value))
    }

    #[instrument(skip(self))]
    fn accept(&mut self, input: ParameterInput) -> Result<RecomputeOutcome> {
        let (params, clamped) = input.clamped();
        let mut outcome = self.on_parameters_changed(params)?;
        outcome.clamped = clamped;
        Ok(outcome)
    }

    /// Recompute for parameters that have already been validated.
    ///
    /// Redraws the population only when the class size changed. If the
    /// demand cannot be computed the call fails without touching any state,
    /// so the caller can skip the frame and keep serving the last results.
    pub fn on_parameters_changed(&mut self, params: ParameterSet) -> Result<RecomputeOutcome> {
        let demand = DemandModel::effective_demand(&params)?;

        let regenerated = params.class_size != self.params.class_size;
        if regenerated {
            let population =
                Population::generate(&mut self.rng, params.class_size, &self.distribution)?;
            info!(
                from = self.params.class_size,
                to = params.class_size,
                "Class size changed, regenerating population"
            );
            self.population = population;
            self.generation += 1;
        }

        self.params = params;
        self.demand = demand;
        self.refresh();

        Ok(self.current_outcome(regenerated))
    }

    /// Redraw learning speeds at the current class size
    pub fn reset_population(&mut self) -> Result<RecomputeOutcome> {
        self.population =
            Population::generate(&mut self.rng, self.params.class_size, &self.distribution)?;
        self.generation += 1;
        self.refresh();
        info!(generation = self.generation, "Population reset");

        Ok(self.current_outcome(true))
    }

    fn current_outcome(&self, regenerated: bool) -> RecomputeOutcome {
        RecomputeOutcome {
            demand: self.demand,
            fail_rate: self.current_fail_rate(),
            predicted_fail_rate: self.predicted_fail_rate(),
            regenerated,
            clamped: Vec::new(),
        }
    }

    fn refresh(&mut self) {
        self.results =
            self.population
                .recompute(self.demand, self.params.passing_threshold, self.sharpness);
        let fail_rate = aggregate_fail_rate(&self.results);
        self.trend.record_sample(TrendSample {
            fail_rate,
            mean_ratio: Some(mean_ratio(&self.results)),
            demand: Some(self.demand),
        });
        self.steps += 1;
        debug!(step = self.steps, demand = self.demand, fail_rate, "Recomputed");
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    pub fn distribution(&self) -> &SpeedDistribution {
        &self.distribution
    }

    pub fn speeds(&self) -> &[f64] {
        self.population.speeds()
    }

    pub fn effective_demand(&self) -> f64 {
        self.demand
    }

    /// One entry per student, in population order
    pub fn current_results(&self) -> &[StudentResult] {
        &self.results
    }

    pub fn current_fail_rate(&self) -> f64 {
        aggregate_fail_rate(&self.results)
    }

    /// Analytic fail rate for the current demand and speed distribution
    pub fn predicted_fail_rate(&self) -> f64 {
        predicted_fail_rate(
            self.demand,
            self.distribution.mean,
            self.distribution.std_dev,
            self.params.passing_threshold,
        )
    }

    pub fn trend_snapshot(&self) -> Vec<f64> {
        self.trend.snapshot()
    }

    pub fn trend(&self) -> &TrendTracker {
        &self.trend
    }

    pub fn histogram(&self) -> Vec<HistogramBin> {
        histogram(&self.results, HISTOGRAM_BINS, self.params.passing_threshold)
    }

    pub fn status(&self) -> SimulationStatus {
        SimulationStatus {
            students: self.params.class_size,
            teacher_skill: self.params.teacher_skill,
            curriculum_content: self.params.curriculum_content,
            time_allotted: self.params.time_allotted,
            passing_threshold: self.params.passing_threshold,
            demand: self.demand,
            fail_rate: self.current_fail_rate(),
            predicted_fail_rate: self.predicted_fail_rate(),
            mean_ratio: mean_ratio(&self.results),
            passing: passing_count(&self.results),
            generation: self.generation,
            steps: self.steps,
        }
    }
}
