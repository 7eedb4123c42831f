//! # Classroom Sim
//!
//! Headless service around the classroom capacity model.
//!
//! A slider UI (any toolkit) drives the model over JSON: each write is
//! clamped, recomputed and appended to the fail-rate trend; reads return
//! per-student results, the empirical and predicted fail rates, the
//! histogram and the trend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   PUT /parameters    ┌────────────────────────────┐
//! │   Slider UI  │ ───────────────────▶ │ Arc<RwLock<Simulation>>    │
//! │  (external)  │ ◀─────────────────── │  ParameterSet → Demand     │
//! └──────────────┘  GET /results,/trend │  → Population → Trend      │
//!                                       └────────────────────────────┘
//! ```

pub mod api;
pub mod config;

pub use api::{router, AppState};
pub use config::SimConfig;

/// Service version
pub const SIM_VERSION: &str = env!("CARGO_PKG_VERSION");
