//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic for a whole use case and return
//! serializable result structs for the CLI to render.

mod scenario;

pub use scenario::{Operation, ScenarioReport, ScenarioService, StepRecord};
