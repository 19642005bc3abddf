use crate::{
    Error, Result,
    input::FeatureInput,
    model::RegressionModel,
    predictor::{PredictionResult, predict_price},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    Idle,
    PredictionShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    PredictTriggered,
}

/// One pass from widget state to page output. Nothing carries over between
/// cycles; every request starts a fresh one in [`DashboardState::Idle`].
#[derive(Debug, Clone)]
pub struct RenderCycle {
    id: Uuid,
    state: DashboardState,
    input: FeatureInput,
    prediction: Option<PredictionResult>,
}

impl RenderCycle {
    pub fn new(input: FeatureInput) -> Self {
        let id = Uuid::new_v4();
        debug!(cycle = %id, "Starting render cycle");
        Self {
            id,
            state: DashboardState::Idle,
            input,
            prediction: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_state(&self) -> DashboardState {
        self.state
    }

    pub fn input(&self) -> &FeatureInput {
        &self.input
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    /// State reached from the current one on `event`, without applying it.
    pub fn next_state(&self, event: DashboardEvent) -> Result<DashboardState> {
        match (self.state, event) {
            (DashboardState::Idle, DashboardEvent::PredictTriggered) => {
                Ok(DashboardState::PredictionShown)
            }
            (current, event) => {
                warn!(
                    cycle = %self.id,
                    "Invalid dashboard transition from {:?} with event {:?}",
                    current, event
                );
                Err(Error::InvalidTransition {
                    current: format!("{current:?}"),
                    requested: format!("{event:?}"),
                })
            }
        }
    }

    pub fn transition(&mut self, event: DashboardEvent) -> Result<()> {
        let new_state = self.next_state(event)?;

        info!(
            cycle = %self.id,
            "Dashboard state transition: {:?} -> {:?}",
            self.state, new_state
        );
        self.state = new_state;
        Ok(())
    }

    /// Runs the predictor once and moves to `PredictionShown`. A model failure
    /// leaves the cycle in `Idle` and is returned to the caller.
    pub fn trigger_prediction(&mut self, model: &dyn RegressionModel) -> Result<&PredictionResult> {
        self.next_state(DashboardEvent::PredictTriggered)?;

        let result = predict_price(model, &self.input)?;
        self.transition(DashboardEvent::PredictTriggered)?;
        Ok(&*self.prediction.insert(result))
    }
}
