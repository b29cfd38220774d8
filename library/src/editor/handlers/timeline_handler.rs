use std::sync::{Arc, RwLock};

use crate::error::StudioError;
use crate::model::clip::Clip;
use crate::model::effect::{Effect, Transition};
use crate::model::timeline::Timeline;

/// Lock acquisition and error mapping for timeline mutations, so the service
/// layer never touches the RwLock directly.
pub struct TimelineHandler;

impl TimelineHandler {
    pub fn append_clip(timeline: &Arc<RwLock<Timeline>>, clip: Clip) -> Result<(), StudioError> {
        let mut tl = timeline
            .write()
            .map_err(|_| StudioError::Runtime("Lock Poisoned".to_string()))?;
        tl.append(clip);
        Ok(())
    }

    pub fn set_last_transition(
        timeline: &Arc<RwLock<Timeline>>,
        transition: Transition,
    ) -> Result<(), StudioError> {
        let mut tl = timeline
            .write()
            .map_err(|_| StudioError::Runtime("Lock Poisoned".to_string()))?;
        tl.set_last_transition(transition)
    }

    pub fn apply_effect_to_first(
        timeline: &Arc<RwLock<Timeline>>,
        effect: Effect,
    ) -> Result<bool, StudioError> {
        let mut tl = timeline
            .write()
            .map_err(|_| StudioError::Runtime("Lock Poisoned".to_string()))?;
        Ok(tl.apply_effect_to_first(effect))
    }
}
