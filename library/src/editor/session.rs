//! Edit-session scripts: a JSON description of one editing session that can
//! be replayed against an [`EditorService`]. Used by the dry-run driver to
//! show the render request a session would submit, without touching media.

use serde::{Deserialize, Serialize};

use crate::editor::editor_service::EditorService;
use crate::editor::export::RenderRequest;
use crate::error::StudioError;
use crate::model::effect::{Effect, Transition};
use crate::model::source::MediaRef;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    Cut { start: String, end: String },
    Transition { name: Transition },
    Effect { name: Effect },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SessionScript {
    pub source: MediaRef,
    /// Probed source duration; the session default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub operations: Vec<EditOp>,
}

impl SessionScript {
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replays the script: load, then each operation in order. Stops at the
    /// first failing operation, since later ones would act on state the user
    /// never saw.
    pub async fn run(&self, service: &EditorService) -> Result<(), StudioError> {
        service.load_source_with_default(self.source.clone(), self.duration_ms)?;
        for op in &self.operations {
            match op {
                EditOp::Cut { start, end } => {
                    service.cut_str(start, end).await?;
                }
                EditOp::Transition { name } => {
                    service.add_transition(*name)?;
                }
                EditOp::Effect { name } => {
                    service.add_effect(*name)?;
                }
            }
        }
        Ok(())
    }

    /// Replays the script and returns the render request the session would
    /// submit on export.
    pub async fn plan(&self, service: &EditorService) -> Result<RenderRequest, StudioError> {
        self.run(service).await?;
        service.with_timeline(RenderRequest::from_timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{PlanOnlyRenderService, PlanOnlyTrimService};
    use std::sync::Arc;

    fn setup_service() -> EditorService {
        EditorService::new(
            Arc::new(PlanOnlyTrimService::new("EditedVideos")),
            Arc::new(PlanOnlyRenderService::new("EditedVideos")),
        )
    }

    #[tokio::test]
    async fn test_script_replay_builds_expected_request() {
        let json = r#"{
            "source": "clips/a.mp4",
            "duration_ms": 30000,
            "operations": [
                {"op": "cut", "start": "0:05", "end": "0:15"},
                {"op": "transition", "name": "fade"},
                {"op": "effect", "name": "sepia"}
            ]
        }"#;
        let script = SessionScript::from_json(json).unwrap();
        let service = setup_service();

        let request = script.plan(&service).await.unwrap();
        assert_eq!(request.len(), 2);
        assert_eq!(request.clips[0].source, MediaRef::from("clips/a.mp4"));
        assert_eq!(request.clips[0].effects, vec![Effect::Sepia]);
        assert_eq!(request.clips[1].end_ms, 10_000);
        assert_eq!(request.clips[1].transition_in, Some(Transition::Fade));
    }

    #[tokio::test]
    async fn test_script_stops_at_first_invalid_operation() {
        let json = r#"{
            "source": "clips/a.mp4",
            "operations": [
                {"op": "transition", "name": "fade"},
                {"op": "cut", "start": "0:00", "end": "0:05"}
            ]
        }"#;
        let script = SessionScript::from_json(json).unwrap();
        let service = setup_service();

        // One clip only: the transition precondition fails and the cut
        // after it never runs.
        assert!(script.run(&service).await.is_err());
        assert_eq!(service.snapshot().len(), 1);
    }

    #[test]
    fn test_unknown_operation_name_rejected() {
        let json = r#"{
            "source": "clips/a.mp4",
            "operations": [{"op": "reorder", "from": 1, "to": 0}]
        }"#;
        assert!(matches!(
            SessionScript::from_json(json),
            Err(StudioError::Json(_))
        ));
    }
}
