pub mod capture;
pub mod editor;
pub mod error;
pub mod model;
pub mod prompter;
pub mod services;
pub mod util;

pub use error::StudioError;

use std::sync::Arc;

use editor::{EditorService, RenderRequest, SessionScript};
use services::{PlanOnlyRenderService, PlanOnlyTrimService};

/// Replays an edit-session script (JSON) against plan-only services and
/// returns the render request the session would submit on export.
pub async fn plan_session_from_json(
    json: &str,
    output_dir: &str,
) -> Result<RenderRequest, StudioError> {
    let script = SessionScript::from_json(json)?;
    let service = EditorService::new(
        Arc::new(PlanOnlyTrimService::new(output_dir)),
        Arc::new(PlanOnlyRenderService::new(output_dir)),
    );
    script.plan(&service).await
}
