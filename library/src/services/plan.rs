//! Dry-run service implementations.
//!
//! These never touch media bytes: they synthesize the output references a
//! real backend would produce, which is enough for the planning driver and
//! for exercising the full edit flow in tests.

use async_trait::async_trait;
use rand::Rng;

use super::{RenderService, TrimService};
use crate::editor::export::RenderRequest;
use crate::error::StudioError;
use crate::model::source::MediaRef;

/// Output file name in the original recorder's scheme:
/// `<prefix>_<yyyyMMdd_HHmmss>_<4-digit random>.mp4`.
pub fn output_file_name(prefix: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let random_id: u32 = rand::rng().random_range(1000..10000);
    format!("{}_{}_{}.mp4", prefix, timestamp, random_id)
}

pub struct PlanOnlyTrimService {
    output_dir: String,
}

impl PlanOnlyTrimService {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl TrimService for PlanOnlyTrimService {
    async fn trim(
        &self,
        source: &MediaRef,
        start_ms: u64,
        end_ms: u64,
    ) -> Result<MediaRef, StudioError> {
        log::debug!(
            "Planned trim of {} [{}ms, {}ms)",
            source,
            start_ms,
            end_ms
        );
        Ok(MediaRef::new(format!(
            "{}/{}",
            self.output_dir,
            output_file_name("cut")
        )))
    }
}

pub struct PlanOnlyRenderService {
    output_dir: String,
}

impl PlanOnlyRenderService {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl RenderService for PlanOnlyRenderService {
    async fn render(&self, request: &RenderRequest) -> Result<MediaRef, StudioError> {
        log::debug!("Planned render of {} clips", request.len());
        Ok(MediaRef::new(format!(
            "{}/{}",
            self.output_dir,
            output_file_name("merged")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_shape() {
        let name = output_file_name("cut");
        assert!(name.starts_with("cut_"));
        assert!(name.ends_with(".mp4"));
        // prefix + timestamp + 4-digit random id
        assert_eq!(name.split('_').count(), 4);
    }

    #[tokio::test]
    async fn test_planned_trim_names_an_output() {
        let service = PlanOnlyTrimService::new("EditedVideos");
        let out = service
            .trim(&MediaRef::from("a.mp4"), 5_000, 15_000)
            .await
            .unwrap();
        assert!(out.as_str().starts_with("EditedVideos/cut_"));
    }
}
