//! Teleprompter auto-scroll engine.
//!
//! Speed comes from a 0..=100 control mapped onto 0.1..=3.0 pixels per
//! frame. Sub-pixel amounts are accumulated across frames and only the
//! truncated whole-pixel position is ever handed to the display, so slow
//! speeds still creep forward instead of rounding to a standstill.

pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 3.0;
const DEFAULT_SPEED: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct ScrollEngine {
    speed: f32,
    accumulated: f32,
    running: bool,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            accumulated: 0.0,
            running: false,
        }
    }

    /// Maps slider progress (0..=100, clamped) onto the speed range.
    pub fn set_speed_percent(&mut self, percent: u8) {
        let p = percent.min(100) as f32;
        self.speed = MIN_SPEED + (p / 100.0) * (MAX_SPEED - MIN_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Back to the top, paused.
    pub fn restart(&mut self) {
        self.running = false;
        self.accumulated = 0.0;
    }

    /// Advances by `frames` animation frames and returns the new scroll
    /// position. A paused engine holds position.
    pub fn tick(&mut self, frames: u32) -> u32 {
        if self.running {
            self.accumulated += self.speed * frames as f32;
        }
        self.position_px()
    }

    /// Whole-pixel scroll offset; the fractional remainder stays
    /// accumulated.
    pub fn position_px(&self) -> u32 {
        self.accumulated as u32
    }
}

/// Script text plus the scroll engine and the input/preview toggle: when the
/// script editor is visible the camera view and overlay are hidden, and vice
/// versa.
#[derive(Clone, Debug, Default)]
pub struct Prompter {
    pub script: String,
    pub engine: ScrollEngine,
    input_visible: bool,
}

impl Prompter {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            engine: ScrollEngine::new(),
            input_visible: false,
        }
    }

    pub fn set_script(&mut self, script: impl Into<String>) {
        self.script = script.into();
    }

    pub fn toggle_input(&mut self) {
        self.input_visible = !self.input_visible;
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn overlay_visible(&self) -> bool {
        !self.input_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_mapping_endpoints() {
        let mut engine = ScrollEngine::new();
        engine.set_speed_percent(0);
        assert!((engine.speed() - 0.1).abs() < 1e-6);
        engine.set_speed_percent(100);
        assert!((engine.speed() - 3.0).abs() < 1e-6);
        engine.set_speed_percent(200);
        assert!((engine.speed() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_fractional_pixels_accumulate() {
        let mut engine = ScrollEngine::new();
        engine.play();
        // default speed 0.5 px/frame
        assert_eq!(engine.tick(1), 0);
        assert_eq!(engine.tick(1), 1);
        assert_eq!(engine.tick(1), 1);
        assert_eq!(engine.tick(1), 2);
    }

    #[test]
    fn test_paused_engine_holds_position() {
        let mut engine = ScrollEngine::new();
        engine.play();
        engine.tick(10);
        let position = engine.position_px();
        engine.pause();
        assert_eq!(engine.tick(10), position);
    }

    #[test]
    fn test_restart_rewinds_and_pauses() {
        let mut engine = ScrollEngine::new();
        engine.play();
        engine.tick(10);
        engine.restart();
        assert_eq!(engine.position_px(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_toggle_swaps_input_and_overlay() {
        let mut prompter = Prompter::new("Hello");
        assert!(prompter.overlay_visible());
        prompter.toggle_input();
        assert!(prompter.input_visible());
        assert!(!prompter.overlay_visible());
        prompter.toggle_input();
        assert!(prompter.overlay_visible());
    }
}
