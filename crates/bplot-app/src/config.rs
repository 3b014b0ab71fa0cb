use winit::dpi::LogicalSize;

use bplot_engine::logging::LoggingConfig;
use bplot_engine::paint::Color;
use bplot_engine::time::FixedStep;
use bplot_engine::window::RuntimeConfig;

/// Viewer settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,

    /// Fixed updates per simulated second. Placeholder physics is tuned for 60.
    pub fixed_updates_per_second: u32,
    /// Upper bound on fixed updates run in one frame.
    pub max_fixed_updates_per_frame: u32,

    pub clear_color: Color,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "BenchmarkPlotter".to_string(),
            width: 1280.0,
            height: 720.0,
            fixed_updates_per_second: 60,
            max_fixed_updates_per_frame: 8,
            clear_color: Color::BLACK,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }

    pub fn fixed_step(&self) -> FixedStep {
        FixedStep::per_second(self.fixed_updates_per_second).with_max_steps(self.max_fixed_updates_per_frame)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn defaults_match_the_viewer_window() {
        let config = AppConfig::default();
        let runtime = config.runtime_config();

        assert_eq!(runtime.title, "BenchmarkPlotter");
        assert_eq!(runtime.initial_size, LogicalSize::new(1280.0, 720.0));
    }

    #[test]
    fn fixed_step_is_one_sixtieth() {
        let step = AppConfig::default().fixed_step();
        let expected = Duration::from_secs_f64(1.0 / 60.0);
        assert_eq!(step.step(), expected);
    }
}
