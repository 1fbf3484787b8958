use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_renderer::{ConfigResult, RenderConfig};

/// Log levels selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Render the built-in demo scene with a stochastic path tracer")]
pub struct Args {
    /// JSON render config; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounces per path
    #[arg(long, short = 'd')]
    pub depth: Option<u32>,

    /// Base random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lens radius; 0 renders a pinhole camera
    #[arg(long, default_value_t = 0.0)]
    pub aperture: f32,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Logging level, still overridable through RUST_LOG
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Resolve the render config: file (or defaults), then flag overrides.
    pub fn render_config(&self) -> ConfigResult<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_renderer::ConfigError;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prism"]).expect("no flags should parse");
        assert_eq!(args.log_level, LogLevel::Info);
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.aperture, 0.0);
        assert_eq!(args.render_config().ok(), Some(RenderConfig::default()));
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "prism", "--width", "64", "--height", "32", "-s", "9", "-d", "3", "--seed", "7",
        ])
        .expect("flags should parse");

        let config = args.render_config().expect("overrides should validate");
        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.samples_per_pixel, 9);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let args = Args::try_parse_from(["prism", "--samples", "0"]).expect("flags should parse");
        assert!(matches!(args.render_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::try_parse_from(["prism", "--log-level", "debug"]).expect("flags should parse");
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert!(Args::try_parse_from(["prism", "--log-level", "loud"]).is_err());
    }
}
