use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod scene;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG directives are parsed last so they win over --log-level
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let config = args
        .render_config()
        .context("Failed to resolve render config")?;

    let world = scene::demo_world();
    let camera = scene::demo_camera(&world, &config, args.aperture);

    let image = prism_renderer::render(&camera, &config).context("Render failed")?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
