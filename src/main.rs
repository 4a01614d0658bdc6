extern crate castlib;

mod cli;

use anyhow::Context;
use castlib::{render, Scene};
use clap::Parser;
use cli::Args;
use log::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    let config = args.render_config();
    let scene = Scene::demo().context("failed to build the demo scene")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .context("failed to start the render thread pool")?;
    let framebuffer = pool
        .install(|| render(&config, &scene))
        .context("invalid render parameters")?;

    framebuffer
        .save_png(&args.output, args.tone_map.into())
        .with_context(|| format!("failed to write {}", args.output))?;
    info!("done");
    Ok(())
}
