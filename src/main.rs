#![allow(non_snake_case)]

mod app;
mod assets;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use bizcard_core::{CardConfig, DocumentMeta, Profile};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::assets::AssetStore;
use crate::context::AppContext;

/// Startup context, set once from the command line before launch
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Get the startup context (built-in defaults if launch did not set one)
pub fn get_app_context() -> AppContext {
    APP_CONTEXT.get().cloned().unwrap_or_else(|| AppContext {
        profile: Profile::default(),
        assets: AssetStore::new(default_assets_dir()),
        config: CardConfig::default(),
    })
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Business card - interactive personal bio
#[derive(Parser, Debug)]
#[command(name = "bizcard-desktop")]
#[command(about = "Interactive business card bio page")]
struct Args {
    /// Directory holding img/logo.png and img/icons/*.svg
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// JSON file replacing the built-in card content
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 640.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let profile = match args.profile {
        Some(ref path) => Profile::load(path)
            .with_context(|| format!("failed to load profile from {}", path.display()))?,
        None => Profile::default(),
    };

    let assets_dir = args.assets_dir.unwrap_or_else(default_assets_dir);
    if !assets_dir.is_dir() {
        tracing::warn!("Assets directory {:?} not found, images will fall back to text", assets_dir);
    }

    let _ = APP_CONTEXT.set(AppContext {
        profile,
        assets: AssetStore::new(assets_dir.clone()),
        config: CardConfig::default(),
    });

    let meta = DocumentMeta::default();
    tracing::info!("Starting '{}' with assets dir: {:?}", meta.title, assets_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(meta.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
