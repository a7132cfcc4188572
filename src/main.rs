use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use widget_config::render::{self, DEFAULT_GLOBAL_NAME};
use widget_config::{Config, Deployment, Target};

/// Render the chat widget configuration as a frontend artifact
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Packaging: module (CommonJS export), global (script binding) or json
    #[arg(short, long, default_value_t = Target::Module)]
    target: Target,

    /// Backend to point the widget at
    #[arg(short, long, default_value_t = Deployment::ACTIVE)]
    deployment: Deployment,

    /// Name of the global binding for the `global` target
    #[arg(long, default_value = DEFAULT_GLOBAL_NAME)]
    global_name: String,

    /// Output file or directory, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Brotli-compress the artifact (requires --output)
    #[arg(long, requires = "output")]
    brotli: bool,

    #[arg(
        short,
        long,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// A directory output gets the conventional artifact name inside it.
fn artifact_path(output: &Path, target: Target, brotli: bool) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let mut name = target.file_name().to_string();
    if brotli {
        name.push_str(".br");
    }
    output.join(name)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::for_deployment(args.deployment);
    info!(
        deployment = %args.deployment,
        target = %args.target,
        api_base_url = config.api_base_url,
        "rendering configuration"
    );
    for (endpoint, path) in config.endpoints.iter() {
        debug!(%endpoint, url = %config.url(endpoint), path, "endpoint");
    }

    let rendered = render::render(&config, args.target, &args.global_name)
        .with_context(|| format!("failed to render {} artifact", args.target))?;

    let data = if args.brotli {
        let compressed = render::compress(rendered.as_bytes()).context("brotli compression failed")?;
        info!(
            original = rendered.len(),
            compressed = compressed.len(),
            "compressed artifact"
        );
        compressed
    } else {
        rendered.into_bytes()
    };

    match args.output.as_deref() {
        Some(path) => {
            let path = artifact_path(path, args.target, args.brotli);
            fs::write(&path, &data)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), bytes = data.len(), "artifact written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
