//! # Huefield CLI
//!
//! Command-line interface for rendering gradient images.
//!
//! ## Usage
//!
//! ```bash
//! # List available styles
//! huefield styles
//!
//! # Horizontal gradient
//! huefield render --color '#ff0000' --color '#0000ff' -o basic.png
//!
//! # Rotated gradient
//! huefield render --style tilted --angle 30 --color navy --color gold -o tilted.png
//!
//! # Noise gradient with a fixed seed
//! huefield render --style noise --seed 42 --color '#1b2a49' --color '#f7d488' -o noise.png
//!
//! # Options from a JSON file, overriding the size
//! huefield render --config options.json --width 1920 --height 1080 -o wallpaper.png
//!
//! # HTTP preview server
//! huefield serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

use huefield::{
    HuefieldError, RenderOptions, Style,
    render,
    server::{self, ServerConfig},
};

/// Huefield - Gradient image renderer
#[derive(Parser, Debug)]
#[command(name = "huefield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a gradient to an image file
    Render {
        /// Read base options from a JSON file (flags override)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Gradient style: basic, tilted or noise
        #[arg(long)]
        style: Option<String>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Rotation angle in degrees (tilted style)
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,

        /// Noise seed (noise style)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "random_seed")]
        seed: Option<i64>,

        /// Draw a random noise seed (default for noise style without --config)
        #[arg(long)]
        random_seed: bool,

        /// Color stop, repeat for each stop (hex or CSS name)
        #[arg(long = "color", value_name = "COLOR")]
        colors: Vec<String>,

        /// Output file; format follows the extension
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// List available styles
    Styles,

    /// Start the HTTP preview server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Largest width × height accepted per render
        #[arg(long, default_value_t = server::DEFAULT_MAX_PIXELS)]
        max_pixels: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HuefieldError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            style,
            width,
            height,
            angle,
            seed,
            random_seed,
            colors,
            output,
        } => {
            let from_file = config.is_some();
            let mut options = match config {
                Some(path) => RenderOptions::from_json_file(&path)?,
                None => RenderOptions::new(800, 600, Style::Basic.name(), Vec::<String>::new()),
            };

            if let Some(style) = style {
                options.style = style;
            }
            if let Some(width) = width {
                options.width = width;
            }
            if let Some(height) = height {
                options.height = height;
            }
            if let Some(angle) = angle {
                options.tilt_angle = angle;
            }
            if !colors.is_empty() {
                options.colors = colors;
            }

            if let Some(seed) = seed {
                options.noise_seed = seed;
            } else if random_seed || (!from_file && options.style == Style::Noise.name()) {
                options.noise_seed = rand::rng().random();
                println!("Noise seed: {}", options.noise_seed);
            }

            info!(
                style = %options.style,
                width = options.width,
                height = options.height,
                "rendering"
            );

            let img = render::draw(&options)?;
            img.save(&output).map_err(|e| {
                HuefieldError::Image(format!("Failed to save {}: {}", output.display(), e))
            })?;
            println!("Saved to {}", output.display());
        }

        Commands::Styles => {
            println!("Available styles:");
            for style in Style::ALL {
                println!("  {}", style);
            }
        }

        Commands::Serve { listen, max_pixels } => {
            let config = ServerConfig {
                listen_addr: listen,
                max_pixels,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
