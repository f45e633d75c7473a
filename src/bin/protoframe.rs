//! protoframe CLI
//!
//! Renders a component tree into a fresh destination frame and prints the
//! frame as JSON.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use protoframe::protocol::RenderPayload;
use protoframe::scene::{FontName, FontStyle};
use protoframe::{
    BuiltinIcons, Catalog, RendererConfig, SessionController, StaticFonts, SystemFonts,
    init_logging,
};
use tracing::{Level, info};

/// Render a JSON component tree into design-tool nodes
#[derive(Parser)]
#[command(name = "protoframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Component tree file (JSON); reads stdin when absent
    input: Option<PathBuf>,

    /// Device class of the destination frame (Mobile, Tablet, Desktop)
    #[arg(short, long, default_value = "Mobile")]
    device: String,

    /// Prompt text used to name the destination frame
    #[arg(short, long, default_value = "")]
    prompt: String,

    /// Renderer configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve fonts against the faces installed on this system
    #[arg(long)]
    system_fonts: bool,

    /// Print the component catalog description and exit
    #[arg(long)]
    describe: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    if cli.describe {
        println!("{}", Catalog::builtin().describe());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => RendererConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => RendererConfig::default(),
    };

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut session = if cli.system_fonts {
        SessionController::new(config, SystemFonts::load(), BuiltinIcons)
    } else {
        // Assume every configured family is present in every style.
        let fonts = StaticFonts::new(config.font_families.iter().flat_map(|family| {
            [FontStyle::Regular, FontStyle::Medium, FontStyle::Bold].map(|style| FontName {
                family: family.clone(),
                style,
            })
        }));
        SessionController::new(config, fonts, BuiltinIcons)
    };

    let frame = session.start(&cli.prompt, &cli.device);
    let result = session.render(RenderPayload::Text(input));
    for message in session.take_notifications() {
        eprintln!("{message}");
    }
    let report = result?;
    session.finish()?;
    info!(
        nodes = report.node_count,
        built = report.diagnostics.built,
        failures = report.diagnostics.failures.len(),
        "render finished"
    );

    if let Some(frame) = session.canvas().frame(frame) {
        println!("{}", serde_json::to_string_pretty(frame)?);
    }
    Ok(())
}
