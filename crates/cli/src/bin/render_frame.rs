use std::path::PathBuf;

use clap::Parser;
use orbit_view::backend::render_png;
use orbit_view::export::frame::{Metadata, sidecar_path, write_commands};
use orbit_view::{RecordingCanvas, Renderer, Simulation, Snapshot};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render one orbit/perturbation frame of a scenario to PNG"
)]
struct Cli {
    /// Scenario file (YAML, or TOML by extension)
    #[arg(long)]
    scenario: PathBuf,

    #[arg(long, default_value = "artifacts/frame.png")]
    output: PathBuf,

    /// Canvas width in pixels (defaults to the scenario view)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (defaults to the scenario view)
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per metre (defaults to the scenario view)
    #[arg(long)]
    scale: Option<f64>,

    /// Zoom multiplier (defaults to the scenario view)
    #[arg(long)]
    zoom: Option<f64>,

    /// Write the recorded draw commands as JSON (`-` for stdout)
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Write the draw commands next to the PNG as `<stem>_commands.json`
    #[arg(long, default_value_t = false)]
    dump_commands: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let snapshot = Snapshot::load(&cli.scenario)?;
    let width = cli.width.unwrap_or(snapshot.view.width);
    let height = cli.height.unwrap_or(snapshot.view.height);
    let scale = cli.scale.unwrap_or(snapshot.view.scale_px_per_m);
    let zoom = cli.zoom.unwrap_or(snapshot.view.zoom);
    if width == 0 || height == 0 {
        return Err(anyhow::anyhow!("Canvas dimensions must be non-zero"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let renderer = Renderer::new(&snapshot, &snapshot.settings);
    render_png(&renderer, &cli.output, (width, height), scale, zoom)?;
    log::info!("wrote {}", cli.output.display());

    let commands_path = cli
        .commands
        .clone()
        .or_else(|| cli.dump_commands.then(|| sidecar_path(&cli.output)));
    if let Some(commands_path) = commands_path {
        let mut recorder = RecordingCanvas::new(width, height);
        let (center_x, center_y) = (width as f64 / 2.0, height as f64 / 2.0);
        renderer.render(&mut recorder, center_x, center_y, scale, zoom)?;
        let meta = Metadata {
            scenario: &snapshot.name,
            width,
            height,
            center_x,
            center_y,
            scale_px_per_m: scale,
            zoom,
        };
        write_commands(&commands_path, &meta, recorder.commands())?;
        log::info!("wrote {}", commands_path.display());
    }

    let effects = snapshot.effects();
    println!("=== Frame ===");
    println!("Scenario : {}", snapshot.name);
    println!("Canvas   : {}x{} px", width, height);
    println!("Scale    : {:.3e} px/m x {:.2}", scale, zoom);
    println!(
        "Effects  : lunar={} solar={} drag={} j2={} srp={}",
        effects.lunar, effects.solar, effects.drag, effects.j2, effects.srp
    );
    println!("Output   : {}", cli.output.display());
    Ok(())
}
