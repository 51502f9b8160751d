// File: crates/wavelab-demo/src/main.rs
// Summary: CLI that renders the AM plot, its legend, and the thermostat visualizer to PNGs.

mod export;

use std::cell::Cell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wavelab_core::config::{AmConfig, ThermostatConfig};
use wavelab_core::{
    render_on, AmScene, Bitmap, LabConfig, LegendScene, PlotResult, RenderTrigger, Scene, Theme, ThermostatScene,
    TriggerDispatcher,
};
use wavelab_render_skia::SkiaSurface;

#[derive(Parser, Debug)]
#[command(name = "wavelab")]
#[command(about = "Render amplitude-modulation and thermostat demonstrations to PNG", long_about = None)]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for rendered files
    #[arg(long, global = true, default_value = "target/out")]
    out_dir: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Carrier and envelope plot plus legend
    Am(AmArgs),
    /// Thermostat circuit at one slider position, re-rendered per width
    Thermostat(ThermostatArgs),
    /// Both, from config values only
    All,
}

#[derive(ClapArgs, Debug, Default)]
struct AmArgs {
    /// Carrier angular frequency
    #[arg(long)]
    carrier: Option<f64>,
    /// Comma-separated modulating angular frequencies
    #[arg(long)]
    modulators: Option<String>,
    /// Modulation depth
    #[arg(long)]
    depth: Option<f64>,
    /// Also dump the sampled curves as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
struct ThermostatArgs {
    /// Slider position, 0..=100
    #[arg(long)]
    slider: Option<f64>,
    /// Circuit schematic image (PNG/JPEG)
    #[arg(long)]
    circuit: Option<PathBuf>,
    /// Article widths to resize through after the initial render
    #[arg(long, value_delimiter = ',')]
    widths: Vec<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let config = match &args.config {
        Some(path) => LabConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => LabConfig::default(),
    };
    let theme = config.theme();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output dir '{}'", args.out_dir.display()))?;

    match args.command {
        Command::Am(am) => run_am(&config, am, theme, &args.out_dir),
        Command::Thermostat(t) => run_thermostat(&config.thermostat, t, theme, &args.out_dir),
        Command::All => {
            run_am(&config, AmArgs::default(), theme, &args.out_dir)?;
            run_thermostat(&config.thermostat, ThermostatArgs::default(), theme, &args.out_dir)
        }
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact();
    let init = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("opening log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(std::sync::Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    init.map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}

/// Render `scene` into a fresh `width` x `height` surface and write it as PNG.
/// An unavailable surface skips the write.
fn render_png(scene: &dyn Scene, width: u32, height: u32, out: &Path) -> PlotResult<()> {
    let mut surface = SkiaSurface::new(width, height);
    if render_on(scene, surface.as_mut())? {
        if let Some(s) = surface.as_mut() {
            s.write_png(out)?;
            info!(scene = scene.name(), path = %out.display(), "wrote");
        }
    }
    Ok(())
}

fn am_config_with(base: &AmConfig, args: &AmArgs) -> AmConfig {
    let mut cfg = base.clone();
    if let Some(c) = args.carrier { cfg.carrier_frequency = c; }
    if let Some(m) = &args.modulators { cfg.modulator_frequencies = m.clone(); }
    if let Some(d) = args.depth { cfg.depth = d; }
    cfg
}

fn run_am(config: &LabConfig, args: AmArgs, theme: Theme, out_dir: &Path) -> Result<()> {
    let am = am_config_with(&config.am, &args);
    let scene: AmScene = am.scene(theme).context("invalid AM parameters")?;
    let legend = LegendScene::for_am(&theme);
    info!(
        carrier = am.carrier_frequency,
        modulators = %am.modulator_frequencies,
        depth = am.depth,
        "am parameters"
    );

    let plot_out = out_dir.join("am.png");
    let legend_out = out_dir.join("am_legend.png");
    let mut dispatcher = TriggerDispatcher::new();
    dispatcher
        .on(RenderTrigger::Load, "legend", || render_png(&legend, config.legend.width, config.legend.height, &legend_out))
        .on(RenderTrigger::Load, "am", || render_png(&scene, am.width, am.height, &plot_out));
    dispatcher.fire(RenderTrigger::Load)?;
    drop(dispatcher);

    if let Some(csv_path) = &args.csv {
        let rows = export::write_samples(csv_path, &scene, am.width, am.height)
            .with_context(|| format!("writing CSV '{}'", csv_path.display()))?;
        info!(rows, path = %csv_path.display(), "wrote samples");
    }
    Ok(())
}

fn load_schematic(path: Option<&Path>, aspect: f64, theme: &Theme) -> Result<Bitmap> {
    match path {
        Some(p) => {
            let img = image::open(p)
                .with_context(|| format!("failed to load circuit image '{}'", p.display()))?
                .to_rgba8();
            let (w, h) = img.dimensions();
            Bitmap::from_rgba8(w, h, img.into_raw()).context("decoded image has unexpected length")
        }
        None => {
            let w = 400u32;
            let h = ((w as f64) * aspect).round().max(1.0) as u32;
            Ok(Bitmap::filled(w, h, theme.schematic_panel))
        }
    }
}

fn run_thermostat(config: &ThermostatConfig, args: ThermostatArgs, theme: Theme, out_dir: &Path) -> Result<()> {
    let mut cfg = config.clone();
    if let Some(s) = args.slider { cfg.slider = s; }
    let state = cfg.state();
    let schematic = load_schematic(args.circuit.as_deref(), cfg.image_aspect, &theme)?;
    let scene = ThermostatScene { state, schematic, theme };
    info!(
        temperature = %state.readout_text(),
        color = %state.readout_color().to_hex(),
        thermistor_kohm = state.thermistor_kohm(),
        divider_volts = state.divider_volts(),
        comparator_volts = state.comparator_volts(),
        "thermostat state"
    );

    let article_width = Cell::new(cfg.article_width);
    let render_at = |width: f64| -> PlotResult<()> {
        let (w, h) = scene.layout_for(width).surface_size();
        render_png(&scene, w, h, &out_dir.join(format!("thermostat_{}.png", width.round() as i64)))
    };

    let mut dispatcher = TriggerDispatcher::new();
    dispatcher
        .on(RenderTrigger::Load, "thermostat", || render_at(article_width.get()))
        .on(RenderTrigger::Resize, "thermostat", || render_at(article_width.get()));
    dispatcher.fire(RenderTrigger::Load)?;
    for w in args.widths {
        article_width.set(w);
        dispatcher.fire(RenderTrigger::Resize)?;
    }
    Ok(())
}
