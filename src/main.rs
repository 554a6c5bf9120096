//! Headless cloudscope player.
//!
//! Fetches a frame sequence (from the point generator or a JSON file),
//! plays it for a while and logs what a renderer would be asked to draw.
//! With `--point` it also writes that point's trajectory chart data.
//! `--key` presses go through the configured keybindings before playback.

use std::path::{Path, PathBuf};
use std::thread;

use clap::Parser;
use cloudscope::engine::{ChartBuffer, Command, RenderRequest, VisualizerEngine};
use cloudscope::error::CloudscopeError;
use cloudscope::frame::Frame;
use cloudscope::input::InputProcessor;
use cloudscope::options::Options;
use cloudscope::source::{
    FrameLoader, HttpFrameSource, JsonFileSource, LoadState,
};
use web_time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "cloudscope", about = "Play back a time-series point cloud")]
struct Cli {
    /// Point generator endpoint (overrides the options file).
    #[arg(long)]
    url: Option<String>,
    /// Read frames from a JSON file instead of the generator.
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Points per frame to request.
    #[arg(long)]
    num_points: Option<u32>,
    /// Spatial scale to request.
    #[arg(long)]
    scale: Option<f64>,
    /// Number of frames to request.
    #[arg(long)]
    num_frames: Option<u32>,
    /// TOML options preset.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Playback speed multiplier.
    #[arg(long)]
    speed: Option<f32>,
    /// How long to play, in seconds.
    #[arg(long, default_value_t = 5.0)]
    duration: f64,
    /// Select this point and export its trajectory.
    #[arg(long)]
    point: Option<usize>,
    /// Where to write the trajectory chart JSON.
    #[arg(long, requires = "point", default_value = "trajectory.json")]
    trajectory_out: PathBuf,
    /// Key to press once frames are loaded (repeatable, e.g. `ArrowRight`).
    #[arg(long = "key")]
    keys: Vec<String>,
    /// Write the resolved options to this TOML file.
    #[arg(long)]
    save_options: Option<PathBuf>,
    /// List the presets in this directory and exit.
    #[arg(long)]
    list_presets: Option<PathBuf>,
}

impl Cli {
    fn resolve_options(&self) -> Result<Options, CloudscopeError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if let Some(url) = &self.url {
            options.source.url.clone_from(url);
        }
        if let Some(n) = self.num_points {
            options.source.num_points = n;
        }
        if let Some(scale) = self.scale {
            options.source.scale = scale;
        }
        if let Some(n) = self.num_frames {
            options.source.num_frames = n;
        }
        if let Some(speed) = self.speed {
            options.playback.speed = speed;
        }
        options.validate()?;
        Ok(options)
    }

    fn spawn_loader(
        &self,
        options: &Options,
    ) -> Result<FrameLoader, CloudscopeError> {
        match &self.file {
            Some(path) => FrameLoader::spawn(JsonFileSource::new(path.clone())),
            None => FrameLoader::spawn(HttpFrameSource::new(
                options.source.url.clone(),
                options.source.request(),
            )),
        }
    }
}

/// Poll the loader the way a render loop would, logging while waiting.
fn await_frames(
    mut loader: FrameLoader,
    interval: Duration,
) -> Result<Vec<Frame>, CloudscopeError> {
    let started = Instant::now();
    let mut last_notice = started;
    loop {
        match loader.poll() {
            LoadState::Ready(frames) => return Ok(frames),
            LoadState::Failed(msg) => return Err(CloudscopeError::Fetch(msg)),
            LoadState::Finished => {
                return Err(CloudscopeError::Fetch(
                    "loader finished without a result".into(),
                ))
            }
            LoadState::Loading => {
                if last_notice.elapsed() >= Duration::from_secs(1) {
                    log::info!(
                        "Loading... ({:.0}s)",
                        started.elapsed().as_secs_f32()
                    );
                    last_notice = Instant::now();
                }
                thread::sleep(interval);
            }
        }
    }
}

fn log_request(request: &RenderRequest) {
    match request {
        RenderRequest::Progress(progress) => {
            log::debug!("{} ({:.0}%)", progress.label(), progress.percentage());
        }
        RenderRequest::ShowLabel(label) => {
            log::debug!("Label: {}", label.text().replace('\n', ", "));
        }
        other => log::trace!("{other:?}"),
    }
}

fn export_trajectory(
    engine: &mut VisualizerEngine,
    point: usize,
    out: &Path,
) -> Result<(), CloudscopeError> {
    engine.execute(Command::SelectPoint { index: Some(point) })?;
    let mut sink = ChartBuffer::default();
    if !engine.open_detail(&mut sink) {
        return Ok(());
    }
    if let Some(chart) = sink.chart {
        let json = chart.to_json()?;
        std::fs::write(out, json)?;
        log::info!(
            "Wrote trajectory of point {point} ({} frames) to {}",
            chart.frame_count,
            out.display()
        );
    }
    Ok(())
}

/// Feed `keys` through the bound actions, as a window's key handler would.
fn press_keys(
    engine: &mut VisualizerEngine,
    input: &InputProcessor,
    keys: &[String],
) -> Result<(), CloudscopeError> {
    for key in keys {
        match input.handle_key_press(key) {
            Some(command) => {
                log::debug!("{key} -> {command:?}");
                engine.execute(command)?;
            }
            None => log::warn!("No action bound to key {key:?}"),
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CloudscopeError> {
    if let Some(dir) = &cli.list_presets {
        for name in Options::list_presets(dir) {
            println!("{name}");
        }
        return Ok(());
    }

    let options = cli.resolve_options()?;
    if let Some(path) = &cli.save_options {
        options.save(path)?;
        log::info!("Saved options to {}", path.display());
    }
    let interval = options.playback.tick_interval();
    let input = InputProcessor::with_options(
        options.keybindings.clone(),
        options.playback.clone(),
    );

    let loader = cli.spawn_loader(&options)?;
    let frames = await_frames(loader, interval)?;

    let mut engine = VisualizerEngine::new(frames, options, Instant::now())?;
    if let Some(point) = cli.point {
        export_trajectory(&mut engine, point, &cli.trajectory_out)?;
    }
    press_keys(&mut engine, &input, &cli.keys)?;

    engine.execute(Command::Play)?;
    let play_for = Duration::try_from_secs_f64(cli.duration).map_err(|e| {
        CloudscopeError::InvalidArgument(format!("--duration: {e}"))
    })?;
    let started = Instant::now();
    while started.elapsed() < play_for {
        let _ = engine.tick(Instant::now());
        for request in engine.drain_render_requests() {
            log_request(&request);
        }
        thread::sleep(interval);
    }
    engine.execute(Command::Pause)?;

    let progress = engine.progress();
    log::info!("Stopped at {}", progress.label());
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
