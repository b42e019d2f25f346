use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use ntorsion::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<10} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Renders engine progress on stderr: a spinner per phase and a bar over the
/// residues while torsions are evaluated.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that tracks state without drawing, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self { bar }
    }

    /// A callback for [`ntorsion::engine::progress::ProgressReporter`]. It may be
    /// called from several worker threads at once.
    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event| apply(&bar, event))
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(spinner_style());
            bar.set_message(name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message(format!("✓ {}", bar.message()));
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.reset();
            bar.set_style(bar_style());
            bar.set_length(total_steps);
            bar.set_message("Residues");
        }
        Progress::TaskIncrement => bar.inc(1),
        Progress::TaskFinish => {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
            bar.finish();
        }
        // Summary lines replace the finished bar's message; mid-task they scroll above it.
        Progress::Message(text) if bar.is_finished() => bar.set_message(text),
        Progress::Message(text) => bar.println(format!("  {}", text)),
    }
}
