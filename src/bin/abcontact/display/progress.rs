use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Numbered pipeline steps, drawn as spinners on a terminal and logged otherwise.
pub struct Progress {
    interactive: bool,
    total_steps: u8,
    step: u8,
    run_start: Instant,
    step_start: Instant,
    spinner: Option<ProgressBar>,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            interactive,
            total_steps,
            step: 0,
            run_start: now,
            step_start: now,
            spinner: None,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.clear_spinner();
        self.step += 1;
        self.step_start = Instant::now();

        let label = format!("[{}/{}] {}", self.step, self.total_steps, description);
        if self.interactive {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner.set_message(format!("{label}..."));
            self.spinner = Some(spinner);
        } else {
            log::debug!("{label}");
        }
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        self.clear_spinner();
        let elapsed = self.step_start.elapsed().as_secs_f64();

        if !self.interactive {
            log::info!("{description} ({elapsed:.2}s)");
            for substep in substeps {
                log::debug!("  {substep}");
            }
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description, elapsed
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
        }
    }

    pub fn finish(mut self) {
        self.clear_spinner();
        if self.interactive {
            print_footer(self.run_start.elapsed());
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();
    let rule = "━".repeat(54);

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "  \x1b[2m╺{rule}╸\x1b[0m");
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Contacts mapped {:>34}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}
