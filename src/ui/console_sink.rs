//! Human-readable progress for collection runs.
//!
//! On an interactive terminal the current appliance and the hashing and
//! copy passes are drawn as one live line on stderr. Elsewhere the events
//! only reach the debug log.

use std::io::{self, Write};
use std::sync::Mutex;

use rulesnap::domain::ports::{CollectEvent, CollectEventSink};
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::progress::ProgressBar;

struct ConsoleState {
    out: Box<dyn Write + Send>,
    region: LiveRegion,
    bar: Option<ProgressBar>,
}

pub struct ConsoleEventSink {
    ui: UiContext,
    state: Mutex<ConsoleState>,
}

impl ConsoleEventSink {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            state: Mutex::new(ConsoleState {
                out: Box::new(writer),
                region: LiveRegion::new(),
                bar: None,
            }),
        }
    }

    /// Erase the live line before the summary is printed
    pub fn finish(&self) {
        if let Ok(mut state) = self.state.lock() {
            let ConsoleState { out, region, .. } = &mut *state;
            let _ = region.clear(out);
        }
    }

    fn bar_width(&self) -> u16 {
        (self.ui.caps.width / 4).clamp(10, 30)
    }

    fn draw(&self, state: &mut ConsoleState, line: &str) {
        if !self.ui.animation {
            return;
        }
        let ConsoleState { out, region, .. } = state;
        let _ = region.update(out, line);
    }

    fn start_bar(&self, state: &mut ConsoleState, total: usize, message: &str) {
        let mut bar = ProgressBar::with_message(total as u64, message);
        bar.set_width(self.bar_width());
        let line = bar.render(self.ui.unicode);
        state.bar = Some(bar);
        self.draw(state, &line);
    }

    fn advance_bar(&self, state: &mut ConsoleState, index: usize) {
        let Some(bar) = state.bar.as_mut() else {
            return;
        };
        bar.set(index as u64);
        let line = bar.render(self.ui.unicode);
        self.draw(state, &line);
    }
}

impl CollectEventSink for ConsoleEventSink {
    fn on_event(&self, event: CollectEvent) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        match event {
            CollectEvent::ScanStarted { appliance_count } => {
                debug!(appliance_count, "scan started");
            }
            CollectEvent::ApplianceStarted {
                index,
                total,
                name,
                kind,
            } => {
                debug!(appliance = %name, %kind, "scanning appliance");
                let line = format!(
                    "{} [{}/{}] {} ({})",
                    Icon::Progress.colored(self.ui.color, self.ui.unicode),
                    index + 1,
                    total,
                    name,
                    kind
                );
                self.draw(&mut state, &line);
            }
            CollectEvent::ApplianceScanned {
                name,
                targets,
                from_cache,
            } => {
                debug!(appliance = %name, targets, from_cache, "appliance scanned");
            }
            CollectEvent::ApplianceFailed { name, reason } => {
                debug!(appliance = %name, %reason, "appliance skipped");
            }
            CollectEvent::HashingStarted { total } => {
                self.start_bar(&mut state, total, "Hashing");
            }
            CollectEvent::FileHashed { index, .. } => {
                self.advance_bar(&mut state, index);
            }
            CollectEvent::CopyStarted { total } => {
                self.start_bar(&mut state, total, "Copying");
            }
            CollectEvent::FileCopied {
                index, destination, ..
            } => {
                debug!(destination = %destination.display(), "copied");
                self.advance_bar(&mut state, index);
            }
            CollectEvent::FileCopyFailed {
                index,
                source,
                error,
                ..
            } => {
                debug!(source = %source.display(), %error, "copy failed");
                self.advance_bar(&mut state, index);
            }
        }
    }
}
