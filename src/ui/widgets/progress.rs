use std::time::{Duration, Instant};

/// Single-line progress bar for the hashing and copy passes
#[derive(Debug, Clone)]
pub struct ProgressBar {
    total: u64,
    current: u64,
    width: u16,
    message: String,
    started: Instant,
}

impl ProgressBar {
    pub fn with_message(total: u64, message: impl Into<String>) -> Self {
        Self {
            total,
            current: 0,
            width: 20,
            message: message.into(),
            started: Instant::now(),
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width.max(1);
    }

    pub fn set(&mut self, value: u64) {
        self.current = value.min(self.total);
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.total
    }

    pub fn eta(&self) -> Option<Duration> {
        if self.total == 0 || self.current == 0 {
            return None;
        }
        if self.current >= self.total {
            return Some(Duration::ZERO);
        }

        let elapsed_secs = self.started.elapsed().as_secs_f64();
        if elapsed_secs <= 0.0 {
            return None;
        }

        let rate = self.current as f64 / elapsed_secs;
        let secs = (self.total - self.current) as f64 / rate;
        if !secs.is_finite() || secs.is_sign_negative() {
            return None;
        }
        Some(Duration::from_secs_f64(secs))
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let (filled, empty) = self.bar_segments();
        let (full, rest) = if supports_unicode { ("━", "─") } else { ("=", "-") };

        let pct = if self.total == 0 {
            0
        } else {
            self.current.saturating_mul(100) / self.total
        };

        let mut out = String::new();
        if !self.message.is_empty() {
            out.push_str(&self.message);
            out.push(' ');
        }
        out.push_str(&full.repeat(filled));
        out.push_str(&rest.repeat(empty));
        out.push_str(&format!("  {}/{} ({}%)", self.current, self.total, pct));
        if let Some(eta) = self.eta().filter(|eta| !eta.is_zero()) {
            out.push_str(&format!("  ETA: {}", format_duration_compact(eta)));
        }
        out
    }

    fn bar_segments(&self) -> (usize, usize) {
        let width = self.width.max(1) as usize;
        if self.total == 0 {
            return (0, width);
        }

        let ratio = self.current as f64 / self.total as f64;
        let filled = (ratio * width as f64).round().clamp(0.0, width as f64) as usize;
        (filled, width - filled)
    }
}

fn format_duration_compact(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    format!("{}h", mins / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_percentage_and_counts() {
        let mut bar = ProgressBar::with_message(100, "Hashing");
        bar.set_width(10);
        bar.set(50);
        let rendered = bar.render(true);
        assert!(rendered.starts_with("Hashing ━━━━━─────"));
        assert!(rendered.contains("50/100 (50%)"));
    }

    #[test]
    fn set_clamps_to_total() {
        let mut bar = ProgressBar::with_message(3, "Copying");
        bar.set(7);
        assert!(bar.is_finished());
        assert!(bar.render(false).contains("3/3 (100%)"));
    }

    #[test]
    fn eta_is_none_without_progress() {
        let mut bar = ProgressBar::with_message(100, "");
        bar.started = Instant::now() - Duration::from_secs(10);
        assert!(bar.eta().is_none());
        bar.set(50);
        assert!(bar.eta().is_some());
    }

    #[test]
    fn ascii_bar_when_unicode_unsupported() {
        let mut bar = ProgressBar::with_message(10, "Hashing");
        bar.set_width(4);
        bar.set(5);
        let rendered = bar.render(false);
        assert!(rendered.starts_with("Hashing ==--"));
        assert!(!rendered.contains('━'));
    }

    #[test]
    fn empty_total_renders_zero_percent() {
        let bar = ProgressBar::with_message(0, "Copying");
        assert!(bar.render(false).contains("0/0 (0%)"));
    }

    #[test]
    fn compact_durations() {
        assert_eq!(format_duration_compact(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration_compact(Duration::from_secs(180)), "3m");
        assert_eq!(format_duration_compact(Duration::from_secs(7200)), "2h");
    }
}
