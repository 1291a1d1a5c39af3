//! Text output formatting with load colors.

use segbar_core::view::{CenterPanel, DiskSegment, LeftPanel, RightPanel};
use segbar_core::{BarView, LoadLevel, WorkspaceState};

use super::ClickOutput;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

/// Width of the label column.
const LABEL_WIDTH: usize = 12;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats one frame of the bar, one segment per line.
    pub fn format_bar(&self, view: &BarView) -> String {
        let mut lines = Vec::new();
        self.left_lines(&view.left, &mut lines);
        self.center_lines(&view.center, &mut lines);
        self.right_lines(&view.right, &mut lines);

        if lines.is_empty() {
            return self.dim("No provider data");
        }
        lines.join("\n")
    }

    fn left_lines(&self, left: &LeftPanel, lines: &mut Vec<String>) {
        if let Some(lock) = &left.lock {
            let status = if lock.paused {
                self.yellow(lock.css_class())
            } else {
                self.green(lock.css_class())
            };
            lines.push(self.row("Lock", &status));
        }

        if let Some(date) = &left.date {
            lines.push(self.row("Date", date));
        }

        if let Some(strip) = &left.workspaces {
            let buttons: Vec<String> = strip
                .entries
                .iter()
                .map(|entry| match entry.state {
                    WorkspaceState::FocusedCurrent => self.bold(&entry.label()),
                    WorkspaceState::UnfocusedCurrent => entry.label(),
                    WorkspaceState::NotCurrent => self.dim(&entry.label()),
                })
                .collect();
            let text = format!("{}  | {}", buttons.join(" "), strip.summary);
            lines.push(self.row("Workspaces", &text));
        }

        if !left.shortcuts.is_empty() {
            let titles: Vec<&str> = left.shortcuts.iter().map(|s| s.title.as_str()).collect();
            lines.push(self.row("Shortcuts", &titles.join(", ")));
        }
    }

    fn center_lines(&self, center: &CenterPanel, lines: &mut Vec<String>) {
        match center {
            CenterPanel::Window(window) => {
                lines.push(self.row("Window", &self.cyan(&window.label)));
            }
            CenterPanel::Media(media) => {
                let glyph = if media.is_playing { "▶" } else { "⏸" };
                let text = format!("{} {}", glyph, media.text());
                lines.push(self.row("Media", &self.magenta(&text)));
            }
            CenterPanel::Empty => {}
        }
    }

    fn right_lines(&self, right: &RightPanel, lines: &mut Vec<String>) {
        if let Some(tray) = &right.tray {
            let tips: Vec<&str> = tray.icons.iter().map(|i| i.tooltip.as_str()).collect();
            let text = if tips.is_empty() {
                self.dim("empty")
            } else {
                tips.join(", ")
            };
            lines.push(self.row("Tray", &text));
        }

        if let Some(audio) = &right.audio {
            lines.push(self.row("Audio", &self.color_for_load(audio.load, &audio.text)));
        }

        if let Some(network) = &right.network {
            lines.push(self.row("Network", &format!("{}  {}", network.down, network.up)));
        }

        if let Some(segment) = &right.disks {
            self.disk_lines(segment, lines);
        }

        if let Some(cpu) = &right.cpu {
            lines.push(self.row("CPU", &self.color_for_load(cpu.load, &cpu.text)));
        }

        if let Some(memory) = &right.memory {
            let text = format!(
                "{} {}",
                memory.size,
                self.color_for_load(memory.load, &memory.text)
            );
            lines.push(self.row("Memory", &text));
        }
    }

    fn disk_lines(&self, segment: &DiskSegment, lines: &mut Vec<String>) {
        if segment.disks.is_empty() {
            lines.push(self.row("Disk", &self.dim("none")));
        }
        for disk in &segment.disks {
            let label = format!("Disk {}", disk.label);
            let text = format!("{} {}", disk.size, self.color_for_load(disk.load, &disk.text));
            lines.push(self.row(&label, &text));
        }
    }

    /// Formats the result of a click.
    pub fn format_click(&self, click: &ClickOutput) -> String {
        let mut line = match (&click.command, click.flyout_open) {
            (Some(command), _) => format!("{} {}", self.green("Sent:"), command),
            (None, Some(open)) => {
                let state = if open { "open" } else { "closed" };
                format!("Flyout {}", self.bold(state))
            }
            (None, None) => self.dim(&format!("{} ({})", click.outcome, click.target_id)),
        };

        if click.context_menu_prevented {
            line.push_str(&self.dim(" [context menu prevented]"));
        }
        line
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn row(&self, label: &str, value: &str) -> String {
        let label = format!("{label}:");
        format!("{} {}", self.bold(&format!("{label:<width$}", width = LABEL_WIDTH)), value)
    }

    /// Colors a value by its load class; unknown load stays plain.
    pub fn color_for_load(&self, load: Option<LoadLevel>, text: &str) -> String {
        match load {
            Some(LoadLevel::Low) => self.green(text),
            Some(LoadLevel::Medium) => self.yellow(text),
            Some(LoadLevel::High) => self.red(text),
            Some(LoadLevel::Extreme) => self.bold(&self.red(text)),
            None => text.to_string(),
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn magenta(&self, text: &str) -> String {
        self.paint(MAGENTA, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}
