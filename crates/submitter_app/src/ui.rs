use std::io::{self, Write};

use submitter_core::{FormViewModel, StatusLine};

const BAR_WIDTH: usize = 40;

/// Writes the view to the terminal: status lines as they change, the bar
/// redrawn in place on one line while visible.
pub struct Renderer {
    last_status: Option<StatusLine>,
    bar_on_screen: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            last_status: None,
            bar_on_screen: false,
        }
    }

    pub fn render(&mut self, view: &FormViewModel) {
        let mut out = io::stdout();
        if view.status != self.last_status {
            if let Some(status) = &view.status {
                if self.bar_on_screen {
                    let _ = writeln!(out);
                    self.bar_on_screen = false;
                }
                let _ = writeln!(out, "[{}] {}", status.kind.as_str(), status.text);
            }
            self.last_status = view.status.clone();
        }
        if view.bar_visible {
            let _ = write!(out, "\r{}", bar_line(view.percent));
            self.bar_on_screen = true;
        } else if self.bar_on_screen {
            // Blank out the stale bar line.
            let _ = write!(out, "\r{:width$}\r", "", width = BAR_WIDTH + 8);
            self.bar_on_screen = false;
        }
        let _ = out.flush();
    }
}

fn bar_line(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bar_at_zero() {
        assert_eq!(bar_line(0), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
    }

    #[test]
    fn half_bar_at_fifty() {
        let line = bar_line(50);
        assert!(line.starts_with(&format!("[{}", "#".repeat(BAR_WIDTH / 2))));
        assert!(line.ends_with(" 50%"));
    }

    #[test]
    fn full_bar_at_one_hundred() {
        assert_eq!(bar_line(100), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
    }
}
