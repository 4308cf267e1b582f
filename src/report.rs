// 📊 Report Renderer
// Turns the concatenated change events of one run into the plain-text
// report body that gets delivered to recipients.

use crate::detector::ChangeEvent;
use crate::window::DateWindow;

const SEPARATOR: &str = "--------------------------------------------------";

/// ReportRenderer - free-form but stable plain-text formatting
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        ReportRenderer
    }

    pub fn subject(&self) -> &'static str {
        "KRS share capital change report"
    }

    /// Render the full report body. Events are printed in the order they
    /// arrive; the detector already sorted each company's changes most
    /// recent first.
    pub fn render(&self, events: &[ChangeEvent], window: &DateWindow) -> String {
        let mut lines = vec![
            format!(
                "Share capital changes for monitored companies, {}.",
                window.describe()
            ),
            String::new(),
            format!("Found {} change(s):", events.len()),
            String::new(),
            SEPARATOR.to_string(),
        ];

        for event in events {
            lines.push(format!("Name: {}", event.company_name));
            lines.push(format!("KRS: {}", event.registry_id));
            lines.push(format!(
                "Change date: {}",
                event.change_date.format("%d.%m.%Y")
            ));
            lines.push(format!(
                "Previous capital: {} PLN",
                event.previous_value.as_deref().unwrap_or("no data")
            ));
            lines.push(format!("New capital: {} PLN", event.new_value));
            lines.push(SEPARATOR.to_string());
        }

        lines.join("\n")
    }
}

// ============================================================================
// TESTS
// ============================================================================
