//! Chart configuration.

use crate::utils::config::{BAR_COLOR, DEFAULT_FIGURE_SIZE};

/// Chart configuration
///
/// Every presentation tunable lives here so the drawing routine stays pure
/// with respect to report-specific choices.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Optional caption above the axes
    pub title: Option<String>,

    /// Horizontal axis label
    pub x_label: String,

    /// Vertical axis label
    pub y_label: String,

    /// Square figure edge in pixels
    pub size: u32,

    /// Bar fill color as RGB
    pub bar_color: (u8, u8, u8),

    /// Annotation template; `{count}` expands to the filtered sample count.
    ///
    /// The reference report hard-coded a literal sample size here
    /// regardless of the data; the default now shows the real count.
    pub annotation: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            x_label: "Gas Used".to_string(),
            y_label: "Percentage".to_string(),
            size: DEFAULT_FIGURE_SIZE,
            bar_color: BAR_COLOR,
            annotation: "n = {count}".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_annotation(mut self, template: impl Into<String>) -> Self {
        self.annotation = template.into();
        self
    }

    /// Expand the annotation template against the actual sample count
    pub fn annotation_text(&self, sample_count: usize) -> String {
        self.annotation.replace("{count}", &sample_count.to_string())
    }
}
