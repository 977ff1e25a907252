//! Toast notification state.
//!
//! DESIGN
//! ======
//! Toasts are plain data: anything that wants to notify pushes a `Toast`
//! into `UiState` and the `ToastHost` component takes care of rendering,
//! auto-dismiss timing, and running the optional action. Keeping the action
//! as a route string (instead of a callback) keeps this state comparable
//! and testable; the navigation side effect lives at the rendering edge.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Toast severity level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Indicator glyph shown next to the message.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    /// CSS modifier suffix for the toast element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A call-to-action button attached to a toast. Clicking it navigates to
/// `to` client-side and dismisses the toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastAction {
    pub label: String,
    pub to: String,
}

/// Default display duration before auto-dismiss, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// A single notification message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique toast identifier (UUID string).
    pub id: String,
    /// Primary message line.
    pub message: String,
    /// Optional secondary text below the message.
    pub description: Option<String>,
    /// Severity level.
    pub level: ToastLevel,
    /// Milliseconds before auto-dismiss.
    pub duration_ms: u64,
    /// Optional call-to-action button.
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
            description: None,
            level: ToastLevel::Info,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            action: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_level(ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_level(ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_level(ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_level(ToastLevel::Error)
    }

    pub fn with_level(mut self, level: ToastLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_action(mut self, label: impl Into<String>, to: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            to: to.into(),
        });
        self
    }
}

/// UI chrome state: the active toast queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
}

impl UiState {
    /// Append a toast and return its id.
    pub fn push_toast(&mut self, toast: Toast) -> String {
        let id = toast.id.clone();
        self.toasts.push(toast);
        id
    }

    /// Remove the toast with the given id. Unknown ids are a no-op, since a
    /// manual close can race the auto-dismiss timer.
    pub fn dismiss_toast(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
