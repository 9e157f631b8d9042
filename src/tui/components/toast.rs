//! One-line status bar for the outcome of store writes

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Error => theme().error,
            ToastLevel::Success => theme().button,
        }
    }

    /// The bar text, e.g. "x store error: offline"
    pub fn line(&self) -> String {
        let marker = match self.level {
            ToastLevel::Error => "x",
            ToastLevel::Success => "+",
        };
        format!("{marker} {}", self.message)
    }
}

/// Render `toast` above the footer, or nothing
pub fn render_toast(toast: Option<&Toast>) -> Option<AnyElement<'static>> {
    toast.map(|t| {
        element! {
            View(
                width: 100pct,
                height: 1,
                flex_shrink: 0.0,
                padding_left: 1,
            ) {
                Text(content: t.line(), color: t.color(), weight: Weight::Bold)
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_line_and_color() {
        let failed = Toast::error("store error: offline");
        assert_eq!(failed.line(), "x store error: offline");
        assert_eq!(failed.color(), theme().error);

        let added = Toast::success("Snack added");
        assert_eq!(added.line(), "+ Snack added");
        assert_eq!(added.color(), theme().button);

        assert!(render_toast(None).is_none());
    }
}
