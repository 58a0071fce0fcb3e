//! User-facing notifications (toasts).
//!
//! Presentation is out of scope; components only hand finished messages to
//! a [`Notifier`].

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastAppearance {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A toast-worthy message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Message text.
    pub message: String,
    /// Tone.
    pub appearance: ToastAppearance,
}

impl Toast {
    /// A success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            appearance: ToastAppearance::Success,
        }
    }

    /// An error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            appearance: ToastAppearance::Error,
        }
    }
}

/// Sink for toasts.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver one toast.
    fn notify(&self, toast: Toast);
}

/// Notifier that writes toasts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.appearance {
            ToastAppearance::Success => info!(message = %toast.message, "Toast"),
            ToastAppearance::Error => error!(message = %toast.message, "Toast"),
        }
    }
}
