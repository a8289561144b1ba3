//! Single-instance toast notifications.
//!
//! There is no queue: showing a toast replaces whatever is currently visible.
//! A generation counter ties each toast to its auto-dismiss timer so that a
//! stale timer firing late cannot take down a newer toast.

use strum::Display;

/// Auto-dismiss delay in milliseconds.
pub const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToastKind {
    #[strum(serialize = "toast-success")]
    Success,
    #[strum(serialize = "toast-error")]
    Error,
    #[strum(serialize = "toast-info")]
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any visible one. Returns the generation the
    /// caller must hand back to [`ToastState::dismiss`].
    pub fn show(&mut self, kind: ToastKind, message: &str) -> u64 {
        self.generation += 1;
        self.current = Some(Toast { kind, message: message.to_string() });
        self.generation
    }

    /// Dismiss the toast belonging to `generation`. A stale generation is a
    /// no-op and returns false.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
