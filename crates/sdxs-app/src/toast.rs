//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use sdxs_core::ToastKind;

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Maximum toasts visible at once; older ones are dropped first
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

/// Newest-last stack of visible toasts
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, text));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Toast::new(ToastKind::Info, text));
    }

    /// Drop every toast older than its lifetime
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_bounded() {
        let mut stack = ToastStack::new();
        for i in 0..5 {
            stack.info(format!("toast {}", i));
        }
        assert_eq!(stack.len(), MAX_TOASTS);
        let texts: Vec<_> = stack.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_expire_removes_old_toasts() {
        let mut stack = ToastStack::new();
        stack.success("done");
        let created = stack.latest().unwrap().created_at;

        stack.expire(created + Duration::from_secs(1));
        assert_eq!(stack.len(), 1);

        stack.expire(created + TOAST_LIFETIME);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_kinds() {
        let mut stack = ToastStack::new();
        stack.error("bad");
        assert_eq!(stack.latest().unwrap().kind, ToastKind::Error);
        stack.success("good");
        assert_eq!(stack.latest().unwrap().kind, ToastKind::Success);
    }
}
