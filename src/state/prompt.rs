//! User confirmation for destructive actions

/// Asks the user a yes/no question before a destructive action
pub trait Prompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers yes to everything (scripted and batch use)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

/// Answers no to everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Prompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl Prompt for NeverConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}

impl<F> Prompt for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
