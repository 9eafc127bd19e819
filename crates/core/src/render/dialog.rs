/// Interactive yes/no prompt used before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Where a click inside an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// Anything inside the dialog itself.
    Dialog,
}

/// Visibility of an edit dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    visible: bool,
}

impl Modal {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
