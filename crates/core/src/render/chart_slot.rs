use crate::models::chart::{ChartInstance, ChartSpec};

/// A canvas that holds at most one live chart.
///
/// Drawing a new chart destroys the previous instance first.
#[derive(Debug, Default)]
pub struct ChartSlot {
    name: &'static str,
    current: Option<ChartInstance>,
    placeholder: Option<String>,
    next_id: u64,
    destroyed: u64,
}

impl ChartSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Destroy whatever is drawn and draw `spec` instead.
    pub fn replace(&mut self, spec: ChartSpec) -> &ChartInstance {
        self.destroy();
        self.placeholder = None;
        self.next_id += 1;
        tracing::debug!("Drawing chart '{}' (instance {})", self.name, self.next_id);
        self.current.insert(ChartInstance {
            id: self.next_id,
            spec,
        })
    }

    /// Destroy the current chart and show a message in its place.
    pub fn show_placeholder(&mut self, message: impl Into<String>) {
        self.destroy();
        self.placeholder = Some(message.into());
    }

    pub fn destroy(&mut self) {
        if let Some(old) = self.current.take() {
            tracing::debug!("Destroying chart '{}' (instance {})", self.name, old.id);
            self.destroyed += 1;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Number of chart instances destroyed over the slot's lifetime.
    #[must_use]
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }
}
