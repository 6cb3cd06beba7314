#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LoadState {
    Placeholder, // Nothing requested yet, the loading panel is drawn
    Loading,     // Fetch requested, waiting for the worker
    Loaded,      // Texture created, placeholder removed
    Failed,      // Fetch or decode failed, placeholder kept with an error label
}

impl LoadState {
    /// Transitions only move forward: Placeholder -> Loading -> Loaded | Failed.
    pub fn can_become(self, next: LoadState) -> bool {
        matches!(
            (self, next),
            (LoadState::Placeholder, LoadState::Loading)
                | (LoadState::Loading, LoadState::Loaded)
                | (LoadState::Loading, LoadState::Failed)
        )
    }

    pub fn is_settled(self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Failed)
    }
}
