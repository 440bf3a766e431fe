use serde::{Deserialize, Serialize};

use crate::core::ViewState;

/// Which view-state fields changed between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewStateChanges {
    pub offset_x: bool,
    pub offset_y: bool,
    pub scale: bool,
}

impl ViewStateChanges {
    pub const ALL: Self = Self {
        offset_x: true,
        offset_y: true,
        scale: true,
    };

    #[must_use]
    pub fn any(self) -> bool {
        self.offset_x || self.offset_y || self.scale
    }

    #[must_use]
    pub fn offsets(self) -> bool {
        self.offset_x || self.offset_y
    }
}

/// Latest-value broadcast of the shared view state.
///
/// Each field carries its own revision, bumped only when a publish actually
/// changes it. New subscriptions observe the current value on their first
/// poll, so late subscribers never miss the state published before them.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStateChannel {
    state: ViewState,
    offset_x_revision: u64,
    offset_y_revision: u64,
    scale_revision: u64,
}

/// Cursor of one consumer into a `ViewStateChannel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStateSubscription {
    seen: Option<(u64, u64, u64)>,
}

impl ViewStateChannel {
    #[must_use]
    pub fn new(initial: ViewState) -> Self {
        Self {
            state: initial,
            offset_x_revision: 0,
            offset_y_revision: 0,
            scale_revision: 0,
        }
    }

    #[must_use]
    pub fn latest(&self) -> ViewState {
        self.state
    }

    /// Stores `state` and reports which fields differ from the previous value.
    pub fn publish(&mut self, state: ViewState) -> ViewStateChanges {
        let changes = ViewStateChanges {
            offset_x: state.offset_x != self.state.offset_x,
            offset_y: state.offset_y != self.state.offset_y,
            scale: state.scale != self.state.scale,
        };
        if changes.offset_x {
            self.offset_x_revision += 1;
        }
        if changes.offset_y {
            self.offset_y_revision += 1;
        }
        if changes.scale {
            self.scale_revision += 1;
        }
        self.state = state;
        changes
    }

    #[must_use]
    pub fn subscribe(&self) -> ViewStateSubscription {
        ViewStateSubscription::default()
    }

    /// Returns the latest state when anything changed since the previous poll
    /// of `subscription`. The first poll always reports every field.
    pub fn poll(
        &self,
        subscription: &mut ViewStateSubscription,
    ) -> Option<(ViewState, ViewStateChanges)> {
        let current = (
            self.offset_x_revision,
            self.offset_y_revision,
            self.scale_revision,
        );
        let changes = match subscription.seen {
            None => ViewStateChanges::ALL,
            Some((offset_x, offset_y, scale)) => ViewStateChanges {
                offset_x: offset_x != current.0,
                offset_y: offset_y != current.1,
                scale: scale != current.2,
            },
        };
        subscription.seen = Some(current);
        changes.any().then_some((self.state, changes))
    }
}
