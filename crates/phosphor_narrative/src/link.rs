//! Link dispatcher and unlock gestures.

use crate::Action;
use phosphor_core::{LinkTarget, TargetKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default press duration that counts as a long press.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Which gesture unlocks locked link entries.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnlockGesture {
    /// Any of the gestures below
    #[default]
    Any,
    /// Shift held while clicking
    Shift,
    /// Press held for at least the long-press threshold
    LongPress,
    /// More than one touch point
    MultiTouch,
}

/// What the user did when activating a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gesture {
    /// Shift was held
    pub shift: bool,
    /// Number of simultaneous touch points
    pub touches: u8,
    /// Time between press and release
    pub press: Duration,
}

impl Gesture {
    /// A plain click.
    pub fn click() -> Self {
        Self {
            touches: 1,
            ..Self::default()
        }
    }

    /// A click with Shift held.
    pub fn shift_click() -> Self {
        Self {
            shift: true,
            ..Self::click()
        }
    }

    /// A click held for `press`.
    pub fn held(press: Duration) -> Self {
        Self {
            press,
            ..Self::click()
        }
    }

    /// A tap with `touches` fingers.
    pub fn touch(touches: u8) -> Self {
        Self {
            touches,
            ..Self::default()
        }
    }
}

/// Decides whether a gesture counts as unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPolicy {
    gesture: UnlockGesture,
    long_press: Duration,
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self::new(UnlockGesture::Any, DEFAULT_LONG_PRESS)
    }
}

impl UnlockPolicy {
    /// Creates a policy.
    pub fn new(gesture: UnlockGesture, long_press: Duration) -> Self {
        Self {
            gesture,
            long_press,
        }
    }

    /// Accepted gesture.
    pub fn gesture(&self) -> UnlockGesture {
        self.gesture
    }

    /// Long-press threshold.
    pub fn long_press(&self) -> Duration {
        self.long_press
    }

    /// Whether `gesture` satisfies this policy.
    pub fn is_unlocked(&self, gesture: &Gesture) -> bool {
        let shift = gesture.shift;
        let long_press = gesture.press >= self.long_press;
        let multi_touch = gesture.touches > 1;
        match self.gesture {
            UnlockGesture::Any => shift || long_press || multi_touch,
            UnlockGesture::Shift => shift,
            UnlockGesture::LongPress => long_press,
            UnlockGesture::MultiTouch => multi_touch,
        }
    }
}

/// Resolves a link activation to an action.
///
/// A literal target always changes screen. A conditional target picks the
/// first entry whose `locked` flag equals `unlocked`; entries of other types
/// and a missing match route nowhere.
///
/// # Examples
///
/// ```
/// use phosphor_core::{LinkTarget, LinkTargetEntry, TargetKind};
/// use phosphor_narrative::{Action, dispatch_link};
///
/// let target = LinkTarget::Conditional(vec![
///     LinkTargetEntry::new("secret", TargetKind::Dialog, true),
///     LinkTargetEntry::new("normal", TargetKind::Link, false),
/// ]);
/// assert_eq!(
///     dispatch_link(&target, false),
///     Some(Action::ChangeScreen("normal".to_string()))
/// );
/// assert_eq!(
///     dispatch_link(&target, true),
///     Some(Action::ToggleDialog(Some("secret".to_string())))
/// );
/// ```
pub fn dispatch_link(target: &LinkTarget, unlocked: bool) -> Option<Action> {
    match target {
        LinkTarget::Screen(screen) => Some(Action::ChangeScreen(screen.clone())),
        LinkTarget::Conditional(entries) => {
            let Some(entry) = entries.iter().find(|e| e.locked() == unlocked) else {
                tracing::debug!(unlocked, "No link target matches gesture");
                return None;
            };
            match entry.kind() {
                TargetKind::Link => Some(Action::ChangeScreen(entry.target().clone())),
                TargetKind::Dialog => Some(Action::ToggleDialog(Some(entry.target().clone()))),
                TargetKind::Other(tag) => {
                    tracing::debug!(entry = %entry.target(), kind = %tag, "Unroutable link target");
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_press_threshold_is_inclusive() {
        let policy = UnlockPolicy::new(UnlockGesture::LongPress, Duration::from_millis(1000));
        assert!(!policy.is_unlocked(&Gesture::held(Duration::from_millis(999))));
        assert!(policy.is_unlocked(&Gesture::held(Duration::from_millis(1000))));
        assert!(!policy.is_unlocked(&Gesture::shift_click()));
    }

    #[test]
    fn any_accepts_every_gesture() {
        let policy = UnlockPolicy::default();
        assert!(policy.is_unlocked(&Gesture::shift_click()));
        assert!(policy.is_unlocked(&Gesture::touch(2)));
        assert!(policy.is_unlocked(&Gesture::held(DEFAULT_LONG_PRESS)));
        assert!(!policy.is_unlocked(&Gesture::click()));
    }
}
