//! # Selection Manager
//!
//! Applies select and deselect actions to a [`Selection`] while keeping its
//! dependency rules.
//!
//! # Rules
//!
//! ```text
//! select   BlurayPackage  needs VideoRecording
//! select   TwoDayEvent    needs WeddingSession or Photography
//! deselect VideoRecording drops BlurayPackage
//! deselect *              drops TwoDayEvent once neither Photography
//!                         nor VideoRecording is left
//! ```
//!
//! Actions never fail. A select whose prerequisites are missing and a
//! deselect of an absent service leave the selection unchanged.
//! [`update_selection`] returns only the new selection; [`apply`] also
//! reports what happened through [`ActionOutcome`].
//!
//! # Examples
//!
//! ```
//! use package_pricing::domain::services::selection_manager::update_selection;
//! use package_pricing::domain::value_objects::{Selection, SelectionAction, ServiceType};
//!
//! let selection = Selection::new();
//! let selection = update_selection(&selection, SelectionAction::select(ServiceType::VideoRecording));
//! let selection = update_selection(&selection, SelectionAction::select(ServiceType::BlurayPackage));
//! assert_eq!(selection.len(), 2);
//!
//! let selection = update_selection(&selection, SelectionAction::deselect(ServiceType::VideoRecording));
//! assert!(selection.is_empty());
//! ```

use crate::domain::value_objects::enums::ServiceType;
use crate::domain::value_objects::selection::Selection;
use crate::domain::value_objects::selection_action::{ActionKind, SelectionAction};
use serde::{Deserialize, Serialize};

/// Services that keep a two-day event selected on deselect.
const TWO_DAY_EVENT_ANCHORS: [ServiceType; 2] =
    [ServiceType::Photography, ServiceType::VideoRecording];

/// What an action did to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOutcome {
    /// The service was appended.
    Added,
    /// The service was already selected.
    AlreadySelected,
    /// The service was not added because none of `requires` is selected.
    Rejected {
        /// Services of which at least one must be selected first.
        requires: Vec<ServiceType>,
    },
    /// The service was removed, along with any dependents in `cascaded`.
    Removed {
        /// Dependent services removed as a consequence, in removal order.
        cascaded: Vec<ServiceType>,
    },
    /// The service was not selected.
    NotSelected,
}

impl ActionOutcome {
    /// Returns true if the selection changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Added | Self::Removed { .. })
    }

    /// Returns true if a select was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// New selection together with the outcome of the action that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    selection: Selection,
    outcome: ActionOutcome,
}

impl SelectionChange {
    /// Returns the resulting selection.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the outcome.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> &ActionOutcome {
        &self.outcome
    }

    /// Consumes the change, returning the resulting selection.
    #[inline]
    #[must_use]
    pub fn into_selection(self) -> Selection {
        self.selection
    }

    /// Consumes the change, returning selection and outcome.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Selection, ActionOutcome) {
        (self.selection, self.outcome)
    }
}

/// Applies an action and returns the new selection.
///
/// Disallowed selects and deselects of absent services return a selection
/// equal to `current`.
#[must_use]
pub fn update_selection(current: &Selection, action: SelectionAction) -> Selection {
    apply(current, action).into_selection()
}

/// Applies an action and reports what it did.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::services::selection_manager::{apply, ActionOutcome};
/// use package_pricing::domain::value_objects::{Selection, SelectionAction, ServiceType};
///
/// let change = apply(&Selection::new(), SelectionAction::select(ServiceType::BlurayPackage));
/// assert_eq!(
///     change.outcome(),
///     &ActionOutcome::Rejected { requires: vec![ServiceType::VideoRecording] },
/// );
/// assert!(change.selection().is_empty());
/// ```
#[must_use]
pub fn apply(current: &Selection, action: SelectionAction) -> SelectionChange {
    let mut selection = current.clone();
    let outcome = match action.kind() {
        ActionKind::Select => select(&mut selection, action.service()),
        ActionKind::Deselect => deselect(&mut selection, action.service()),
    };
    SelectionChange { selection, outcome }
}

fn select(selection: &mut Selection, service: ServiceType) -> ActionOutcome {
    if selection.contains(service) {
        return ActionOutcome::AlreadySelected;
    }

    let requires = service.prerequisites();
    if !requires.is_empty() && !selection.contains_any(requires) {
        tracing::debug!(%service, %selection, "select ignored, prerequisites missing");
        return ActionOutcome::Rejected {
            requires: requires.to_vec(),
        };
    }

    selection.insert(service);
    ActionOutcome::Added
}

fn deselect(selection: &mut Selection, service: ServiceType) -> ActionOutcome {
    if !selection.remove(service) {
        return ActionOutcome::NotSelected;
    }

    let mut cascaded = Vec::new();

    if service == ServiceType::VideoRecording && selection.remove(ServiceType::BlurayPackage) {
        cascaded.push(ServiceType::BlurayPackage);
    }

    // Checked after the Bluray cascade, against what is left.
    if selection.contains(ServiceType::TwoDayEvent)
        && !selection.contains_any(&TWO_DAY_EVENT_ANCHORS)
    {
        selection.remove(ServiceType::TwoDayEvent);
        cascaded.push(ServiceType::TwoDayEvent);
    }

    if !cascaded.is_empty() {
        tracing::debug!(%service, ?cascaded, "deselect cascaded to dependents");
    }

    ActionOutcome::Removed { cascaded }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ServiceType::*;

    fn selection(services: &[ServiceType]) -> Selection {
        Selection::from_services(services.iter().copied())
    }

    fn selected(current: &[ServiceType], service: ServiceType) -> Vec<ServiceType> {
        update_selection(&selection(current), SelectionAction::select(service)).into()
    }

    fn deselected(current: &[ServiceType], service: ServiceType) -> Vec<ServiceType> {
        update_selection(&selection(current), SelectionAction::deselect(service)).into()
    }

    mod select {
        use super::*;

        #[test]
        fn appends_last() {
            assert_eq!(
                selected(&[WeddingSession], Photography),
                vec![WeddingSession, Photography]
            );
        }

        #[test]
        fn already_present_is_unchanged() {
            let current = [Photography, VideoRecording];
            assert_eq!(selected(&current, Photography), current.to_vec());
        }

        #[test]
        fn bluray_requires_video() {
            assert!(selected(&[], BlurayPackage).is_empty());
            assert_eq!(selected(&[Photography], BlurayPackage), vec![Photography]);
            assert_eq!(
                selected(&[VideoRecording], BlurayPackage),
                vec![VideoRecording, BlurayPackage]
            );
        }

        #[test]
        fn two_day_event_requires_wedding_or_photography() {
            assert!(selected(&[], TwoDayEvent).is_empty());
            assert_eq!(selected(&[VideoRecording], TwoDayEvent), vec![VideoRecording]);
            assert_eq!(
                selected(&[WeddingSession], TwoDayEvent),
                vec![WeddingSession, TwoDayEvent]
            );
            assert_eq!(
                selected(&[Photography], TwoDayEvent),
                vec![Photography, TwoDayEvent]
            );
        }

        #[test]
        fn independent_services_always_allowed() {
            for service in [Photography, VideoRecording, WeddingSession] {
                assert_eq!(selected(&[], service), vec![service]);
            }
        }
    }

    mod deselect {
        use super::*;

        #[test]
        fn absent_is_unchanged() {
            let current = [Photography, WeddingSession];
            assert_eq!(deselected(&current, VideoRecording), current.to_vec());
        }

        #[test]
        fn removes_and_keeps_order() {
            assert_eq!(
                deselected(&[Photography, VideoRecording, WeddingSession], VideoRecording),
                vec![Photography, WeddingSession]
            );
        }

        #[test]
        fn video_cascades_to_bluray() {
            assert!(deselected(&[VideoRecording, BlurayPackage], VideoRecording).is_empty());
        }

        #[test]
        fn photography_cascades_to_two_day_event() {
            assert!(deselected(&[Photography, TwoDayEvent], Photography).is_empty());
        }

        #[test]
        fn two_day_event_kept_while_video_remains() {
            assert_eq!(
                deselected(&[Photography, VideoRecording, TwoDayEvent], Photography),
                vec![VideoRecording, TwoDayEvent]
            );
        }

        #[test]
        fn video_cascades_to_both() {
            assert_eq!(
                deselected(
                    &[WeddingSession, VideoRecording, TwoDayEvent, BlurayPackage],
                    VideoRecording
                ),
                vec![WeddingSession]
            );
        }

        #[test]
        fn wedding_alone_does_not_anchor_two_day_event() {
            assert_eq!(
                deselected(&[WeddingSession, TwoDayEvent, Photography], Photography),
                vec![WeddingSession]
            );
        }

        #[test]
        fn unrelated_deselect_sweeps_orphaned_two_day_event() {
            assert_eq!(
                deselected(&[WeddingSession, TwoDayEvent], WeddingSession),
                Vec::<ServiceType>::new()
            );
        }

        #[test]
        fn bluray_alone_does_not_touch_video() {
            assert_eq!(
                deselected(&[VideoRecording, BlurayPackage], BlurayPackage),
                vec![VideoRecording]
            );
        }
    }

    mod outcome {
        use super::*;

        #[test]
        fn added() {
            let change = apply(&Selection::new(), SelectionAction::select(Photography));
            assert_eq!(change.outcome(), &ActionOutcome::Added);
            assert!(change.outcome().changed());
        }

        #[test]
        fn already_selected() {
            let change = apply(&selection(&[Photography]), SelectionAction::select(Photography));
            assert_eq!(change.outcome(), &ActionOutcome::AlreadySelected);
            assert!(!change.outcome().changed());
        }

        #[test]
        fn rejected_lists_prerequisites() {
            let change = apply(&Selection::new(), SelectionAction::select(TwoDayEvent));
            assert_eq!(
                change.outcome(),
                &ActionOutcome::Rejected {
                    requires: vec![WeddingSession, Photography]
                }
            );
            assert!(change.outcome().is_rejected());
        }

        #[test]
        fn removed_lists_cascade_in_order() {
            let current = selection(&[Photography, VideoRecording, BlurayPackage, TwoDayEvent]);
            let change = apply(&current, SelectionAction::deselect(Photography));
            assert_eq!(change.outcome(), &ActionOutcome::Removed { cascaded: vec![] });

            let (next, outcome) =
                apply(change.selection(), SelectionAction::deselect(VideoRecording)).into_parts();
            assert_eq!(
                outcome,
                ActionOutcome::Removed {
                    cascaded: vec![BlurayPackage, TwoDayEvent]
                }
            );
            assert!(next.is_empty());
        }

        #[test]
        fn not_selected() {
            let change = apply(&Selection::new(), SelectionAction::deselect(WeddingSession));
            assert_eq!(change.outcome(), &ActionOutcome::NotSelected);
        }

        #[test]
        fn input_is_not_mutated() {
            let current = selection(&[VideoRecording, BlurayPackage]);
            let _ = update_selection(&current, SelectionAction::deselect(VideoRecording));
            assert_eq!(current.len(), 2);
        }

        #[test]
        fn serde_tagged() {
            let json = serde_json::to_string(&ActionOutcome::Removed {
                cascaded: vec![BlurayPackage],
            })
            .unwrap();
            assert_eq!(json, r#"{"outcome":"REMOVED","cascaded":["BLURAY_PACKAGE"]}"#);
        }
    }
}
