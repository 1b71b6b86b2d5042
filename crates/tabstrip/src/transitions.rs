//! Open and close animations of tab headers.
//!
//! A header grows from scale 0 to 1 when its tab is added and shrinks back
//! to 0 when the tab is removed, after which the header is dropped from the
//! collection. Every completion runs through [`complete`], whether the
//! transition ran out on a tick or was force-finished.

use crate::animation::{TAB_TRANSITION_DURATION, Transition};
use crate::config::{TabAnimation, TabPaneConfig};
use crate::header::{HeaderAnimationState, HeaderCollection, TabHeaderItem};
use crate::measure::HeaderMeasure;
use crate::tab::{Tab, TabId};

fn grow() -> Transition {
    Transition::new(TAB_TRANSITION_DURATION)
}

fn shrink() -> Transition {
    Transition::new(TAB_TRANSITION_DURATION).from(1.0).to(0.0)
}

/// Run the completion of a finished transition on the header at `index`.
///
/// Returns the id of the header if it was removed.
fn complete(headers: &mut HeaderCollection, index: usize) -> Option<TabId> {
    let header = headers.get_mut(index)?;
    let state = header.animation_state();
    header.transition = None;
    header.set_animation_state(HeaderAnimationState::None);
    match state {
        HeaderAnimationState::Hiding => {
            let id = header.id();
            headers.remove_at(index);
            tracing::trace!("Header {} removed after close animation", id);
            Some(id)
        }
        HeaderAnimationState::Showing => {
            header.set_scale(1.0);
            None
        }
        HeaderAnimationState::None => None,
    }
}

/// Force-finish the animation of `id`, if it has one running.
///
/// Returns the id if finishing removed the header. Calling it again is a
/// no-op.
pub(crate) fn stop_current_animation(headers: &mut HeaderCollection, id: TabId) -> Option<TabId> {
    let index = headers.index_of(id)?;
    let header = headers.get_mut(index)?;
    let transition = header.transition.as_mut()?;
    if !transition.finish() {
        return None;
    }
    let value = transition.value();
    header.set_scale(value);
    complete(headers, index)
}

/// Force-finish every close animation; returns the removed ids.
pub(crate) fn finish_hiding(headers: &mut HeaderCollection) -> Vec<TabId> {
    let hiding: Vec<TabId> = headers
        .iter()
        .filter(|header| header.animation_state() == HeaderAnimationState::Hiding)
        .map(TabHeaderItem::id)
        .collect();
    hiding
        .into_iter()
        .filter_map(|id| stop_current_animation(headers, id))
        .collect()
}

/// Force-finish every open and close animation; returns the removed ids.
pub(crate) fn finish_all(headers: &mut HeaderCollection) -> Vec<TabId> {
    let animating: Vec<TabId> = headers
        .iter()
        .filter(|header| header.transition.is_some())
        .map(TabHeaderItem::id)
        .collect();
    animating
        .into_iter()
        .filter_map(|id| stop_current_animation(headers, id))
        .collect()
}

/// Insert a header for `tab` at `index`, growing it in when animated.
pub(crate) fn add_tab(
    headers: &mut HeaderCollection,
    index: usize,
    tab: Tab,
    selected: bool,
    measure: &dyn HeaderMeasure,
    config: &TabPaneConfig,
) {
    let mut header = TabHeaderItem::new(tab);
    header.set_selected(selected);
    header.refresh(measure, config);
    if config.open_animation == TabAnimation::Grow {
        header.set_scale(0.0);
        header.set_animation_state(HeaderAnimationState::Showing);
        header.transition = Some(grow());
    }
    tracing::trace!("Header {} inserted at {}", header.id(), index);
    headers.insert(index, header);
}

/// Start closing the header of `id`.
///
/// Returns the id if the header was removed right away.
pub(crate) fn remove_tab(
    headers: &mut HeaderCollection,
    id: TabId,
    config: &TabPaneConfig,
) -> Option<TabId> {
    if let Some(removed) = stop_current_animation(headers, id) {
        return Some(removed);
    }
    let index = headers.index_of(id)?;
    let header = headers.get_mut(index)?;
    header.set_closing(true);
    if config.close_animation == TabAnimation::Grow {
        header.set_animation_state(HeaderAnimationState::Hiding);
        header.transition = Some(shrink());
        None
    } else {
        headers.remove_at(index);
        Some(id)
    }
}

/// Advance every open/close transition.
///
/// Returns whether any header changed and the ids removed by finished
/// close animations.
pub(crate) fn tick(headers: &mut HeaderCollection, dt: f32) -> (bool, Vec<TabId>) {
    let mut changed = false;
    let mut finished = Vec::new();
    for header in headers.iter_mut() {
        let Some(transition) = header.transition.as_mut() else {
            continue;
        };
        transition.update(dt);
        let value = transition.value();
        let done = transition.is_done();
        header.set_scale(value);
        changed = true;
        if done {
            finished.push(header.id());
        }
    }

    let mut removed = Vec::new();
    for id in finished {
        if let Some(index) = headers.index_of(id)
            && let Some(gone) = complete(headers, index)
        {
            removed.push(gone);
        }
    }
    (changed, removed)
}

/// Whether any open/close transition is still running.
pub(crate) fn is_animating(headers: &HeaderCollection) -> bool {
    headers.iter().any(TabHeaderItem::is_animating)
}
