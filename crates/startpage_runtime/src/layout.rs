//! Widget placement-zone reordering.

use crate::model::{WidgetId, WidgetLayout, Zone};

/// Moves a widget between or within placement zones, returning whether the layout changed.
///
/// Dropping onto another widget swaps positions: inside one zone the two indices exchange
/// contents, across zones each slot is overwritten with the other widget so both zones keep
/// their length. Dropping onto empty zone space (`target` is `None`) removes the widget from its
/// source zone and appends it to the target zone. Stale gestures (source widget no longer in the
/// claimed zone, named target missing, or a self-drop) leave the layout untouched.
pub fn move_widget(
    layout: &mut WidgetLayout,
    source_zone: Zone,
    source_id: WidgetId,
    target_zone: Zone,
    target: Option<WidgetId>,
) -> bool {
    if target == Some(source_id) {
        return false;
    }
    let Some(source_index) = layout
        .zone(source_zone)
        .iter()
        .position(|id| *id == source_id)
    else {
        return false;
    };

    match target {
        Some(target_id) => {
            let Some(target_index) = layout
                .zone(target_zone)
                .iter()
                .position(|id| *id == target_id)
            else {
                return false;
            };
            if source_zone == target_zone {
                layout.zone_mut(source_zone).swap(source_index, target_index);
            } else {
                layout.zone_mut(source_zone)[source_index] = target_id;
                layout.zone_mut(target_zone)[target_index] = source_id;
            }
        }
        None => {
            layout.zone_mut(source_zone).remove(source_index);
            layout.zone_mut(target_zone).push(source_id);
        }
    }
    true
}
