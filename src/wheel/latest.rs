//! Reduction of each wheel group to its latest version

use std::cmp::Reverse;

use crate::wheel::WheelGroups;

/// Keep only the wheels of the highest version of each package.
///
/// Every wheel sharing the highest version is kept (one per architecture or
/// python). Equality follows loose version ordering, so `1.03` and `1.3` are
/// the same version.
pub fn latest_versions(groups: WheelGroups) -> WheelGroups {
    groups
        .into_iter()
        .filter_map(|(name, mut wheels)| {
            wheels.sort_by_cached_key(|wheel| Reverse(wheel.loose_version()));

            let latest = wheels.first()?.loose_version();
            let kept = wheels
                .into_iter()
                .take_while(|wheel| wheel.loose_version() == latest)
                .collect();

            Some((name, kept))
        })
        .collect()
}
