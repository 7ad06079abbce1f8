//! Library Customization
//!
//! A small catalog of decorations the player can place around the library,
//! each restricted to a set of named slots. The library scene resolves slot
//! names to world positions for rendering.

use crate::game::state::{GameProgress, PlacedCustomization};

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomizationItem {
    /// Stable id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Catalog description.
    pub description: &'static str,
    /// Slot names this item may occupy.
    pub possible_locations: &'static [&'static str],
}

/// The decoration catalog.
pub static CATALOG: &[CustomizationItem] = &[
    CustomizationItem {
        id: "cushion",
        name: "Soft Cushion",
        description: "A comfortable cushion for sitting and reading.",
        possible_locations: &["corner-left", "corner-right", "center"],
    },
    CustomizationItem {
        id: "lamp",
        name: "Reading Lamp",
        description: "A warm lamp that provides cozy lighting.",
        possible_locations: &["shelf-1", "shelf-2", "center"],
    },
    CustomizationItem {
        id: "rug",
        name: "Cozy Rug",
        description: "A soft rug that makes the floor more comfortable.",
        possible_locations: &["center"],
    },
    CustomizationItem {
        id: "plant",
        name: "Small Plant",
        description: "A little potted plant to brighten up the space.",
        possible_locations: &["shelf-1", "shelf-2", "corner-left", "corner-right"],
    },
    CustomizationItem {
        id: "blanket",
        name: "Warm Blanket",
        description: "A soft blanket for cold evenings.",
        possible_locations: &["corner-left", "corner-right", "center"],
    },
];

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No catalog entry with that id.
    UnknownItem,
    /// The item cannot go in that slot.
    InvalidLocation,
}

/// Look up a catalog item by id.
pub fn find(id: &str) -> Option<&'static CustomizationItem> {
    CATALOG.iter().find(|i| i.id == id)
}

/// Place a catalog item into a slot, recording it in progress.
pub fn place(
    progress: &mut GameProgress,
    item_id: &str,
    location: &str,
) -> Result<(), PlacementError> {
    let item = find(item_id).ok_or(PlacementError::UnknownItem)?;
    if !item.possible_locations.contains(&location) {
        return Err(PlacementError::InvalidLocation);
    }
    progress.add_customization(PlacedCustomization {
        item_name: item.name.to_string(),
        description: item.description.to_string(),
        location: location.to_string(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_valid_slot() {
        let mut progress = GameProgress::new();
        assert!(place(&mut progress, "lamp", "shelf-1").is_ok());
        assert_eq!(progress.library_customizations.len(), 1);
        assert_eq!(progress.library_customizations[0].item_name, "Reading Lamp");
    }

    #[test]
    fn test_place_rejects_wrong_slot() {
        let mut progress = GameProgress::new();
        assert_eq!(
            place(&mut progress, "rug", "shelf-1"),
            Err(PlacementError::InvalidLocation)
        );
        assert!(progress.library_customizations.is_empty());
    }

    #[test]
    fn test_place_rejects_unknown_item() {
        let mut progress = GameProgress::new();
        assert_eq!(
            place(&mut progress, "aquarium", "center"),
            Err(PlacementError::UnknownItem)
        );
    }
}
