//! Validated scenes.
//!
//! A `Scene` is only obtained through `SceneBuilder`, which enforces the
//! cross-element rules as elements are added:
//! - building identifiers are unique among buildings
//! - antenna identifiers are unique among antennas
//! - no two buildings overlap
//! - no two antennas share a position
//!
//! # Example
//!
//! ```ignore
//! use kover::scene::SceneBuilder;
//!
//! let mut builder = SceneBuilder::new();
//! builder.add_building(Building::new("b1", 0, 0, 1, 1))?;
//! builder.add_antenna(Antenna::new("a1", 5, 5, 3))?;
//!
//! let scene = builder.build();
//! ```

use crate::error::{KoverError, Result};
use crate::parser::Record;
use crate::types::{Antenna, Building, ElementKind};

/// A fully validated scene.
///
/// The scene is immutable after construction - use `SceneBuilder`
/// to create a new scene. Elements keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    buildings: Vec<Building>,
    antennas: Vec<Antenna>,
}

impl Scene {
    /// Buildings in insertion order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Antennas in insertion order.
    pub fn antennas(&self) -> &[Antenna] {
        &self.antennas
    }

    /// Buildings sorted by identifier.
    pub fn sorted_buildings(&self) -> Vec<&Building> {
        let mut buildings: Vec<&Building> = self.buildings.iter().collect();
        buildings.sort_by(|a, b| a.id.cmp(&b.id));
        buildings
    }

    /// Antennas sorted by identifier.
    pub fn sorted_antennas(&self) -> Vec<&Antenna> {
        let mut antennas: Vec<&Antenna> = self.antennas.iter().collect();
        antennas.sort_by(|a, b| a.id.cmp(&b.id));
        antennas
    }

    /// Get the total number of elements.
    pub fn len(&self) -> usize {
        self.buildings.len() + self.antennas.len()
    }

    /// Check if the scene holds no element at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for constructing a Scene.
///
/// A rejected element leaves the builder as it was.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    buildings: Vec<Building>,
    antennas: Vec<Antenna>,
}

impl SceneBuilder {
    /// Create a new scene builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a building.
    ///
    /// Fails with `DuplicateId` if the identifier is taken by another
    /// building, then with `Overlap` naming the first existing building it
    /// intersects.
    pub fn add_building(&mut self, building: Building) -> Result<&mut Self> {
        if self.buildings.iter().any(|b| b.id == building.id) {
            return Err(KoverError::DuplicateId {
                kind: ElementKind::Building,
                id: building.id,
            });
        }

        if let Some(existing) = self.buildings.iter().find(|b| b.overlaps(&building)) {
            return Err(KoverError::Overlap {
                first: existing.id.clone(),
                second: building.id,
            });
        }

        self.buildings.push(building);
        Ok(self)
    }

    /// Add an antenna.
    ///
    /// Fails with `DuplicateId` if the identifier is taken by another
    /// antenna, then with `SamePosition` naming the first existing antenna
    /// at the same point.
    pub fn add_antenna(&mut self, antenna: Antenna) -> Result<&mut Self> {
        if self.antennas.iter().any(|a| a.id == antenna.id) {
            return Err(KoverError::DuplicateId {
                kind: ElementKind::Antenna,
                id: antenna.id,
            });
        }

        // Existing antennas are pairwise distinct, so the first colliding
        // pair always involves the new one.
        if let Some(existing) = self
            .antennas
            .iter()
            .find(|a| a.is_collocated_with(&antenna))
        {
            return Err(KoverError::SamePosition {
                first: existing.id.clone(),
                second: antenna.id,
            });
        }

        self.antennas.push(antenna);
        Ok(self)
    }

    /// Add a parsed record of either kind.
    pub fn add_record(&mut self, record: Record) -> Result<&mut Self> {
        match record {
            Record::Building(building) => self.add_building(building),
            Record::Antenna(antenna) => self.add_antenna(antenna),
        }
    }

    /// Number of buildings added so far.
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Number of antennas added so far.
    pub fn antenna_count(&self) -> usize {
        self.antennas.len()
    }

    /// Freeze the builder into a scene.
    pub fn build(self) -> Scene {
        Scene {
            buildings: self.buildings,
            antennas: self.antennas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new().build();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut builder = SceneBuilder::new();
        builder
            .add_building(Building::new("zeta", 0, 0, 1, 1))
            .unwrap()
            .add_building(Building::new("alpha", 10, 0, 1, 1))
            .unwrap();
        let scene = builder.build();

        let ids: Vec<&str> = scene.buildings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);

        let sorted: Vec<&str> = scene.sorted_buildings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(sorted, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_duplicate_building_id() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("b1", 0, 0, 1, 1)).unwrap();

        let err = builder
            .add_building(Building::new("b1", 100, 100, 1, 1))
            .unwrap_err();
        assert!(matches!(
            &err,
            KoverError::DuplicateId { kind: ElementKind::Building, id } if id == "b1"
        ));
        assert_eq!(builder.building_count(), 1);
    }

    #[test]
    fn test_duplicate_checked_before_overlap() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("b1", 0, 0, 1, 1)).unwrap();

        let err = builder
            .add_building(Building::new("b1", 0, 0, 1, 1))
            .unwrap_err();
        assert!(matches!(err, KoverError::DuplicateId { .. }));
    }

    #[test]
    fn test_overlap_names_earlier_building_first() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("b1", 0, 0, 2, 2)).unwrap();

        let err = builder
            .add_building(Building::new("b2", 3, 0, 2, 2))
            .unwrap_err();
        assert!(matches!(
            &err,
            KoverError::Overlap { first, second } if first == "b1" && second == "b2"
        ));
        assert_eq!(builder.building_count(), 1);
    }

    #[test]
    fn test_overlap_reports_first_building_in_insertion_order() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("b1", 0, 0, 2, 2)).unwrap();
        builder.add_building(Building::new("b2", 10, 0, 2, 2)).unwrap();

        // Spans x in [-1, 11], covering both.
        let err = builder
            .add_building(Building::new("b3", 5, 0, 6, 1))
            .unwrap_err();
        assert!(matches!(
            &err,
            KoverError::Overlap { first, second } if first == "b1" && second == "b3"
        ));
        assert_eq!(builder.building_count(), 2);
    }

    #[test]
    fn test_adjacent_buildings_are_accepted() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("b1", 1, 0, 1, 1)).unwrap();
        builder.add_building(Building::new("b2", 3, 0, 1, 1)).unwrap();
        builder.add_building(Building::new("b3", 1, 2, 1, 1)).unwrap();
        assert_eq!(builder.build().buildings().len(), 3);
    }

    #[test]
    fn test_building_and_antenna_ids_are_independent() {
        let mut builder = SceneBuilder::new();
        builder.add_building(Building::new("x", 0, 0, 1, 1)).unwrap();
        builder.add_antenna(Antenna::new("x", 0, 0, 1)).unwrap();

        let scene = builder.build();
        assert_eq!(scene.buildings()[0].id, "x");
        assert_eq!(scene.antennas()[0].id, "x");
    }

    #[test]
    fn test_duplicate_antenna_id() {
        let mut builder = SceneBuilder::new();
        builder.add_antenna(Antenna::new("a1", 0, 0, 1)).unwrap();

        let err = builder.add_antenna(Antenna::new("a1", 0, 0, 1)).unwrap_err();
        assert!(matches!(
            &err,
            KoverError::DuplicateId { kind: ElementKind::Antenna, id } if id == "a1"
        ));
    }

    #[test]
    fn test_same_position() {
        let mut builder = SceneBuilder::new();
        builder.add_antenna(Antenna::new("a1", 5, 5, 3)).unwrap();
        builder.add_antenna(Antenna::new("a0", 0, 0, 3)).unwrap();

        let err = builder.add_antenna(Antenna::new("a2", 5, 5, 2)).unwrap_err();
        assert!(matches!(
            &err,
            KoverError::SamePosition { first, second } if first == "a1" && second == "a2"
        ));
        assert_eq!(builder.antenna_count(), 2);
    }

    #[test]
    fn test_antennas_may_overlap_buildings() {
        let mut builder = SceneBuilder::new();
        builder
            .add_record(Record::Building(Building::new("b1", 0, 0, 5, 5)))
            .unwrap()
            .add_record(Record::Antenna(Antenna::new("a1", 0, 0, 10)))
            .unwrap();
        assert_eq!(builder.build().len(), 2);
    }
}
