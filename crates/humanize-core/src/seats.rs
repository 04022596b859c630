//! Smart-seat board — the boulevard's IoT furniture zones.
//!
//! Each zone carries independent `occupied` / `shaded` / `folded` flags; the
//! display status is derived (folded wins over occupancy). The board is
//! seeded from the fixed six-zone boulevard layout and lives for the session
//! only — toggles come from explicit user actions, never from the simulator.

use serde::{Deserialize, Serialize};

/// Derived display status of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Occupied,
    Available,
    Folded,
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupied => write!(f, "occupied"),
            Self::Available => write!(f, "available"),
            Self::Folded => write!(f, "folded"),
        }
    }
}

/// One smart-furniture unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatZone {
    pub id: String,
    pub label: String,
    pub occupied: bool,
    pub shaded: bool,
    pub folded: bool,
}

impl SeatZone {
    fn new(id: &str, label: &str, occupied: bool, shaded: bool, folded: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            occupied,
            shaded,
            folded,
        }
    }

    /// Display status: a folded seat reads as folded regardless of occupancy.
    pub fn status(&self) -> SeatStatus {
        if self.folded {
            SeatStatus::Folded
        } else if self.occupied {
            SeatStatus::Occupied
        } else {
            SeatStatus::Available
        }
    }
}

/// Per-status zone totals for the overview tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeatCounts {
    pub occupied: usize,
    pub available: usize,
    pub folded: usize,
}

/// The session's set of smart-seat zones.
#[derive(Debug, Clone)]
pub struct SeatBoard {
    zones: Vec<SeatZone>,
}

impl Default for SeatBoard {
    /// The fixed boulevard layout.
    fn default() -> Self {
        Self {
            zones: vec![
                SeatZone::new("A1", "North Promenade", true, true, false),
                SeatZone::new("A2", "Rose Garden Bench", false, true, false),
                SeatZone::new("B1", "Heritage Pavilion", false, false, true),
                SeatZone::new("B2", "Fountain Plaza", true, false, false),
                SeatZone::new("C1", "Sport Strip East", false, true, false),
                SeatZone::new("C2", "Palm Alley West", false, false, false),
            ],
        }
    }
}

impl SeatBoard {
    /// All zones, in layout order.
    pub fn zones(&self) -> &[SeatZone] {
        &self.zones
    }

    /// Look up a zone by id.
    pub fn zone(&self, id: &str) -> Option<&SeatZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Flip a zone's fold flag. Returns the new display status, or `None`
    /// for an unknown id.
    pub fn toggle_fold(&mut self, id: &str) -> Option<SeatStatus> {
        let zone = self.zones.iter_mut().find(|z| z.id == id)?;
        zone.folded = !zone.folded;
        Some(zone.status())
    }

    /// Flip a zone's shade flag. Returns the new display status, or `None`
    /// for an unknown id.
    pub fn toggle_shade(&mut self, id: &str) -> Option<SeatStatus> {
        let zone = self.zones.iter_mut().find(|z| z.id == id)?;
        zone.shaded = !zone.shaded;
        Some(zone.status())
    }

    /// Zone totals per display status.
    pub fn counts(&self) -> SeatCounts {
        let mut counts = SeatCounts::default();
        for zone in &self.zones {
            match zone.status() {
                SeatStatus::Occupied => counts.occupied += 1,
                SeatStatus::Available => counts.available += 1,
                SeatStatus::Folded => counts.folded += 1,
            }
        }
        counts
    }
}
