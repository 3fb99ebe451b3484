//! Prefabricated attractors.

/// The parts of an attractor a prefab decides.
/// Prefabs always sit in the middle of the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttractorPrefab {
    pub mass: f64,
    /// In pixels
    pub radius: f64,
}

pub mod attractors {
    use super::AttractorPrefab;

    /// The default. Kicks things around at a friendly pace.
    pub fn soccer_ball() -> AttractorPrefab {
        AttractorPrefab {
            mass: 100.0,
            radius: 50.0,
        }
    }

    /// Small and weak, lots of things miss it.
    pub fn moon() -> AttractorPrefab {
        AttractorPrefab {
            mass: 30.0,
            radius: 25.0,
        }
    }

    /// Big and greedy.
    pub fn gas_giant() -> AttractorPrefab {
        AttractorPrefab {
            mass: 400.0,
            radius: 90.0,
        }
    }

    /// Tiny but really heavy, good for slingshots.
    pub fn dwarf() -> AttractorPrefab {
        AttractorPrefab {
            mass: 250.0,
            radius: 12.0,
        }
    }
}
