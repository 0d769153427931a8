//! Small enumerations shared between the engine and its snapshots.

use serde::{Deserialize, Serialize};

/// Which of the two helix strands a sphere belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    /// Even indices, phase offset 0.
    A,
    /// Odd indices, phase offset π.
    B,
}

impl Strand {
    /// Strand implied by a sphere index.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Strand::A
        } else {
            Strand::B
        }
    }

    /// Phase offset applied to the helix parameter.
    pub fn phase_offset(self) -> f64 {
        match self {
            Strand::A => 0.0,
            Strand::B => std::f64::consts::PI,
        }
    }
}

/// Role of a sphere in the scene. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SphereKind {
    Helix { strand: Strand },
    Scatter,
}

impl SphereKind {
    /// Kind implied by an index, given the number of spheres per strand.
    pub fn from_index(index: usize, sphere_count: usize) -> Self {
        if index < 2 * sphere_count {
            SphereKind::Helix {
                strand: Strand::from_index(index),
            }
        } else {
            SphereKind::Scatter
        }
    }

    pub fn is_helix(self) -> bool {
        matches!(self, SphereKind::Helix { .. })
    }
}

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    #[default]
    Running,
    Stopped,
}
