use serde::{Deserialize, Serialize};

use crate::shape::shape;
use crate::Shape;

/// A buyable tile: a shape plus its costs and the income it yields.
///
/// Patches are plain values. Reorienting one via the shape transforms
/// produces a new patch with the same costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub time_cost: u32,
    pub button_cost: u32,
    pub button_income: u32,
    pub shape: Shape,
}

impl Patch {
    pub fn new(time_cost: u32, button_cost: u32, button_income: u32, shape: Shape) -> Self {
        Self {
            time_cost,
            button_cost,
            button_income,
            shape,
        }
    }

    /// The free single-cell filler patch awarded by the time track.
    pub fn leather() -> Self {
        Self::new(0, 0, 0, shape!("#"))
    }

    /// The same patch, rotated 90° clockwise.
    pub fn rotate_clockwise(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            ..self.clone()
        }
    }

    /// The same patch, mirrored along the vertical axis.
    pub fn flip_horizontal(&self) -> Self {
        Self {
            shape: self.shape.flip_horizontal(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Patch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.shape)?;
        write!(
            f,
            "time cost: {}, button cost: {}, button income: {}",
            self.time_cost, self.button_cost, self.button_income
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leather_is_a_free_single_cell() {
        let leather = Patch::leather();
        assert_eq!(leather.time_cost, 0);
        assert_eq!(leather.button_cost, 0);
        assert_eq!(leather.button_income, 0);
        assert_eq!(leather.shape.cell_count(), 1);
    }

    #[test]
    fn reorienting_keeps_costs() {
        let patch = Patch::new(3, 2, 1, shape!(".##\n##."));
        let turned = patch.rotate_clockwise().flip_horizontal();
        assert_eq!(turned.time_cost, 3);
        assert_eq!(turned.button_cost, 2);
        assert_eq!(turned.button_income, 1);
        assert_eq!(turned.shape.cell_count(), patch.shape.cell_count());
    }
}
