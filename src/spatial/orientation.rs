//! Orientations and oriented views over tiles
//!
//! An [`OrientedView`] pairs a tile id with one of the eight orientations and
//! reads pixels through a coordinate remap instead of copying the tile. The
//! same remap drives the board solver's edge checks and image assembly.

use crate::io::configuration::ORIENTATION_COUNT;
use crate::spatial::tiles::{TileId, TileStore};

/// Clockwise quarter-turn applied after the optional flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// No rotation
    R0,
    /// 90 degrees
    R90,
    /// 180 degrees
    R180,
    /// 270 degrees
    R270,
}

impl Rotation {
    /// All rotations in enumeration order
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }
}

/// Symbolic form of a remap: optional axis swap, then optional mirroring of
/// each output axis. The eight combinations are exactly the eight orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transform {
    swap: bool,
    mirror_x: bool,
    mirror_y: bool,
}

/// One source axis, possibly mirrored, used when composing transforms
#[derive(Clone, Copy)]
struct AxisExpr {
    is_y: bool,
    mirrored: bool,
}

impl Transform {
    fn apply_symbolic(self, x: AxisExpr, y: AxisExpr) -> (AxisExpr, AxisExpr) {
        let (u, v) = if self.swap { (y, x) } else { (x, y) };
        (
            AxisExpr {
                is_y: u.is_y,
                mirrored: u.mirrored != self.mirror_x,
            },
            AxisExpr {
                is_y: v.is_y,
                mirrored: v.mirrored != self.mirror_y,
            },
        )
    }
}

/// One of the eight tile orientations: a horizontal flip followed by a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation {
    /// Mirror the x axis before rotating
    pub flip: bool,
    /// Rotation applied after the flip
    pub rotation: Rotation,
}

impl Orientation {
    /// The orientation that leaves coordinates unchanged
    pub const IDENTITY: Self = Self::new(false, Rotation::R0);

    /// All orientations in the fixed enumeration order used for candidates
    /// and pattern scanning: unflipped rotations first, then flipped ones
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self::new(false, Rotation::R0),
        Self::new(false, Rotation::R90),
        Self::new(false, Rotation::R180),
        Self::new(false, Rotation::R270),
        Self::new(true, Rotation::R0),
        Self::new(true, Rotation::R90),
        Self::new(true, Rotation::R180),
        Self::new(true, Rotation::R270),
    ];

    /// Create an orientation from its flip state and rotation
    pub const fn new(flip: bool, rotation: Rotation) -> Self {
        Self { flip, rotation }
    }

    /// Position of this orientation in [`Orientation::ALL`]
    pub const fn index(self) -> usize {
        (self.flip as usize) * Rotation::ALL.len() + self.rotation.index()
    }

    /// Orientation at a position of [`Orientation::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a coordinate of the oriented grid to the native grid of side `n`
    ///
    /// The flip mirrors x first, then the rotation is applied. Callers keep
    /// `x` and `y` inside `[0, n)`.
    pub const fn remap(self, x: usize, y: usize, n: usize) -> (usize, usize) {
        let e = n.saturating_sub(1);
        let x = if self.flip { e.saturating_sub(x) } else { x };
        match self.rotation {
            Rotation::R0 => (x, y),
            Rotation::R90 => (y, e.saturating_sub(x)),
            Rotation::R180 => (x, e.saturating_sub(y)),
            Rotation::R270 => (e.saturating_sub(y), x),
        }
    }

    const fn transform(self) -> Transform {
        let (swap, mirror_x, mirror_y) = match self.rotation {
            Rotation::R0 => (false, false, false),
            Rotation::R90 => (true, false, true),
            Rotation::R180 => (false, false, true),
            Rotation::R270 => (true, true, false),
        };
        // A flip mirrors x before the rotation, which lands on whichever
        // output axis reads x
        if self.flip {
            if swap {
                Transform {
                    swap,
                    mirror_x,
                    mirror_y: !mirror_y,
                }
            } else {
                Transform {
                    swap,
                    mirror_x: !mirror_x,
                    mirror_y,
                }
            }
        } else {
            Transform {
                swap,
                mirror_x,
                mirror_y,
            }
        }
    }

    fn from_transform(transform: Transform) -> Self {
        Self::ALL
            .into_iter()
            .find(|orientation| orientation.transform() == transform)
            .unwrap_or(Self::IDENTITY)
    }

    /// Orientation equivalent to viewing through `self` and then re-orienting
    /// the visible grid by `outer`
    #[must_use]
    pub fn then(self, outer: Self) -> Self {
        let x = AxisExpr {
            is_y: false,
            mirrored: false,
        };
        let y = AxisExpr {
            is_y: true,
            mirrored: false,
        };
        let (outer_x, outer_y) = outer.transform().apply_symbolic(x, y);
        let (sx, sy) = self.transform().apply_symbolic(outer_x, outer_y);
        Self::from_transform(Transform {
            swap: sx.is_y,
            mirror_x: sx.mirrored,
            mirror_y: sy.mirrored,
        })
    }
}

/// Re-orientation that turns the visible grid a quarter turn clockwise
pub const QUARTER_TURN_CW: Orientation = Orientation::new(false, Rotation::R90);

/// Re-orientation that mirrors the visible grid left to right
pub const MIRROR: Orientation = Orientation::new(true, Rotation::R0);

/// One of the four outer edges of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Row `y = 0`, read left to right
    Top,
    /// Column `x = e`, read top to bottom
    Right,
    /// Row `y = e`, read left to right
    Bottom,
    /// Column `x = 0`, read top to bottom
    Left,
}

impl Side {
    /// All sides clockwise from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A tile seen through an orientation, without copying its pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrientedView {
    /// Referenced tile
    pub tile_id: TileId,
    /// Orientation applied to the tile's coordinates
    pub orientation: Orientation,
}

impl OrientedView {
    /// Create a view of a tile in the given orientation
    pub const fn new(tile_id: TileId, orientation: Orientation) -> Self {
        Self {
            tile_id,
            orientation,
        }
    }

    /// Pixel at `(x, y)` of the oriented tile
    pub fn pixel(&self, store: &TileStore, x: usize, y: usize) -> bool {
        let (sx, sy) = self.orientation.remap(x, y, store.tile_side());
        store.pixel(self.tile_id, sx, sy)
    }

    /// Largest valid coordinate along either axis
    pub fn edge_length(&self, store: &TileStore) -> usize {
        store
            .get(self.tile_id)
            .map_or(0, |tile| tile.side().saturating_sub(1))
    }

    /// Pixels along one outer edge of the oriented tile
    pub fn edge(&self, store: &TileStore, side: Side) -> Vec<bool> {
        let e = self.edge_length(store);
        (0..=e)
            .map(|i| match side {
                Side::Top => self.pixel(store, i, 0),
                Side::Right => self.pixel(store, e, i),
                Side::Bottom => self.pixel(store, i, e),
                Side::Left => self.pixel(store, 0, i),
            })
            .collect()
    }

    /// The same tile with its visible pixels turned a quarter turn clockwise
    #[must_use]
    pub fn rotated_cw(self) -> Self {
        Self::new(self.tile_id, self.orientation.then(QUARTER_TURN_CW))
    }

    /// The same tile with its visible pixels mirrored left to right
    #[must_use]
    pub fn flipped(self) -> Self {
        Self::new(self.tile_id, self.orientation.then(MIRROR))
    }
}
