//! Plan outlines of the structural masonry blocks, in metres.
//!
//! Every block is 14 cm wide and 19 cm high. The outer outline is the block
//! footprint and each void is a closed rectangle inside it, drawn with the
//! winding the blocks have always been drawn with.

use std::{fmt, str::FromStr};

use num_traits::AsPrimitive;

use crate::{chain::Chain, geometry::Point, Float};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BlockKind {
    Be14x19x14,
    Be14x19x29,
    Be14x19x34,
    Be14x19x39,
    Beam14x19x44,
}

type Quad = [(f64, f64); 4];

const BE14X19X14_VOIDS: &[Quad] = &[[
    (0.025, 0.025),
    (0.115, 0.025),
    (0.115, 0.115),
    (0.025, 0.115),
]];

const BE14X19X29_VOIDS: &[Quad] = &[
    [(0.025, 0.025), (0.115, 0.025), (0.115, 0.115), (0.025, 0.115)],
    [(0.265, 0.025), (0.175, 0.025), (0.175, 0.115), (0.265, 0.115)],
];

const BE14X19X34_VOIDS: &[Quad] = &[
    [(0.025, 0.025), (0.115, 0.025), (0.115, 0.115), (0.025, 0.115)],
    [(0.175, 0.115), (0.315, 0.115), (0.315, 0.025), (0.175, 0.025)],
];

const BE14X19X39_VOIDS: &[Quad] = &[
    [(0.165, 0.115), (0.025, 0.115), (0.025, 0.025), (0.165, 0.025)],
    [(0.225, 0.115), (0.365, 0.115), (0.365, 0.025), (0.225, 0.025)],
];

const BEAM14X19X44_VOIDS: &[Quad] = &[
    [(0.025, 0.025), (0.115, 0.025), (0.115, 0.115), (0.025, 0.115)],
    [(0.265, 0.025), (0.175, 0.025), (0.175, 0.115), (0.265, 0.115)],
    [(0.415, 0.025), (0.325, 0.025), (0.325, 0.115), (0.415, 0.115)],
];

fn quad<T: Float>(corners: &Quad) -> Chain<T>
where
    f64: AsPrimitive<T>,
{
    Chain::quad((*corners).map(|(x, y)| Point::new(x, y).as_()))
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Be14x19x14,
        BlockKind::Be14x19x29,
        BlockKind::Be14x19x34,
        BlockKind::Be14x19x39,
        BlockKind::Beam14x19x44,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Be14x19x14 => "BE14x19x14",
            BlockKind::Be14x19x29 => "BE14x19x29",
            BlockKind::Be14x19x34 => "BE14x19x34",
            BlockKind::Be14x19x39 => "BE14x19x39",
            BlockKind::Beam14x19x44 => "BEAM14x19x44",
        }
    }

    pub fn width_cm(self) -> u16 {
        14
    }

    pub fn height_cm(self) -> u16 {
        19
    }

    pub fn length_cm(self) -> u16 {
        match self {
            BlockKind::Be14x19x14 => 14,
            BlockKind::Be14x19x29 => 29,
            BlockKind::Be14x19x34 => 34,
            BlockKind::Be14x19x39 => 39,
            BlockKind::Beam14x19x44 => 44,
        }
    }

    /// Distance between insertion points when laying a row, one centimetre of
    /// joint included.
    pub fn laying_step(self) -> f64 {
        f64::from(self.length_cm() + 1) / 100.0
    }

    /// Closed footprint of the block.
    pub fn outline<T: Float>(self) -> Chain<T>
    where
        f64: AsPrimitive<T>,
    {
        let length = f64::from(self.length_cm()) / 100.0;
        let width = f64::from(self.width_cm()) / 100.0;
        match self {
            BlockKind::Be14x19x14 => {
                quad(&[(length, 0.0), (0.0, 0.0), (0.0, width), (length, width)])
            }
            _ => quad(&[(0.0, 0.0), (0.0, width), (length, width), (length, 0.0)]),
        }
    }

    /// Closed outlines of the holes through the block.
    pub fn voids<T: Float>(self) -> Vec<Chain<T>>
    where
        f64: AsPrimitive<T>,
    {
        let voids = match self {
            BlockKind::Be14x19x14 => BE14X19X14_VOIDS,
            BlockKind::Be14x19x29 => BE14X19X29_VOIDS,
            BlockKind::Be14x19x34 => BE14X19X34_VOIDS,
            BlockKind::Be14x19x39 => BE14X19X39_VOIDS,
            BlockKind::Beam14x19x44 => BEAM14X19X44_VOIDS,
        };
        voids.iter().map(quad).collect()
    }

    /// The footprint followed by the voids.
    pub fn outlines<T: Float>(self) -> Vec<Chain<T>>
    where
        f64: AsPrimitive<T>,
    {
        let mut outlines = vec![self.outline()];
        outlines.extend(self.voids());
        outlines
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = BlockKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BlockKindParseError(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown block '{0}'")]
pub struct BlockKindParseError(pub String);
