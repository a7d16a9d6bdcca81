//! Cabin layouts.
//!
//! A layout is an ordered list of blocks, each block being the columns that
//! sit side by side without an aisle between them. Seats are placed on a
//! `(row, block, position)` grid through the layout; adjacency never crosses
//! a block boundary.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ids::AirplaneTypeId;
use crate::seat::{normalize_column, Seat};

/// Block and position given to a column no block contains.
pub const UNMAPPED: i64 = 99;

const BUILTIN_LAYOUTS: &[(i64, &[&[&str]])] = &[
    // AirNova-660
    (1, &[&["A", "B", "C"], &["E", "F", "G"]]),
    // AirMax-720neo
    (2, &[&["A", "B"], &["D", "E", "F"], &["H", "I"]]),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout has no blocks")]
    Empty,

    #[error("Block {0} has no columns")]
    EmptyBlock(usize),

    #[error("Block {0} contains a blank column")]
    BlankColumn(usize),

    #[error("Column {0} appears more than once")]
    DuplicateColumn(String),
}

/// Grid position of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i64,
    pub block: i64,
    pub position: i64,
}

impl Coordinate {
    pub fn unmapped(row: i64) -> Self {
        Self {
            row,
            block: UNMAPPED,
            position: UNMAPPED,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.block != UNMAPPED
    }
}

/// Immediate neighbors of a column inside its own block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentColumns {
    pub left: Option<String>,
    pub right: Option<String>,
}

impl AdjacentColumns {
    /// Left neighbor first, then right.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.left.iter().chain(self.right.iter()).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    blocks: Vec<Vec<String>>,
}

impl Layout {
    /// Builds a layout from configured blocks, normalizing every column.
    pub fn new<B, C>(blocks: B) -> Result<Self, LayoutError>
    where
        B: IntoIterator,
        B::Item: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        let blocks: Vec<Vec<String>> = blocks
            .into_iter()
            .map(|block| block.into_iter().map(|c| normalize_column(c.as_ref())).collect())
            .collect();

        validate(&blocks)?;
        Ok(Self { blocks })
    }

    /// Single block made of every distinct column observed in `seats`, sorted.
    ///
    /// This is an approximation for airplanes without a registered layout:
    /// aisles are unknown, so columns on both sides of one count as neighbors.
    pub fn inferred<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        let columns: BTreeSet<String> = seats.into_iter().map(Seat::normalized_column).collect();
        Self {
            blocks: vec![columns.into_iter().collect()],
        }
    }

    pub fn blocks(&self) -> &[Vec<String>] {
        &self.blocks
    }

    /// `(block, position)` of a column, first block wins.
    pub fn locate(&self, column: &str) -> Option<(usize, usize)> {
        let column = normalize_column(column);
        self.blocks.iter().enumerate().find_map(|(b, block)| {
            block.iter().position(|c| *c == column).map(|p| (b, p))
        })
    }

    pub fn coordinate(&self, seat: &Seat) -> Coordinate {
        match self.locate(&seat.column) {
            Some((block, position)) => Coordinate {
                row: seat.row,
                block: block as i64,
                position: position as i64,
            },
            None => Coordinate::unmapped(seat.row),
        }
    }

    pub fn adjacent_columns(&self, column: &str) -> AdjacentColumns {
        let Some((b, p)) = self.locate(column) else {
            return AdjacentColumns::default();
        };
        let block = &self.blocks[b];
        AdjacentColumns {
            left: p.checked_sub(1).map(|i| block[i].clone()),
            right: block.get(p + 1).cloned(),
        }
    }
}

fn validate(blocks: &[Vec<String>]) -> Result<(), LayoutError> {
    if blocks.is_empty() {
        return Err(LayoutError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, block) in blocks.iter().enumerate() {
        if block.is_empty() {
            return Err(LayoutError::EmptyBlock(index));
        }
        for column in block {
            if column.is_empty() {
                return Err(LayoutError::BlankColumn(index));
            }
            if !seen.insert(column.as_str()) {
                return Err(LayoutError::DuplicateColumn(column.clone()));
            }
        }
    }
    Ok(())
}

/// Known layouts keyed by airplane type.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: HashMap<AirplaneTypeId, Layout>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the layouts of the fleet's airplane models.
    pub fn builtin() -> Self {
        let layouts = BUILTIN_LAYOUTS
            .iter()
            .map(|(id, blocks)| {
                let blocks = blocks
                    .iter()
                    .map(|block| block.iter().map(|c| c.to_string()).collect())
                    .collect();
                (AirplaneTypeId::new(*id), Layout { blocks })
            })
            .collect();
        Self { layouts }
    }

    pub fn insert(&mut self, airplane: AirplaneTypeId, layout: Layout) -> Option<Layout> {
        self.layouts.insert(airplane, layout)
    }

    pub fn with_layout(mut self, airplane: AirplaneTypeId, layout: Layout) -> Self {
        self.insert(airplane, layout);
        self
    }

    pub fn get(&self, airplane: AirplaneTypeId) -> Option<&Layout> {
        self.layouts.get(&airplane)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Registered layout of `airplane`, or one inferred from its seats.
    pub fn resolve(&self, airplane: AirplaneTypeId, seats: &[Seat]) -> Cow<'_, Layout> {
        match self.get(airplane) {
            Some(layout) => Cow::Borrowed(layout),
            None => {
                tracing::debug!("No layout registered for airplane {}, inferring from {} seats", airplane, seats.len());
                Cow::Owned(Layout::inferred(seats))
            }
        }
    }
}
