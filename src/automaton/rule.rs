//! Wolfram rule numbers
//!
//! A rule is an 8-entry lookup table packed into a byte. The neighborhood
//! `(left, self, right)` is read as a 3-bit number and selects the bit of the
//! rule that becomes the cell's next state, so pattern `111` owns bit 7 and
//! pattern `000` owns bit 0.
//!
//! The viewer draws the table as eight tiles ordered from `111` down to
//! `000`. Tile `t` therefore shows the pattern `7 - t` and owns bit `7 - t`;
//! [`Rule::tile_output`] and [`Rule::with_tile_toggled`] work in that order.

use super::cell::Cell;
use super::errors::AutomatonError;
use std::fmt;

/// Number of distinct 3-cell neighborhoods
pub const PATTERN_COUNT: usize = 8;

/// A three-cell neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub left: Cell,
    pub center: Cell,
    pub right: Cell,
}

impl Neighborhood {
    pub fn new(left: Cell, center: Cell, right: Cell) -> Self {
        Neighborhood {
            left,
            center,
            right,
        }
    }

    /// Pattern value `left*4 + center*2 + right`
    pub fn value(self) -> u8 {
        self.left.bit() << 2 | self.center.bit() << 1 | self.right.bit()
    }

    /// Inverse of [`Neighborhood::value`]; only the low three bits are used
    pub fn from_value(value: u8) -> Self {
        Neighborhood {
            left: Cell::from(value & 0b100 != 0),
            center: Cell::from(value & 0b010 != 0),
            right: Cell::from(value & 0b001 != 0),
        }
    }

    /// Neighborhood shown on a rule tile (tile 0 is `111`)
    pub fn for_tile(tile: usize) -> Self {
        Self::from_value((PATTERN_COUNT - 1 - tile % PATTERN_COUNT) as u8)
    }

    pub fn cells(self) -> [Cell; 3] {
        [self.left, self.center, self.right]
    }
}

/// A validated elementary rule number (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(u8);

impl Rule {
    pub const fn new(number: u8) -> Self {
        Rule(number)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Next state for a neighborhood
    pub fn apply(self, neighborhood: Neighborhood) -> Cell {
        Cell::from((self.0 >> neighborhood.value()) & 1 == 1)
    }

    /// Output drawn on rule tile `tile` (tile 0 is pattern `111`, bit 7)
    pub fn tile_output(self, tile: usize) -> Cell {
        self.apply(Neighborhood::for_tile(tile))
    }

    /// Rule with the output of one tile flipped
    pub fn with_tile_toggled(self, tile: usize) -> Self {
        let bit = Neighborhood::for_tile(tile).value();
        Rule(self.0 ^ (1 << bit))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule(super::constants::DEFAULT_RULE)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Rule(number)
    }
}

impl TryFrom<i64> for Rule {
    type Error = AutomatonError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        u8::try_from(requested)
            .map(Rule)
            .map_err(|_| AutomatonError::InvalidRule { requested })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_30_table() {
        let rule = Rule::new(30);
        let expected = [
            (0b111, Cell::Dead),
            (0b110, Cell::Dead),
            (0b101, Cell::Dead),
            (0b100, Cell::Alive),
            (0b011, Cell::Alive),
            (0b010, Cell::Alive),
            (0b001, Cell::Alive),
            (0b000, Cell::Dead),
        ];
        for (pattern, cell) in expected {
            assert_eq!(
                rule.apply(Neighborhood::from_value(pattern)),
                cell,
                "pattern {:03b}",
                pattern
            );
        }
    }

    #[test]
    fn test_tile_order_matches_bit_order() {
        let rule = Rule::new(0b1000_0001);
        assert_eq!(rule.tile_output(0), Cell::Alive);
        assert_eq!(rule.tile_output(7), Cell::Alive);
        for tile in 1..7 {
            assert_eq!(rule.tile_output(tile), Cell::Dead);
        }
        assert_eq!(Neighborhood::for_tile(0).value(), 7);
        assert_eq!(Neighborhood::for_tile(7).value(), 0);
    }

    #[test]
    fn test_toggling_tiles_rebuilds_rule_number() {
        // Tiles 3..=6 are patterns 100, 011, 010, 001
        let rule = (3..=6).fold(Rule::new(0), |rule, tile| rule.with_tile_toggled(tile));
        assert_eq!(rule.number(), 30);
        assert_eq!(rule.with_tile_toggled(3).number(), 30 - 16);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Rule::try_from(255_i64).unwrap(), Rule::new(255));
        assert_eq!(Rule::try_from(0_i64).unwrap(), Rule::new(0));
        assert_eq!(
            Rule::try_from(256_i64),
            Err(AutomatonError::InvalidRule { requested: 256 })
        );
        assert_eq!(
            Rule::try_from(-1_i64),
            Err(AutomatonError::InvalidRule { requested: -1 })
        );
    }

    #[test]
    fn test_neighborhood_round_trip_values() {
        for value in 0..8u8 {
            assert_eq!(Neighborhood::from_value(value).value(), value);
        }
    }
}
