//! Transition table for 3x3 neighbourhoods.
//!
//! A neighbourhood is packed into a 9-bit code, column by column from the left:
//!
//! ```text
//! bit 8  bit 5  bit 2
//! bit 7  bit 4  bit 1
//! bit 6  bit 3  bit 0
//! ```
//!
//! Bit 4 is the center cell, the rest are its neighbours. Entry `i` of the table
//! tells whether the center of code `i` is alive in the next generation.

pub const TABLE_SIZE: usize = 1 << 9;

const CENTER_BIT: u32 = 4;
const NEIGHBORS_MASK: usize = 0b1_1110_1111;

/// Built at compile time, shared by every engine.
pub static TRANSITION_TABLE: [bool; TABLE_SIZE] = build_table();

pub fn transition_table() -> &'static [bool; TABLE_SIZE] {
    &TRANSITION_TABLE
}

/// B3/S23 applied to the center of the neighbourhood `code`.
pub const fn alive_next(code: usize) -> bool {
    let neighbors = (code & NEIGHBORS_MASK).count_ones();
    if (code >> CENTER_BIT) & 1 == 1 {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

pub const fn build_table() -> [bool; TABLE_SIZE] {
    let mut table = [false; TABLE_SIZE];
    let mut code = 0;
    while code != TABLE_SIZE {
        table[code] = alive_next(code);
        code += 1;
    }
    table
}

/// Packs `window[row][col]` into a neighbourhood code.
pub const fn neighborhood_code(window: [[bool; 3]; 3]) -> usize {
    let mut code = 0;
    let mut row = 0;
    while row != 3 {
        let mut col = 0;
        while col != 3 {
            if window[row][col] {
                code |= 1 << ((2 - col) * 3 + (2 - row));
            }
            col += 1;
        }
        row += 1;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &str) -> usize {
        usize::from_str_radix(bits, 2).unwrap()
    }

    #[test]
    fn test_every_code() {
        let table = transition_table();
        for i in 0..TABLE_SIZE {
            let neighbors = (i & 0b111_101_111).count_ones();
            let expected = if i & (1 << 4) != 0 {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            assert_eq!(table[i], expected, "code {:09b}", i);
        }
    }

    #[test]
    fn test_classic_rules() {
        let table = transition_table();
        // lonely cell dies
        assert!(!table[code("000010000")]);
        // two or three neighbours survive
        assert!(table[code("000111000")]);
        assert!(table[code("000111100")]);
        // overcrowded cell dies
        assert!(!table[code("111010111")]);
        // birth
        assert!(table[code("100101000")]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_table(), build_table());
        assert_eq!(&build_table(), transition_table());
    }

    #[test]
    fn test_neighborhood_code_layout() {
        let mut window = [[false; 3]; 3];
        window[0][0] = true;
        assert_eq!(neighborhood_code(window), 1 << 8);

        let mut window = [[false; 3]; 3];
        window[1][1] = true;
        assert_eq!(neighborhood_code(window), 1 << 4);

        let mut window = [[false; 3]; 3];
        window[2][0] = true;
        window[0][2] = true;
        window[2][2] = true;
        assert_eq!(neighborhood_code(window), (1 << 6) | (1 << 2) | 1);

        assert_eq!(neighborhood_code([[true; 3]; 3]), TABLE_SIZE - 1);
    }
}
