//! A square bitboard sized at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T`, with `N`
//! chosen when the board is created. Cells are addressed by [`Coordinate`];
//! anything outside `[0, N)²` is reported rather than wrapped.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column lies outside [0..N).
    IndexOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// An N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Largest side length that fits in `T`.
    pub fn max_size() -> usize {
        let capacity = mem::size_of::<T>() * 8;
        let mut n = 0;
        while (n + 1) * (n + 1) <= capacity {
            n += 1;
        }
        n
    }

    /// Empty board of side `size`; fails with `SizeTooLarge` if `size²`
    /// does not fit in `T`.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if size * size > capacity {
            Err(BitBoardError::SizeTooLarge { n: size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `at` lies inside the board.
    #[inline]
    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.row >= 0 && at.col >= 0 && (at.row as usize) < self.size && (at.col as usize) < self.size
    }

    /// Gets the bit at `at`.
    pub fn get(&self, at: Coordinate) -> Result<bool, BitBoardError> {
        let idx = self.index(at)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Like [`get`](Self::get), reading out-of-bounds cells as unset.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.get(at).unwrap_or(false)
    }

    /// Sets the bit at `at` to 1.
    pub fn set(&mut self, at: Coordinate) -> Result<(), BitBoardError> {
        let idx = self.index(at)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at `at` to 0.
    pub fn clear(&mut self, at: Coordinate) -> Result<(), BitBoardError> {
        let idx = self.index(at)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, at: Coordinate) -> Result<usize, BitBoardError> {
        if self.in_bounds(at) {
            Ok(at.row as usize * self.size + at.col as usize)
        } else {
            Err(BitBoardError::IndexOutOfBounds {
                row: at.row,
                col: at.col,
            })
        }
    }

    #[inline]
    fn mask(&self) -> T {
        let used = self.size * self.size;
        if used == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << used) - T::one()
        }
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if ((self.bits >> (r * self.size + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard, in row-major order.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / n) as i32, (idx % n) as i32));
            }
        }
        None
    }
}

/// Bitwise AND of two boards of the same size.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Bitwise OR of two boards of the same size.
impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits | rhs.bits,
            size: self.size,
        }
    }
}

/// Complement within the board's cells.
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        let mask = self.mask();
        BitBoard {
            bits: !self.bits & mask,
            size: self.size,
        }
    }
}
