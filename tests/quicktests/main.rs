mod tree;

use quickcheck::{Arbitrary, Gen};

/// The kinds of "things" to do to a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum TreeOp<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Look the T up in the tree
    Search(T),
    /// Swap the tree for a copy of itself
    Clone,
    /// Throw everything away
    Clear,
}

impl<T> Arbitrary for TreeOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Clearing is
    /// rare so that trees get a chance to fill up.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => TreeOp::Insert(T::arbitrary(g)),
            1 => TreeOp::Search(T::arbitrary(g)),
            2 => TreeOp::Clone,
            3 => TreeOp::Clear,
            _ => unreachable!(),
        }
    }
}

/// The kinds of "things" to do to a dynamic array in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ArrayOp<T> {
    /// Append the T
    Push(T),
    /// Read whatever is at the index
    Get(u8),
    /// Remove the last value
    Pop,
    /// Throw everything away
    Clear,
}

impl<T> Arbitrary for ArrayOp<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => ArrayOp::Push(T::arbitrary(g)),
            1 => ArrayOp::Get(u8::arbitrary(g)),
            2 => ArrayOp::Pop,
            3 => ArrayOp::Clear,
            _ => unreachable!(),
        }
    }
}
