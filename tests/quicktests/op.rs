use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<E> {
    /// Add the element to the data structure
    Add(E),
    /// Remove the smallest element
    RemoveMin,
    /// Remove the largest element
    RemoveMax,
    /// Compare in-order traversals
    Iter,
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Adds are weighted up so
    /// trees grow instead of hovering around empty.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Add(E::arbitrary(g)),
            1 => Op::RemoveMin,
            2 => Op::RemoveMax,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
