use rand::seq::IteratorRandom;
use rand::Rng;

/// Order crossover (OX) over two parent permutations of equal length.
///
/// Picks two distinct cut points `i < j`, copies `parent[i..=j]` into the
/// matching child slice, then fills the remaining slots from the other
/// parent in wrap-around scan order starting at `(j + 1) % n`, skipping
/// genes already present. Children are always valid permutations of the
/// parents' element set.
///
/// Permutations shorter than two genes are returned as plain copies.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len());
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let mut cuts = (0..n).choose_multiple(rng, 2);
    cuts.sort_unstable();
    let (i, j) = (cuts[0], cuts[1]);

    (
        fill_child(parent1, parent2, i, j),
        fill_child(parent2, parent1, i, j),
    )
}

fn fill_child(donor: &[usize], other: &[usize], i: usize, j: usize) -> Vec<usize> {
    let n = donor.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for pos in i..=j {
        child[pos] = donor[pos];
        present[donor[pos]] = true;
    }

    let mut slot = (j + 1) % n;
    for offset in 0..n {
        let gene = other[(j + 1 + offset) % n];
        if present[gene] {
            continue;
        }
        while child[slot] != usize::MAX {
            slot = (slot + 1) % n;
        }
        child[slot] = gene;
        present[gene] = true;
    }

    child
}
