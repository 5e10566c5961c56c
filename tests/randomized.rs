use std::collections::BTreeSet;

use mapped_queue::{MappedHeap, MappedQueueError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an element of `model` at random, if there is one.
fn pick(rng: &mut StdRng, model: &BTreeSet<u32>) -> Option<u32> {
    if model.is_empty() {
        return None;
    }
    let n = rng.gen_range(0..model.len());
    model.iter().nth(n).copied()
}

fn run_ops(seed: u64, ops: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let initial: BTreeSet<u32> = (0..rng.gen_range(0..40)).map(|_| rng.gen_range(0..200)).collect();
    let mut model = initial.clone();
    let mut queue = MappedHeap::from_vec(initial.into_iter().collect()).unwrap();

    for _ in 0..ops {
        match rng.gen_range(0..5) {
            0 | 1 => {
                let elt = rng.gen_range(0..200);
                assert_eq!(queue.push(elt), model.insert(elt));
            }
            2 => match model.pop_first() {
                Some(min) => assert_eq!(queue.pop(), Ok(min)),
                None => assert_eq!(queue.pop(), Err(MappedQueueError::Empty)),
            },
            3 => {
                let new = rng.gen_range(0..200);
                match pick(&mut rng, &model) {
                    Some(old) if old == new || !model.contains(&new) => {
                        queue.update(&old, new).unwrap();
                        model.remove(&old);
                        model.insert(new);
                    }
                    Some(old) => {
                        assert_eq!(queue.update(&old, new), Err(MappedQueueError::Duplicate));
                    }
                    None => {
                        assert_eq!(queue.update(&absent(), new), Err(MappedQueueError::NotFound));
                    }
                }
            }
            _ => match pick(&mut rng, &model) {
                Some(elt) => {
                    queue.remove(&elt).unwrap();
                    model.remove(&elt);
                }
                None => assert_eq!(queue.remove(&absent()), Err(MappedQueueError::NotFound)),
            },
        }
        assert_eq!(queue.len(), model.len());
    }

    for elt in &model {
        assert!(queue.contains(elt));
    }
    let drained: Vec<u32> = std::iter::from_fn(|| queue.pop().ok()).collect();
    assert_eq!(drained, model.into_iter().collect::<Vec<_>>());
}

fn absent() -> u32 {
    1_000
}

#[test]
fn random_operations_match_sorted_set() {
    for seed in 0..64 {
        run_ops(seed, 500);
    }
}

#[test]
fn pop_yields_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut values: Vec<u32> = (0..1_000).collect();
    for i in (1..values.len()).rev() {
        values.swap(i, rng.gen_range(0..=i));
    }

    let mut queue = MappedHeap::from_vec(values).unwrap();
    let mut last = None;
    let mut count = 0;
    while let Ok(elt) = queue.pop() {
        assert!(last.map_or(true, |prev| prev < elt));
        last = Some(elt);
        count += 1;
    }
    assert_eq!(count, 1_000);
}
