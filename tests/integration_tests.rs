use ordsort::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Default,
    Algorithm::Quicksort,
    Algorithm::Heapsort,
    Algorithm::Insertion,
    Algorithm::Parallel,
];

fn expected(input: &[i64], order: Order, duplicates: Duplicates) -> Vec<i64> {
    let mut out = input.to_vec();
    out.sort();
    if duplicates == Duplicates::Remove {
        out.dedup();
    }
    if order == Order::Descending {
        out.reverse();
    }
    out
}

fn check_all(sorter: &Sorter, input: &[i64]) {
    for algorithm in ALGORITHMS {
        for order in [Order::Ascending, Order::Descending] {
            for duplicates in [Duplicates::Keep, Duplicates::Remove] {
                let mut data = input.to_vec();
                let n = sorter.sort(&mut data, order, algorithm | duplicates);
                assert_eq!(
                    &data[..n],
                    expected(input, order, duplicates).as_slice(),
                    "{:?} {:?} {:?} len {}",
                    algorithm,
                    order,
                    duplicates,
                    input.len()
                );
            }
        }
    }
}

#[test]
fn test_concrete_scenarios() {
    let input = [5, 3, 3, 1, 4];

    let mut data = input;
    let n = sort(&mut data, Order::Ascending, SortOptions::new());
    assert_eq!(n, 5);
    assert_eq!(data, [1, 3, 3, 4, 5]);

    let mut data = input;
    let n = sort(&mut data, Order::Ascending, SortOptions::no_duplicates());
    assert_eq!(n, 4);
    assert_eq!(&data[..n], &[1, 3, 4, 5]);

    let mut data = input;
    let n = sort(&mut data, Order::Descending, SortOptions::new());
    assert_eq!(n, 5);
    assert_eq!(data, [5, 4, 3, 3, 1]);
}

#[test]
fn test_sorter_keeps_its_config() {
    let config = SortConfig::new()
        .workers(3)
        .small_cutoff(8)
        .fork_threshold(10_000)
        .parallel_threshold(64);
    let sorter = Sorter::new(config);
    assert_eq!(*sorter.config(), config);
    assert_eq!(sorter.config().resolve_workers(2), 2);

    assert_eq!(*Sorter::default().config(), SortConfig::default());
    assert_eq!(Sorter::default().config().workers, 0);
}

#[test]
fn test_every_algorithm_small() {
    let sorter = Sorter::new(SortConfig::new().workers(3));
    check_all(&sorter, &[5, 3, 3, 1, 4]);
    check_all(&sorter, &[]);
    check_all(&sorter, &[42]);
    check_all(&sorter, &[2, 1]);
    check_all(&sorter, &[1, 1, 1]);
}

#[test]
fn test_sizes_around_cutoff() {
    let mut rng = StdRng::seed_from_u64(7);
    let sorter = Sorter::new(SortConfig::new().workers(4));

    for len in [31, 32, 33, 34, 63, 64, 65, 100] {
        let input: Vec<i64> = (0..len).map(|_| rng.random_range(0..20)).collect();
        check_all(&sorter, &input);
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();
    let sorter = Sorter::new(SortConfig::new().workers(4).parallel_threshold(64));

    for _ in 0..200 {
        let len = rng.random_range(0..600);
        let spread = rng.random_range(1..1000);
        let input: Vec<i64> = (0..len).map(|_| rng.random_range(0..spread)).collect();
        check_all(&sorter, &input);
    }
}

#[test]
fn test_fuzz_edge_cases() {
    let sorter = Sorter::new(SortConfig::new().workers(4));

    // 1. All same
    check_all(&sorter, &vec![7; 500]);

    // 2. Reversed
    let input: Vec<i64> = (0..500).rev().collect();
    check_all(&sorter, &input);

    // 3. Sorted
    let input: Vec<i64> = (0..500).collect();
    check_all(&sorter, &input);

    // 4. Reversed with duplicates
    let input: Vec<i64> = (0..500).map(|i| i / 3).rev().collect();
    check_all(&sorter, &input);

    // 5. Extremes
    let input = vec![i64::MAX, i64::MIN, 0, i64::MAX, i64::MIN, -1, 1];
    check_all(&sorter, &input);
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut data: Vec<i64> = (0..5000).map(|_| rng.random_range(-100..100)).collect();

    for order in [Order::Ascending, Order::Descending] {
        sort(&mut data, order, SortOptions::new());
        let once = data.clone();
        for algorithm in ALGORITHMS {
            let n = sort(&mut data, order, algorithm);
            assert_eq!(n, once.len());
            assert_eq!(data, once, "{:?} {:?}", algorithm, order);
        }
    }
}

#[test]
fn test_floats_total_order() {
    let mut data = vec![2.5f64, -0.0, f64::INFINITY, 1.0, 0.0, -3.25, 1.0];
    let n = sort_by(
        &mut data,
        Order::Ascending,
        SortOptions::no_duplicates(),
        f64::total_cmp,
    );
    assert_eq!(&data[..n], &[-3.25, -0.0, 0.0, 1.0, 2.5, f64::INFINITY]);

    let n = sort_by(&mut data, Order::Descending, Algorithm::Parallel, f64::total_cmp);
    assert!(data[..n].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_custom_comparator_on_keys() {
    // Sort by absolute value, duplicates by absolute value collapse.
    let mut data = vec![-3i32, 2, 3, -1, 1, -2];
    let n = sort_by(
        &mut data,
        Order::Ascending,
        Algorithm::Quicksort | Duplicates::Remove,
        |a: &i32, b: &i32| a.abs().cmp(&b.abs()),
    );
    assert_eq!(n, 3);
    let abs: Vec<i32> = data[..n].iter().map(|x| x.abs()).collect();
    assert_eq!(abs, vec![1, 2, 3]);
}

#[test]
fn test_strings_by_reference() {
    let words = ["pear", "apple", "fig", "apple", "banana"];
    let mut refs: Vec<&str> = words.to_vec();
    let n = sort(&mut refs, Order::Ascending, SortOptions::no_duplicates());
    assert_eq!(&refs[..n], &["apple", "banana", "fig", "pear"]);
}
