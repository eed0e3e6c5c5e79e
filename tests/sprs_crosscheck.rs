//! Cross-checks of our operators against sprs
//!
//! Matrices are generated with a seeded RNG, run through both our DOK
//! operators and the sprs CSR operators, and compared element for element.

use dokmat::{from_sprs, to_sprs, SparseMatrixDOK};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(
    n_rows: usize,
    n_cols: usize,
    density: f64,
    rng: &mut StdRng,
) -> SparseMatrixDOK<i64> {
    let mut matrix = SparseMatrixDOK::new(n_rows, n_cols);
    for row in 0..n_rows {
        for col in 0..n_cols {
            if rng.gen_bool(density) {
                matrix.set(row, col, rng.gen_range(-9i64..=9));
            }
        }
    }
    matrix
}

#[test]
fn test_conversion_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let matrix = random_matrix(40, 25, 0.1, &mut rng);

    let converted = from_sprs(&to_sprs(&matrix));
    assert_eq!(converted, matrix);
}

#[test]
fn test_addition_agrees_with_sprs() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_matrix(30, 30, 0.15, &mut rng);
    let b = random_matrix(30, 30, 0.15, &mut rng);

    let ours = a.add(&b).unwrap();
    let via_sprs = from_sprs(&(&to_sprs(&a) + &to_sprs(&b)));

    assert_eq!(ours, via_sprs);
}

#[test]
fn test_subtraction_agrees_with_sprs() {
    let mut rng = StdRng::seed_from_u64(13);
    let a = random_matrix(30, 30, 0.15, &mut rng);
    let b = random_matrix(30, 30, 0.15, &mut rng);

    let ours = a.subtract(&b).unwrap();
    let via_sprs = from_sprs(&(&to_sprs(&a) - &to_sprs(&b)));

    assert_eq!(ours, via_sprs);
}

#[test]
fn test_multiplication_agrees_with_sprs() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = random_matrix(30, 20, 0.2, &mut rng);
    let b = random_matrix(20, 25, 0.2, &mut rng);

    let ours = a.multiply(&b).unwrap();
    let via_sprs = from_sprs(&(&to_sprs(&a) * &to_sprs(&b)));

    assert_eq!(ours.n_rows, 30);
    assert_eq!(ours.n_cols, 25);
    assert_eq!(ours, via_sprs);
}

#[test]
fn test_rectangular_product_fixed_case() {
    // A = [1 0 2]    B = [3 1]
    //     [0 1 0]        [0 0]
    //                    [5 2]
    let a = SparseMatrixDOK::from_triplets(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 1)]).unwrap();
    let b =
        SparseMatrixDOK::from_triplets(3, 2, &[(0, 0, 3), (0, 1, 1), (2, 0, 5), (2, 1, 2)])
            .unwrap();

    let ours = a.multiply(&b).unwrap();
    let via_sprs = from_sprs(&(&to_sprs(&a) * &to_sprs(&b)));

    assert_eq!(ours.to_string(), "13 5\n0 0");
    assert_eq!(ours, via_sprs);
}
