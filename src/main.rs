use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use dokmat::{CoordListIO, SparseMatrixDOK};

fn main() {
    // Diagnostics go to stderr so stdout stays pipeable matrix output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: dokmat <matrix1_file> <matrix2_file>");
        process::exit(1);
    }

    let matrix1 = load_matrix(&args[1]);
    let matrix2 = load_matrix(&args[2]);

    println!("Matrix 1:");
    println!("{}", matrix1);

    println!("\nMatrix 2:");
    println!("{}", matrix2);

    // Each operation is reported independently; a dimension mismatch in one
    // does not stop the others
    match matrix1.add(&matrix2) {
        Ok(sum) => {
            println!("\nAdded Matrix:");
            println!("{}", sum);
        }
        Err(err) => eprintln!("\nAddition Error: {}", err),
    }

    match matrix1.subtract(&matrix2) {
        Ok(difference) => {
            println!("\nSubtracted Matrix:");
            println!("{}", difference);
        }
        Err(err) => eprintln!("\nSubtraction Error: {}", err),
    }

    match matrix1.multiply(&matrix2) {
        Ok(product) => {
            println!("\nMultiplied Matrix:");
            println!("{}", product);
        }
        Err(err) => eprintln!("\nMultiplication Error: {}", err),
    }
}

fn load_matrix(path: &str) -> SparseMatrixDOK<i64> {
    match CoordListIO::read_matrix(path) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("Failed to load {}: {}", path, err);
            process::exit(1);
        }
    }
}
