//! Command-line front end for the math-numerics kernels
//!
//! Matrices are written row by row, rows separated by `;` and entries by `,`
//! (e.g. `"4,2,0;2,10,4;0,4,5"`). Vectors use `,` only, points are `x,y`.
//!
//! Usage:
//!   cargo run --release --bin numerics -- solve --matrix "4,2,0;2,10,4;0,4,5" --rhs "2,6,5" --method jacobi
//!   cargo run --release --bin numerics -- interp lagrange --point 0,0 --point 1,1 --point 2,4 --at 3
//!   cargo run --release --bin numerics -- --help

use clap::{Parser, Subcommand, ValueEnum};
use math_numerics::interpolation::{self, Point};
use math_numerics::{
    IterativeConfig, condition_number, gauss_jordan_inverse, gauss_seidel, gauss_solve,
    infinity_norm, jacobi, lu_decompose, lu_inverse, multiply, multiply_vector,
};
use ndarray::{Array1, Array2};
use std::error::Error;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "numerics")]
#[command(about = "Interpolation and dense linear-system solvers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpolate through 2 (linear) or 3 (polynomial, lagrange) points
    Interp {
        /// Interpolation scheme
        #[arg(value_enum)]
        kind: InterpKind,
        /// Sample point as X,Y (repeat for each point)
        #[arg(
            long = "point",
            value_parser = parse_point,
            allow_hyphen_values = true,
            required = true
        )]
        points: Vec<Point>,
        /// Abscissa to evaluate at
        #[arg(long, allow_hyphen_values = true)]
        at: f64,
    },
    /// Solve Ax = b
    Solve {
        /// Coefficient matrix A
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
        /// Right-hand side b
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        rhs: Array1<f64>,
        /// Solution method
        #[arg(long, value_enum, default_value_t = SolveMethod::Gauss)]
        method: SolveMethod,
        /// JSON file with iterative solver settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the iterative stopping tolerance
        #[arg(long)]
        tolerance: Option<f64>,
        /// Override the iteration ceiling
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// Print the Doolittle L and U factors
    Lu {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
    },
    /// Invert a square matrix
    Invert {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
        #[arg(long, value_enum, default_value_t = InvertMethod::GaussJordan)]
        method: InvertMethod,
    },
    /// Infinity norm of a matrix, or of its inverse
    Norm {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
        /// Take the norm of the Gauss-Jordan inverse instead
        #[arg(long)]
        inverse: bool,
    },
    /// Condition number in the infinity norm
    Cond {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
    },
    /// Matrix product LEFT·RIGHT
    Multiply {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        left: Array2<f64>,
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        right: Array2<f64>,
    },
    /// Matrix-vector product
    MultiplyVector {
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Array2<f64>,
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Array1<f64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InterpKind {
    Linear,
    Polynomial,
    Lagrange,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolveMethod {
    /// Gaussian elimination with partial pivoting
    Gauss,
    /// Doolittle LU then forward/back substitution
    Lu,
    Jacobi,
    GaussSeidel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InvertMethod {
    GaussJordan,
    Lu,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Interp { kind, points, at } => {
            let y = match kind {
                InterpKind::Linear => interpolation::linear(&point_array::<2>(&points)?, at)?,
                InterpKind::Polynomial => {
                    interpolation::polynomial(&point_array::<3>(&points)?, at)?
                }
                InterpKind::Lagrange => interpolation::lagrange(&point_array::<3>(&points)?, at)?,
            };
            println!("The interpolated value at x = {at} is y = {y}");
        }
        Command::Solve {
            matrix,
            rhs,
            method,
            config,
            tolerance,
            max_iterations,
        } => {
            let x = match method {
                SolveMethod::Gauss => gauss_solve(&matrix, &rhs)?,
                SolveMethod::Lu => lu_decompose(&matrix)?.solve(&rhs)?,
                SolveMethod::Jacobi | SolveMethod::GaussSeidel => {
                    let config = load_config(config, tolerance, max_iterations)?;
                    let solution = match method {
                        SolveMethod::Jacobi => jacobi(&matrix, &rhs, &config)?,
                        _ => gauss_seidel(&matrix, &rhs, &config)?,
                    };
                    if solution.converged {
                        println!("Converged after {} iterations", solution.iterations);
                    } else {
                        println!(
                            "Stopped after {} iterations without converging (max change {:.3e})",
                            solution.iterations, solution.max_change
                        );
                    }
                    solution.x
                }
            };
            println!("Solution vector x:");
            print_vector(&x);
        }
        Command::Lu { matrix } => {
            let factors = lu_decompose(&matrix)?;
            println!("L matrix:");
            print_matrix(&factors.l);
            println!("U matrix:");
            print_matrix(&factors.u);
        }
        Command::Invert { matrix, method } => {
            let inverse = match method {
                InvertMethod::GaussJordan => gauss_jordan_inverse(&matrix)?,
                InvertMethod::Lu => lu_inverse(&matrix)?,
            };
            println!("Inverse:");
            print_matrix(&inverse);
        }
        Command::Norm { matrix, inverse } => {
            if inverse {
                let inv = gauss_jordan_inverse(&matrix)?;
                println!("Infinity norm of the inverse: {}", infinity_norm(&inv));
            } else {
                println!("Infinity norm: {}", infinity_norm(&matrix));
            }
        }
        Command::Cond { matrix } => {
            println!("Condition number: {}", condition_number(&matrix)?);
        }
        Command::Multiply { left, right } => {
            print_matrix(&multiply(&left, &right)?);
        }
        Command::MultiplyVector { matrix, vector } => {
            print_vector(&multiply_vector(&matrix, &vector)?);
        }
    }
    Ok(())
}

fn load_config(
    path: Option<PathBuf>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
) -> Result<IterativeConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading solver configuration from {}", path.display());
            IterativeConfig::from_file(&path)?
        }
        None => IterativeConfig::default(),
    };
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = max_iterations {
        config.max_iterations = max_iterations;
    }
    config.validate()?;
    Ok(config)
}

fn point_array<const N: usize>(points: &[Point]) -> Result<[Point; N], String> {
    <[Point; N]>::try_from(points)
        .map_err(|_| format!("expected exactly {N} points, got {}", points.len()))
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}': {e}", s.trim()))
}

fn parse_vector(s: &str) -> Result<Array1<f64>, String> {
    s.split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()
        .map(Array1::from)
}

fn parse_matrix(s: &str) -> Result<Array2<f64>, String> {
    let rows = s
        .split(';')
        .map(|row| row.split(',').map(parse_number).collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|r| r.len() != ncols) {
        return Err(format!(
            "row {bad} has {} entries, expected {ncols}",
            rows[bad].len()
        ));
    }

    let nrows = rows.len();
    Array2::from_shape_vec((nrows, ncols), rows.concat()).map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> Result<Point, String> {
    match s.split(',').map(parse_number).collect::<Result<Vec<_>, _>>()?[..] {
        [x, y] => Ok(Point::new(x, y)),
        _ => Err(format!("expected a point as X,Y, got '{s}'")),
    }
}

fn print_vector(v: &Array1<f64>) {
    let entries: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    println!("{{ {} }}", entries.join(", "));
}

fn print_matrix(m: &Array2<f64>) {
    for row in m.rows() {
        let entries: Vec<String> = row.iter().map(|x| format!("{x:>12.6}")).collect();
        println!("{}", entries.join(" "));
    }
}
