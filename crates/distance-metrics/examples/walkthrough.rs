//! Computes one pair of vectors under every vector algorithm, then the
//! Hamming distance between two words.

use distance_metrics::{Algorithm, Distance, DistanceError};
use ftlog::LevelFilter;

fn main() -> Result<(), String> {
    // Without a root appender ftlog writes to stderr.
    let _guard = ftlog::builder()
        .max_log_level(LevelFilter::Info)
        .try_init()
        .map_err(|e| e.to_string())?;

    run().map_err(|e| e.to_string())
}

fn run() -> Result<(), DistanceError> {
    let (x, y) = ([0, 2, 1], [1, 4, 5]);
    ftlog::info!("Vectors: {x:?} and {y:?}");

    let mut session = Distance::new(Algorithm::Euclidean);
    session.set_data(x, y)?;

    for name in ["euclidean", "manhattan", "chebyshev", "minkowski:3", "minkowski:2", "minkowski:1"] {
        let algorithm: Algorithm = name.parse()?;
        let distance = session.set_algorithm(algorithm).distance()?;
        ftlog::info!("{algorithm} distance: {distance}");
    }

    let hamming = session
        .set_algorithm(Algorithm::Hamming)
        .set_data("electric", "tectonic")?
        .distance()?;
    ftlog::info!("hamming distance: {hamming}");

    Ok(())
}
