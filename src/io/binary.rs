//! bincode snapshot of a matrix.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::io::FormatError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

fn config() -> bincode::config::Configuration {
    bincode::config::standard()
}

pub fn to_bytes<T>(matrix: &Matrix<T>) -> Result<Vec<u8>, FormatError>
where
    T: FloatingPoint + Serialize,
{
    Ok(bincode::serde::encode_to_vec(matrix, config())?)
}

/// Decode a snapshot. The shape is validated as part of decoding.
pub fn from_bytes<T>(bytes: &[u8]) -> Result<Matrix<T>, FormatError>
where
    T: FloatingPoint + DeserializeOwned,
{
    let (matrix, _) = bincode::serde::decode_from_slice(bytes, config())?;
    Ok(matrix)
}

pub fn write_file<T>(path: impl AsRef<Path>, matrix: &Matrix<T>) -> Result<(), FormatError>
where
    T: FloatingPoint + Serialize,
{
    let path = path.as_ref();
    let bytes = to_bytes(matrix)?;
    fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote binary matrix");
    Ok(())
}

pub fn read_file<T>(path: impl AsRef<Path>) -> Result<Matrix<T>, FormatError>
where
    T: FloatingPoint + DeserializeOwned,
{
    from_bytes(&fs::read(path)?)
}
