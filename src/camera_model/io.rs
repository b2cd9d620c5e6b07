use std::io::Write;

use super::pinhole::Pinhole;

/// Serializes a camera model to a JSON file.
pub fn model_to_json(output_path: &str, model: &Pinhole) -> std::io::Result<()> {
    let j = serde_json::to_string_pretty(model).map_err(std::io::Error::other)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(j.as_bytes())
}

/// Deserializes a camera model from a JSON file.
pub fn model_from_json(file_path: &str) -> std::io::Result<Pinhole> {
    let contents = std::fs::read_to_string(file_path)?;
    serde_json::from_str(&contents).map_err(std::io::Error::other)
}
