use particles_core::InteractionMatrix;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A saved world: the interaction matrix under a user-chosen name.
///
/// Persisted as pretty JSON so the matrix stays human-editable as text.
/// The matrix field deserializes through the validating constructor, so a
/// file that parses has passed the shape and range checks and can be
/// installed directly.
#[derive(Serialize, Deserialize)]
pub struct WorldFile {
    pub name: String,
    pub matrix: InteractionMatrix,
}

/// Save a world to `<dir>/<name>.json`
pub fn save_world(dir: &Path, name: &str, matrix: &InteractionMatrix) -> Result<PathBuf, String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create dir: {e}"))?;
    let world = WorldFile {
        name: name.to_string(),
        matrix: matrix.clone(),
    };
    let data =
        serde_json::to_string_pretty(&world).map_err(|e| format!("Serialize error: {e}"))?;
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(path)
}

/// Load a world from disk. A file whose matrix fails validation (wrong
/// shape, out-of-range or non-numeric entries) is an error, and the caller
/// keeps its live state.
pub fn load_world(path: &Path) -> Result<WorldFile, String> {
    let data = fs::read_to_string(path).map_err(|e| format!("Read error: {e}"))?;
    let world = serde_json::from_str(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    Ok(world)
}

/// Most recently modified world file in `dir`, if any
pub fn find_latest_world(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir).ok().and_then(|entries| {
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .max_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()))
            .map(|e| e.path())
    })
}
