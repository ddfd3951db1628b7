use crate::error::ScrapeError;
use crate::model::Recipe;
use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-printed JSON array of recipes; non-ASCII text is kept as-is.
pub fn to_json_string(recipes: &[Recipe]) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(recipes)?)
}

/// Write all recipes to `path` as a UTF-8 JSON array.
///
/// Failures are logged here and returned; the recipes stay with the caller.
pub fn write_recipes(recipes: &[Recipe], path: &Path) -> Result<(), ScrapeError> {
    match try_write(recipes, path) {
        Ok(()) => {
            info!("Saved {} recipes to: {}", recipes.len(), path.display());
            Ok(())
        }
        Err(e) => {
            error!("Failed to write JSON file {}: {}", path.display(), e);
            Err(e)
        }
    }
}

fn try_write(recipes: &[Recipe], path: &Path) -> Result<(), ScrapeError> {
    let json = to_json_string(recipes)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}
