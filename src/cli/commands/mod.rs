pub mod inspect;
pub mod edit;

use anyhow::{ Context, Result };
use log::debug;
use std::path::Path;

use propbag::{ BagOptions, BagSnapshot, PropertyBag };

/// Load the bag stored in `path`; a missing file is an empty bag
pub fn load_bag(path: &Path, options: &BagOptions) -> Result<PropertyBag> {
    if !path.exists() {
        debug!("{} does not exist yet, starting from an empty bag", path.display());
        return Ok(PropertyBag::with_options(options.clone()));
    }
    let snapshot = BagSnapshot::load(path)
        .with_context(|| format!("Failed to load bag from {}", path.display()))?;
    Ok(PropertyBag::from_snapshot(snapshot, options.clone()))
}

/// Write the bag back to `path`, keeping its format
pub fn save_bag(path: &Path, bag: &PropertyBag) -> Result<()> {
    bag.snapshot()
        .save(path)
        .with_context(|| format!("Failed to save bag to {}", path.display()))
}
