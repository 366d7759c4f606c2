//! Seed file commands.
//!
//! The storefront loads its catalog from a YAML seed file at startup and
//! refuses to start if the file is invalid. `seed check` runs the same parse
//! and validation offline so a file can be fixed before a deploy.

use std::path::Path;

use tracing::{error, info};

use mark_store_storefront::seed::{SeedError, load_seed_file};

/// Parse and validate a seed file, logging what it would load.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn check(file_path: &Path) -> Result<(), SeedError> {
    info!(path = %file_path.display(), "Checking seed file");

    let seed = match load_seed_file(file_path) {
        Ok(seed) => seed,
        Err(SeedError::Invalid(errors)) => {
            error!("Seed validation failed:");
            for err in &errors {
                error!("  - {err}");
            }
            return Err(SeedError::Invalid(errors));
        }
        Err(e) => return Err(e),
    };

    info!(
        categories = seed.categories.len(),
        products = seed.product_count(),
        users = seed.users.len(),
        reviews = seed.reviews.len(),
        "Seed file is valid"
    );

    Ok(())
}
