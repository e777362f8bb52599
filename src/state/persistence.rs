use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::state::manager::UserDocument;

/// Load user documents from a JSON file.
///
/// A missing file is an empty store.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<HashMap<String, UserDocument>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "store file not found, starting empty");
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path)?;
    let users: HashMap<String, UserDocument> = serde_json::from_str(&content)?;
    Ok(users)
}

/// Save user documents to a JSON file.
pub fn save_store<P: AsRef<Path>>(path: P, users: &HashMap<String, UserDocument>) -> Result<()> {
    let json = serde_json::to_string_pretty(users)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), users = users.len(), "store saved");
    Ok(())
}
