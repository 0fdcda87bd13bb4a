//! Enumerate source files relative to a build origin

use std::path::Path;

use sitetool::globber::Globber;
use sitetool::output::{OutputMode, SourcesResult};

/// Run the recursive glob and print the matches
pub fn run(search: &Path, origin: &Path, pattern: &str, mode: OutputMode) -> anyhow::Result<()> {
    let globber = Globber::new(origin)?;
    log::debug!(
        "globbing {} for {pattern:?} relative to {}",
        search.display(),
        globber.origin().display()
    );
    let files = globber.find(search, pattern);

    let result = SourcesResult {
        count: files.len(),
        files: files.iter().map(|p| p.display().to_string()).collect(),
    };
    result.render(mode);
    Ok(())
}
