use std::{io::Write, path::Path};

use tokio::fs;

use crate::parse::InstitutionName;

/// Writes `names` as a 2-space indented JSON array, replacing whatever was at `path`.
/// Non-ASCII text is written as-is.
pub async fn save(path: impl AsRef<Path>, names: &[InstitutionName]) -> crate::Result<()> {
    let f = fs::File::create(path.as_ref()).await?;
    let mut f = std::io::BufWriter::new(f.into_std().await);
    serde_json::to_writer_pretty(&mut f, names)?;
    f.flush()?;
    Ok(())
}
