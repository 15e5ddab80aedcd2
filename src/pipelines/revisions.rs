//! Concurrent processing of revision files.
//!
//! Revisions are read file after file, and processed concurrently with rayon.
//! A failing revision is logged and skipped, unless the error is fatal
//! (see [Error::is_fatal]), in which case the whole run stops.
//! Outputs are returned in input order.
use std::path::Path;

use log::{error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::{source_files, JsonlReader, JsonlWriter};
use crate::revision::Revision;

/// Apply `process` to every revision found at `src`.
pub fn process_revisions<T, F>(src: &Path, process: F) -> Result<Vec<T>, Error>
where
    T: Send,
    F: Fn(&Revision) -> Result<Vec<T>, Error> + Sync,
{
    let mut results = Vec::new();

    for path in source_files(src)? {
        info!("working on {:?}", path);
        let reader: JsonlReader<Revision> = JsonlReader::from_path(&path)?;

        // /!\: par_bridge does not keep ordering, we sort on line index afterwards.
        let mut outputs: Vec<(usize, Vec<T>)> = reader
            .enumerate()
            .par_bridge()
            .filter_map(|(idx, revision)| match revision {
                Ok(r) => Some((idx, r)),
                Err(e) => {
                    error!("{:?}:{}: invalid revision: {}", path, idx + 1, e);
                    None
                }
            })
            .map(|(idx, revision)| match process(&revision) {
                Ok(output) => Ok((idx, output)),
                Err(e) if e.is_fatal() => {
                    error!("[{}] {}", revision.revision_id(), e);
                    Err(e)
                }
                Err(e) => {
                    error!("[{}] discarding revision: {}", revision.revision_id(), e);
                    Ok((idx, Vec::new()))
                }
            })
            .collect::<Result<_, Error>>()?;

        outputs.sort_by_key(|(idx, _)| *idx);
        results.extend(outputs.into_iter().flat_map(|(_, output)| output));
    }

    Ok(results)
}

/// Write records to `dst`, returning how many were written.
pub fn write_records<T: serde::Serialize>(dst: &Path, records: &[T]) -> Result<usize, Error> {
    let mut writer = JsonlWriter::create(dst)?;
    let nb_written = writer.write(records)?;
    writer.flush()?;
    info!("wrote {} records to {:?}", nb_written, dst);
    Ok(nb_written)
}
