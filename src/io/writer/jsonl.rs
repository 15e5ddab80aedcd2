/*! JSON lines writer.

Writes one JSON record per line, gzipped if the destination has a `gz` extension.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::is_gzip;

pub struct JsonlWriter<W: Write = Box<dyn Write + Send>> {
    handle: W,
}

impl JsonlWriter {
    /// Create (or truncate) the destination file.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        let f = BufWriter::new(File::create(dst)?);
        let handle: Box<dyn Write + Send> = if is_gzip(dst) {
            Box::new(GzEncoder::new(f, Compression::default()))
        } else {
            Box::new(f)
        };
        Ok(Self { handle })
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(handle: W) -> Self {
        Self { handle }
    }

    pub fn write_single<T: Serialize>(&mut self, item: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, item)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    /// Write items, returning the number of written records.
    pub fn write<'a, T, I>(&mut self, items: I) -> Result<usize, Error>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut nb_written = 0;
        for item in items {
            self.write_single(item)?;
            nb_written += 1;
        }
        Ok(nb_written)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}
