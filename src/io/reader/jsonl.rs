/*! JSON lines reader.

Reads one JSON record per line, from plain or gzipped files.
Blank lines are skipped.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::marker::PhantomData;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;

use crate::error::Error;

pub struct JsonlReader<T, R = Box<dyn Read + Send>>
where
    R: Read,
{
    lines: Lines<BufReader<R>>,
    item: PhantomData<T>,
}

impl<T> JsonlReader<T> {
    /// Open a file, decompressing it if its extension is `gz`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        let inner: Box<dyn Read + Send> = if is_gzip(src) {
            Box::new(MultiGzDecoder::new(f))
        } else {
            Box::new(f)
        };

        Ok(Self::new(inner))
    }
}

impl<T, R: Read> JsonlReader<T, R> {
    pub fn new(inner: R) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
            item: PhantomData,
        }
    }
}

impl<T, R> Iterator for JsonlReader<T, R>
where
    T: DeserializeOwned,
    R: Read,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str::<T>(&line).map_err(Error::Serde));
        }
    }
}

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;
    use crate::revision::Revision;

    fn gen_data() -> String {
        let mut ret = String::new();
        for id in 0..10 {
            ret.push_str(&format!(
                r#"{{"revision_id": {}, "html_content": "<table></table>"}}"#,
                id
            ));
            ret.push('\n');
        }
        ret
    }

    #[test]
    fn read_all() {
        let r: JsonlReader<Revision, _> = JsonlReader::new(Cursor::new(gen_data()));
        let revisions: Vec<Revision> = r.map(Result::unwrap).collect();
        assert_eq!(revisions.len(), 10);
        assert_eq!(revisions[3].revision_id(), "3");
    }

    #[test]
    fn blank_lines_and_errors() {
        let data = "\n{\"revision_id\": 1, \"html_content\": \"\"}\n\n{broken\n";
        let mut r: JsonlReader<Revision, _> = JsonlReader::new(Cursor::new(data));
        assert!(r.next().unwrap().is_ok());
        assert!(r.next().unwrap().is_err());
        assert!(r.next().is_none());
    }

    #[test]
    fn gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revisions.jsonl.gz");

        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(gen_data().as_bytes()).unwrap();
        enc.finish().unwrap();

        let r: JsonlReader<Revision> = JsonlReader::from_path(&path).unwrap();
        assert_eq!(r.count(), 10);
    }
}
