use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use crate::{
    entry::Entry,
    error::{Error, IoError, Result},
};

/// Reads dictionary entries line by line.
#[derive(Debug)]
pub struct EntryReader<R: BufRead> {
    lines: Lines<R>,
    line: usize,
    path: Option<PathBuf>,
}

impl EntryReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf) {
            Ok(file) => {
                let mut reader = Self::new(BufReader::new(file));
                reader.path = Some(path_buf);
                Ok(reader)
            }
            Err(error) => Err(IoError::File(error.kind()).into()),
        }
    }
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            lines: inner.lines(),
            line: 0,
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of lines consumed so far.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<Entry, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = match self.lines.next()? {
            Ok(text) => text,
            Err(error) => return Some(Err(IoError::Reader(error.kind()).into())),
        };

        self.line += 1;
        Some(Entry::parse(&text, self.line))
    }
}
