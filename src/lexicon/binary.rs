//! Versioned binary lexicon format.
//!
//! All integers are little-endian:
//!
//! ```text
//! magic    4 bytes  "TRLX"
//! version  u16      currently 1
//! count    u64      number of records
//! records  count x { len: u32, word: len bytes of UTF-8, frequency: u64 }
//! checksum u32      CRC32 of every preceding byte
//! ```
//!
//! Records are written in ascending word order so identical lexicons produce
//! identical files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::error::{Result, TrnlpError};
use crate::lexicon::table::{Lexicon, LexiconBuilder};

/// File magic.
pub const MAGIC: &[u8; 4] = b"TRLX";

/// Current format version.
pub const FORMAT_VERSION: u16 = 1;

/// Upper bound on a single word record, in bytes.
const MAX_WORD_BYTES: u32 = 1 << 16;

/// Writer that keeps a running CRC32 over everything written.
struct ChecksumWriter<W: Write> {
    writer: W,
    hasher: crc32fast::Hasher,
}

impl<W: Write> ChecksumWriter<W> {
    fn new(writer: W) -> Self {
        ChecksumWriter {
            writer,
            hasher: crc32fast::Hasher::new(),
        }
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.hasher.update(bytes);
        Ok(())
    }

    fn write_u16(&mut self, value: u16) -> Result<()> {
        self.writer.write_u16::<LittleEndian>(value)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(())
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        self.writer.write_u32::<LittleEndian>(value)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(())
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.writer.write_u64::<LittleEndian>(value)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(())
    }

    /// Write the trailing checksum and flush.
    fn finish(mut self) -> Result<()> {
        let checksum = self.hasher.finalize();
        self.writer.write_u32::<LittleEndian>(checksum)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Reader that keeps a running CRC32 over everything read.
struct ChecksumReader<R: Read> {
    reader: R,
    hasher: crc32fast::Hasher,
}

impl<R: Read> ChecksumReader<R> {
    fn new(reader: R) -> Self {
        ChecksumReader {
            reader,
            hasher: crc32fast::Hasher::new(),
        }
    }

    fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf).map_err(truncated)?;
        self.hasher.update(&buf);
        Ok(buf)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let value = self.reader.read_u16::<LittleEndian>().map_err(truncated)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(value)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let value = self.reader.read_u32::<LittleEndian>().map_err(truncated)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(value)
    }

    fn read_u64(&mut self) -> Result<u64> {
        let value = self.reader.read_u64::<LittleEndian>().map_err(truncated)?;
        self.hasher.update(&value.to_le_bytes());
        Ok(value)
    }

    /// Read the stored checksum and compare it with the running one.
    fn verify(mut self) -> Result<()> {
        let computed = self.hasher.finalize();
        let stored = self.reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if stored != computed {
            return Err(TrnlpError::lexicon_unavailable(format!(
                "checksum mismatch (stored {stored:#010x}, computed {computed:#010x})"
            )));
        }

        let mut trailing = [0u8; 1];
        if self.reader.read(&mut trailing)? != 0 {
            return Err(TrnlpError::lexicon_unavailable(
                "unexpected data after checksum",
            ));
        }
        Ok(())
    }
}

fn truncated(e: io::Error) -> TrnlpError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        TrnlpError::lexicon_unavailable("lexicon file is truncated")
    } else {
        TrnlpError::Io(e)
    }
}

/// Serialize a lexicon into `writer`.
pub fn write_lexicon<W: Write>(lexicon: &Lexicon, writer: W) -> Result<()> {
    let mut entries: Vec<(&str, u64)> = lexicon.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = ChecksumWriter::new(writer);
    out.write_raw(MAGIC)?;
    out.write_u16(FORMAT_VERSION)?;
    out.write_u64(entries.len() as u64)?;

    for (word, frequency) in entries {
        let bytes = word.as_bytes();
        let len = u32::try_from(bytes.len())
            .ok()
            .filter(|&len| len <= MAX_WORD_BYTES)
            .ok_or_else(|| {
                TrnlpError::invalid_argument(format!("word too long to store: {} bytes", bytes.len()))
            })?;
        out.write_u32(len)?;
        out.write_raw(bytes)?;
        out.write_u64(frequency)?;
    }

    out.finish()
}

/// Deserialize a lexicon from `reader`, validating magic, version and checksum.
pub fn read_lexicon<R: Read>(reader: R) -> Result<Lexicon> {
    let mut input = ChecksumReader::new(reader);

    let magic = input.read_raw(MAGIC.len())?;
    if magic.as_slice() != MAGIC {
        return Err(TrnlpError::lexicon_unavailable("not a trnlp lexicon file (bad magic)"));
    }

    let version = input.read_u16()?;
    if version != FORMAT_VERSION {
        return Err(TrnlpError::lexicon_unavailable(format!(
            "unsupported lexicon format version {version} (expected {FORMAT_VERSION})"
        )));
    }

    let count = input.read_u64()?;
    let mut builder = LexiconBuilder::new();

    for index in 0..count {
        let len = input.read_u32()?;
        if len > MAX_WORD_BYTES {
            return Err(TrnlpError::lexicon_unavailable(format!(
                "record {index} declares a {len}-byte word"
            )));
        }
        let bytes = input.read_raw(len as usize)?;
        let word = String::from_utf8(bytes).map_err(|_| {
            TrnlpError::lexicon_unavailable(format!("record {index} is not valid UTF-8"))
        })?;
        let frequency = input.read_u64()?;
        builder.add_word(&word, frequency);
    }

    input.verify()?;
    debug!("decoded {count} lexicon records");
    Ok(builder.build())
}

/// Write a lexicon to `path` in the binary format.
pub fn save_binary<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_lexicon(lexicon, BufWriter::new(file))
}

/// Read a binary lexicon from `path`.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        TrnlpError::lexicon_unavailable(format!("cannot open {}: {e}", path.display()))
    })?;
    read_lexicon(BufReader::new(file))
}
