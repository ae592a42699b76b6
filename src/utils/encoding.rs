use crate::index::types::{IndexHeader, Record};
use std::io::{self, Read, Write};

/// Write a u32 in little-endian format
pub fn write_u32_le<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read a u32 in little-endian format
pub fn read_u32_le<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Write a u64 in little-endian format
pub fn write_u64_le<W: Write>(writer: &mut W, value: u64) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read a u64 in little-endian format
pub fn read_u64_le<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Write an f64 in little-endian format
pub fn write_f64_le<W: Write>(writer: &mut W, value: f64) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read an f64 in little-endian format
pub fn read_f64_le<R: Read>(reader: &mut R) -> io::Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

pub fn write_header<W: Write>(writer: &mut W, header: &IndexHeader) -> io::Result<()> {
    write_u32_le(writer, header.version)?;
    write_u64_le(writer, header.records_begin)?;
    write_u64_le(writer, header.record_count)?;
    write_f64_le(writer, header.start_time)
}

pub fn read_header<R: Read>(reader: &mut R) -> io::Result<IndexHeader> {
    Ok(IndexHeader {
        version: read_u32_le(reader)?,
        records_begin: read_u64_le(reader)?,
        record_count: read_u64_le(reader)?,
        start_time: read_f64_le(reader)?,
    })
}

pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    write_f64_le(writer, record.time)?;
    write_u64_le(writer, record.line_begin)?;
    write_u64_le(writer, record.length)
}

pub fn read_record<R: Read>(reader: &mut R) -> io::Result<Record> {
    Ok(Record {
        time: read_f64_le(reader)?,
        line_begin: read_u64_le(reader)?,
        length: read_u64_le(reader)?,
    })
}

/// Serialize any ordered collection of strings: count, then [length, bytes]...
pub fn write_string_set<'a, W, I>(writer: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a String>,
    I::IntoIter: ExactSizeIterator,
{
    let names = names.into_iter();
    write_u32_le(writer, to_u32(names.len())?)?;

    for name in names {
        let bytes = name.as_bytes();
        write_u32_le(writer, to_u32(bytes.len())?)?;
        writer.write_all(bytes)?;
    }

    Ok(())
}

/// Deserialize a string block written by [`write_string_set`] into any collection
pub fn read_string_set<R, C>(reader: &mut R) -> io::Result<C>
where
    R: Read,
    C: FromIterator<String>,
{
    let count = read_u32_le(reader)? as usize;

    (0..count)
        .map(|_| {
            let len = read_u32_le(reader)?;
            let mut bytes = Vec::new();
            (&mut *reader).take(u64::from(len)).read_to_end(&mut bytes)?;
            if bytes.len() != len as usize {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated string set"));
            }
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
        .collect()
}

fn to_u32(n: usize) -> io::Result<u32> {
    u32::try_from(n).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "block too large"))
}
