use std::io::BufRead;

/// Reads the next line into `buf`, keeping its `\n` terminator
///
/// `buf` is cleared first. Returns `false` once the reader is exhausted. The
/// last line of a file may come back without a terminator.
pub fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    buf.clear();
    let bytes_read = reader.read_until(b'\n', buf)?;
    Ok(bytes_read > 0)
}
