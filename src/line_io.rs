//! Reading input lines and writing sorted output

use crate::error::{SortContext, SortError, SortResult};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Read every line of `input`, or of stdin when `input` is `None` or `-`.
pub fn read_lines(input: Option<&Path>) -> SortResult<Vec<String>> {
    match input {
        Some(path) if path != Path::new("-") => read_file_lines(path),
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .with_context(|| "reading standard input".to_string())?;
            Ok(parse_lines(&buffer))
        }
    }
}

fn read_file_lines(path: &Path) -> SortResult<Vec<String>> {
    let name = path.display().to_string();
    if path.is_dir() {
        return Err(SortError::is_directory(&name));
    }

    let file = File::open(path).with_file_context(&name)?;
    let len = file.metadata().with_file_context(&name)?.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns;
    // lines are copied out into owned strings.
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
    Ok(parse_lines(&mmap))
}

/// Split raw input into lines.
///
/// A final newline does not start an empty record, one trailing `\r` is
/// dropped from each line, and invalid UTF-8 is replaced.
pub fn parse_lines(data: &[u8]) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }
    let data = data.strip_suffix(b"\n").unwrap_or(data);

    data.split(|&byte| byte == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

/// Write `lines` newline-terminated to `output`, or to stdout when `None`.
pub fn write_lines<S: AsRef<str>>(lines: &[S], output: Option<&Path>) -> SortResult<()> {
    match output {
        Some(path) => {
            let name = path.display().to_string();
            let file = File::create(path).with_file_context(&name)?;
            write_to(BufWriter::new(file), lines).with_file_context(&name)
        }
        None => write_to(BufWriter::new(io::stdout().lock()), lines)
            .with_context(|| "writing standard output".to_string()),
    }
}

fn write_to<W: Write, S: AsRef<str>>(mut output: W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        output.write_all(line.as_ref().as_bytes())?;
        output.write_all(b"\n")?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_lines() {
        assert_eq!(parse_lines(b"b\na\n"), vec!["b", "a"]);
        assert_eq!(parse_lines(b"b\na"), vec!["b", "a"]);
        assert_eq!(parse_lines(b"x\r\ny\r\n"), vec!["x", "y"]);
        assert_eq!(parse_lines(b"\n\nz\n"), vec!["", "", "z"]);
        assert!(parse_lines(b"").is_empty());
        assert_eq!(parse_lines(b"\n"), vec![""]);
    }

    #[test]
    fn test_parse_lines_replaces_invalid_utf8() {
        let lines = parse_lines(b"ok\n\xff\n");
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "\u{FFFD}");
    }

    #[test]
    fn test_file_round_trip() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        let output_file = temp_dir.path().join("output.txt");

        fs::write(&input_file, "zebra\napple\n")?;
        let lines = read_lines(Some(input_file.as_path()))?;
        assert_eq!(lines, vec!["zebra", "apple"]);

        write_lines(&lines, Some(output_file.as_path()))?;
        assert_eq!(fs::read_to_string(&output_file)?, "zebra\napple\n");
        Ok(())
    }

    #[test]
    fn test_empty_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("empty.txt");
        fs::write(&input_file, "")?;
        assert!(read_lines(Some(input_file.as_path()))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = read_lines(Some(Path::new("/nonexistent/keysort-input.txt")));
        assert!(matches!(result, Err(SortError::FileNotFound { .. })));
    }

    #[test]
    fn test_directory_input() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let result = read_lines(Some(temp_dir.path()));
        assert!(matches!(result, Err(SortError::IsDirectory { .. })));
        Ok(())
    }
}
