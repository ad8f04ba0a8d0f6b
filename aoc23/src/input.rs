use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::error::InputError;

/// Reads the puzzle input from `path`, or from stdin when no path is given and
/// stdin is piped.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    if let Some(path) = path {
        log::debug!("reading input from {}", path.display());
        return fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        });
    }

    if atty::is(atty::Stream::Stdin) {
        return Err(InputError::NoInput);
    }

    log::debug!("reading input from stdin");
    let mut str = String::new();
    io::stdin()
        .read_to_string(&mut str)
        .map_err(InputError::Stdin)?;
    Ok(str)
}

#[test]
fn test_read_missing_file() {
    let err = read_input(Some(Path::new("does/not/exist.txt"))).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert_eq!(err.to_string(), "could not read file: does/not/exist.txt");
}

#[test]
fn test_read_file() {
    let path = std::env::temp_dir().join(format!("aoc23-input-{}.txt", std::process::id()));
    fs::write(&path, "S7\nLJ\n").unwrap();

    let contents = read_input(Some(&path)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(contents, "S7\nLJ\n");
}
