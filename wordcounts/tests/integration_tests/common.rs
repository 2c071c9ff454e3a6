// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

/// Texts covering punctuation, case, digits, unicode and blank lines.
pub const SAMPLES: &[&str] = &[
    "",
    "the cat sat on the mat",
    "Hello, hello! HELLO?",
    "b a a",
    "One fish, two fish,\nred fish, blue fish.\n",
    "   \t  \n\n",
    "snake_case and __dunder__ with 42 numbers 42",
    "Ça va? Très bien, merci. TRÈS!",
    "no-whitespace-at-all",
    "line one\r\nline two\r\n",
];

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "cat.txt", b"the cat sat on the mat")?;
    create_test_file(temp_dir.path(), "hello.txt", b"Hello, hello! HELLO?")?;
    create_test_file(temp_dir.path(), "empty.txt", b"")?;
    create_test_file(temp_dir.path(), "ba.txt", b"b a a")?;
    create_test_file(
        temp_dir.path(),
        "poem.txt",
        b"One fish, two fish,\nred fish, blue fish.\nBlack fish, blue fish,\nold fish, new fish.\n",
    )?;
    create_test_file(temp_dir.path(), "binary.dat", b"ok\n\xff\xfe\xfd\n")?;

    Ok(temp_dir)
}
