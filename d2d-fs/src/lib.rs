//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! Every input file is opened, read to the end and closed inside a single
//! call, so no handle outlives the stage that needed it.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole file at `path` into a string.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Resolve the ambient parent directory of `path` together with its final component.
pub fn open_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should end in a file or directory name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Return whether a path exists and is a directory.
///
/// Paths without a final name (`.`, `..`, `/`) are opened directly.
pub fn dir_is_dir(path: &Utf8Path) -> io::Result<bool> {
    if path.file_name().is_none() {
        return fs_utf8::Dir::open_ambient_dir(path, ambient_authority()).map(|_| true);
    }
    let (dir, name) = open_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn reads_whole_file() {
        let (_tmp, root) = workspace();
        let path = root.join("instance.txt");
        fs::write(&path, "Customers 2\n1.0 2.0 5.0 0\t3.0 4.0\n").expect("write fixture");

        let contents = read_utf8_file(&path).expect("read fixture");
        assert_eq!(contents, "Customers 2\n1.0 2.0 5.0 0\t3.0 4.0\n");
    }

    #[rstest]
    fn missing_file_reports_not_found() {
        let (_tmp, root) = workspace();
        let err = read_utf8_file(&root.join("absent.txt")).expect_err("file is absent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn distinguishes_directories_from_files() {
        let (_tmp, root) = workspace();
        let data = root.join("data");
        fs::create_dir(&data).expect("create data dir");
        let file = data.join("6.5.1.txt");
        fs::write(&file, "").expect("write file");

        assert!(dir_is_dir(&data).expect("inspect dir"));
        assert!(!dir_is_dir(&file).expect("inspect file as dir"));
    }

    #[rstest]
    fn missing_directory_reports_not_found() {
        let (_tmp, root) = workspace();
        let err = dir_is_dir(&root.join("problems")).expect_err("directory is absent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    #[case(".")]
    #[case("..")]
    fn unnamed_directories_are_directories(#[case] path: &str) {
        assert!(dir_is_dir(Utf8Path::new(path)).expect("inspect unnamed dir"));
    }

    #[rstest]
    fn bare_name_resolves_against_working_directory() {
        let (_dir, name) = open_dir_and_name(Utf8Path::new("Cargo.toml")).expect("cwd opens");
        assert_eq!(name, "Cargo.toml");
    }

    #[rstest]
    fn nested_path_keeps_final_component() {
        let (_tmp, root) = workspace();
        let data = root.join("problems").join("data");
        fs::create_dir_all(&data).expect("create data dir");
        let (_dir, name) = open_dir_and_name(&data.join("6.5.1.txt")).expect("parent exists");
        assert_eq!(name, "6.5.1.txt");
    }
}
