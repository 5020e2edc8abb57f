//! Filesystem services used by the save pipeline.

use std::fs;
use std::io;
use std::path::Path;

/// Recursively deletes `path`. Succeeds when the path does not exist.
pub(crate) fn remove_dir_recursive(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Recursively copies the contents of `src` into `dst`, creating `dst` as
/// needed and overwriting conflicting files.
pub(crate) fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_missing_directory_is_a_no_op() {
        let dir = std::env::temp_dir().join("bedpack_fsio_missing");
        let _ = fs::remove_dir_all(&dir);
        assert!(remove_dir_recursive(&dir).is_ok());
    }

    #[test]
    fn copy_overwrites_and_recurses() {
        let root = std::env::temp_dir().join("bedpack_fsio_copy");
        let _ = fs::remove_dir_all(&root);
        let src = root.join("src");
        let dst = root.join("dst");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.txt"), "new").unwrap();
        fs::write(src.join("nested/b.txt"), "b").unwrap();
        fs::write(dst.join("a.txt"), "old").unwrap();

        copy_dir_recursive(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("nested/b.txt")).unwrap(), "b");

        let _ = fs::remove_dir_all(&root);
    }
}
