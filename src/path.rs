use std::fs::File;
use std::path::Path;

pub fn file_exists<P: AsRef<Path>>(file_path: P) -> bool {
    file_path.as_ref().is_file()
}

// A regular file we are allowed to open. The handle is dropped immediately.
pub fn file_readable<P: AsRef<Path>>(file_path: P) -> bool {
    let file_path = file_path.as_ref();
    file_exists(file_path) && File::open(file_path).is_ok()
}

pub fn is_empty<P: AsRef<Path>>(file_path: P) -> bool {
    file_path.as_ref().as_os_str().is_empty()
}
