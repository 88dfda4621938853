use lzw::utils::constants::{FIRST_CODE, INITIAL_CODE_SIZE, MAX_BITS, MAX_CODE};
use lzw::utils::naming::file_stem;

#[test]
fn test_constants() {
    assert_eq!(INITIAL_CODE_SIZE, 9);
    assert_eq!(FIRST_CODE, 256);
    assert_eq!(MAX_BITS, 20);
    assert_eq!(MAX_CODE, 1_048_575);
    // The first dynamic code needs the initial width.
    assert_eq!(FIRST_CODE, 1 << (INITIAL_CODE_SIZE - 1));
}

#[test]
fn test_file_stem() {
    assert_eq!(file_stem("test.txt"), "test");
    assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
    assert_eq!(file_stem("noextension"), "noextension");

    assert_eq!(file_stem("/path/to/file.txt"), "file");
    assert_eq!(file_stem("C:\\Windows\\file.exe"), "file");
    assert_eq!(file_stem("../relative/path.dat"), "path");

    assert_eq!(file_stem(""), "");
    assert_eq!(file_stem(".hidden"), "");
    assert_eq!(file_stem("file."), "file");
    assert_eq!(file_stem("dir.d/noext"), "noext");
}

