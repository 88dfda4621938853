//! A collection of format constants and file naming helpers.

/// The constants that define the shape of the code stream. Streams produced
/// elsewhere are only compatible if these match exactly.
pub mod constants {
    use crate::Code;

    /// The width of the first code in a stream.
    pub const INITIAL_CODE_SIZE: u32 = 9;
    /// The first code that is assigned dynamically.
    pub const FIRST_CODE: Code = 256;
    /// The widest code that the stream may contain.
    pub const MAX_BITS: u32 = 20;
    /// The dictionary stops growing when the next code reaches this value.
    pub const MAX_CODE: Code = (1 << MAX_BITS) - 1;
    /// The size of each read from an input stream.
    pub const CHUNK_SIZE: usize = 4096;
}

/// Output naming rules used by the command line tool.
pub mod naming {
    /// Appended to the stem of encoded files.
    pub const ENCODED_EXTENSION: &str = ".lzw";
    /// Appended to the stem of decoded files.
    pub const DECODED_EXTENSION: &str = ".out";
    /// The stem used when reading from the standard input.
    pub const STDIN_STEM: &str = "stdin";

    /// Return the file name of 'path' without its directories and without the
    /// last extension. Both '/' and '\' separate directories.
    pub fn file_stem(path: &str) -> &str {
        let file = match path.rfind(['/', '\\']) {
            Some(pos) => &path[pos + 1..],
            None => path,
        };
        match file.rfind('.') {
            Some(dot) => &file[..dot],
            None => file,
        }
    }

    /// Return the name of the artifact produced from the input named 'stem'.
    pub fn output_name(stem: &str, is_compress: bool) -> String {
        let ext = if is_compress {
            ENCODED_EXTENSION
        } else {
            DECODED_EXTENSION
        };
        String::from(stem) + ext
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("data", true), "data.lzw");
        assert_eq!(output_name("data", false), "data.out");
        assert_eq!(output_name(file_stem("dir/data.lzw"), false), "data.out");
    }
}
