use lzw::dictionary::{Dictionary, Entry};
use lzw::{Code, Error};

#[test]
fn test_initial_entries() {
    let dict = Dictionary::with_lookup();
    assert_eq!(dict.len(), 256);
    assert_eq!(dict.next_code(), 256);
    for i in 0..256 {
        let entry = dict.get(i).unwrap();
        assert_eq!(
            *entry,
            Entry {
                prefix: None,
                byte: i as u8
            }
        );
        assert_eq!(dict.lookup(None, i as u8), Some(i));
    }
    assert!(dict.get(256).is_none());
}

#[test]
fn test_lookup_is_optional() {
    let mut dict = Dictionary::new();
    assert!(!dict.has_lookup());
    assert_eq!(dict.lookup(None, b'A'), None);
    dict.append(Some(b'A' as Code), b'B');
    assert_eq!(dict.lookup(Some(b'A' as Code), b'B'), None);
    assert!(Dictionary::with_lookup().has_lookup());
}

#[test]
fn test_append_and_lookup() {
    let mut dict = Dictionary::with_lookup();
    let mut next_code = 256;
    for prefix in 0..10 {
        for ch in b'A'..b'K' {
            if dict.lookup(Some(prefix), ch).is_none() {
                let code = dict.append(Some(prefix), ch);
                assert_eq!(code, next_code);
                next_code += 1;
            }
        }
    }
    assert_eq!(dict.next_code(), 356);
    assert_eq!(dict.lookup(Some(3), b'C'), Some(256 + 3 * 10 + 2));
    assert_eq!(dict.lookup(Some(3), b'Z'), None);
}

#[test]
fn test_reconstruct() {
    let mut dict = Dictionary::new();

    let mut out = Vec::new();
    dict.reconstruct(65, &mut out).unwrap();
    assert_eq!(out, b"A");

    let ab = dict.append(Some(65), 66);
    let aba = dict.append(Some(ab), 65);
    let abab = dict.append(Some(aba), 66);

    let mut out = Vec::new();
    dict.reconstruct(ab, &mut out).unwrap();
    assert_eq!(out, b"AB");

    let mut out = Vec::new();
    dict.reconstruct(abab, &mut out).unwrap();
    assert_eq!(out, b"ABAB");
    assert_eq!(dict.first_byte(abab), Some(b'A'));
}

#[test]
fn test_reconstruct_invalid() {
    let dict = Dictionary::new();
    let mut out = vec![1, 2, 3];
    let res = dict.reconstruct(300, &mut out);
    assert!(matches!(
        res,
        Err(Error::InvalidCode {
            code: 300,
            next_code: 256
        })
    ));
    // The output is left as it was.
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(dict.first_byte(300), None);
}
