use crate::builder::Blp2Builder;
use std::io::Write;
use tempfile::NamedTempFile;
use wow_blp2::{Bgra, Blp2Texture, Error, FormatError, LoadError};

#[test]
fn test_load_from_path() {
    let data = Blp2Builder::new(1, 0, 0, 1, 1)
        .color(7, [10, 20, 30, 40])
        .mipmap(vec![7])
        .build();
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&data).expect("write");

    let texture = Blp2Texture::load(file.path()).expect("load");
    let mip = texture.decode(0).expect("decode");
    assert_eq!(mip.pixels(), &[Bgra::new(10, 20, 30, 255)]);
}

#[test]
fn test_load_reports_decode_errors() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"BLP2").expect("write");

    match Blp2Texture::load(file.path()) {
        Err(LoadError::Decode(Error::Format(FormatError::TooShortForHeader {
            expected: 1172,
            actual: 4,
        }))) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.blp");

    match Blp2Texture::load(&path) {
        Err(LoadError::FileSystem(reported, _)) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
