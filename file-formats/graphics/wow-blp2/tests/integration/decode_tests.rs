use crate::builder::{Blp2Builder, DXT1_RED, DXT5_BLUE};
use pretty_assertions::assert_eq;
use wow_blp2::{
    Bgra, Blp2Texture, BlockDecoder, BlpFormat, DataError, DxtnFormat, Error, FormatError,
    locate, parse_header, to_rgba_image,
};

#[test]
fn test_paletted_alpha8_end_to_end() {
    let data = Blp2Builder::new(1, 8, 0, 2, 2)
        .color(0, [0, 0, 255, 0])
        .color(1, [255, 0, 0, 0])
        .mipmap(vec![0, 1, 1, 0, 0x10, 0x20, 0x30, 0x40])
        .mipmap(vec![1, 0x80])
        .build();

    let texture = Blp2Texture::from_bytes(data).expect("valid file");
    let header = texture.header();
    assert_eq!(header.format(), BlpFormat::PalettedAlpha8);
    assert_eq!(header.friendly_format(), "Uncompressed paletted image, 8-bit alpha");
    assert_eq!(header.mipmap_count(), 2);
    assert_eq!(header.format_code(), 0x01_08_00);

    let mip = texture.decode(0).expect("level 0 decodes");
    assert_eq!(
        mip.pixels(),
        &[
            Bgra::new(0, 0, 255, 0x10),
            Bgra::new(255, 0, 0, 0x20),
            Bgra::new(255, 0, 0, 0x30),
            Bgra::new(0, 0, 255, 0x40),
        ]
    );

    let mip = texture.decode(1).expect("level 1 decodes");
    assert_eq!((mip.width(), mip.height()), (1, 1));
    assert_eq!(mip.pixels(), &[Bgra::new(255, 0, 0, 0x80)]);
}

#[test]
fn test_dxt1_levels_and_clamping() {
    let data = Blp2Builder::new(2, 0, 0, 8, 8)
        .mipmap(DXT1_RED.repeat(4))
        .mipmap(DXT1_RED.to_vec())
        .build();
    let texture = Blp2Texture::from_bytes(data).expect("valid file");
    assert_eq!(texture.header().format(), BlpFormat::Dxt1NoAlpha);

    let mip = texture.decode(0).expect("level 0 decodes");
    assert_eq!(mip.pixels().len(), 64);
    assert!(mip.pixels().iter().all(|&p| p == Bgra::new(0, 0, 255, 255)));

    let mip = texture.decode(15).expect("clamped level decodes");
    assert_eq!(mip.level(), 1);
    assert_eq!((mip.width(), mip.height()), (4, 4));
    assert_eq!(mip.pixels().len(), 16);
}

#[test]
fn test_dxt5_channel_order() {
    let data = Blp2Builder::new(2, 8, 7, 4, 4)
        .mipmap(DXT5_BLUE.to_vec())
        .build();
    let texture = Blp2Texture::from_bytes(data).expect("valid file");
    assert_eq!(texture.header().format(), BlpFormat::Dxt5Alpha8);

    let mip = texture.decode(0).expect("level 0 decodes");
    assert!(mip.pixels().iter().all(|&p| p == Bgra::new(255, 0, 0, 255)));

    let image = to_rgba_image(&mip).expect("image conversion");
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
}

#[test]
fn test_raw_bgra_row_order_for_encoder() {
    // The first row stored in the file is the top of the image
    let data = Blp2Builder::new(3, 8, 0, 1, 2)
        .mipmap(vec![1, 2, 3, 4, 5, 6, 7, 8])
        .build();
    let texture = Blp2Texture::from_bytes(data).expect("valid file");
    let mip = texture.decode(0).expect("level 0 decodes");
    assert_eq!(mip.to_bgra_bytes(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let image = to_rgba_image(&mip).expect("image conversion");
    assert_eq!(image.get_pixel(0, 0).0, [3, 2, 1, 4]);
    assert_eq!(image.get_pixel(0, 1).0, [7, 6, 5, 8]);
}

#[test]
fn test_mipmap_info() {
    let data = Blp2Builder::new(1, 0, 0, 4, 2)
        .mipmap(vec![0; 8])
        .mipmap(vec![0; 2])
        .mipmap(vec![0; 1])
        .build();
    let texture = Blp2Texture::from_bytes(data).expect("valid file");

    let levels: Vec<_> = texture
        .mipmap_info()
        .iter()
        .map(|mip| (mip.level, mip.width, mip.height, mip.size))
        .collect();
    assert_eq!(levels, vec![(0, 4, 2, 8), (1, 2, 1, 2), (2, 1, 0, 1)]);
}

#[test]
fn test_truncated_file() {
    let mut data = Blp2Builder::new(3, 8, 0, 2, 2).mipmap(vec![0; 16]).build();
    data.pop();

    let header = parse_header(&data).expect("header is intact");
    assert_eq!(
        locate(&header, 0, data.len()),
        Err(DataError::TruncatedMipData {
            requested_offset: 1172,
            requested_length: 16,
            available_length: 1187
        })
    );

    let texture = Blp2Texture::from_bytes(data).expect("header is intact");
    assert!(matches!(
        texture.decode(0),
        Err(Error::Data(DataError::TruncatedMipData { .. }))
    ));
}

#[test]
fn test_short_mipmap_window() {
    let data = Blp2Builder::new(1, 1, 0, 4, 4).mipmap(vec![0; 17]).build();
    let texture = Blp2Texture::from_bytes(data).expect("valid header");
    assert_eq!(
        texture.decode(0),
        Err(Error::Data(DataError::TruncatedPixelData {
            expected: 18,
            actual: 17
        }))
    );
}

#[test]
fn test_no_mipmaps() {
    let data = Blp2Builder::new(1, 0, 0, 4, 4).build();
    let texture = Blp2Texture::from_bytes(data).expect("valid header");
    assert_eq!(texture.header().mipmap_count(), 0);
    assert_eq!(texture.decode(0), Err(Error::Data(DataError::NoMipmaps)));
}

#[test]
fn test_unsupported_formats() {
    let data = Blp2Builder::new(1, 0, 0, 4, 4)
        .content_type(0)
        .mipmap(vec![0; 16])
        .build();
    let texture = Blp2Texture::from_bytes(data).expect("valid header");
    assert_eq!(texture.header().format(), BlpFormat::Jpeg);
    assert_eq!(
        texture.decode(0),
        Err(Error::UnsupportedFormat {
            format_name: "JPEG".to_owned()
        })
    );

    let data = Blp2Builder::new(2, 4, 7, 4, 4).mipmap(vec![0; 16]).build();
    let texture = Blp2Texture::from_bytes(data).expect("valid header");
    assert_eq!(texture.header().friendly_format(), "Unknown");
    assert_eq!(
        texture.decode(0).unwrap_err().to_string(),
        "Unsupported BLP2 format: Unknown"
    );
}

#[test]
fn test_rejected_magic() {
    assert_eq!(
        Blp2Texture::from_bytes(b"BLP1xxxx".to_vec()).unwrap_err(),
        Error::Format(FormatError::UnsupportedVersion)
    );
    assert!(matches!(
        Blp2Texture::from_bytes(b"ABCDxxxx".to_vec()),
        Err(Error::Format(FormatError::UnknownMagic { .. }))
    ));
}

#[test]
fn test_custom_block_decoder() {
    /// Fills every pixel with the codec-order bytes `(r, g, b, a) = (1, 2, 3, 4)`
    struct Constant;

    impl BlockDecoder for Constant {
        fn compressed_size(&self, _: DxtnFormat, width: usize, height: usize) -> usize {
            width * height / 2
        }

        fn decompress(&self, _: DxtnFormat, _: &[u8], width: usize, height: usize) -> Vec<u8> {
            [1, 2, 3, 4].repeat(width * height)
        }
    }

    let data = Blp2Builder::new(2, 1, 0, 4, 4).mipmap(vec![0; 8]).build();
    let texture = Blp2Texture::from_bytes(data).expect("valid header");
    let mip = texture.decode_with(0, &Constant).expect("custom codec");
    assert!(mip.pixels().iter().all(|&p| p == Bgra::new(3, 2, 1, 4)));
}
