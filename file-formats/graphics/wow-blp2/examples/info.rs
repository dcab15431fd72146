use wow_blp2::{Blp2Texture, to_rgba_image};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input.blp> [output.png] [miplevel]", args[0]);
        println!("\nExample: Print BLP2 header details and convert one level to PNG");
        return;
    }

    let blp_filename = &args[1];
    let output_filename = args.get(2).map(String::as_str).unwrap_or("output.png");
    let level = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let texture = match Blp2Texture::load(blp_filename) {
        Ok(texture) => texture,
        Err(e) => {
            eprintln!("✗ Failed to load BLP file '{blp_filename}': {e}");
            return;
        }
    };

    let header = texture.header();
    println!("✓ Loaded BLP file: {blp_filename}");
    println!("  Format: {} (0x{:06x})", header.format(), header.format_code());
    println!("  Dimensions: {}x{}", header.width(), header.height());
    println!("  Mipmaps: {}", header.mipmap_count());
    for mip in texture.mipmap_info() {
        println!(
            "    #{:<2} {:>4}x{:<4} {:>8} bytes at {}",
            mip.level, mip.width, mip.height, mip.size, mip.offset
        );
    }

    match texture.decode(level).map(|mip| to_rgba_image(&mip)) {
        Ok(Ok(image)) => match image.save(output_filename) {
            Ok(_) => println!("✓ Saved level {level} as: {output_filename}"),
            Err(e) => eprintln!("✗ Failed to save image: {e}"),
        },
        Ok(Err(e)) | Err(e) => eprintln!("✗ Failed to decode BLP file: {e}"),
    }
}
