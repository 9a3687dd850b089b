use std::env;

use imageops_cutout::{encode_png, ApplyRemovalMask, RemoveBackground, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if !(4..=6).contains(&args.len()) {
        eprintln!(
            "Usage: {} <input_image> <components|anti-leak|corner> <output_png> [param] [mask_png]",
            args[0]
        );
        eprintln!("  components: param is the minimum component size (default 20)");
        eprintln!("  anti-leak:  param is the dilation radius (default 3)");
        eprintln!("  corner:     param is the background threshold (default 240)");
        eprintln!("Example: {} sticker.png anti-leak sticker_cutout.png 2", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[3];
    let param = args
        .get(4)
        .map(|p| p.parse::<i64>())
        .transpose()
        .map_err(|_| "Invalid parameter")?;

    let strategy = match args[2].as_str() {
        "components" => Strategy::try_connected_components(240, param.unwrap_or(20))?,
        "anti-leak" => Strategy::try_anti_leak(245, param.unwrap_or(3))?,
        "corner" => Strategy::try_corner_flood_fill(param.unwrap_or(240))?,
        other => return Err(format!("Unknown strategy: {other}").into()),
    };

    // 入力画像を一度だけデコードし、マスクと出力の両方に使う
    let image = image::open(input_path)?.to_rgba8();
    let mask = image.removal_mask(&strategy)?;
    let output = encode_png(&image.apply_removal_mask(&mask)?)?;
    std::fs::write(output_path, output)?;
    println!("Saved {} ({})", output_path, strategy.name());

    if let Some(mask_path) = args.get(5) {
        mask.to_luma_image().save(mask_path)?;
        println!("Saved removal mask with {} pixels to {}", mask.len(), mask_path);
    }

    Ok(())
}
