use chromatica::colour_model::{CurveOptions, encoding_cctf, russell_rgb};
use chromatica::logger;

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting chromatica...");

    let colourspace = russell_rgb();

    info!("Colourspace: {}", colourspace.name());
    info!("Whitepoint: {:?}", colourspace.whitepoint());

    let npm = colourspace.matrix_rgb_to_xyz();
    for row in 0..3 {
        info!(
            "RGB to XYZ [{}]: [{:>10.7}, {:>10.7}, {:>10.7}]",
            row,
            npm[(row, 0)],
            npm[(row, 1)],
            npm[(row, 2)]
        );
    }

    let mid_grey = 0.18;
    match encoding_cctf(mid_grey, "sRGB", &CurveOptions::default()) {
        Ok(encoded) => info!("sRGB encoding of {mid_grey}: {encoded:.7}"),
        Err(e) => error!("Encoding failed: {}", e),
    }

    Ok(())
}
