use chromatica::colour_model::{CurveOptions, OBSERVER_2_DEGREE, russell_rgb, whitepoint};

fn main() -> anyhow::Result<()> {
    let colourspace = russell_rgb();

    println!("{}", colourspace.name());
    println!(
        "  primaries: R({:.4}, {:.4}) G({:.4}, {:.4}) B({:.4}, {:.4})",
        colourspace.primaries().red.x,
        colourspace.primaries().red.y,
        colourspace.primaries().green.x,
        colourspace.primaries().green.y,
        colourspace.primaries().blue.x,
        colourspace.primaries().blue.y,
    );

    let d55 = whitepoint(OBSERVER_2_DEGREE, "D55")?;
    println!("  whitepoint: D55 ({:.5}, {:.5})", d55.x, d55.y);

    println!("  RGB to XYZ:");
    let npm = colourspace.matrix_rgb_to_xyz();
    for row in 0..3 {
        println!(
            "    [{:>10.7}, {:>10.7}, {:>10.7}]",
            npm[(row, 0)],
            npm[(row, 1)],
            npm[(row, 2)]
        );
    }

    println!("  XYZ to RGB:");
    let inverse = colourspace.matrix_xyz_to_rgb();
    for row in 0..3 {
        println!(
            "    [{:>10.7}, {:>10.7}, {:>10.7}]",
            inverse[(row, 0)],
            inverse[(row, 1)],
            inverse[(row, 2)]
        );
    }

    let options = CurveOptions::default();
    for linear in [0.0, 0.18, 0.5, 1.0] {
        let encoded = colourspace.transfer().encode(linear, &options);
        println!("  encode({linear:.2}) = {encoded:.7}");
    }

    Ok(())
}
