use crate::types::*;
use colorgrad;
use itertools::Itertools;
use plotters::prelude::*;

/// Draws one rectangle per cell colored with the turbo gradient.
///
/// `get_data` returns values in `[0, 1]` (clamped otherwise).
/// Row `0` is drawn at the top.
pub fn grid<F: Fn(Index2) -> Option<Scalar>>(
    size: Dimension2,
    dim: Dimension2,
    get_data: F,
    file: String,
    color_undef: Option<RGBColor>,
    text: Option<&str>,
) -> GenericResult<()> {
    let ratio = dim.y as Scalar / dim.x as Scalar;

    let border_top = if text.is_some() { 20 } else { 0 };

    let size_px = dim!(size.x, (size.x as Scalar * ratio) as usize + border_top);

    let root = BitMapBackend::new(&file, (size_px.x as u32, size_px.y as u32)).into_drawing_area();
    root.fill(&WHITE)?;

    if let Some(text) = text {
        root.titled(text, ("sans-serif", 12))?;
    }

    let cg: colorgrad::Gradient = colorgrad::turbo();

    let chart = ChartBuilder::on(&root)
        .margin_top(border_top as u32)
        .x_label_area_size(0)
        .y_label_area_size(0)
        .build_cartesian_2d(0.0..(dim.x) as Scalar, 0.0..(dim.y) as Scalar)?;

    let plotting_area = chart.plotting_area();
    let none_color = color_undef.unwrap_or(RED);

    for (i, j) in (0..dim.x).cartesian_product(0..dim.y) {
        let color = match get_data(idx!(i, j)) {
            Some(v) => {
                let c = cg.at(v.clamp(0.0, 1.0)).to_rgba8();
                RGBColor(c[0], c[1], c[2])
            }
            None => none_color,
        };

        let x = i as Scalar;
        let y = (dim.y - 1 - j) as Scalar;

        plotting_area.draw(&Rectangle::new(
            [(x, y), (x + 1.0, y + 1.0)],
            color.filled(),
        ))?;
    }

    root.present()?;

    return Ok(());
}
