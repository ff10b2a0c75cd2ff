//! SVG line chart of one deterministic curve and any number
//! of finite-population curves.

use plotters::prelude::*;

use crate::error::ChartError;
use crate::trajectory::Trajectory;

pub const DETERMINISTIC_COLOR: RGBColor = BLUE;
/// CSS "green", not plotters' pure green.
pub const STOCHASTIC_COLOR: RGBColor = RGBColor(0, 128, 0);

#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
    /// Tick count on each axis
    pub ticks: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 600,
            height: 270,
            caption: None,
            ticks: 5,
        }
    }
}

fn to_xy(trajectory: &Trajectory) -> impl Iterator<Item = (f64, f64)> + '_ {
    trajectory.iter().map(|p| (p.t as f64, p.n))
}

/// Render the chart to an SVG document.
///
/// The x axis spans `[0, horizon]` and the y axis `[0, popsize]`,
/// so repeated runs with the same parameters share axes.
pub fn render_svg(
    deterministic: &Trajectory,
    stochastic: &[Trajectory],
    horizon: u32,
    popsize: u32,
    style: &ChartStyle,
) -> Result<String, ChartError> {
    if horizon == 0 || popsize == 0 {
        return Err(ChartError::EmptyDomain);
    }
    let mut svg = String::new();
    draw(&mut svg, deterministic, stochastic, horizon, popsize, style)
        .map_err(|e| ChartError::Draw(e.to_string()))?;
    Ok(svg)
}

fn draw(
    svg: &mut String,
    deterministic: &Trajectory,
    stochastic: &[Trajectory],
    horizon: u32,
    popsize: u32,
    style: &ChartStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::with_string(svg, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50);
    if let Some(caption) = &style.caption {
        builder.caption(caption, ("sans-serif", 16));
    }
    let mut chart =
        builder.build_cartesian_2d(0f64..horizon as f64, 0f64..popsize as f64)?;

    chart
        .configure_mesh()
        .x_labels(style.ticks)
        .y_labels(style.ticks)
        .x_desc("generation")
        .y_desc("copies")
        .draw()?;

    for (i, trajectory) in stochastic.iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(to_xy(trajectory), &STOCHASTIC_COLOR))?;
        if i == 0 {
            series
                .label("finite population")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], STOCHASTIC_COLOR));
        }
    }

    chart
        .draw_series(LineSeries::new(to_xy(deterministic), &DETERMINISTIC_COLOR))?
        .label("infinite population")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DETERMINISTIC_COLOR));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
