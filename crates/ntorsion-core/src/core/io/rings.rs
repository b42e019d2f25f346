use crate::core::models::torsion::TorsionKind;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The seven angles of one residue, in [`TorsionKind`] column order.
pub type AngleSet = [Option<f64>; TorsionKind::COUNT];

pub const DEFAULT_TITLE: &str = "Backbone Torsion Rings";

const INNER_RADIUS: f64 = 80.0;
const RING_WIDTH: f64 = 70.0;
const MARKER_DEGREES: [u32; 6] = [0, 60, 120, 180, 240, 300];
const MARKER_SPAN: (f64, f64) = (550.0, 580.0);
const MARKER_LABEL_RADIUS: f64 = 600.0;

const CANVAS_SIZE: (u32, u32) = (1200, 1100);
const CENTER: (f64, f64) = (560.0, 590.0);
const SCALE: f64 = 0.8;

const REFERENCE_GREY: RGBColor = RGBColor(0xe0, 0xe0, 0xe0);
const MARKER_GREY: RGBColor = RGBColor(0x33, 0x33, 0x33);

struct Ring {
    kind: TorsionKind,
    symbol: &'static str,
    base: (f64, f64, f64),
}

/// Innermost first.
const RINGS: [Ring; TorsionKind::COUNT] = [
    Ring { kind: TorsionKind::Chi, symbol: "χ", base: (0.8, 0.0, 0.8) },
    Ring { kind: TorsionKind::Zeta, symbol: "ζ", base: (0.0, 0.8, 0.8) },
    Ring { kind: TorsionKind::Epsilon, symbol: "ε", base: (1.0, 0.0, 1.0) },
    Ring { kind: TorsionKind::Delta, symbol: "δ", base: (1.0, 0.5, 0.0) },
    Ring { kind: TorsionKind::Gamma, symbol: "γ", base: (0.0, 0.0, 1.0) },
    Ring { kind: TorsionKind::Beta, symbol: "β", base: (0.0, 0.8, 0.0) },
    Ring { kind: TorsionKind::Alpha, symbol: "α", base: (1.0, 0.0, 0.0) },
];

#[derive(Debug, Error)]
pub enum RingsError {
    #[error("No torsion angle data to plot")]
    NoData,
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One radial stroke: a single angle of a single residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub kind: TorsionKind,
    /// Ring position, 0 being the innermost (chi) ring.
    pub ring: usize,
    pub inner: (f64, f64),
    pub outer: (f64, f64),
    pub color: (u8, u8, u8),
}

/// Inner and outer radius of ring `ring`, in plot units.
pub fn ring_radii(ring: usize) -> (f64, f64) {
    let inner = INNER_RADIUS + ring as f64 * RING_WIDTH;
    (inner, inner + RING_WIDTH)
}

/// Point at `radius` on the ray for `degrees`, measured clockwise from the
/// positive x axis.
fn polar(radius: f64, degrees: f64) -> (f64, f64) {
    let theta = (-degrees).to_radians();
    (radius * theta.cos(), radius * theta.sin())
}

/// Scales a ring's base colour by `0.4 + 0.6 * |angle| / 180`.
fn spoke_color(base: (f64, f64, f64), angle: f64) -> (u8, u8, u8) {
    let intensity = 0.4 + angle.abs() / 180.0 * 0.6;
    let channel = |c: f64| (c * intensity * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(base.0), channel(base.1), channel(base.2))
}

/// Lays out every present angle as a spoke, ring by ring and residue by residue.
pub fn spokes(series: &[AngleSet]) -> Vec<Spoke> {
    let mut spokes = Vec::new();
    for (ring_pos, ring) in RINGS.iter().enumerate() {
        let (r_inner, r_outer) = ring_radii(ring_pos);
        for angles in series {
            let Some(angle) = angles[ring.kind.index()] else {
                continue;
            };
            let position = (angle + 360.0).rem_euclid(360.0);
            spokes.push(Spoke {
                kind: ring.kind,
                ring: ring_pos,
                inner: polar(r_inner, position),
                outer: polar(r_outer, position),
                color: spoke_color(ring.base, angle),
            });
        }
    }
    spokes
}

fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    (
        (CENTER.0 + x * SCALE).round() as i32,
        (CENTER.1 - y * SCALE).round() as i32,
    )
}

fn base_rgb((r, g, b): (f64, f64, f64)) -> RGBColor {
    let channel = |c: f64| (c * 255.0).round() as u8;
    RGBColor(channel(r), channel(g), channel(b))
}

fn draw_rings<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spokes: &[Spoke],
    title: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let centered = Pos::new(HPos::Center, VPos::Center);
    let center = to_pixel((0.0, 0.0));

    root.fill(&WHITE)?;
    root.draw(&Text::new(
        title.to_string(),
        (CANVAS_SIZE.0 as i32 / 2, 30),
        ("sans-serif", 28)
            .into_font()
            .style(FontStyle::Bold)
            .color(&BLACK)
            .pos(centered),
    ))?;

    for ring in 0..=RINGS.len() {
        let radius = (INNER_RADIUS + ring as f64 * RING_WIDTH) * SCALE;
        root.draw(&Circle::new(
            center,
            radius.round() as i32,
            REFERENCE_GREY.stroke_width(1),
        ))?;
    }

    for degree in MARKER_DEGREES {
        let degree = f64::from(degree);
        root.draw(&PathElement::new(
            vec![
                to_pixel(polar(MARKER_SPAN.0, degree)),
                to_pixel(polar(MARKER_SPAN.1, degree)),
            ],
            MARKER_GREY.stroke_width(2),
        ))?;
        root.draw(&Text::new(
            format!("{}°", degree),
            to_pixel(polar(MARKER_LABEL_RADIUS, degree)),
            ("sans-serif", 16)
                .into_font()
                .style(FontStyle::Bold)
                .color(&BLACK)
                .pos(centered),
        ))?;
    }

    for spoke in spokes {
        let (r, g, b) = spoke.color;
        root.draw(&PathElement::new(
            vec![to_pixel(spoke.inner), to_pixel(spoke.outer)],
            RGBColor(r, g, b).mix(0.8).stroke_width(2),
        ))?;
    }

    let legend_x = CENTER.0 as i32 + 500;
    for (i, ring) in RINGS.iter().enumerate() {
        let y = 80 + i as i32 * 30;
        root.draw(&Rectangle::new(
            [(legend_x, y), (legend_x + 18, y + 18)],
            base_rgb(ring.base).filled(),
        ))?;
        root.draw(&Text::new(
            format!("Ring {}: {}", i + 1, ring.symbol),
            (legend_x + 26, y + 9),
            ("sans-serif", 16)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    root.present()
}

/// Renders the concentric torsion-ring plot as an SVG document.
///
/// Each ring holds one angle type, chi innermost and alpha outermost. Every
/// residue contributes one spoke per present angle, placed clockwise at the
/// angle's position on a 0-360 degree dial and shaded by its magnitude.
///
/// # Errors
///
/// Returns [`RingsError::NoData`] if `series` is empty.
pub fn render_svg(series: &[AngleSet], title: &str) -> Result<String, RingsError> {
    if series.is_empty() {
        return Err(RingsError::NoData);
    }
    let spokes = spokes(series);
    debug!(
        residues = series.len(),
        spokes = spokes.len(),
        "Drawing torsion rings."
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CANVAS_SIZE).into_drawing_area();
        draw_rings(&root, &spokes, title).map_err(|e| RingsError::Drawing(e.to_string()))?;
    }
    Ok(svg)
}

pub fn write_svg_to_path<P: AsRef<Path>>(
    series: &[AngleSet],
    title: &str,
    path: P,
) -> Result<(), RingsError> {
    let svg = render_svg(series, title)?;
    fs::write(path, svg)?;
    Ok(())
}
