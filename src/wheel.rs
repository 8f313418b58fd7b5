//! Codon wheel ("Codesonne") geometry and SVG rendering.
//!
//! Four concentric rings encode, inward to outward: first base, second
//! base, third base, resulting amino acid. Sector boundaries of each ring
//! are the Cartesian product of the inner rings' base choices. All
//! geometry is closed-form polar math with a fixed rotation offset so
//! sector 0 starts at 12 o'clock; there are no error conditions.

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::genetics::{Codon, RnaBase};

/// Base order around the wheel, as printed on classroom charts.
pub const WHEEL_BASES: [RnaBase; 4] = [RnaBase::G, RnaBase::A, RnaBase::C, RnaBase::U];

const CENTER: f64 = 200.0;
const SIZE: u32 = 400;

/// Ring radii, inward to outward: (inner, outer).
const RING_FIRST: (f64, f64) = (30.0, 80.0);
const RING_SECOND: (f64, f64) = (80.0, 130.0);
const RING_THIRD: (f64, f64) = (130.0, 160.0);
const RING_AMINO: (f64, f64) = (160.0, 195.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Converts polar coordinates to cartesian, with 0 degrees at 12 o'clock
/// and angles growing clockwise.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// A closed annular sector plus the anchor where its label is drawn.
#[derive(Debug, Clone)]
pub struct Sector {
    pub path: String,
    pub label_anchor: Point,
    pub mid_angle: f64,
}

/// Builds sector `index` of `total` equal sectors between the given radii.
pub fn annular_sector(index: usize, total: usize, inner_r: f64, outer_r: f64) -> Sector {
    let start_angle = (index as f64) * 360.0 / (total as f64);
    let end_angle = (index as f64 + 1.0) * 360.0 / (total as f64);

    let outer_start = polar_to_cartesian(CENTER, CENTER, outer_r, end_angle);
    let outer_end = polar_to_cartesian(CENTER, CENTER, outer_r, start_angle);
    let inner_start = polar_to_cartesian(CENTER, CENTER, inner_r, end_angle);
    let inner_end = polar_to_cartesian(CENTER, CENTER, inner_r, start_angle);

    let path = format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 0 0 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2} Z",
        outer_start.x, outer_start.y,
        outer_r, outer_r,
        outer_end.x, outer_end.y,
        inner_end.x, inner_end.y,
        inner_r, inner_r,
        inner_start.x, inner_start.y,
    );

    let mid_angle = (start_angle + end_angle) / 2.0;
    let label_radius = inner_r + (outer_r - inner_r) / 2.0;
    Sector {
        path,
        label_anchor: polar_to_cartesian(CENTER, CENTER, label_radius, mid_angle),
        mid_angle,
    }
}

/// Wall-chart color for a base sector.
fn base_color(base: RnaBase) -> &'static str {
    match base {
        RnaBase::G => "#f59e0b",
        RnaBase::A => "#ef4444",
        RnaBase::C => "#3b82f6",
        RnaBase::U => "#10b981",
    }
}

/// The codon encoded by sector `index` of the 64-sector outer rings.
fn wheel_codon(index: usize) -> Codon {
    Codon::new(
        WHEEL_BASES[index / 16],
        WHEEL_BASES[(index % 16) / 4],
        WHEEL_BASES[index % 4],
    )
}

/// Amino acid codes around the outer ring, in wheel sector order.
pub fn amino_ring_labels() -> [&'static str; 64] {
    let mut labels = [""; 64];
    for (index, label) in labels.iter_mut().enumerate() {
        *label = wheel_codon(index).amino_acid().code;
    }
    labels
}

fn push_sector(svg: &mut String, sector: &Sector, fill: &str, label: &str, rotate: bool, font_size: u32, text_fill: &str) {
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"1\"/>\n",
        sector.path, fill
    ));
    // Rotate labels in the tight outer rings so they stay readable.
    let transform = if rotate {
        let angle = if sector.mid_angle > 180.0 {
            sector.mid_angle + 90.0
        } else {
            sector.mid_angle - 90.0
        };
        format!(
            " transform=\"rotate({:.2}, {:.2}, {:.2})\"",
            angle, sector.label_anchor.x, sector.label_anchor.y
        )
    } else {
        String::new()
    };
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"{}\" font-weight=\"bold\" \
         text-anchor=\"middle\" dominant-baseline=\"middle\"{}>{}</text>\n",
        sector.label_anchor.x, sector.label_anchor.y, text_fill, font_size, transform, label
    ));
}

/// Renders the complete annotated codon wheel as an SVG document.
pub fn wheel_svg() -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n",
        size = SIZE
    ));
    svg.push_str(&format!(
        "  <circle cx=\"{c}\" cy=\"{c}\" r=\"198\" fill=\"white\" stroke=\"#e5e7eb\" stroke-width=\"1\"/>\n",
        c = CENTER
    ));

    // Ring 1: first base, 4 sectors.
    for (i, &base) in WHEEL_BASES.iter().enumerate() {
        let sector = annular_sector(i, 4, RING_FIRST.0, RING_FIRST.1);
        push_sector(&mut svg, &sector, base_color(base), &base.to_string(), false, 12, "white");
    }

    // Ring 2: second base, 16 sectors.
    for i in 0..16 {
        let base = WHEEL_BASES[i % 4];
        let sector = annular_sector(i, 16, RING_SECOND.0, RING_SECOND.1);
        push_sector(&mut svg, &sector, base_color(base), &base.to_string(), false, 12, "white");
    }

    // Ring 3: third base, 64 sectors.
    for i in 0..64 {
        let base = WHEEL_BASES[i % 4];
        let sector = annular_sector(i, 64, RING_THIRD.0, RING_THIRD.1);
        push_sector(&mut svg, &sector, "#f3f4f6", &base.to_string(), true, 8, "#333");
    }

    // Ring 4: resulting amino acid, 64 sectors.
    for (i, label) in amino_ring_labels().iter().enumerate() {
        let sector = annular_sector(i, 64, RING_AMINO.0, RING_AMINO.1);
        push_sector(&mut svg, &sector, "white", label, true, 8, "#333");
    }

    svg.push_str(&format!(
        "  <circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"white\"/>\n",
        c = CENTER,
        r = RING_FIRST.0
    ));
    svg.push_str(&format!(
        "  <text x=\"{c}\" y=\"{c}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
         font-size=\"10\" font-weight=\"bold\" fill=\"#9ca3af\">Start</text>\n",
        c = CENTER
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Writes the codon wheel SVG to a file, or to stdout for `-`.
pub fn export_wheel(output: &str) -> Result<()> {
    let svg = wheel_svg();
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(svg.as_bytes())?;
    } else {
        let mut file =
            File::create(output).with_context(|| format!("cannot create {}", output))?;
        file.write_all(svg.as_bytes())?;
        eprintln!("Wrote codon wheel to {}", output);
    }
    Ok(())
}
