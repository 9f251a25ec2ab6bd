//! # PDF Renderer
//!
//! Draws an [`InvoiceLayout`] onto a single A4 page with printpdf and returns
//! the document bytes. Text uses the built-in Helvetica faces, so characters
//! outside the WinAnsi range are substituted before drawing.

use anyhow::{anyhow, Result};
use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, warn};

use super::invoice_layout::{
    InvoiceLayout, LineStyle, LogoBox, PAGE_HEIGHT_PT, PAGE_WIDTH_PT,
};

const LOGO_DPI: f32 = 300.0;
const MM_PER_PT: f32 = 25.4 / 72.0;

fn pt(value: f32) -> Mm {
    Mm(value * MM_PER_PT)
}

pub struct PdfRenderer;

impl PdfRenderer {
    /// Render the layout, drawing the logo only if `logo_path` still exists on disk
    pub fn render(layout: &InvoiceLayout, title: &str, logo_path: Option<&Path>) -> Result<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new(title, pt(PAGE_WIDTH_PT), pt(PAGE_HEIGHT_PT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);

        let heading_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load Helvetica-Bold: {}", e))?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load Helvetica: {}", e))?;

        if let Some(image) = logo_path.and_then(load_logo) {
            draw_logo(&layer, &image, layout.logo_box);
        }

        for line in &layout.lines {
            let font: &IndirectFontRef = match line.style {
                LineStyle::Heading => &heading_font,
                LineStyle::Body => &body_font,
            };
            layer.use_text(
                pdf_safe_text(&line.text),
                line.style.font_size(),
                pt(line.x),
                pt(line.y),
                font,
            );
        }

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer)
            .map_err(|e| anyhow!("Failed to write PDF: {}", e))?;
        let bytes = writer.into_inner()?;
        debug!("Rendered invoice PDF ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

/// A stale or unreadable logo path is skipped, never fatal
fn load_logo(path: &Path) -> Option<DynamicImage> {
    if !path.exists() {
        debug!("Logo {} no longer exists, skipping", path.display());
        return None;
    }
    match image_crate::open(path) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("Could not read logo {}: {}", path.display(), e);
            None
        }
    }
}

/// Where and how large a logo is drawn: scale factor plus bottom-left corner in mm
#[derive(Debug, Clone, Copy, PartialEq)]
struct LogoPlacement {
    scale: f32,
    x_mm: f32,
    y_mm: f32,
}

/// Fit a `px_w` x `px_h` image inside `logo_box` keeping its aspect ratio,
/// centered on the unused axis
fn fit_logo(px_w: u32, px_h: u32, logo_box: LogoBox) -> LogoPlacement {
    let natural_w_mm = px_w.max(1) as f32 / LOGO_DPI * 25.4;
    let natural_h_mm = px_h.max(1) as f32 / LOGO_DPI * 25.4;

    let box_w_mm = logo_box.width * MM_PER_PT;
    let box_h_mm = logo_box.height * MM_PER_PT;
    let scale = (box_w_mm / natural_w_mm).min(box_h_mm / natural_h_mm);

    LogoPlacement {
        scale,
        x_mm: logo_box.x * MM_PER_PT + (box_w_mm - natural_w_mm * scale) / 2.0,
        y_mm: logo_box.y * MM_PER_PT + (box_h_mm - natural_h_mm * scale) / 2.0,
    }
}

fn draw_logo(layer: &PdfLayerReference, image: &DynamicImage, logo_box: LogoBox) {
    let (px_w, px_h) = image.dimensions();
    let placement = fit_logo(px_w, px_h, logo_box);

    Image::from_dynamic_image(image).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(placement.x_mm)),
            translate_y: Some(Mm(placement.y_mm)),
            rotate: None,
            scale_x: Some(placement.scale),
            scale_y: Some(placement.scale),
            dpi: Some(LOGO_DPI),
        },
    );
}

/// Map text onto what the built-in fonts can encode.
///
/// Latin-1 passes through; the rupee sign becomes "Rs.", line breaks and tabs
/// become spaces and anything else "?".
pub fn pdf_safe_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '₹' => out.push_str("Rs."),
            '€' => out.push(c),
            '\r' | '\n' | '\t' => out.push(' '),
            c if (c as u32) < 0x100 && !c.is_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
