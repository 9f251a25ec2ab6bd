//! # Invoice Layout
//!
//! Turns invoice content into positioned text lines on a single A4 page.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.
//! Lines are described as an ordered list of [`LayoutEntry`] values; each
//! visible entry is drawn at the current y and then moves y down by its own
//! advance. Hidden entries take no space, so adding a field never requires
//! renumbering the others. There is no overflow handling: content that runs
//! past the bottom of the page is simply drawn off-page.

use super::models::invoice::format_amount;

pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const LEFT_MARGIN_PT: f32 = 50.0;
pub const TOP_Y_PT: f32 = 800.0;
pub const FOOTER_Y_PT: f32 = 80.0;
pub const SECTION_ADVANCE_PT: f32 = 30.0;
pub const LINE_ADVANCE_PT: f32 = 20.0;

pub const HEADING_FONT_SIZE: f32 = 14.0;
pub const BODY_FONT_SIZE: f32 = 12.0;

pub const CLOSING_LINE: &str = "Thank you!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Helvetica-Bold 14pt
    Heading,
    /// Helvetica 12pt
    Body,
}

impl LineStyle {
    pub fn font_size(self) -> f32 {
        match self {
            LineStyle::Heading => HEADING_FONT_SIZE,
            LineStyle::Body => BODY_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    pub text: String,
    pub style: LineStyle,
    /// Vertical space consumed after this line
    pub advance: f32,
    pub visible: bool,
}

impl LayoutEntry {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Heading,
            advance: SECTION_ADVANCE_PT,
            visible: true,
        }
    }

    pub fn field(label: &str, value: impl std::fmt::Display) -> Self {
        Self {
            text: format!("{}: {}", label, value),
            style: LineStyle::Body,
            advance: LINE_ADVANCE_PT,
            visible: true,
        }
    }

    /// Close a section: leave a wider gap after this line
    pub fn ends_section(mut self) -> Self {
        self.advance = SECTION_ADVANCE_PT;
        self
    }

    pub fn visible_if(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub style: LineStyle,
    pub x: f32,
    pub y: f32,
}

/// Box reserved for the logo in the top-right corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub const LOGO_BOX: LogoBox = LogoBox {
    x: 400.0,
    y: TOP_Y_PT - 40.0,
    width: 120.0,
    height: 40.0,
};

/// Everything printed on one invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceContent {
    pub business_name: String,
    pub title: String,
    pub invoice_no: String,
    pub date: String,
    pub customer_name: String,
    pub mobile: String,
    pub show_mobile: bool,
    pub service: String,
    pub quantity: i64,
    pub rate: f64,
    pub total: f64,
    pub currency: String,
    pub note: String,
    pub show_note: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    pub lines: Vec<PositionedLine>,
    pub logo_box: LogoBox,
}

/// The ordered entries of an invoice body
pub fn invoice_entries(content: &InvoiceContent) -> Vec<LayoutEntry> {
    vec![
        LayoutEntry::heading(&content.business_name),
        LayoutEntry::heading(&content.title),
        LayoutEntry::field("Invoice No", &content.invoice_no),
        LayoutEntry::field("Date", &content.date).ends_section(),
        LayoutEntry::field("Name", &content.customer_name),
        LayoutEntry::field("Mobile", &content.mobile)
            .visible_if(content.show_mobile && !content.mobile.is_empty()),
        LayoutEntry::field("Purpose", &content.service),
        LayoutEntry::field("Quantity", content.quantity),
        LayoutEntry::field("Rate", format_amount(&content.currency, content.rate)),
        LayoutEntry::field("Total", format_amount(&content.currency, content.total)).ends_section(),
        LayoutEntry::field("Note", &content.note)
            .ends_section()
            .visible_if(content.show_note && !content.note.is_empty()),
    ]
}

/// Position visible entries top-down starting at `start_y`
pub fn position_entries(entries: &[LayoutEntry], start_y: f32) -> Vec<PositionedLine> {
    let mut y = start_y;
    let mut lines = Vec::with_capacity(entries.len());

    for entry in entries.iter().filter(|entry| entry.visible) {
        lines.push(PositionedLine {
            text: entry.text.clone(),
            style: entry.style,
            x: LEFT_MARGIN_PT,
            y,
        });
        y -= entry.advance;
    }

    lines
}

/// Full page layout: the positioned body plus the closing line pinned near the bottom
pub fn build_layout(content: &InvoiceContent) -> InvoiceLayout {
    let mut lines = position_entries(&invoice_entries(content), TOP_Y_PT);
    lines.push(PositionedLine {
        text: CLOSING_LINE.to_string(),
        style: LineStyle::Body,
        x: LEFT_MARGIN_PT,
        y: FOOTER_Y_PT,
    });

    InvoiceLayout {
        lines,
        logo_box: LOGO_BOX,
    }
}
