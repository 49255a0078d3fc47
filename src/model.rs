/// PDF user-space points per millimeter (72 dpi over 25.4 mm per inch).
pub(crate) const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,  // mm
    pub height: f32, // mm
    pub top: f32,    // mm
    pub left: f32,   // mm
    pub right: f32,  // mm
    pub bottom: f32, // mm
}

impl PageGeometry {
    /// A4 portrait with ABNT document margins: generous top/left for
    /// binding, tighter right/bottom.
    pub fn a4_abnt() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            top: 30.0,
            left: 30.0,
            right: 20.0,
            bottom: 20.0,
        }
    }

    pub fn printable_width(&self) -> f32 {
        self.width - self.left - self.right
    }

    pub fn printable_height(&self) -> f32 {
        self.height - self.top - self.bottom
    }

    /// Cursor position past which a block no longer fits. A block ending
    /// exactly here still fits on the page.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl FontVariant {
    /// PostScript name of the standard-14 base font for this face.
    pub(crate) fn base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Oblique => "Helvetica-Oblique",
            FontVariant::BoldOblique => "Helvetica-BoldOblique",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub variant: FontVariant,
    pub size: f32, // points
}

impl Font {
    pub fn new(variant: FontVariant, size: f32) -> Self {
        Self { variant, size }
    }

    /// Nominal glyph height in mm, used for baseline placement.
    pub(crate) fn size_mm(&self) -> f32 {
        self.size / PT_PER_MM
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Stretch inter-word gaps to fill the printable width. Lines with a
    /// single word render left-aligned.
    Justify,
}

/// A single row of text, styled and measured at composition time.
#[derive(Clone, Debug)]
pub struct Line {
    pub text: String,
    pub font: Font,
    pub align: Alignment,
    /// Cell height in mm; the baseline sits vertically centered within it.
    pub height: f32,
}

pub enum Block {
    Line(Line),
    /// Margin-to-margin horizontal rule.
    Rule,
}

/// A block pinned to a vertical position, measured in mm from the top edge.
pub struct PlacedBlock {
    pub y: f32,
    pub block: Block,
}

pub struct Page {
    pub blocks: Vec<PlacedBlock>,
    /// Materialized page-number line, placed below the bottom margin.
    pub footer: Option<PlacedBlock>,
}

pub struct Document {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}
