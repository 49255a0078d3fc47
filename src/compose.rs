use crate::model::{
    Alignment, Block, Document, Font, FontVariant, Line, Page, PageGeometry, PlacedBlock,
};

const TITLE_FONT_SIZE: f32 = 12.0;
const TITLE_LINE_HEIGHT: f32 = 8.0; // mm
const TITLE_GAP: f32 = 2.0; // mm

/// Recipe for the per-page footer line, materialized once pagination is
/// final. The closure maps a 1-based page number to the text shown.
pub struct PageFooter {
    font: Font,
    rise: f32,   // baseline cell top, mm above the page's bottom edge
    height: f32, // cell height in mm
    label: Box<dyn Fn(usize) -> String>,
}

impl PageFooter {
    pub fn new<F>(font: Font, rise: f32, height: f32, label: F) -> Self
    where
        F: Fn(usize) -> String + 'static,
    {
        Self {
            font,
            rise,
            height,
            label: Box::new(label),
        }
    }

    /// Conventional centered "Página N" footer in small oblique type.
    pub fn page_number() -> Self {
        Self::new(Font::new(FontVariant::Oblique, 8.0), 15.0, 10.0, |n| {
            format!("Página {n}")
        })
    }
}

/// Builds a [`Document`] top to bottom with a single write cursor. Blocks
/// that would cross the bottom margin trigger a page break before being
/// placed; a block taller than a whole page is placed at the top of a fresh
/// page and allowed to overflow.
pub struct Composer {
    geometry: PageGeometry,
    font: Font,
    cursor: f32,
    done: Vec<Vec<PlacedBlock>>,
    current: Vec<PlacedBlock>,
    footer: Option<PageFooter>,
}

impl Composer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            font: Font::new(FontVariant::Regular, 12.0),
            cursor: geometry.top,
            done: Vec::new(),
            current: Vec::new(),
            footer: None,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// Current write position in mm from the top edge.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Number of pages so far, counting the one being filled.
    pub fn page_count(&self) -> usize {
        self.done.len() + 1
    }

    /// Selects the font for everything placed after this call. The choice
    /// stays in effect across page breaks until changed again.
    pub fn set_font(&mut self, variant: FontVariant, size: f32) {
        self.font = Font::new(variant, size);
    }

    pub fn set_footer(&mut self, footer: PageFooter) {
        self.footer = Some(footer);
    }

    /// Closes the current page and moves the cursor to the top margin of a
    /// fresh one.
    pub fn new_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.cursor = self.geometry.top;
        log::debug!("page {} closed, cursor reset to top", self.done.len());
    }

    /// Greedy, no-lookahead break test: opens a new page when `height` more
    /// mm would cross the bottom margin, unless the cursor already sits at
    /// the top margin (a block taller than the whole page gets a fresh page
    /// and overflows rather than looping).
    fn break_if_needed(&mut self, height: f32) {
        if self.cursor + height > self.geometry.break_trigger() && self.cursor > self.geometry.top
        {
            self.new_page();
        }
    }

    fn place(&mut self, height: f32, block: Block) {
        self.break_if_needed(height);
        self.current.push(PlacedBlock {
            y: self.cursor,
            block,
        });
        self.cursor += height;
    }

    /// Places one row of text in the current font, consuming `height` mm of
    /// the page.
    pub fn add_line(&mut self, text: &str, align: Alignment, height: f32) {
        let line = Line {
            text: text.to_string(),
            font: self.font,
            align,
            height,
        };
        self.place(height, Block::Line(line));
    }

    /// Word-wraps `text` to the printable width and places each resulting
    /// row as its own line, so a long paragraph may continue on the next
    /// page. `'\n'` forces a row break. With [`Alignment::Justify`], every
    /// wrapped row except the last of its segment is stretched to the full
    /// printable width; the last stays left-aligned.
    pub fn add_paragraph(&mut self, text: &str, line_height: f32, align: Alignment) {
        let max_width = self.geometry.printable_width();
        for segment in text.split('\n') {
            let rows = wrap_text(segment, self.font, max_width);
            let last = rows.len() - 1;
            for (i, row) in rows.into_iter().enumerate() {
                let row_align = match align {
                    Alignment::Justify if i < last => Alignment::Justify,
                    Alignment::Justify => Alignment::Left,
                    other => other,
                };
                self.add_line(&row, row_align, line_height);
            }
        }
    }

    /// Uppercased section heading in bold, followed by a small fixed gap.
    /// Note this switches the current font; body text after a title must
    /// pick its own font again.
    pub fn add_section_title(&mut self, label: &str) {
        self.set_font(FontVariant::Bold, TITLE_FONT_SIZE);
        self.add_line(&label.to_uppercase(), Alignment::Left, TITLE_LINE_HEIGHT);
        self.add_spacer(TITLE_GAP);
    }

    /// Moves the cursor down without drawing anything. Spacers go through
    /// the same break check as visible blocks, so a gap that no longer fits
    /// carries over to the top of the next page instead of dangling past
    /// the bottom margin.
    pub fn add_spacer(&mut self, height: f32) {
        self.break_if_needed(height);
        self.cursor += height;
    }

    /// Margin-to-margin horizontal rule at `y` mm from the top edge. Rules
    /// decorate a position instead of claiming one, so the cursor does not
    /// move.
    pub fn add_rule(&mut self, y: f32) {
        self.current.push(PlacedBlock {
            y,
            block: Block::Rule,
        });
    }

    /// Finalizes pagination and stamps the footer onto every page.
    pub fn finish(mut self) -> Document {
        self.done.push(self.current);
        let geometry = self.geometry;
        let footer = self.footer;
        let pages = self
            .done
            .into_iter()
            .enumerate()
            .map(|(i, blocks)| Page {
                blocks,
                footer: footer.as_ref().map(|f| PlacedBlock {
                    y: geometry.height - f.rise,
                    block: Block::Line(Line {
                        text: (f.label)(i + 1),
                        font: f.font,
                        align: Alignment::Center,
                        height: f.height,
                    }),
                }),
            })
            .collect();
        Document { geometry, pages }
    }
}

/// Greedy word wrap against the rendered (WinAnsi) width of each word. A
/// word wider than `max_width` on a row of its own is split mid-word so
/// every row fits; an empty segment still yields one empty row.
fn wrap_text(text: &str, font: Font, max_width: f32) -> Vec<String> {
    let space_w = font.char_width(' ');
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_w = 0.0f32;

    for word in text.split_whitespace() {
        let word_w = font.text_width(word);
        if !row.is_empty() && row_w + space_w + word_w > max_width {
            rows.push(std::mem::take(&mut row));
            row_w = 0.0;
        }
        if row.is_empty() {
            if word_w > max_width {
                let (full, rest) = break_word(word, font, max_width);
                rows.extend(full);
                row_w = font.text_width(&rest);
                row = rest;
            } else {
                row.push_str(word);
                row_w = word_w;
            }
        } else {
            row.push(' ');
            row.push_str(word);
            row_w += space_w + word_w;
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Splits an overlong word into full rows plus a remainder that keeps
/// accepting following words. Each row takes at least one char, so a
/// printable width narrower than a single glyph overflows instead of
/// looping.
fn break_word(word: &str, font: Font, max_width: f32) -> (Vec<String>, String) {
    let mut full = Vec::new();
    let mut part = String::new();
    let mut part_w = 0.0f32;
    for ch in word.chars() {
        let ch_w = font.char_width(ch);
        if !part.is_empty() && part_w + ch_w > max_width {
            full.push(std::mem::take(&mut part));
            part_w = 0.0;
        }
        part.push(ch);
        part_w += ch_w;
    }
    (full, part)
}
