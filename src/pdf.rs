use std::collections::HashMap;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::fonts::to_winansi_bytes;
use crate::model::{Alignment, Block, Document, FontVariant, Line, PageGeometry, PT_PER_MM};

const RULE_WIDTH_MM: f32 = 0.2;

struct FontEntry {
    pdf_name: String,
    font_ref: Ref,
}

/// Serialize a composed document. Pure function of its input: no timestamps,
/// no document info, objects allocated in a fixed order, so identical
/// documents yield identical bytes.
pub fn render(doc: &Document) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    // Phase 1: register each Helvetica face once, in first-use order. The
    // standard 14 faces need no embedded program, just a Type1 dict with
    // WinAnsi encoding.
    let mut seen_fonts: HashMap<FontVariant, FontEntry> = HashMap::new();
    let mut font_order: Vec<FontVariant> = Vec::new();
    for page in &doc.pages {
        for placed in page.blocks.iter().chain(page.footer.iter()) {
            if let Block::Line(line) = &placed.block
                && !seen_fonts.contains_key(&line.font.variant)
            {
                let font_ref = alloc();
                let pdf_name = format!("F{}", font_order.len() + 1);
                pdf.type1_font(font_ref)
                    .base_font(Name(line.font.variant.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
                seen_fonts.insert(line.font.variant, FontEntry { pdf_name, font_ref });
                font_order.push(line.font.variant);
            }
        }
    }

    // Phase 2: one content stream per page.
    let geom = &doc.geometry;
    let mut all_contents: Vec<Content> = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let mut content = Content::new();
        for placed in page.blocks.iter().chain(page.footer.iter()) {
            match &placed.block {
                Block::Line(line) => show_line(&mut content, line, placed.y, geom, &seen_fonts),
                Block::Rule => stroke_rule(&mut content, placed.y, geom),
            }
        }
        all_contents.push(content);
    }

    // Phase 3: allocate page and content IDs now that page count is known
    let n = all_contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let font_pairs: Vec<(String, Ref)> = font_order
        .iter()
        .map(|v| (seen_fonts[v].pdf_name.clone(), seen_fonts[v].font_ref))
        .collect();

    let media_box = Rect::new(0.0, 0.0, geom.width * PT_PER_MM, geom.height * PT_PER_MM);
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (name, font_ref) in &font_pairs {
                fonts.pair(Name(name.as_bytes()), *font_ref);
            }
        }
    }

    log::debug!("assembled {n} pages using {} font faces", font_order.len());

    pdf.finish()
}

/// Baseline rule: the baseline sits at the vertical center of the cell plus
/// 0.3 of the font size, measured from the cell's top. PDFy grows upward,
/// so positions flip against the page height on the way out.
fn show_line(
    content: &mut Content,
    line: &Line,
    y_top: f32,
    geom: &PageGeometry,
    seen_fonts: &HashMap<FontVariant, FontEntry>,
) {
    let bytes = to_winansi_bytes(&line.text);
    if bytes.is_empty() {
        return;
    }
    let entry = &seen_fonts[&line.font.variant];
    let printable = geom.printable_width();
    let text_w = line.font.text_width(&line.text);
    let baseline = y_top + 0.5 * line.height + 0.3 * line.font.size_mm();
    let y_pt = (geom.height - baseline) * PT_PER_MM;

    if line.align == Alignment::Justify {
        let words: Vec<&str> = line.text.split_whitespace().collect();
        if words.len() > 1 && text_w < printable {
            // Spread the leftover width evenly across the inter-word gaps;
            // each word is shown at its own absolute x.
            let space_w = line.font.char_width(' ');
            let extra = (printable - text_w) / (words.len() - 1) as f32;
            content.begin_text();
            content.set_font(Name(entry.pdf_name.as_bytes()), line.font.size);
            let mut x = geom.left;
            let mut td_x = 0.0f32;
            let mut td_y = 0.0f32;
            for word in words {
                let x_pt = x * PT_PER_MM;
                content.next_line(x_pt - td_x, y_pt - td_y);
                td_x = x_pt;
                td_y = y_pt;
                content.show(Str(&to_winansi_bytes(word)));
                x += line.font.text_width(word) + space_w + extra;
            }
            content.end_text();
            return;
        }
        // Single word or already overfull: fall through left-aligned.
    }

    let x = match line.align {
        Alignment::Center => geom.left + (printable - text_w) / 2.0,
        Alignment::Right => geom.left + printable - text_w,
        Alignment::Left | Alignment::Justify => geom.left,
    };
    content
        .begin_text()
        .set_font(Name(entry.pdf_name.as_bytes()), line.font.size)
        .next_line(x * PT_PER_MM, y_pt)
        .show(Str(&bytes))
        .end_text();
}

fn stroke_rule(content: &mut Content, y: f32, geom: &PageGeometry) {
    let y_pt = (geom.height - y) * PT_PER_MM;
    content.save_state();
    content.set_line_width(RULE_WIDTH_MM * PT_PER_MM);
    content.move_to(geom.left * PT_PER_MM, y_pt);
    content.line_to((geom.width - geom.right) * PT_PER_MM, y_pt);
    content.stroke();
    content.restore_state();
}
