mod common;

use curriculo_pdf::model::{Alignment, Block, Document, FontVariant, Line};
use curriculo_pdf::{pdf, resume};

const PT_PER_MM: f32 = 72.0 / 25.4;

fn all_lines(document: &Document) -> Vec<&Line> {
    document
        .pages
        .iter()
        .flat_map(|p| &p.blocks)
        .filter_map(|placed| match &placed.block {
            Block::Line(line) => Some(line),
            Block::Rule => None,
        })
        .collect()
}

fn find_line<'a>(document: &'a Document, text: &str) -> &'a Line {
    all_lines(document)
        .into_iter()
        .find(|l| l.text == text)
        .unwrap_or_else(|| panic!("line not found: {text}"))
}

#[test]
fn opens_with_the_centered_bold_name() {
    let document = resume::compose();
    let first = &document.pages[0].blocks[0];
    assert_eq!(first.y, 30.0);
    let Block::Line(line) = &first.block else {
        panic!("expected the name line first");
    };
    assert_eq!(line.text, "ANA LUIZA COSTA SANTOS");
    assert_eq!(line.align, Alignment::Center);
    assert_eq!(line.font.variant, FontVariant::Bold);
    assert_eq!(line.font.size, 16.0);
    assert_eq!(line.height, 10.0);
}

#[test]
fn section_titles_are_uppercased_and_bold() {
    let document = resume::compose();
    let titles = [
        "RESUMO PROFISSIONAL",
        "FORMAÇÃO ACADÊMICA",
        "EXPERIÊNCIA PROFISSIONAL",
        "ESPECIALIZAÇÕES E COMPETÊNCIAS",
        "HABILIDADES TÉCNICAS",
        "CURSOS E CERTIFICAÇÕES",
        "INFORMAÇÕES ADICIONAIS",
    ];
    for title in titles {
        let line = find_line(&document, title);
        assert_eq!(line.font.variant, FontVariant::Bold, "{title}");
        assert_eq!(line.font.size, 12.0, "{title}");
        assert_eq!(line.height, 8.0, "{title}");
        assert_eq!(line.align, Alignment::Left, "{title}");
    }
}

#[test]
fn role_lines_are_set_in_oblique() {
    let document = resume::compose();
    let line = find_line(&document, "Gerente Veterinária | Março 2022 - Atualmente");
    assert_eq!(line.font.variant, FontVariant::Oblique);
    assert_eq!(line.font.size, 10.0);
}

#[test]
fn course_list_keeps_the_section_title_font() {
    let document = resume::compose();
    let line = find_line(
        &document,
        "- Curso Avançado em Animais Exóticos - CRMV-PR (2023)",
    );
    assert_eq!(line.font.variant, FontVariant::Bold);
    assert_eq!(line.font.size, 12.0);
}

#[test]
fn summary_paragraph_is_justified() {
    let document = resume::compose();
    let justified = all_lines(&document)
        .iter()
        .filter(|l| l.align == Alignment::Justify && l.font.size == 11.0)
        .count();
    assert!(justified > 1, "summary wraps into justified rows");
}

#[test]
fn spans_multiple_pages_within_vertical_margins() {
    let document = resume::compose();
    assert!(document.pages.len() > 1);
    let trigger = document.geometry.break_trigger();
    for page in &document.pages {
        for placed in &page.blocks {
            assert!(placed.y >= document.geometry.top);
            if let Block::Line(line) = &placed.block {
                assert!(
                    placed.y + line.height <= trigger,
                    "block at y={} height={} crosses the bottom margin",
                    placed.y,
                    line.height
                );
            }
        }
    }
}

#[test]
fn rendered_resume_has_one_a4_media_box_per_page() {
    let document = resume::compose();
    let pages = document.pages.len();
    let bytes = pdf::render(&document);
    let boxes = common::media_boxes(&bytes);
    assert_eq!(boxes.len(), pages);
    for (w, h) in boxes {
        assert!((w - 210.0 * PT_PER_MM).abs() < 0.1);
        assert!((h - 297.0 * PT_PER_MM).abs() < 0.1);
    }
}

#[test]
fn rendered_resume_shows_header_rule_and_sections() {
    let _ = env_logger::try_init();
    let bytes = curriculo_pdf::resume_pdf_bytes();
    let streams = common::content_streams(&bytes);
    assert!(streams.len() > 1);
    let first = &streams[0];
    let everything = streams.concat();

    assert!(common::shows_text(first, b"ANA LUIZA COSTA SANTOS"));
    assert!(common::shows_text(first, b"RESUMO PROFISSIONAL"));
    assert!(common::shows_text(
        &everything,
        &common::winansi("CURSOS E CERTIFICAÇÕES"),
    ));
    assert!(common::shows_text(
        &everything,
        &common::winansi("- Inglês técnico para leitura de artigos"),
    ));
    assert!(common::shows_text(
        &everything,
        &common::winansi("Membro ativo da Associação Brasileira de Veterinários (ABV)"),
    ));

    // The separating rule under the contact block: name, subtitle, 2mm gap,
    // two contact lines and a 5mm gap put it at 65mm.
    let toks = common::tokens(first);
    let m = toks.iter().position(|t| t == "m").expect("rule moveto");
    let y: f32 = toks[m - 1].parse().unwrap();
    assert!((y - (297.0 - 65.0) * PT_PER_MM).abs() < 0.1);
}

#[test]
fn footer_counts_through_every_rendered_page() {
    let document = resume::compose();
    let pages = document.pages.len();
    let bytes = pdf::render(&document);
    let streams = common::content_streams(&bytes);
    assert_eq!(streams.len(), pages);
    for (i, stream) in streams.iter().enumerate() {
        let label = format!("Página {}", i + 1);
        assert!(
            common::shows_text(stream, &common::winansi(&label)),
            "page {} missing its footer",
            i + 1
        );
    }
}
