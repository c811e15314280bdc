//! PDF encoding of a [`DocumentPlan`].
//!
//! Text uses the standard Helvetica font with WinAnsi encoding, so no font
//! program is embedded. Characters outside that code page print as `?`.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::{DocumentPlan, DrawOp, PagePlan, Rgb};
use crate::export::error::ExportError;

const FONT_NAME: Name<'static> = Name(b"F1");

/// Encodes every page of `plan` into a PDF file.
///
/// # Errors
///
/// Returns [`ExportError::Layout`] if the plan has more pages than object
/// ids can address.
pub fn encode(plan: &DocumentPlan) -> Result<Vec<u8>, ExportError> {
    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let font_id = Ref::new(3);

    let page_ids = (0..plan.pages.len())
        .map(|i| {
            i32::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(2))
                .and_then(|i| i.checked_add(4))
                .map(|id| (Ref::new(id), Ref::new(id + 1)))
                .ok_or_else(|| ExportError::Layout(format!("too many pages: {}", plan.pages.len())))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let count = i32::try_from(page_ids.len())
        .map_err(|_| ExportError::Layout(format!("too many pages: {}", page_ids.len())))?;

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page, _)| *page))
        .count(count);
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let media_box = Rect::new(0.0, 0.0, f32::from(plan.width), f32::from(plan.height));
    for (page, (page_id, content_id)) in plan.pages.iter().zip(&page_ids) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(media_box);
        writer.parent(tree_id);
        writer.contents(*content_id);
        writer.resources().fonts().pair(FONT_NAME, font_id);
        writer.finish();

        pdf.stream(*content_id, &content_stream(page));
    }

    Ok(pdf.finish())
}

fn content_stream(page: &PagePlan) -> Vec<u8> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text { x, y, size, text } => {
                set_fill(&mut content, Rgb::BLACK);
                content.begin_text();
                content.set_font(FONT_NAME, *size);
                content.next_line(*x, *y);
                content.show(Str(&win_ansi(text)));
                content.end_text();
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                set_fill(&mut content, *fill);
                content.rect(*x, *y, *width, *height);
                content.fill_nonzero();
            }
            DrawOp::Line { from, to, stroke } => {
                content.set_stroke_rgb(stroke.0, stroke.1, stroke.2);
                content.set_line_width(1.0);
                content.move_to(from.0, from.1);
                content.line_to(to.0, to.1);
                content.stroke();
            }
        }
    }
    content.finish()
}

fn set_fill(content: &mut Content, color: Rgb) {
    content.set_fill_rgb(color.0, color.1, color.2);
}

/// Maps text onto the WinAnsi code page.
///
/// Control characters become spaces; anything unmappable becomes `?`.
#[must_use]
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => u8::try_from(u32::from(c)).unwrap_or(b'?'),
            '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(c)).unwrap_or(b'?'),
            c if c.is_control() => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}
