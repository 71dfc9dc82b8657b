//! PDF export
//!
//! Renders the ledger as a paginated PDF 1.4 document: a centered title, a
//! bold four-column table header, and one bordered row per transaction in
//! ledger order, with amounts fixed to `$X.XX`. Text uses the built-in
//! Helvetica fonts with WinAnsi encoding, so every field must fit in
//! Latin-1; a field that does not fails the export with an encoding error
//! naming the field.

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

// A4 portrait, in points.
const PAGE_WIDTH: f64 = 595.28;
const PAGE_HEIGHT: f64 = 841.89;
const MARGIN: f64 = 28.35;
// Rows never descend past this; matches a 2 cm bottom break.
const BOTTOM_LIMIT: f64 = 56.7;
const CELL_WIDTH: f64 = 113.39;
const ROW_HEIGHT: f64 = 28.35;
const CELL_PADDING: f64 = 2.83;
const TITLE_SIZE: f64 = 12.0;
const TABLE_SIZE: f64 = 10.0;
// Top of the table on the first page: title row plus a blank line below it.
const FIRST_TABLE_TOP: f64 = PAGE_HEIGHT - 85.05;

const TITLE: &str = "Transaction History";
const COLUMNS: [&str; 4] = ["Date", "Type", "Category", "Amount"];

/// Render the ledger as PDF bytes
///
/// An empty ledger produces a valid document with the title and table
/// header but no data rows.
pub fn to_bytes(transactions: &[Transaction]) -> TallyResult<Vec<u8>> {
    // Encode all cell text up front so an unsupported character fails the
    // export before any page is laid out.
    let mut rows = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        rows.push([
            encode_text("date", &transaction.date.format("%Y-%m-%d").to_string())?,
            encode_text("type", &transaction.kind.to_string())?,
            encode_text("category", transaction.category.name())?,
            encode_text("amount", &transaction.amount.to_string())?,
        ]);
    }

    let pages = layout_pages(&rows);
    Ok(render_document(&pages))
}

/// Map text to Latin-1 bytes with PDF string escaping
fn encode_text(field: &'static str, text: &str) -> TallyResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());
    for character in text.chars() {
        let code = u32::from(character);
        if code > 0xFF {
            return Err(TallyError::Encoding { field, character });
        }
        let byte = code as u8;
        if matches!(byte, b'(' | b')' | b'\\') {
            bytes.push(b'\\');
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Build one content stream per page
fn layout_pages(rows: &[[Vec<u8>; 4]]) -> Vec<Vec<u8>> {
    let mut pages = Vec::new();
    let mut stream = Vec::new();

    let title_width = TITLE.len() as f64 * TITLE_SIZE * 0.5;
    show_text(
        &mut stream,
        "F1",
        TITLE_SIZE,
        (PAGE_WIDTH - title_width) / 2.0,
        PAGE_HEIGHT - MARGIN - TITLE_SIZE,
        TITLE.as_bytes(),
    );

    let mut y = FIRST_TABLE_TOP;
    for (column, header) in COLUMNS.iter().enumerate() {
        cell(&mut stream, "F2", column, y, header.as_bytes());
    }
    y -= ROW_HEIGHT;

    for row in rows {
        if y - ROW_HEIGHT < BOTTOM_LIMIT {
            pages.push(std::mem::take(&mut stream));
            y = PAGE_HEIGHT - MARGIN;
        }
        for (column, text) in row.iter().enumerate() {
            cell(&mut stream, "F1", column, y, text);
        }
        y -= ROW_HEIGHT;
    }

    pages.push(stream);
    pages
}

/// Draw one bordered table cell with its text
fn cell(stream: &mut Vec<u8>, font: &str, column: usize, y_top: f64, text: &[u8]) {
    let x = MARGIN + CELL_WIDTH * column as f64;
    stroke_rect(stream, x, y_top - ROW_HEIGHT, CELL_WIDTH, ROW_HEIGHT);
    show_text(
        stream,
        font,
        TABLE_SIZE,
        x + CELL_PADDING,
        y_top - ROW_HEIGHT + 10.0,
        text,
    );
}

fn show_text(stream: &mut Vec<u8>, font: &str, size: f64, x: f64, y: f64, text: &[u8]) {
    stream.extend_from_slice(format!("BT /{} {:.1} Tf {:.2} {:.2} Td (", font, size, x, y).as_bytes());
    stream.extend_from_slice(text);
    stream.extend_from_slice(b") Tj ET\n");
}

fn stroke_rect(stream: &mut Vec<u8>, x: f64, y: f64, width: f64, height: f64) {
    stream.extend_from_slice(format!("{:.2} {:.2} {:.2} {:.2} re S\n", x, y, width, height).as_bytes());
}

/// Assemble the object table, cross-reference table, and trailer
fn render_document(pages: &[Vec<u8>]) -> Vec<u8> {
    // Fixed numbering: 1 catalog, 2 page tree, 3-4 fonts, then a page
    // object and content stream pair per page.
    let mut objects: Vec<Vec<u8>> = Vec::new();

    let kids: Vec<String> = (0..pages.len())
        .map(|page| format!("{} 0 R", 5 + 2 * page))
        .collect();
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    objects.push(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .into_bytes(),
    );
    objects.push(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_vec(),
    );
    objects.push(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_vec(),
    );

    for (page, stream) in pages.iter().enumerate() {
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH,
                PAGE_HEIGHT,
                6 + 2 * page
            )
            .into_bytes(),
        );

        let mut content = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        content.extend_from_slice(stream);
        content.extend_from_slice(b"\nendstream");
        objects.push(content);
    }

    let mut document = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(document.len());
        document.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
        document.extend_from_slice(body);
        document.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = document.len();
    document.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    document.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        document.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    document.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    document
}
