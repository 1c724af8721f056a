//! Field-by-field rendering of decoded headers.
//!
//! Every field is listed explicitly, in file order, so the output does not
//! depend on how the header types happen to implement `Debug`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use mobi_header::{DocHeader, ExthFlags, MobiHeaders, PalmHeader};

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Bordered table.
    #[default]
    Table,
    /// Aligned `name: value` lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: &'static str,
    pub value: String,
}

impl ReportField {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

const PALM_TITLE: &str = "PalmDOC header";
const DOC_TITLE: &str = "MOBI header";
const NAME_WIDTH: usize = 23;

const EXTRA_INDEX_NAMES: [&str; 6] = [
    "extra_index_0",
    "extra_index_1",
    "extra_index_2",
    "extra_index_3",
    "extra_index_4",
    "extra_index_5",
];

/// Fields of the PalmDOC header, in file order.
#[must_use]
pub fn palm_fields(palm: &PalmHeader) -> Vec<ReportField> {
    vec![
        ReportField::new("compression", palm.compression),
        ReportField::new("reserved", palm.reserved),
        ReportField::new("text_length", palm.text_length),
        ReportField::new("record_count", palm.record_count),
        ReportField::new("record_size", palm.record_size),
        ReportField::new("current_position", palm.current_position),
    ]
}

/// Fields of the MOBI header, in file order.
#[must_use]
pub fn doc_fields(doc: &DocHeader) -> Vec<ReportField> {
    let mut fields = vec![
        ReportField::new("identifier", identifier_value(doc)),
        ReportField::new("header_length", doc.header_length),
        ReportField::new("doc_type", doc.doc_type),
        ReportField::new("text_encoding", doc.text_encoding),
        ReportField::new("unique_id", doc.unique_id),
        ReportField::new("file_version", doc.file_version),
        ReportField::new("orthographic_index", doc.orthographic_index),
        ReportField::new("inflection_index", doc.inflection_index),
        ReportField::new("index_names", doc.index_names),
        ReportField::new("index_keys", doc.index_keys),
    ];
    fields.extend(
        EXTRA_INDEX_NAMES
            .iter()
            .zip(doc.extra_indices)
            .map(|(&name, index)| ReportField::new(name, index)),
    );
    fields.extend([
        ReportField::new("first_non_book_index", doc.first_non_book_index),
        ReportField::new("full_name_offset", doc.full_name_offset),
        ReportField::new("full_name_length", doc.full_name_length),
        ReportField::new("locale_code", doc.locale_code),
        ReportField::new("input_language", doc.input_language),
        ReportField::new("output_language", doc.output_language),
        ReportField::new("min_version", doc.min_version),
        ReportField::new("first_image_index", doc.first_image_index),
        ReportField::new("huffman_record_offset", doc.huffman_record_offset),
        ReportField::new("huffman_record_count", doc.huffman_record_count),
        ReportField::new("huffman_table_offset", doc.huffman_table_offset),
        ReportField::new("huffman_table_length", doc.huffman_table_length),
        ReportField::new("exth_flags", exth_value(doc.exth_flags)),
        ReportField::new("unknown_bytes", hex::encode(doc.unknown_bytes)),
        ReportField::new("drm_offset", doc.drm_offset),
        ReportField::new("drm_count", doc.drm_count),
        ReportField::new("drm_size", doc.drm_size),
        ReportField::new("drm_flags", doc.drm_flags),
    ]);
    fields
}

/// Render both headers in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(headers: &MobiHeaders, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(headers)),
        ReportFormat::Text => Ok(render_text(headers)),
        ReportFormat::Json => serde_json::to_string_pretty(headers),
    }
}

/// Render both headers as aligned text sections.
#[must_use]
pub fn render_text(headers: &MobiHeaders) -> String {
    let mut out = String::new();
    push_text_section(&mut out, PALM_TITLE, &palm_fields(&headers.palm));
    out.push('\n');
    push_text_section(&mut out, DOC_TITLE, &doc_fields(&headers.doc));
    out
}

/// Render both headers as tables.
#[must_use]
pub fn render_table(headers: &MobiHeaders) -> String {
    let palm = build_table(PALM_TITLE, &palm_fields(&headers.palm));
    let doc = build_table(DOC_TITLE, &doc_fields(&headers.doc));
    format!("{palm}\n{doc}\n")
}

fn push_text_section(out: &mut String, title: &str, fields: &[ReportField]) {
    out.push_str(title);
    out.push('\n');
    for field in fields {
        let label = format!("{}:", field.name);
        out.push_str(&format!("  {label:<NAME_WIDTH$}{}\n", field.value));
    }
}

fn build_table(title: &str, fields: &[ReportField]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Value")]);
    apply_table_style(&mut table);
    for field in fields {
        table.add_row(vec![Cell::new(field.name), Cell::new(&field.value)]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn identifier_value(doc: &DocHeader) -> String {
    format!(
        "\"{}\" ({})",
        doc.identifier_str().escape_debug(),
        hex::encode(doc.identifier)
    )
}

fn exth_value(flags: ExthFlags) -> String {
    let state = if flags.has_exth() { "present" } else { "absent" };
    format!("{flags} (EXTH {state})")
}

#[cfg(test)]
mod tests {
    use mobi_header::{ByteOrder, DOC_HEADER_LEN, PALM_HEADER_LEN, SectionIndex};

    use super::*;

    fn zeroed() -> MobiHeaders {
        MobiHeaders {
            palm: PalmHeader::parse(&[0u8; PALM_HEADER_LEN], ByteOrder::Little),
            doc: DocHeader::parse(&[0u8; DOC_HEADER_LEN], ByteOrder::Little),
        }
    }

    #[test]
    fn test_every_field_is_listed() {
        let headers = zeroed();
        assert_eq!(palm_fields(&headers.palm).len(), 6);
        assert_eq!(doc_fields(&headers.doc).len(), 34);
    }

    #[test]
    fn test_identifier_escapes_control_bytes() {
        let headers = zeroed();
        let fields = doc_fields(&headers.doc);
        assert_eq!(fields[0].value, r#""\0\0\0\0" (00000000)"#);
    }

    #[test]
    fn test_sentinel_renders_as_unavailable() {
        let mut headers = zeroed();
        headers.doc.extra_indices[2] = SectionIndex::UNAVAILABLE;
        let fields = doc_fields(&headers.doc);
        let field = fields
            .iter()
            .find(|field| field.name == "extra_index_2")
            .expect("extra_index_2");
        assert_eq!(field.value, "unavailable");
    }

    #[test]
    fn test_table_mentions_every_field() {
        let headers = zeroed();
        let table = render_table(&headers);
        for field in palm_fields(&headers.palm)
            .into_iter()
            .chain(doc_fields(&headers.doc))
        {
            assert!(table.contains(field.name), "missing {}", field.name);
        }
    }

    #[test]
    fn test_json_keeps_raw_sentinel() {
        let mut headers = zeroed();
        headers.doc.index_keys = SectionIndex::UNAVAILABLE;
        let json = render(&headers, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["doc"]["index_keys"], 4_294_967_295u64);
        assert_eq!(value["doc"]["identifier"], "\u{0}\u{0}\u{0}\u{0}");
        assert_eq!(value["palm"]["compression"]["Unknown"], 0);
    }
}
