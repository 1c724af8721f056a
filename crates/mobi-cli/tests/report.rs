//! Snapshot tests for the text report.

use mobi_cli::report::render_text;
use mobi_header::{
    Compression, DocHeader, DocType, ExthFlags, LocaleCode, MobiHeaders, PalmHeader,
    SectionIndex, TextEncoding,
};

fn sample_headers() -> MobiHeaders {
    let mut unknown_bytes = [0u8; 36];
    unknown_bytes[32..].copy_from_slice(&[0xFF; 4]);
    MobiHeaders {
        palm: PalmHeader {
            compression: Compression::PalmDoc,
            reserved: 0,
            text_length: 123_456,
            record_count: 31,
            record_size: 4096,
            current_position: 0,
        },
        doc: DocHeader {
            identifier: *b"MOBI",
            header_length: 232,
            doc_type: DocType::MobipocketBook,
            text_encoding: TextEncoding::Utf8,
            unique_id: 305_419_896,
            file_version: 6,
            orthographic_index: SectionIndex::UNAVAILABLE,
            inflection_index: SectionIndex::UNAVAILABLE,
            index_names: SectionIndex(0),
            index_keys: SectionIndex(12),
            extra_indices: [
                SectionIndex(1),
                SectionIndex::UNAVAILABLE,
                SectionIndex(3),
                SectionIndex(4),
                SectionIndex::UNAVAILABLE,
                SectionIndex(6),
            ],
            first_non_book_index: 33,
            full_name_offset: 432,
            full_name_length: 17,
            locale_code: LocaleCode::US_ENGLISH,
            input_language: 0,
            output_language: 0,
            min_version: 6,
            first_image_index: 34,
            huffman_record_offset: 0,
            huffman_record_count: 0,
            huffman_table_offset: 0,
            huffman_table_length: 0,
            exth_flags: ExthFlags(0x50),
            unknown_bytes,
            drm_offset: 0xFFFF_FFFF,
            drm_count: 0,
            drm_size: 0,
            drm_flags: 0,
        },
    }
}

#[test]
fn text_report_lists_every_field() {
    let output = render_text(&sample_headers());
    insta::assert_snapshot!("text_report", output);
}

#[test]
fn text_report_for_unknown_values() {
    let mut headers = sample_headers();
    headers.palm.compression = Compression::Unknown(99);
    headers.doc.identifier = [0x00, 0x4D, 0x0A, 0xFF];
    headers.doc.doc_type = DocType::Unknown(513);
    headers.doc.exth_flags = ExthFlags(0);
    let output = render_text(&headers);
    assert!(output.contains("  compression:           Unknown (99)\n"));
    assert!(output.contains("  identifier:            \"\\0M\\n\u{ff}\" (004d0aff)\n"));
    assert!(output.contains("  doc_type:              Unknown (513)\n"));
    assert!(output.contains("  exth_flags:            0x00000000 (EXTH absent)\n"));
}
