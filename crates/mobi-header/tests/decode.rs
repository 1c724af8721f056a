//! Integration tests for sequential header decoding.

use std::io::Cursor;

use mobi_header::{
    ByteOrder, Compression, DOC_HEADER_LEN, DecodeOptions, DocHeader, DocType, ExthFlags,
    HEADERS_LEN, HeaderError, HeaderReader, LocaleCode, PALM_HEADER_LEN, PalmHeader, RecordKind,
    SectionIndex, TextEncoding, read_headers,
};

fn sample_palm() -> PalmHeader {
    PalmHeader {
        compression: Compression::PalmDoc,
        reserved: 0,
        text_length: 123_456,
        record_count: 31,
        record_size: 4096,
        current_position: 0,
    }
}

fn sample_doc() -> DocHeader {
    let mut unknown_bytes = [0u8; 36];
    unknown_bytes[32..].copy_from_slice(&[0xFF; 4]);
    DocHeader {
        identifier: *b"MOBI",
        header_length: 232,
        doc_type: DocType::MobipocketBook,
        text_encoding: TextEncoding::Utf8,
        unique_id: 0x1234_5678,
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
    }
}

fn encode(palm: &PalmHeader, doc: &DocHeader, order: ByteOrder) -> Vec<u8> {
    let mut data = palm.to_bytes(order).to_vec();
    data.extend_from_slice(&doc.to_bytes(order));
    data
}

#[test]
fn test_decode_both_headers_leaves_cursor_after_them() {
    let mut data = encode(&sample_palm(), &sample_doc(), ByteOrder::Little);
    data.extend_from_slice(b"trailing text record bytes");

    let mut reader = HeaderReader::new(Cursor::new(data));
    let headers = read_headers(&mut reader).unwrap();

    assert_eq!(headers.palm, sample_palm());
    assert_eq!(headers.doc, sample_doc());
    assert_eq!(reader.position(), HEADERS_LEN as u64);
    assert_eq!(reader.into_inner().position(), HEADERS_LEN as u64);
}

#[test]
fn test_big_endian_option_applies_to_both_records() {
    let data = encode(&sample_palm(), &sample_doc(), ByteOrder::Big);
    let options = DecodeOptions::new().with_byte_order(ByteOrder::Big);
    let mut reader = HeaderReader::with_options(Cursor::new(data.clone()), options);
    let headers = read_headers(&mut reader).unwrap();
    assert_eq!(headers.palm, sample_palm());
    assert_eq!(headers.doc, sample_doc());

    // Same bytes through the default order produce different values, not an error.
    let mut reader = HeaderReader::new(Cursor::new(data));
    let headers = read_headers(&mut reader).unwrap();
    assert_eq!(headers.palm.record_size, 16);
    assert_eq!(headers.doc.identifier_str(), "MOBI");
}

#[test]
fn test_zeroed_palm_header_with_palmdoc_compression() {
    let mut record = [0u8; PALM_HEADER_LEN];
    record[0] = 2;
    let mut reader = HeaderReader::new(Cursor::new(record.to_vec()));
    let palm = PalmHeader::decode(&mut reader).unwrap();

    assert_eq!(palm.compression, Compression::PalmDoc);
    assert_eq!(palm.text_length, 0);
    assert_eq!(palm.record_count, 0);
    assert_eq!(palm.record_size, 0);
    assert_eq!(palm.current_position, 0);
    assert_eq!(reader.position(), PALM_HEADER_LEN as u64);
}

#[test]
fn test_short_input_fails_on_palm_header() {
    let mut reader = HeaderReader::new(Cursor::new(vec![2u8; PALM_HEADER_LEN - 1]));
    let err = read_headers(&mut reader).unwrap_err();
    match err {
        HeaderError::Truncated {
            record,
            offset,
            expected,
            available,
        } => {
            assert_eq!(record, RecordKind::PalmHeader);
            assert_eq!(offset, (PALM_HEADER_LEN - 1) as u64);
            assert_eq!(expected, PALM_HEADER_LEN);
            assert_eq!(available, PALM_HEADER_LEN - 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_input_fails_on_palm_header() {
    let mut reader = HeaderReader::new(Cursor::new(Vec::<u8>::new()));
    let err = PalmHeader::decode(&mut reader).unwrap_err();
    assert!(matches!(
        err,
        HeaderError::Truncated {
            record: RecordKind::PalmHeader,
            offset: 0,
            available: 0,
            ..
        }
    ));
}

#[test]
fn test_partial_doc_header_fails_after_palm_succeeds() {
    let data = encode(&sample_palm(), &sample_doc(), ByteOrder::Little);
    let cut = PALM_HEADER_LEN + 100;
    let mut reader = HeaderReader::new(Cursor::new(data[..cut].to_vec()));

    let palm = PalmHeader::decode(&mut reader).unwrap();
    assert_eq!(palm, sample_palm());

    let err = DocHeader::decode(&mut reader).unwrap_err();
    match err {
        HeaderError::Truncated {
            record,
            offset,
            expected,
            available,
        } => {
            assert_eq!(record, RecordKind::DocHeader);
            assert_eq!(offset, cut as u64);
            assert_eq!(expected, DOC_HEADER_LEN);
            assert_eq!(available, 100);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_identifier_is_not_validated() {
    let mut doc = sample_doc();
    doc.identifier = [0, 0, 0, 0];
    let data = encode(&sample_palm(), &doc, ByteOrder::Little);
    let headers = read_headers(&mut HeaderReader::new(Cursor::new(data))).unwrap();
    assert_eq!(headers.doc.identifier, [0, 0, 0, 0]);
    assert_eq!(headers.doc.identifier_str(), "\0\0\0\0");
    assert!(!headers.doc.is_mobi());

    let mut data = vec![0u8; HEADERS_LEN];
    data[PALM_HEADER_LEN..PALM_HEADER_LEN + 4].copy_from_slice(&[0x4D, 0x4F, 0x42, 0x49]);
    let headers = read_headers(&mut HeaderReader::new(Cursor::new(data))).unwrap();
    assert_eq!(headers.doc.identifier_str(), "MOBI");
}

#[test]
fn test_all_index_sentinels_decode_as_unavailable() {
    let mut doc = sample_doc();
    doc.orthographic_index = SectionIndex(0);
    let mut record = doc.to_bytes(ByteOrder::Little);
    record[24..64].fill(0xFF);

    let decoded = DocHeader::parse(&record, ByteOrder::Little);
    let indices = decoded.all_indices();
    assert_eq!(indices.len(), 10);
    assert!(indices.iter().all(|&index| index == SectionIndex::UNAVAILABLE));
    assert_eq!(decoded.first_non_book_index, 33);
}

#[test]
fn test_declared_header_length_does_not_size_the_read() {
    let mut doc = sample_doc();
    doc.header_length = 0x1000;
    let mut data = encode(&sample_palm(), &doc, ByteOrder::Little);
    data.extend_from_slice(&[0xEE; 64]);

    let mut reader = HeaderReader::new(Cursor::new(data));
    let headers = read_headers(&mut reader).unwrap();
    assert_eq!(headers.doc.header_length, 0x1000);
    assert!(!headers.doc.declared_length_matches());
    assert_eq!(reader.position(), HEADERS_LEN as u64);
}

#[test]
fn test_huffman_fields_decode_regardless_of_compression() {
    let mut doc = sample_doc();
    doc.huffman_record_offset = 40;
    doc.huffman_record_count = 2;
    doc.huffman_table_offset = 7;
    doc.huffman_table_length = 9;
    let data = encode(&sample_palm(), &doc, ByteOrder::Little);
    let headers = read_headers(&mut HeaderReader::new(Cursor::new(data))).unwrap();
    assert_eq!(headers.palm.compression, Compression::PalmDoc);
    assert_eq!(headers.doc.huffman_record_offset, 40);
    assert_eq!(headers.doc.huffman_table_length, 9);
}

#[test]
fn test_skip_prefix_then_decode() {
    let mut data = vec![0xAB; 78];
    data.extend(encode(&sample_palm(), &sample_doc(), ByteOrder::Little));
    let mut reader = HeaderReader::new(Cursor::new(data));
    reader.skip(78).unwrap();
    let headers = read_headers(&mut reader).unwrap();
    assert_eq!(headers.doc, sample_doc());
    assert_eq!(reader.position(), 78 + HEADERS_LEN as u64);
}
