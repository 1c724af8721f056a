//! The inspection pipeline: open, decode both headers, report.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use tracing::{debug, info, info_span, warn};

use mobi_header::{
    ByteOrder, Compression, DOC_HEADER_LEN, DecodeOptions, DocHeader, HeaderReader, MobiHeaders,
    PalmHeader,
};

use crate::error::InspectError;
use crate::report::{ReportFormat, render};

/// Everything one inspection run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// File to decode.
    pub path: PathBuf,
    /// Bytes to discard before the PalmDOC header.
    pub skip: u64,
    /// Byte order for both records.
    pub byte_order: ByteOrder,
    /// Report format.
    pub format: ReportFormat,
}

impl InspectConfig {
    /// Config with defaults for everything but the path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skip: 0,
            byte_order: ByteOrder::default(),
            format: ReportFormat::default(),
        }
    }
}

/// Open the file and decode both headers.
///
/// The file is released before this returns, whether decoding succeeded or
/// not.
///
/// # Errors
///
/// Returns the first failing step.
pub fn inspect_file(config: &InspectConfig) -> Result<MobiHeaders, InspectError> {
    let span = info_span!("inspect", path = %config.path.display());
    let _guard = span.enter();

    let file = File::open(&config.path).map_err(|source| InspectError::Open {
        path: config.path.clone(),
        source,
    })?;
    info!(byte_order = %config.byte_order, skip = config.skip, "opened input");

    let options = DecodeOptions::new().with_byte_order(config.byte_order);
    let mut reader = HeaderReader::with_options(BufReader::new(file), options);
    reader.skip(config.skip).map_err(InspectError::Skip)?;

    let palm = PalmHeader::decode(&mut reader).map_err(InspectError::ReadPalmHeader)?;
    let doc = DocHeader::decode(&mut reader).map_err(InspectError::ReadDocHeader)?;
    info!(end = reader.position(), "decoded headers");

    let headers = MobiHeaders { palm, doc };
    note_unusual_values(&headers);
    Ok(headers)
}

/// Decode and write the report to `out`.
///
/// # Errors
///
/// Returns the first failing step.
pub fn run<W: Write>(config: &InspectConfig, out: &mut W) -> Result<MobiHeaders, InspectError> {
    let headers = inspect_file(config)?;
    let mut rendered = render(&headers, config.format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(InspectError::Write)?;
    Ok(headers)
}

/// Log values that decode fine but suggest the wrong file or offset.
fn note_unusual_values(headers: &MobiHeaders) {
    let doc = &headers.doc;
    if !doc.is_mobi() {
        let identifier = doc.identifier_str();
        warn!(
            identifier = %identifier.escape_debug(),
            "identifier is not MOBI; check --skip and --byte-order"
        );
    }
    if !doc.declared_length_matches() {
        debug!(
            declared = doc.header_length,
            decoded = DOC_HEADER_LEN,
            "declared MOBI header length differs from decoded prefix"
        );
    }
    if let Compression::Unknown(code) = headers.palm.compression {
        warn!(code, "unrecognized compression code");
    }
    if doc.has_exth() {
        debug!("EXTH block present (not decoded)");
    }
}
