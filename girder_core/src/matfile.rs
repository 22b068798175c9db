//! # MAT-File Reader
//!
//! Read-only reader for MATLAB Level 5 MAT-files, sufficient for pulling
//! numeric analysis results (response histories, pushover curves) into the
//! design routines.
//!
//! The Level 5 format is a 128-byte header followed by tagged data
//! elements. Numeric matrices (`miMATRIX` elements with a numeric array
//! class) are extracted as [`MatArray`] values with column-major `f64`
//! data. Compressed elements and non-numeric classes are skipped with a
//! warning; a malformed header or truncated element is an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use girder_core::matfile::MatFile;
//!
//! let mat = MatFile::read_file("results.mat").unwrap();
//! let drift = mat.array("story_drift").unwrap();
//! println!("{} x {}", drift.rows(), drift.cols());
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{DesignError, DesignResult};

// ============================================================================
// Element and class codes
// ============================================================================

const MI_INT8: u32 = 1;
const MI_UINT8: u32 = 2;
const MI_INT16: u32 = 3;
const MI_UINT16: u32 = 4;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_SINGLE: u32 = 7;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;
const MI_COMPRESSED: u32 = 15;

const MX_DOUBLE_CLASS: u32 = 6;
const MX_UINT32_CLASS: u32 = 13;

const FLAG_COMPLEX: u32 = 0x0800;

// ============================================================================
// Public types
// ============================================================================

/// Byte order of the file, taken from the header endian indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endian {
    Little,
    Big,
}

/// A numeric matrix extracted from a MAT-file.
///
/// Data is stored column-major (MATLAB order) regardless of the source
/// integer or float type; everything is widened to `f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatArray {
    /// Variable name of the array
    pub name: String,
    /// Array dimensions, at least two per the format
    pub dims: Vec<usize>,
    /// Column-major element data
    pub data: Vec<f64>,
}

impl MatArray {
    /// Number of rows (first dimension).
    pub fn rows(&self) -> usize {
        self.dims.first().copied().unwrap_or(0)
    }

    /// Number of columns (second dimension).
    pub fn cols(&self) -> usize {
        self.dims.get(1).copied().unwrap_or(0)
    }

    /// Element at `(row, col)` of a 2-D array, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row + col * self.rows()).copied()
    }
}

/// Parsed contents of a Level 5 MAT-file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatFile {
    /// Header description text (usually "MATLAB 5.0 MAT-file, ...")
    pub description: String,
    /// Header version word, 0x0100 for Level 5
    pub version: u16,
    /// Byte order the file was written in
    pub endian: Endian,
    arrays: Vec<MatArray>,
}

impl MatFile {
    /// Read and parse a MAT-file from disk.
    pub fn read_file<P: AsRef<Path>>(path: P) -> DesignResult<Self> {
        let path = path.as_ref();
        let buf = std::fs::read(path).map_err(|e| {
            DesignError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        Self::parse(&buf, &path.display().to_string())
    }

    /// Parse a MAT-file from an in-memory buffer. `source` names the
    /// origin for error reporting.
    pub fn parse(buf: &[u8], source: &str) -> DesignResult<Self> {
        let mut parser = Parser::new(buf, source)?;
        let mut arrays = Vec::new();

        while let Some((dtype, data, offset)) = parser.next_element()? {
            match dtype {
                MI_MATRIX => {
                    if let Some(array) = parse_matrix(data, parser.endian, source, offset)? {
                        arrays.push(array);
                    }
                }
                MI_COMPRESSED => {
                    log::warn!(
                        "{}: skipping compressed element at offset {}",
                        source,
                        offset
                    );
                }
                other => {
                    log::warn!(
                        "{}: skipping unsupported element type {} at offset {}",
                        source,
                        other,
                        offset
                    );
                }
            }
        }

        log::info!("{}: read {} numeric arrays", source, arrays.len());

        Ok(MatFile {
            description: parser.description,
            version: parser.version,
            endian: parser.endian,
            arrays,
        })
    }

    /// All numeric arrays in file order.
    pub fn arrays(&self) -> &[MatArray] {
        &self.arrays
    }

    /// Look up an array by variable name.
    pub fn array(&self, name: &str) -> Option<&MatArray> {
        self.arrays.iter().find(|a| a.name == name)
    }
}

// ============================================================================
// Parsing
// ============================================================================

struct Parser<'a> {
    buf: &'a [u8],
    pos: usize,
    source: &'a str,
    description: String,
    version: u16,
    endian: Endian,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8], source: &'a str) -> DesignResult<Self> {
        if buf.len() < 128 {
            return Err(DesignError::malformed_data(
                source,
                0,
                format!("File too short for a Level 5 header ({} bytes)", buf.len()),
            ));
        }

        let endian = match &buf[126..128] {
            b"IM" => Endian::Little,
            b"MI" => Endian::Big,
            other => {
                return Err(DesignError::malformed_data(
                    source,
                    126,
                    format!("Bad endian indicator {:?}", other),
                ));
            }
        };

        let version = match endian {
            Endian::Little => u16::from_le_bytes([buf[124], buf[125]]),
            Endian::Big => u16::from_be_bytes([buf[124], buf[125]]),
        };

        let description = String::from_utf8_lossy(&buf[..116])
            .trim_end_matches(['\0', ' '])
            .to_string();

        Ok(Parser {
            buf,
            pos: 128,
            source,
            description,
            version,
            endian,
        })
    }

    /// Next top-level data element: `(type, data, offset)`. `None` at end
    /// of file.
    fn next_element(&mut self) -> DesignResult<Option<(u32, &'a [u8], usize)>> {
        if self.pos >= self.buf.len() {
            return Ok(None);
        }
        let offset = self.pos;
        let (dtype, data, next) = read_element(self.buf, self.pos, self.endian, self.source)?;
        self.pos = next;
        Ok(Some((dtype, data, offset)))
    }
}

fn read_u32(bytes: &[u8], endian: Endian) -> u32 {
    let b = [bytes[0], bytes[1], bytes[2], bytes[3]];
    match endian {
        Endian::Little => u32::from_le_bytes(b),
        Endian::Big => u32::from_be_bytes(b),
    }
}

/// Read the tagged element starting at `pos`. Returns the element type,
/// its data bytes, and the offset of the next element (8-byte aligned).
fn read_element<'a>(
    buf: &'a [u8],
    pos: usize,
    endian: Endian,
    source: &str,
) -> DesignResult<(u32, &'a [u8], usize)> {
    if pos + 8 > buf.len() {
        return Err(DesignError::malformed_data(
            source,
            pos as u64,
            "Truncated element tag",
        ));
    }

    let raw = read_u32(&buf[pos..], endian);

    // Small data element format packs the size in the upper half of the
    // type word and the data in the second half of the tag
    if raw >> 16 != 0 {
        let dtype = raw & 0xFFFF;
        let size = (raw >> 16) as usize;
        if size > 4 {
            return Err(DesignError::malformed_data(
                source,
                pos as u64,
                format!("Small element claims {} bytes", size),
            ));
        }
        return Ok((dtype, &buf[pos + 4..pos + 4 + size], pos + 8));
    }

    let size = read_u32(&buf[pos + 4..], endian) as usize;
    let start = pos + 8;
    let end = start
        .checked_add(size)
        .filter(|&e| e <= buf.len())
        .ok_or_else(|| {
            DesignError::malformed_data(
                source,
                pos as u64,
                format!("Element of {} bytes overruns the file", size),
            )
        })?;

    // Elements are padded to 8-byte boundaries
    let next = (end + 7) & !7;
    Ok((raw, &buf[start..end], next.min(buf.len())))
}

/// Decode a miMATRIX element. Returns `None` (after a warning) for array
/// classes we do not extract.
fn parse_matrix(
    data: &[u8],
    endian: Endian,
    source: &str,
    offset: usize,
) -> DesignResult<Option<MatArray>> {
    let mut pos = 0;

    // Array flags subelement: two uint32 words
    let (ftype, flags, next) = read_element(data, pos, endian, source)?;
    if ftype != MI_UINT32 || flags.len() < 8 {
        return Err(DesignError::malformed_data(
            source,
            offset as u64,
            "Matrix element does not start with array flags",
        ));
    }
    let flag_word = read_u32(flags, endian);
    let class = flag_word & 0xFF;
    pos = next;

    // Dimensions subelement
    let (dtype, dim_bytes, next) = read_element(data, pos, endian, source)?;
    if dtype != MI_INT32 || dim_bytes.len() % 4 != 0 {
        return Err(DesignError::malformed_data(
            source,
            offset as u64,
            "Bad dimensions subelement",
        ));
    }
    let dims: Vec<usize> = dim_bytes
        .chunks_exact(4)
        .map(|c| read_u32(c, endian) as i32)
        .map(|d| d.max(0) as usize)
        .collect();
    pos = next;

    // Array name subelement
    let (ntype, name_bytes, next) = read_element(data, pos, endian, source)?;
    if ntype != MI_INT8 {
        return Err(DesignError::malformed_data(
            source,
            offset as u64,
            "Bad array name subelement",
        ));
    }
    let name = String::from_utf8_lossy(name_bytes).to_string();
    pos = next;

    if !(MX_DOUBLE_CLASS..=MX_UINT32_CLASS).contains(&class) {
        log::warn!(
            "{}: skipping array '{}' with non-numeric class {}",
            source,
            name,
            class
        );
        return Ok(None);
    }

    // Real part
    let (rtype, real_bytes, next) = read_element(data, pos, endian, source)?;
    let values = numeric_data(rtype, real_bytes, endian).ok_or_else(|| {
        DesignError::malformed_data(
            source,
            offset as u64,
            format!("Array '{}' has non-numeric data type {}", name, rtype),
        )
    })?;
    pos = next;

    let expected: usize = dims.iter().product();
    if values.len() != expected {
        return Err(DesignError::malformed_data(
            source,
            offset as u64,
            format!(
                "Array '{}' has {} elements for dimensions {:?}",
                name,
                values.len(),
                dims
            ),
        ));
    }

    // Imaginary part follows for complex arrays; keep the real part only
    if flag_word & FLAG_COMPLEX != 0 && pos < data.len() {
        log::warn!(
            "{}: array '{}' is complex; keeping the real part",
            source,
            name
        );
    }

    Ok(Some(MatArray {
        name,
        dims,
        data: values,
    }))
}

/// Widen raw element data to f64 according to its storage type.
fn numeric_data(dtype: u32, bytes: &[u8], endian: Endian) -> Option<Vec<f64>> {
    macro_rules! widen {
        ($ty:ty, $width:expr) => {
            Some(
                bytes
                    .chunks_exact($width)
                    .map(|c| {
                        let mut b = [0u8; $width];
                        b.copy_from_slice(c);
                        match endian {
                            Endian::Little => <$ty>::from_le_bytes(b) as f64,
                            Endian::Big => <$ty>::from_be_bytes(b) as f64,
                        }
                    })
                    .collect(),
            )
        };
    }

    match dtype {
        MI_INT8 => widen!(i8, 1),
        MI_UINT8 => widen!(u8, 1),
        MI_INT16 => widen!(i16, 2),
        MI_UINT16 => widen!(u16, 2),
        MI_INT32 => widen!(i32, 4),
        MI_UINT32 => widen!(u32, 4),
        MI_SINGLE => widen!(f32, 4),
        MI_DOUBLE => widen!(f64, 8),
        _ => None,
    }
}
