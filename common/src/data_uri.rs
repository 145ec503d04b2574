//! Data URIの生成と解析
//!
//! "data:image/png;base64,iVBORw0KGgo..." 形式を扱う。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 解析済みのData URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime_type: &'a str,
    pub payload: &'a str,
}

/// バイト列からData URIを生成
pub fn build_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Data URIをMIMEタイプとBase64部分に分解
pub fn parse_data_uri(data_uri: &str) -> Result<DataUri<'_>> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUri("missing 'data:' prefix".into()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUri("missing ',' separator".into()))?;

    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidDataUri(format!("not base64 encoded: {}", header)))?;

    Ok(DataUri { mime_type, payload })
}

/// Data URIを元のバイト列に復元
pub fn decode_data_uri(data_uri: &str) -> Result<Vec<u8>> {
    let parsed = parse_data_uri(data_uri)?;
    Ok(STANDARD.decode(parsed.payload)?)
}
