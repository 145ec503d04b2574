//! 表示名による検索フィルタ

use crate::types::ImageRecord;

/// 表示名に部分一致するレコードを元の順序で返す（大文字小文字を区別しない）
///
/// 空クエリは全件を返す。
pub fn search<'a>(records: &'a [ImageRecord], query: &str) -> Vec<&'a ImageRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.display_name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(display_name: &str) -> ImageRecord {
        ImageRecord {
            id: format!("id-{}", display_name),
            display_name: display_name.to_string(),
            original_name: format!("{}.png", display_name),
            content: "data:image/png;base64,".to_string(),
            size_bytes: 0,
            mime_type: "image/png".to_string(),
            uploaded_at: "2026-10-19T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let records = vec![record("b"), record("a"), record("c")];
        let found = search(&records, "");
        let names: Vec<&str> = found.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = vec![record("CAT_photo"), record("dog"), record("Concatenate")];
        let found = search(&records, "cat");
        let names: Vec<&str> = found.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["CAT_photo", "Concatenate"]);
    }

    #[test]
    fn test_no_match() {
        let records = vec![record("alpha"), record("beta")];
        assert!(search(&records, "gamma").is_empty());
    }

    #[test]
    fn test_matches_display_name_only() {
        // originalName の拡張子には一致しない
        let records = vec![record("photo")];
        assert!(search(&records, "png").is_empty());
    }
}
