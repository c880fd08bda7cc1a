//! SQL text for note queries.
//!
//! Notes are always read together with their tag ids, so every note query
//! shares the same select-and-aggregate prefix.

use noteful_core::NoteFilter;

/// Select list for a note joined with its ordered tag ids.
pub const NOTE_SELECT: &str = r#"
    SELECT n.id, n.title, n.content, n.folder_id, n.user_id,
           n.created_at, n.updated_at,
           COALESCE(
               ARRAY_AGG(nt.tag_id ORDER BY nt.position)
                   FILTER (WHERE nt.tag_id IS NOT NULL),
               '{}'::uuid[]
           ) AS tags
    FROM notes n
    LEFT JOIN note_tags nt ON nt.note_id = n.id
"#;

/// Query for a single note of an owner. Binds: `$1` owner, `$2` note id.
pub fn note_by_id_sql() -> String {
    format!("{NOTE_SELECT} WHERE n.user_id = $1 AND n.id = $2 GROUP BY n.id")
}

/// Query for the notes of an owner matching `filter`, most recently updated
/// first.
///
/// Binds, in order: `$1` owner, then the search pattern, folder id and tag id
/// for whichever of those the filter sets.
pub fn note_list_sql(filter: &NoteFilter) -> String {
    let mut sql = format!("{NOTE_SELECT} WHERE n.user_id = $1");
    let mut param_idx = 2;

    if filter.search_term.is_some() {
        sql.push_str(&format!(
            " AND (n.title ILIKE ${0} OR n.content ILIKE ${0})",
            param_idx
        ));
        param_idx += 1;
    }

    if filter.folder_id.is_some() {
        sql.push_str(&format!(" AND n.folder_id = ${}", param_idx));
        param_idx += 1;
    }

    if filter.tag_id.is_some() {
        sql.push_str(&format!(
            " AND EXISTS (SELECT 1 FROM note_tags f WHERE f.note_id = n.id AND f.tag_id = ${})",
            param_idx
        ));
    }

    sql.push_str(" GROUP BY n.id ORDER BY n.updated_at DESC, n.id");
    sql
}

/// Build an ILIKE pattern matching `term` anywhere, with LIKE wildcards in
/// the term taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
