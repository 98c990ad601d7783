// src/core/html.rs
//
// Tolerant, case-insensitive scanning over raw HTML. Only what a single
// data table needs: find the block, walk its rows, pull cell text.
// All byte offsets found in the lowercased copy are valid in the source string,
// since ASCII lowercasing never changes a char's encoded length.

use super::sanitize::{normalize_entities, normalize_ws};

/// One `<table>` worth of text cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlTable {
    /// Texts of the header row (`<th>` cells), empty when the table has none.
    pub headers: Vec<String>,
    /// Data rows in document order.
    pub rows: Vec<Vec<String>>,
}

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// `lc` must be `to_lower(s)`. Returns `(start_of_open_tag, end_of_close_tag)`.
pub fn next_tag_block_ci(s: &str, lc: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_tag(lc, open_tag, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(close_tag)?;
    Some((start, open_end + end_rel + close_tag.len()))
}

/// Position of the next `<name` that is really that tag (`<th` must not match `<thead`).
fn find_tag(lc: &str, open_tag: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(open_tag)? + pos;
        let next = lc.as_bytes().get(at + open_tag.len()).copied();
        match next {
            Some(b'>') | Some(b'/') | None => return Some(at),
            Some(b) if b.is_ascii_whitespace() => return Some(at),
            _ => pos = at + open_tag.len(),
        }
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`, return INNER (may hold nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Remove all tags, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

/// Kind of cell a row was made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellTag {
    Th,
    Td,
}

/// Extract the first `<table>` of the document.
///
/// Header row: the first row before any data row whose cells are all `<th>`
/// (typically the one inside `<thead>`). Data rows: every later row with at
/// least one cell. Rows and cells without closing tags end where the next
/// sibling starts.
pub fn first_table(doc: &str) -> Option<HtmlTable> {
    let lc = to_lower(doc);

    let t_start = find_tag(&lc, "<table", 0)?;
    let t_open_end = doc[t_start..].find('>')? + t_start + 1;
    let t_end = lc[t_open_end..]
        .find("</table>")
        .map(|e| t_open_end + e)
        .unwrap_or(doc.len());

    let mut table = HtmlTable::default();
    let mut pos = t_open_end;

    while let Some(tr_start) = find_tag(&lc[..t_end], "<tr", pos) {
        let tr_open_end = match doc[tr_start..t_end].find('>') {
            Some(e) => tr_start + e + 1,
            None => break,
        };
        let tr_end = bounded_end(&lc, tr_open_end, t_end, "</tr>", &["<tr"]);
        pos = tr_end;

        let cells = row_cells(doc, &lc, tr_open_end, tr_end);
        if cells.is_empty() {
            continue;
        }

        let all_th = cells.iter().all(|(tag, _)| *tag == CellTag::Th);
        if all_th && table.headers.is_empty() && table.rows.is_empty() {
            table.headers = cells.into_iter().map(|(_, text)| text).collect();
        } else {
            table.rows.push(cells.into_iter().map(|(_, text)| text).collect());
        }
    }

    logd!("HTML: table headers={} rows={}", table.headers.len(), table.rows.len());
    Some(table)
}

/// End of a block that starts at `from`: the closing tag if it comes first,
/// otherwise the start of the next sibling, capped at `limit`.
fn bounded_end(lc: &str, from: usize, limit: usize, close: &str, siblings: &[&str]) -> usize {
    let window = &lc[..limit];
    let mut end = window[from..].find(close).map(|e| from + e + close.len()).unwrap_or(limit);
    for sib in siblings {
        if let Some(next) = find_tag(window, sib, from) {
            if next < end {
                end = next;
            }
        }
    }
    end
}

fn row_cells(doc: &str, lc: &str, from: usize, to: usize) -> Vec<(CellTag, String)> {
    let mut out = Vec::new();
    let mut pos = from;

    loop {
        let td = find_tag(&lc[..to], "<td", pos);
        let th = find_tag(&lc[..to], "<th", pos);
        let (start, tag) = match (td, th) {
            (Some(a), Some(b)) if b < a => (b, CellTag::Th),
            (Some(a), _) => (a, CellTag::Td),
            (None, Some(b)) => (b, CellTag::Th),
            (None, None) => break,
        };
        let open_end = match doc[start..to].find('>') {
            Some(e) => start + e + 1,
            None => break,
        };
        let close = match tag {
            CellTag::Td => "</td>",
            CellTag::Th => "</th>",
        };
        let end = bounded_end(lc, open_end, to, close, &["<td", "<th"]);
        let inner_end = if lc[..end].ends_with(close) { end - close.len() } else { end };

        out.push((tag, strip_tags(&doc[open_end..inner_end])));
        pos = end;
    }
    out
}
