//! Admin Table Decoration
//!
//! Zebra stripes and a hover highlight for `.admin-table` rows.

use web_sys::Document;

use crate::dom::{self, listen, set_class};
use crate::error::Result;

/// Odd body rows are striped
pub fn is_striped(index: usize) -> bool {
    index % 2 == 1
}

pub fn enhance_admin_tables(document: &Document) -> Result<usize> {
    let mut rows_seen = 0;
    for table in dom::query_document(document, ".admin-table")? {
        for (index, row) in dom::query_all(&table, "tbody tr")?.into_iter().enumerate() {
            set_class(&row, "row-striped", is_striped(index));

            let entered = row.clone();
            listen(&row, "mouseenter", move |_| set_class(&entered, "row-hover", true))?;
            let left = row.clone();
            listen(&row, "mouseleave", move |_| set_class(&left, "row-hover", false))?;
            rows_seen += 1;
        }
    }
    Ok(rows_seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripes_alternate() {
        let striped: Vec<bool> = (0..4).map(is_striped).collect();
        assert_eq!(striped, vec![false, true, false, true]);
    }
}
