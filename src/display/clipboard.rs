//! Tab-separated export of a table selection

use csv::{Terminator, WriterBuilder};

/// Render the bounding rectangle of `cells` as tab-separated text
///
/// Cells inside the rectangle that are not part of the selection are left
/// empty. Rows end in CRLF so the text pastes cleanly into spreadsheets.
pub fn copy_region<T>(cells: &[(usize, usize)], text_at: T) -> Result<String, csv::Error>
where
    T: Fn(usize, usize) -> String,
{
    let (Some(top), Some(bottom)) = (
        cells.iter().map(|c| c.0).min(),
        cells.iter().map(|c| c.0).max(),
    ) else {
        return Ok(String::new());
    };
    let left = cells.iter().map(|c| c.1).min().unwrap_or(0);
    let right = cells.iter().map(|c| c.1).max().unwrap_or(0);

    let mut table = vec![vec![String::new(); right - left + 1]; bottom - top + 1];
    for &(row, col) in cells {
        table[row - top][col - left] = text_at(row, col);
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    for row in &table {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_with_gaps() {
        let cells = [(1, 1), (1, 2), (2, 2)];
        let text = copy_region(&cells, |r, c| format!("{}{}", r, c)).unwrap();
        assert_eq!(text, "11\t12\r\n\t22\r\n");
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(copy_region(&[], |_, _| "x".to_string()).unwrap(), "");
    }
}
