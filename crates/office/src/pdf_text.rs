//! PDF text extraction, page by page, via the `pdf` crate.

use crate::OfficeError;
use pdf::content::Op;
use pdf::file::FileOptions;

pub(crate) fn extract(data: &[u8]) -> Result<String, OfficeError> {
    let file = FileOptions::cached()
        .load(data)
        .map_err(|e| OfficeError::Pdf(e.to_string()))?;
    let resolver = file.resolver();

    let mut full_text = String::new();
    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| OfficeError::Pdf(e.to_string()))?;
        let Some(content) = &page.contents else {
            continue;
        };
        let operations = content
            .operations(&resolver)
            .map_err(|e| OfficeError::Pdf(e.to_string()))?;
        for op in operations.iter() {
            if let Op::TextDraw { text } = op {
                full_text.push_str(&text.to_string_lossy());
            }
        }
        full_text.push('\n');
    }

    Ok(full_text.trim_end().to_string())
}
