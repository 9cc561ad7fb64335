use serde::Deserialize;

const DEFAULT_PAGE: i32 = 1;
const DEFAULT_PAGE_SIZE: i32 = 10;

/// Raw list query parameters. Values are kept as strings so that absent,
/// non-numeric and non-positive inputs all fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindAllRequest {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl FindAllRequest {
    pub fn normalize(&self) -> (i32, i32) {
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(DEFAULT_PAGE);

        let page_size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        (page, page_size)
    }
}
