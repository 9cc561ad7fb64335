use serde::{Deserialize, Serialize};

/// Uniform envelope around every response. `data` is omitted from the
/// JSON when there is no payload (delete confirmations, health checks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub total: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i64,
}

impl Metadata {
    pub fn new(total: i64, page: i32, page_size: i32) -> Self {
        let total_pages = if page_size > 0 {
            (total + i64::from(page_size) - 1) / i64::from(page_size)
        } else {
            0
        };

        Self {
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponsePagination<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
    pub metadata: Metadata,
}

impl<T> ApiResponsePagination<T> {
    pub fn success(message: impl Into<String>, data: T, metadata: Metadata) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
            metadata,
        }
    }
}
