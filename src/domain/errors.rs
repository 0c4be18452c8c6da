/// Failures of the catalog API boundary and of the browser environment.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The request never produced a response (network down, CORS, body build failure).
    Transport(String),
    /// The server answered outside the 2xx range.
    HttpStatus { status: u16, status_text: String },
    /// The response body was not `{ "result": [...] }` of the expected shape.
    Decode(String),
    /// A required DOM element or browser API was unavailable.
    Browser(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            CatalogError::HttpStatus {
                status,
                status_text,
            } => write!(f, "HTTP Error: {} {}", status, status_text),
            CatalogError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            CatalogError::Browser(msg) => write!(f, "Browser Error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

pub type FetchResult<T> = Result<T, CatalogError>;
