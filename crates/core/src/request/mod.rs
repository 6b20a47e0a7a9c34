mod functions;
mod types;

pub use functions::{bearer, join_url, merge_headers, normalize_path};
pub use types::{FormPart, HeaderList, Method, MultipartForm, RequestBody, JSON_CONTENT_TYPE};
