pub mod pagination;
pub mod patch;
pub mod response;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use patch::{Merge, Patch};
pub use response::ApiResponse;
