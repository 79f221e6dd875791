pub mod dtos;
pub mod session;

pub use dtos::{
    GenerateSummaryRequest, GenerateSummaryResponse, SetApiKeyRequest, SetApiKeyResponse,
};
pub use session::Session;
