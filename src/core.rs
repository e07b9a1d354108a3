pub mod credentials;
pub mod error;
pub mod guard;
pub mod http;
pub mod retry;
pub mod traits;
pub mod types;

pub use credentials::CredentialPool;
pub use error::{ArticleError, LlmError};
pub use guard::ConvergenceGuard;
pub use http::{HttpClient, HttpClientConfig};
pub use retry::RetryPolicy;
pub use traits::TextGenerator;
pub use types::{ChatRole, CompletionRequest, GenerationConfig, Message};
