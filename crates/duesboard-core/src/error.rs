use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Enter a member number from 1 to {total}, got `{input}`")]
    MemberOutOfRange { input: String, total: u32 },
}
